// src/file.rs

use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::config::consts::TMP_EXTENSION;
use crate::config::options::{InputSource, UpdateOptions, WriteMode};
use crate::error::{Result, UpdateError};

/// Collect the whole payload before anything else happens.
pub fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => {
            let mut buf = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut buf)
                .map_err(|e| UpdateError::io("<stdin>", e))?;
            Ok(buf)
        }
        InputSource::File(path) => {
            fs::read_to_string(path).map_err(|e| UpdateError::io(path, e))
        }
        InputSource::Inline(text) => Ok(text.clone()),
    }
}

pub fn read_document(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|e| UpdateError::io(path, e))?;
    debug!(path = %path.display(), bytes = text.len(), "read document");
    Ok(text)
}

/// Replace the page with `contents`, atomically unless asked otherwise.
///
/// Symlinks are followed: the file they point to is replaced and the link
/// stays. The replacement keeps the original file's permissions.
pub fn write_document(opts: &UpdateOptions, contents: &str) -> Result<()> {
    let target = fs::canonicalize(&opts.document).map_err(|e| UpdateError::io(&opts.document, e))?;
    match opts.write {
        WriteMode::InPlace => write_all(&target, contents),
        WriteMode::Atomic => {
            let perms = fs::metadata(&target)
                .map_err(|e| UpdateError::io(&target, e))?
                .permissions();
            let tmp = tmp_path(&target);
            let staged = write_all(&tmp, contents)
                .and_then(|_| fs::set_permissions(&tmp, perms).map_err(|e| UpdateError::io(&tmp, e)));
            if let Err(e) = staged {
                let _ = fs::remove_file(&tmp);
                return Err(e);
            }
            fs::rename(&tmp, &target).map_err(|e| {
                let _ = fs::remove_file(&tmp);
                UpdateError::io(&target, e)
            })
        }
    }?;
    debug!(path = %target.display(), bytes = contents.len(), "wrote document");
    Ok(())
}

/// Sibling used for atomic writes, e.g. `index.html` → `index.html.tmp`.
/// A stale file of that name (left by a crashed run) is overwritten.
pub fn tmp_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".");
    name.push(TMP_EXTENSION);
    target.with_file_name(name)
}

fn write_all(path: &Path, contents: &str) -> Result<()> {
    let mut f = fs::File::create(path).map_err(|e| UpdateError::io(path, e))?; // truncate/overwrite
    f.write_all(contents.as_bytes())
        .and_then(|_| f.sync_all())
        .map_err(|e| UpdateError::io(path, e))
}

/// Parent directories for a file we are about to create (log file).
pub fn ensure_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_sits_next_to_target() {
        assert_eq!(tmp_path(Path::new("site/index.html")), PathBuf::from("site/index.html.tmp"));
    }

    #[test]
    fn stale_tmp_file_is_overwritten() {
        let dir = tempfile::TempDir::new().unwrap();
        let doc = dir.path().join("index.html");
        fs::write(&doc, "old").unwrap();
        fs::write(tmp_path(&doc), "leftover from a crashed run").unwrap();

        write_document(&UpdateOptions::for_document(&doc), "new").unwrap();
        assert_eq!(fs::read_to_string(&doc).unwrap(), "new");
        assert!(!tmp_path(&doc).exists());
    }
}
