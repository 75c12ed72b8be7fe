//! Whole-file replacement through a synced sibling temp file and a rename.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use times_core::error::TimesError;

/// Sibling path the new contents are staged in.
#[must_use]
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace `path` with whatever `write` produces.
///
/// Readers see either the old file or the complete new one. On failure the
/// target is left untouched and the error names the file involved.
pub fn replace<F>(path: &Path, write: F) -> Result<(), TimesError>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let tmp = temp_path(path);
    let file = File::create(&tmp).map_err(|e| TimesError::io(&tmp, e))?;
    let mut out = BufWriter::new(file);

    write(&mut out)
        .and_then(|()| out.flush())
        .and_then(|()| out.get_ref().sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(&tmp);
            TimesError::io(&tmp, e)
        })?;
    drop(out);

    fs::rename(&tmp, path).map_err(|e| TimesError::io(path, e))
}
