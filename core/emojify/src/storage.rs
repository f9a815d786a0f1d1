//! Saving results and managing camera-capture scratch files.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::warn;
use tempfile::NamedTempFile;

use crate::error::EmojifyError;
use crate::EmojifiedPhoto;

/// Timestamp layout used in output and capture file names.
const FILE_STAMP_FORMAT: &str = "%d%m%Y_%H%M%S";

/// Write the photo to `dir` as `emojify_<ddMMyyyy_HHmmss>.<ext>`, creating
/// the directory if needed. Returns the full path of the written file.
pub fn save_photo(photo: &EmojifiedPhoto, dir: impl AsRef<Path>) -> Result<PathBuf, EmojifyError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let stamp = Local::now().format(FILE_STAMP_FORMAT);
    let path = dir.join(format!("emojify_{stamp}.{}", photo.format.extension()));
    fs::write(&path, &photo.data)?;

    Ok(path)
}

/// Create a timestamp-prefixed `.jpg` scratch file in `dir` for a camera
/// capture to land in. The file is deleted when the handle drops; call
/// [`NamedTempFile::keep`] to hand the path to a capture service that
/// outlives it.
pub fn create_capture_file(dir: impl AsRef<Path>) -> Result<NamedTempFile, EmojifyError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let stamp = Local::now().format(FILE_STAMP_FORMAT);
    let file = tempfile::Builder::new()
        .prefix(&format!("emojify_{stamp}_"))
        .suffix(".jpg")
        .tempfile_in(dir)?;

    Ok(file)
}

/// Best-effort delete of a capture file the user discarded. Failure is
/// logged and returned; callers typically continue anyway.
pub fn discard_capture_file(path: impl AsRef<Path>) -> Result<(), EmojifyError> {
    let path = path.as_ref();
    if let Err(e) = fs::remove_file(path) {
        warn!("failed to delete capture file {}: {e}", path.display());
        return Err(e.into());
    }
    Ok(())
}
