//! Plain-text export of the note.

use std::path::{Path, PathBuf};
use chrono::{DateTime, Local};

use crate::error::{ExportError, ExportResult};
use crate::util::fs::write_atomically;

/// `Quartz Note yyyy-MM-dd HH-mm-ss.txt`
pub fn desktop_file_name(now: &DateTime<Local>) -> String {
    format!("Quartz Note {}.txt", now.format("%Y-%m-%d %H-%M-%S"))
}

/// `Note yyyy-MM-dd HH-mm.txt`
pub fn temp_file_name(now: &DateTime<Local>) -> String {
    format!("Note {}.txt", now.format("%Y-%m-%d %H-%M"))
}

/// Write `text` as UTF-8 to `dir/name`, replacing any existing file
pub fn write_note(dir: &Path, name: &str, text: &str) -> ExportResult<PathBuf> {
    let path = dir.join(name);
    write_atomically(&path, text.as_bytes())?;
    Ok(path)
}

/// Save the note to the user's desktop
pub fn export_to_desktop(text: &str, now: &DateTime<Local>) -> ExportResult<PathBuf> {
    let desktop = dirs::desktop_dir().ok_or(ExportError::NoDesktopDirectory)?;
    let path = write_note(&desktop, &desktop_file_name(now), text)?;
    log::info!("Exported note to {}", path.display());
    Ok(path)
}

/// Save the note to the temp directory for handing off to other apps
pub fn create_temp_file(text: &str, now: &DateTime<Local>) -> ExportResult<PathBuf> {
    let path = write_note(&std::env::temp_dir(), &temp_file_name(now), text)?;
    log::info!("Wrote temporary note {}", path.display());
    Ok(path)
}
