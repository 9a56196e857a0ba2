//! JSON document output
//!
//! Documents are pretty-printed with two-space indentation and non-ASCII
//! text written as-is.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ConvertError, ConvertResult};

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_document<T: Serialize>(tmp: &Path, path: &Path, records: &[T]) -> ConvertResult<()> {
    let file = File::create(tmp).map_err(|e| ConvertError::io(tmp, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|e| ConvertError::json(path, e))?;
    writer.flush().map_err(|e| ConvertError::io(tmp, e))
}

/// Write `records` as a JSON array to `path`.
///
/// The document goes to a sibling temp file first and is renamed into place,
/// so a failed write leaves any previous document untouched.
pub fn write_json<T: Serialize>(path: &Path, records: &[T]) -> ConvertResult<()> {
    let tmp = temp_path(path);

    let written = write_document(&tmp, path, records);

    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    fs::rename(&tmp, path).map_err(|e| ConvertError::io(path, e))
}

/// Load a JSON array document back into records
pub fn read_json<T: DeserializeOwned>(path: &Path) -> ConvertResult<Vec<T>> {
    let file = File::open(path).map_err(|e| ConvertError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| ConvertError::json(path, e))
}
