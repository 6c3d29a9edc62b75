// crates/populate_notebook/src/notebook_io.rs

use crate::SyncError;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Reads and parses the destination notebook.
pub fn load_notebook(path: &Path) -> Result<Value, SyncError> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|err| {
        SyncError::Format(format!(
            "{} is not a valid notebook document: {}",
            path.display(),
            err
        ))
    })
}

/// Serializes the notebook tab-indented, writes it to a temporary file in
/// the destination directory, and atomically replaces `path`. The notebook
/// lands complete or not at all.
pub fn save_notebook(path: &Path, document: &Value) -> Result<(), SyncError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    document
        .serialize(&mut serializer)
        .map_err(|err| SyncError::Io(io::Error::new(io::ErrorKind::Other, err)))?;

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(directory)?;
    temp.write_all(&buffer)?;
    temp.persist(path).map_err(|err| SyncError::Io(err.error))?;
    Ok(())
}
