//! File I/O utilities
//!
//! Opens and creates files with errors that name the failing path, and
//! provides atomic JSON writes for the settings file.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::ContactError;

/// Open a file for buffered reading
pub fn open_reader<P: AsRef<Path>>(path: P) -> Result<BufReader<File>, ContactError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ContactError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(BufReader::new(file))
}

/// Create (or truncate) a file for buffered writing
pub fn create_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>, ContactError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| ContactError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(BufWriter::new(file))
}

/// Create a directory and its parents if missing
pub fn ensure_directory<P: AsRef<Path>>(dir: P) -> Result<(), ContactError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| ContactError::Write {
        path: dir.to_path_buf(),
        message: format!("failed to create directory: {}", e),
    })
}

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, ContactError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let reader = open_reader(path)?;
    serde_json::from_reader(reader).map_err(|e| ContactError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ContactError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");
    let write_err = |message: String| ContactError::Write {
        path: path.to_path_buf(),
        message,
    };

    let mut writer = create_writer(&temp_path)?;
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| write_err(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| write_err(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| write_err(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        write_err(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
