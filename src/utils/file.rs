use std::fs;

use crate::error::GenError;

/// Reads a whole file into a string.
pub fn file_get(path: &str) -> Result<String, GenError> {
    fs::read_to_string(path).map_err(|source| GenError::Io {
        path: path.to_string(),
        source,
    })
}

/// Writes `content` to `path`, replacing any existing file.
pub fn file_write(path: &str, content: &str) -> Result<(), GenError> {
    fs::write(path, content).map_err(|source| GenError::Io {
        path: path.to_string(),
        source,
    })
}
