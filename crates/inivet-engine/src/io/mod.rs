use crate::models::ParseVerdict;
use crate::parsing::parse_lines;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a configuration file into lines, without their terminators
pub fn read_lines(path: &Path) -> Result<Vec<String>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(IoError::Io)?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(IoError::Io)?;
    Ok(lines)
}

/// Read and validate a file in one call.
///
/// The unreadable-source error here is the only fatal failure in the
/// system; everything past this point is a per-line diagnostic.
pub fn validate_file(path: &Path) -> Result<ParseVerdict, IoError> {
    Ok(parse_lines(read_lines(path)?))
}
