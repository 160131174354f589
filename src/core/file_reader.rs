//! Strict text file reading
//!
//! The output document must reproduce file bytes exactly, so non-UTF-8
//! content is an error rather than a lossy conversion. Callers treat both
//! error variants as skip-and-continue.

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Why a file could not be read as text
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("content is not valid UTF-8")]
    InvalidUtf8,
}

/// Read a file fully into a UTF-8 string.
///
/// The handle is opened, read, and closed within this call; nothing is held
/// across entries.
pub fn read_text(path: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| ReadError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("test.txt");
        fs::write(&file_path, "Hello, World!").unwrap();

        assert_eq!(read_text(&file_path).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_read_text_empty_file() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("empty.txt");
        fs::write(&file_path, "").unwrap();

        assert_eq!(read_text(&file_path).unwrap(), "");
    }

    #[test]
    fn test_read_text_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("invalid_utf8.bin");

        let mut file = fs::File::create(&file_path).unwrap();
        file.write_all(&[0xFF, 0xFE, 0x48, 0x65, 0x6C, 0x6C, 0x6F])
            .unwrap();

        assert!(matches!(
            read_text(&file_path),
            Err(ReadError::InvalidUtf8)
        ));
    }

    #[test]
    fn test_read_text_missing_file() {
        let result = read_text(Path::new("/nonexistent/file.txt"));
        assert!(matches!(result, Err(ReadError::Io(_))));
    }
}
