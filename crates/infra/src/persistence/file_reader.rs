// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use line_tools_ports::LineSource;
use line_tools_shared_kernel::{InfrastructureError, Result};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        File::open(path).map(BufReader::new)
    }

    /// Read the entire file into memory. The handle is closed before returning.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut reader = Self::open_buffered(path)?;
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

/// Split decoded text into lines ending in `\n`, `\r\n` or a lone `\r`.
///
/// A trailing line ending does not produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let Some(at) = rest.find(['\r', '\n']) else {
            lines.push(rest.to_owned());
            break;
        };
        lines.push(rest[..at].to_owned());
        let ending = if rest[at..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[at + ending..];
    }
    lines
}

/// [`LineSource`] backed by a UTF-8 text file; invalid byte sequences are
/// replaced rather than rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFileSource;

impl LineSource for TextFileSource {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        if !path.is_file() {
            return Err(InfrastructureError::InputNotFound { path: path.to_path_buf() }.into());
        }

        let bytes = FileReader::read_to_end(path).map_err(|source| InfrastructureError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        if matches!(text, std::borrow::Cow::Owned(_)) {
            log::warn!("{} contains invalid UTF-8; offending bytes were replaced", path.display());
        }
        Ok(split_lines(&text))
    }
}
