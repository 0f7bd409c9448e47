// crates/ports/src/filesystem.rs
use std::path::Path;

use line_tools_shared_kernel::Result;

/// Port for loading an input file as a sequence of text lines.
///
/// Implementations must fail with `InfrastructureError::InputNotFound` when
/// `path` does not name a regular file, and must release the file handle
/// before returning.
pub trait LineSource {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>>;
}
