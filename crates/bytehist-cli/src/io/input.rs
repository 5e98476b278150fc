// crates/bytehist-cli/src/io/input.rs

use std::path::Path;

use bytehist_core::{HistError, Result};

/// Read the whole input into memory.
///
/// A missing path is reported as `InputNotFound`; anything else is plain io.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(HistError::InputNotFound(path.to_path_buf()))
        }
        Err(e) => Err(HistError::Io(e)),
    }
}
