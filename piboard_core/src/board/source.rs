//! Line source for the system info file.
//!
//! An unreadable source is an error; a readable but empty one is an empty
//! list. Callers rely on that difference to tell "not a Pi" apart from
//! "nothing listed".

use std::fs;
use std::path::Path;

use crate::error::BoardResult;

/// Read a system info file into lines
pub fn read_lines(path: impl AsRef<Path>) -> BoardResult<Vec<String>> {
    let bytes = fs::read(path.as_ref())?;

    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_string)
        .collect())
}
