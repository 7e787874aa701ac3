//! Line-oriented input shared by the roster reader and chain assembly.

use std::io;

use tracing::error;

use crate::errors::domain::{DomainError, InputKind};

/// Pull the next line, mapping read failures to `InvalidInput`.
///
/// `Ok(None)` means the stream is exhausted.
pub fn next_line<I>(lines: &mut I) -> Result<Option<String>, DomainError>
where
    I: Iterator<Item = io::Result<String>>,
{
    match lines.next() {
        None => Ok(None),
        Some(Ok(line)) => Ok(Some(line)),
        Some(Err(e)) => {
            error!(error = %e, "error while reading input");
            Err(DomainError::invalid_input(
                InputKind::Io,
                "input stream error",
            ))
        }
    }
}
