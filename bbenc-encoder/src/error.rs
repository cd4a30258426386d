//! Error types for the BBCode encoder.

/// Errors that can occur when writing encoded output.
///
/// Encoding itself is infallible; only the writer path can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error while writing encoded output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
