use std::path::PathBuf;

use bstr::BString;

use crate::ansi::ColorRole;

#[derive(Debug, thiserror::Error)]
pub enum SauceError {
    #[error("Unsupported SAUCE date: {0}")]
    UnsupportedSauceDate(BString),

    #[error("Binary file width limit exceeded: {0}")]
    BinFileWidthLimitExceeded(i32),

    #[error("IO error writing '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Comment limit exceeded (255)")]
    CommentLimitExceeded,

    #[error("Comment too long: {0} bytes only up to 64 bytes are allowed.")]
    CommentTooLong(usize),

    #[error("Title too long: {0} bytes only up to 35 bytes are allowed.")]
    TitleTooLong(usize),

    #[error("Author too long: {0} bytes only up to 20 bytes are allowed.")]
    AuthorTooLong(usize),

    #[error("Group too long: {0} bytes only up to 20 bytes are allowed.")]
    GroupTooLong(usize),

    #[error("Font name too long: {0} bytes only up to 22 bytes are allowed.")]
    FontNameTooLong(usize),

    #[error("Invalid remote SAUCE record: {0}")]
    InvalidRemoteSauce(#[from] serde_json::Error),
}

impl SauceError {
    /// Create an IoError with the given path and source error.
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SauceError::IoError {
            path: path.into(),
            source,
        }
    }
}

/// Failures of the ANSI interpreter.
///
/// Unsupported input is never an error; it is logged and skipped. These
/// variants signal an instruction stream that no tokenizer should produce.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnsiError {
    #[error("Invalid color role for rendering: {0:?}")]
    InvalidColorRole(ColorRole),
}
