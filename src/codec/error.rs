//! Errors raised while reading or writing plan files

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The file was written by a different format version
    #[error("unsupported file version {found} (expected {expected})")]
    UnsupportedVersion { found: u8, expected: u8 },
    #[error("file ended before the declared data was read")]
    Truncated,
    #[error("malformed file: {0}")]
    Malformed(String),
    #[error("invalid UTF-8 in string field")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("I/O error: {0}")]
    Io(#[source] io::Error),
}

impl CodecError {
    pub fn malformed(message: impl Into<String>) -> Self {
        CodecError::Malformed(message.into())
    }

    pub fn is_unsupported_version(&self) -> bool {
        matches!(self, CodecError::UnsupportedVersion { .. })
    }
}

impl From<io::Error> for CodecError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            CodecError::Truncated
        } else {
            CodecError::Io(err)
        }
    }
}

pub type CodecResult<T> = Result<T, CodecError>;
