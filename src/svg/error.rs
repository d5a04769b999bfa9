//! SVG load/write error types.

use std::path::PathBuf;
use thiserror::Error;

/// Well-formedness failure while parsing markup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message} (at byte {position})")]
pub struct XmlError {
    /// Byte offset into the source where the problem was detected.
    pub position: u64,
    pub message: String,
}

impl XmlError {
    pub fn new(position: u64, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }
}

/// Document load and write errors.
#[derive(Debug, Error)]
pub enum SvgError {
    #[error("source file `{0}` not found")]
    NotFound(PathBuf),

    #[error("IO error when reading `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("`{0}` is not well-formed SVG/XML")]
    Malformed(PathBuf, #[source] XmlError),

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] std::io::Error),
}

impl SvgError {
    /// Remediation hint for the user, when one applies.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::NotFound(_) => Some("check the `input` path or pass --input".to_string()),
            Self::Write(path, _) => Some(format!(
                "check that the directory exists and `{}` is writable",
                path.display()
            )),
            _ => None,
        }
    }
}
