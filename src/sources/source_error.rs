use thiserror::Error;

/// Why a single listing source could not be used. The resolver logs these
/// and moves on to the next source; callers never see them.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("JSON parse error: {0}")]
    JsonParse(String),
    #[error("Unexpected data shape: {0}")]
    UnexpectedShape(String),
    #[error("Source contained no listings")]
    Empty,
}
