use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("field registry not found: {0}")]
    FileNotFound(PathBuf),

    #[error("field registry parse error: {0}")]
    ParseError(String),

    #[error("field registry validation error: {0}")]
    ValidationError(String),
}

/// Failure while decoding a serialized structure string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("unexpected end of input at byte {0}")]
    UnexpectedEnd(usize),

    #[error("unexpected '{found}' at byte {offset}, expected {expected}")]
    UnexpectedByte {
        offset: usize,
        found: char,
        expected: &'static str,
    },

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("string at byte {0} is not valid utf-8")]
    InvalidUtf8(usize),

    #[error("unsupported token '{0}'")]
    UnsupportedToken(char),

    #[error("trailing data after byte {0}")]
    TrailingData(usize),

    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum CustomizerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
