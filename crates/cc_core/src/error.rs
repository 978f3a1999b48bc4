use thiserror::Error;

/// Errors raised while decoding a native-format wire string.
///
/// The decode path fails closed: a truncated or corrupted frame produces a
/// typed error instead of a half-filled save.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("missing save terminator sequence")]
    MissingTerminator,

    #[error("invalid percent-encoding at byte {offset}")]
    BadPercentEncoding { offset: usize },

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("save payload is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("truncated save: missing {segment} segment")]
    MissingSegment { segment: &'static str },

    #[error("{context}: expected at least {expected} fields, found {found}")]
    FieldCount { context: &'static str, expected: usize, found: usize },

    #[error("{context}: invalid number {value:?}")]
    InvalidNumber { context: &'static str, value: String },

    #[error("{context}: unknown id {id}")]
    UnknownId { context: &'static str, id: i64 },

    #[error("{context}: flag string longer than the canonical table ({len} > {max})")]
    FlagOverflow { context: &'static str, len: usize, max: usize },
}

/// Validation failure returned by the fail-fast [`crate::validate::from_object`]
/// entry point. Diagnostics are collected in encounter order; the first one is
/// used as the display message.
#[derive(Error, Debug)]
#[error("{}", .diagnostics.first().map(String::as_str).unwrap_or("validation failed"))]
pub struct ValidationError {
    pub diagnostics: Vec<String>,
}

impl ValidationError {
    pub fn new(diagnostics: Vec<String>) -> Self {
        Self { diagnostics }
    }
}
