/// Errors from key parsing and record bin access.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TypeError {
    /// A hex string could not be decoded.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// A byte sequence had the wrong length.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A required bin was not present on the record.
    #[error("missing bin '{0}'")]
    MissingBin(String),

    /// A bin held a value of an unexpected type.
    #[error("bin '{bin}' has unexpected type: expected {expected}")]
    BinType { bin: String, expected: &'static str },

    /// A record could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}
