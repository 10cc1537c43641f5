use thiserror::Error;

/// Why a token could not be read back into a selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("token is not valid base64: {0}")]
    Text(#[from] base64::DecodeError),
    #[error("token holds {len} bytes, header needs {needed}")]
    Truncated { len: usize, needed: usize },
    #[error("zone list ends in a partial index")]
    TrailingByte,
    #[error("timestamp is not a representable instant")]
    Timestamp,
    /// A readable `?when=...&where=...` query carries an unparsable value
    /// for the named key.
    #[error("readable query has an invalid {0:?} value")]
    Query(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("zone {0:?} is not in the registry")]
    UnknownZone(String),
    #[error("malformed token: {0}")]
    MalformedToken(#[from] Malformed),
    #[error("zone index {index} is out of range for a registry of {len} zones")]
    IndexOutOfRange { index: u16, len: usize },
    #[error("timestamp cannot be stored in the requested layout")]
    Unrepresentable,
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("zone {0:?} appears more than once")]
    Duplicate(String),
    #[error("registry holds {0} zones; at most 65536 fit a 16-bit index")]
    TooLarge(usize),
    #[error("cannot read registry file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid registry file: {0}")]
    Toml(#[from] toml::de::Error),
}
