//! URL-safe text form of an encoded selection.

use std::fmt;
use std::str::FromStr;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::error::Malformed;

const CONFIG: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_encode_padding(false)
    .with_decode_padding_mode(DecodePaddingMode::Indifferent);

/// Emits `-`/`_` without padding; accepts padded input too.
const URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, CONFIG);

/// Accepts tokens that went through a standard-alphabet encoder.
const STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, CONFIG);

/// Encoded selection, safe to place directly after `?` in an address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Token(URL_SAFE.encode(bytes))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, Malformed> {
        decode_text(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Query-string form: `?` followed by the token, no key.
    pub fn to_query(&self) -> String {
        format!("?{}", self.0)
    }
}

/// Reverses the text layer of a token.
pub fn decode_text(text: &str) -> Result<Vec<u8>, Malformed> {
    let text = text.trim();
    let engine = if text.contains(['+', '/']) {
        &STANDARD
    } else {
        &URL_SAFE
    };
    Ok(engine.decode(text)?)
}

impl FromStr for Token {
    type Err = Malformed;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        decode_text(s)?;
        Ok(Token(s.to_string()))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}
