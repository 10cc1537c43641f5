use crate::error::CodecError;
use crate::format::{self, TokenInfo};
use crate::registry::ZoneRegistry;
use crate::selection::Selection;
use crate::token::{self, Token};

/// Converts selections to URL tokens and back against one registry.
///
/// The registry is borrowed, never looked up globally: encoder and decoder
/// must be handed registries with identical contents and ordering.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use whenwhere_core::{Selection, StateCodec, ZoneRegistry};
///
/// let registry = ZoneRegistry::new(["UTC", "Asia/Tokyo"]).unwrap();
/// let codec = StateCodec::new(&registry);
///
/// let when = Utc.with_ymd_and_hms(2021, 3, 1, 12, 0, 0).unwrap();
/// let selection = Selection::new(when, ["Asia/Tokyo"]);
/// let token = codec.encode(&selection).unwrap();
///
/// assert_eq!(codec.decode(token.as_str()).unwrap(), selection);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StateCodec<'r> {
    registry: &'r ZoneRegistry,
}

impl<'r> StateCodec<'r> {
    pub fn new(registry: &'r ZoneRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r ZoneRegistry {
        self.registry
    }

    pub fn encode(&self, selection: &Selection) -> Result<Token, CodecError> {
        Ok(Token::from_bytes(&self.encode_bytes(selection)?))
    }

    pub fn decode(&self, token: &str) -> Result<Selection, CodecError> {
        let bytes = token::decode_text(token)?;
        self.decode_bytes(&bytes)
    }

    pub fn encode_bytes(&self, selection: &Selection) -> Result<Vec<u8>, CodecError> {
        format::encode_bytes(selection, self.registry)
    }

    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<Selection, CodecError> {
        format::decode_bytes(bytes, self.registry)
    }

    /// Reports the layout of `token` without resolving its zones.
    pub fn inspect(&self, token: &str) -> Result<TokenInfo, CodecError> {
        let bytes = token::decode_text(token)?;
        format::inspect_bytes(&bytes)
    }
}
