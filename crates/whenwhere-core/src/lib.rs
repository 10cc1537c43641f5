//! Compact, versioned URL tokens for a shared `{when, where}` selection.
//!
//! A [`Selection`] (an instant plus an ordered list of zone names) is packed
//! into a fixed-width byte layout, zone names replaced by their positions in
//! a [`ZoneRegistry`], and written as unpadded URL-safe base64. The first
//! byte tags the layout so that links minted by older releases keep
//! decoding; see [`format`] for the layouts.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use whenwhere_core::{Selection, StateCodec, ZoneRegistry};
//!
//! let mut names: Vec<String> = (0..42).map(|i| format!("Zone/{i}")).collect();
//! names.push("America/New_York".to_string());
//! let registry = ZoneRegistry::new(names).unwrap();
//! let codec = StateCodec::new(&registry);
//!
//! let when = Utc.with_ymd_and_hms(2021, 3, 1, 12, 0, 0).unwrap();
//! let token = codec.encode(&Selection::new(when, ["America/New_York"])).unwrap();
//! assert_eq!(token.to_query(), "?AUJ3ftqNIAAAACo");
//! ```

mod codec;
mod error;
pub mod format;
pub mod query;
mod registry;
mod selection;
mod token;

pub use codec::StateCodec;
pub use error::{CodecError, Malformed, RegistryError};
pub use format::{FormatVersion, TokenInfo};
pub use query::{parse_query, selection_from_query, QuerySelection};
pub use registry::{ZoneRegistry, MAX_ZONES};
pub use selection::{local_zone, Selection, FALLBACK_ZONE};
pub use token::{decode_text, Token};
