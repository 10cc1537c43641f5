//! Byte layouts of a selection.
//!
//! ```text
//! V1      | 0x01 | when: f64 ms (8) | zone index: u16 (2) ...
//! Legacy  |        when: u64 ms (8) | zone index: u16 (2) ...
//! ```
//!
//! All fields are big-endian. A buffer is read as V1 when its first byte is
//! the V1 tag and as the untagged legacy layout otherwise. Legacy buffers
//! always start with `0x00`: the largest instant chrono can represent is
//! below 2^53 ms, so the top byte of a legacy timestamp is never set.

use chrono::DateTime;
use whenwhere_buffers::{Reader, Writer};

use crate::error::{CodecError, Malformed};
use crate::registry::ZoneRegistry;
use crate::selection::Selection;

/// Bytes per zone entry.
pub const ZONE_WIDTH: usize = 2;

const V1_TAG: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatVersion {
    /// Untagged layout with an integer timestamp, minted before tokens
    /// carried a version byte.
    Legacy,
    V1,
}

impl FormatVersion {
    /// The layout every encoder emits.
    pub const CURRENT: Self = Self::V1;

    /// Leading tag byte, if the layout has one.
    pub const fn tag(self) -> Option<u8> {
        match self {
            Self::Legacy => None,
            Self::V1 => Some(V1_TAG),
        }
    }

    /// Bytes before the first zone entry.
    pub const fn header_len(self) -> usize {
        match self {
            Self::Legacy => 8,
            Self::V1 => 9,
        }
    }

    pub fn detect(bytes: &[u8]) -> Self {
        match Reader::new(bytes).peek() {
            Ok(V1_TAG) => Self::V1,
            _ => Self::Legacy,
        }
    }

    /// Exact buffer length for `zone_count` zones.
    pub const fn encoded_len(self, zone_count: usize) -> usize {
        self.header_len() + ZONE_WIDTH * zone_count
    }
}

/// Shape of a buffer, read without touching the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenInfo {
    pub version: FormatVersion,
    pub byte_len: usize,
    pub zone_count: usize,
}

/// Encodes `selection` in the current layout.
pub fn encode_bytes(selection: &Selection, registry: &ZoneRegistry) -> Result<Vec<u8>, CodecError> {
    encode_bytes_as(FormatVersion::CURRENT, selection, registry)
}

/// Encodes `selection` in a specific layout. Only [`FormatVersion::CURRENT`]
/// should ever reach an address bar; older layouts are for compatibility
/// fixtures.
pub fn encode_bytes_as(
    version: FormatVersion,
    selection: &Selection,
    registry: &ZoneRegistry,
) -> Result<Vec<u8>, CodecError> {
    let indices = selection
        .zones
        .iter()
        .map(|zone| {
            registry
                .index_of(zone)
                .ok_or_else(|| CodecError::UnknownZone(zone.clone()))
        })
        .collect::<Result<Vec<u16>, _>>()?;
    let millis = selection.when.timestamp_millis();

    let mut writer = Writer::with_capacity(version.encoded_len(indices.len()));
    match version {
        // Exact: chrono's range stays well inside f64's 53-bit mantissa.
        FormatVersion::V1 => writer.u8f64(V1_TAG, millis as f64),
        FormatVersion::Legacy => {
            let millis = u64::try_from(millis).map_err(|_| CodecError::Unrepresentable)?;
            writer.u64(millis);
        }
    }
    for index in indices {
        writer.u16(index);
    }
    Ok(writer.flush())
}

/// Checks that `bytes` has a complete header and a whole number of zone
/// entries.
pub fn inspect_bytes(bytes: &[u8]) -> Result<TokenInfo, CodecError> {
    let version = FormatVersion::detect(bytes);
    let needed = version.header_len();
    if bytes.len() < needed {
        return Err(Malformed::Truncated {
            len: bytes.len(),
            needed,
        }
        .into());
    }
    let body = bytes.len() - needed;
    if body % ZONE_WIDTH != 0 {
        return Err(Malformed::TrailingByte.into());
    }
    Ok(TokenInfo {
        version,
        byte_len: bytes.len(),
        zone_count: body / ZONE_WIDTH,
    })
}

pub fn decode_bytes(bytes: &[u8], registry: &ZoneRegistry) -> Result<Selection, CodecError> {
    let info = inspect_bytes(bytes)?;
    let truncated = |_: whenwhere_buffers::BufferError| Malformed::Truncated {
        len: bytes.len(),
        needed: info.version.header_len(),
    };

    let mut reader = Reader::new(bytes);
    let millis = match info.version {
        FormatVersion::V1 => {
            reader.skip(1).map_err(truncated)?;
            millis_from_f64(reader.f64().map_err(truncated)?)?
        }
        FormatVersion::Legacy => {
            log::debug!("decoding untagged legacy token ({} bytes)", bytes.len());
            let millis = reader.u64().map_err(truncated)?;
            i64::try_from(millis).map_err(|_| Malformed::Timestamp)?
        }
    };
    let when = DateTime::from_timestamp_millis(millis).ok_or(Malformed::Timestamp)?;

    let mut zones = Vec::with_capacity(info.zone_count);
    while !reader.is_empty() {
        let index = reader.u16().map_err(|_| Malformed::TrailingByte)?;
        let name = registry
            .name_at(index)
            .ok_or(CodecError::IndexOutOfRange {
                index,
                len: registry.len(),
            })?;
        zones.push(name.to_string());
    }
    Ok(Selection { when, zones })
}

/// Whole milliseconds from a float timestamp, flooring any fraction the
/// same way chrono floors sub-millisecond instants.
fn millis_from_f64(value: f64) -> Result<i64, Malformed> {
    if !value.is_finite() {
        return Err(Malformed::Timestamp);
    }
    let value = value.floor();
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(Malformed::Timestamp);
    }
    Ok(value as i64)
}
