//! Reading a selection out of an address query string.
//!
//! Current links carry the token as the whole query (`?AUJ3ftqN...`).
//! The first shared links used a readable form instead,
//! `?when=2021-03-01T12:00:00.000Z&where=Asia/Tokyo,Europe/Paris`, and are
//! still accepted. An empty `when` or `where` value counts as absent. The
//! readable form names zones directly; [`selection_from_query`] drops the
//! ones the registry does not list so the result can be encoded again.

use chrono::{DateTime, Utc};

use crate::codec::StateCodec;
use crate::error::{CodecError, Malformed};
use crate::selection::Selection;

/// Fields present in a query. `None` leaves the field to the caller's default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySelection {
    pub when: Option<DateTime<Utc>>,
    pub zones: Option<Vec<String>>,
}

impl QuerySelection {
    /// Fills absent fields from `default`.
    pub fn or(self, default: &Selection) -> Selection {
        let when = self.when.unwrap_or(default.when);
        match self.zones {
            Some(zones) => Selection::new(when, zones),
            None => default.with_when(when),
        }
    }
}

impl From<Selection> for QuerySelection {
    fn from(selection: Selection) -> Self {
        Self {
            when: Some(selection.when),
            zones: Some(selection.zones),
        }
    }
}

/// Parses `search` (with or without its leading `?`).
///
/// Returns `Ok(None)` for an absent or empty query.
pub fn parse_query(search: &str, codec: &StateCodec<'_>) -> Result<Option<QuerySelection>, CodecError> {
    let query = search.strip_prefix('?').unwrap_or(search).trim();
    if query.is_empty() {
        return Ok(None);
    }
    if query.contains('=') && !looks_like_padded_token(query) {
        return parse_readable(query).map(Some);
    }
    codec.decode(query).map(|selection| Some(selection.into()))
}

/// Decodes `search`, falling back to `default` when the query is absent or
/// unreadable.
///
/// Zones missing from the codec's registry are dropped; if none remain the
/// zones come from `default`.
pub fn selection_from_query(search: &str, codec: &StateCodec<'_>, default: &Selection) -> Selection {
    match parse_query(search, codec) {
        Ok(Some(mut parsed)) => {
            parsed.zones = parsed.zones.and_then(|zones| known_zones(zones, codec));
            parsed.or(default)
        }
        Ok(None) => default.clone(),
        Err(err) => {
            log::warn!("ignoring unreadable query {search:?}: {err}");
            default.clone()
        }
    }
}

fn known_zones(zones: Vec<String>, codec: &StateCodec<'_>) -> Option<Vec<String>> {
    let registry = codec.registry();
    let zones: Vec<String> = zones
        .into_iter()
        .filter(|zone| {
            let known = registry.contains(zone);
            if !known {
                log::warn!("dropping zone {zone:?}: not in the registry");
            }
            known
        })
        .collect();
    (!zones.is_empty()).then_some(zones)
}

/// A padded base64 token ends in `=` and has no other `=`.
fn looks_like_padded_token(query: &str) -> bool {
    let body = query.trim_end_matches('=');
    query.len() - body.len() <= 2
        && !body.contains(['=', '&'])
        && !matches!(body, "when" | "where")
}

fn parse_readable(query: &str) -> Result<QuerySelection, CodecError> {
    let mut parsed = QuerySelection::default();
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "when" if value.is_empty() => parsed.when = None,
            "when" => {
                let when = DateTime::parse_from_rfc3339(value)
                    .map_err(|_| Malformed::Query("when"))?
                    .with_timezone(&Utc);
                parsed.when = Some(when);
            }
            "where" => {
                let zones: Vec<String> = value
                    .split(',')
                    .filter(|zone| !zone.is_empty())
                    .map(str::to_string)
                    .collect();
                parsed.zones = (!zones.is_empty()).then_some(zones);
            }
            _ => log::debug!("ignoring query key {key:?}"),
        }
    }
    Ok(parsed)
}
