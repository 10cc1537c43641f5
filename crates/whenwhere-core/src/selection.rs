use chrono::{DateTime, Utc};

/// Zone used when the local zone cannot be determined.
pub const FALLBACK_ZONE: &str = "UTC";

/// A moment in time together with the zones it should be shown in.
///
/// `when` carries millisecond precision; constructors drop anything finer
/// so that a selection always survives a trip through a token unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    pub when: DateTime<Utc>,
    pub zones: Vec<String>,
}

impl Selection {
    pub fn new<I, S>(when: DateTime<Utc>, zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            when: truncate_to_millis(when),
            zones: zones.into_iter().map(Into::into).collect(),
        }
    }

    /// Same zones, different moment.
    pub fn with_when(&self, when: DateTime<Utc>) -> Self {
        Self {
            when: truncate_to_millis(when),
            zones: self.zones.clone(),
        }
    }

    /// Same moment, different zones.
    pub fn with_zones<I, S>(&self, zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(self.when, zones)
    }

    /// The selection a fresh page starts from: `now`, shown in `local_zone`.
    pub fn default_at(now: DateTime<Utc>, local_zone: impl Into<String>) -> Self {
        Self::new(now, [local_zone.into()])
    }

    /// Current time in the zone this process believes it runs in.
    pub fn local_default() -> Self {
        Self::default_at(Utc::now(), local_zone())
    }
}

/// Best guess at the IANA name of the local zone.
pub fn local_zone() -> String {
    match iana_time_zone::get_timezone() {
        Ok(name) => name,
        Err(err) => {
            log::warn!("cannot determine local time zone, using {FALLBACK_ZONE}: {err}");
            FALLBACK_ZONE.to_string()
        }
    }
}

fn truncate_to_millis(when: DateTime<Utc>) -> DateTime<Utc> {
    // `timestamp_millis` floors, so this always lands inside chrono's range.
    DateTime::from_timestamp_millis(when.timestamp_millis()).unwrap_or(when)
}
