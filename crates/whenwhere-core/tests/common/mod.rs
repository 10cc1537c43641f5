#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use whenwhere_core::ZoneRegistry;

/// Registry with `America/New_York` at index 42 and a handful of real zones
/// after it.
pub fn registry() -> ZoneRegistry {
    let mut names: Vec<String> = (0..42).map(|i| format!("Test/Zone{i:02}")).collect();
    names.extend(
        [
            "America/New_York",
            "Asia/Tokyo",
            "Europe/Paris",
            "UTC",
            "Australia/Lord_Howe",
            "Etc/GMT+5",
        ]
        .map(String::from),
    );
    ZoneRegistry::new(names).expect("test registry has unique names")
}

pub fn march_first_noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 3, 1, 12, 0, 0).unwrap()
}
