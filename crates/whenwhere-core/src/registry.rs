//! The ordered list of zone names whose positions stand in for the names
//! inside a token.
//!
//! A token only stores indices, so the registry used to decode must list
//! the same names in the same order as the one used to encode. Registries
//! may grow at the end ([`ZoneRegistry::with_appended`]); reordering or
//! removing names silently remaps every token minted before the change.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::RegistryError;

/// Largest number of names a 16-bit index can address.
pub const MAX_ZONES: usize = u16::MAX as usize + 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRegistry {
    names: Vec<String>,
    index: HashMap<String, u16>,
}

/// On-disk registry configuration.
///
/// ```toml
/// zones = ["UTC", "Europe/Berlin", "America/New_York"]
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryFile {
    zones: Vec<String>,
}

impl ZoneRegistry {
    /// Builds a registry from names in index order.
    pub fn new<I, S>(names: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self {
            names: Vec::new(),
            index: HashMap::new(),
        };
        registry.push_all(names)?;
        Ok(registry)
    }

    /// Every IANA zone name known to the bundled tz database, sorted
    /// lexicographically.
    ///
    /// Indices are stable only for a fixed tz database release. Tokens
    /// shared across releases that add zones in the middle of the ordering
    /// decode to the wrong names.
    pub fn iana() -> Self {
        let mut names: Vec<&'static str> =
            chrono_tz::TZ_VARIANTS.iter().map(|tz| tz.name()).collect();
        names.sort_unstable();
        names.dedup();
        let index = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), i as u16))
            .collect();
        Self {
            names: names.into_iter().map(str::to_string).collect(),
            index,
        }
    }

    pub fn from_toml_str(src: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = toml::from_str(src)?;
        Self::new(file.zones)
    }

    /// Loads a TOML registry file holding a `zones = [...]` array.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)?;
        let registry = Self::from_toml_str(&src)?;
        log::debug!(
            "loaded zone registry with {} zones from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Returns a registry with `names` added after the existing entries.
    /// Every index valid in `self` keeps its name.
    pub fn with_appended<I, S>(&self, names: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.clone();
        next.push_all(names)?;
        Ok(next)
    }

    fn push_all<I, S>(&mut self, names: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if self.names.len() == MAX_ZONES {
                return Err(RegistryError::TooLarge(self.names.len() + 1));
            }
            if self.index.contains_key(&name) {
                return Err(RegistryError::Duplicate(name));
            }
            self.index.insert(name.clone(), self.names.len() as u16);
            self.names.push(name);
        }
        Ok(())
    }

    pub fn index_of(&self, name: &str) -> Option<u16> {
        self.index.get(name).copied()
    }

    pub fn name_at(&self, index: u16) -> Option<&str> {
        self.names.get(index as usize).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}
