//! Registry of named icon sets.

use crate::error::ConfigError;
use crate::props::Properties;

/// Key listing the available sets, comma-separated.
pub const KEY_AVAILABLE_SETS: &str = "available_sets";

/// Key naming the active set.
pub const KEY_ACTIVE_SET: &str = "active_set";

/// Prefix of the per-set location keys.
pub const KEY_LOCATION_PREFIX: &str = "location_";

/// The top-level icon-set configuration.
///
/// Holds `available_sets`, `active_set` and one `location_<name>` entry per
/// declared set. A `Registry` can only be obtained through
/// [`Registry::new`], so every instance has passed [`Registry::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    props: Properties,
}

impl Registry {
    /// Validate the properties and wrap them.
    pub fn new(props: Properties) -> Result<Self, ConfigError> {
        Self::check(&props)?;
        Ok(Self { props })
    }

    /// Check the registry rules, reporting the first one violated:
    /// `available_sets` present, `active_set` present, a location for every
    /// listed set, and the active set being one of them.
    pub fn check(props: &Properties) -> Result<(), ConfigError> {
        let available = props
            .get(KEY_AVAILABLE_SETS)
            .ok_or(ConfigError::MissingRegistryKey(KEY_AVAILABLE_SETS))?;
        let active = props
            .get(KEY_ACTIVE_SET)
            .ok_or(ConfigError::MissingRegistryKey(KEY_ACTIVE_SET))?;

        let names = split_sets(available);
        for name in &names {
            let key = location_key(name);
            if !props.contains_key(&key) {
                return Err(ConfigError::MissingLocation(key));
            }
        }

        if !names.iter().any(|n| n == active) {
            return Err(ConfigError::UnknownActiveSet {
                active: active.to_string(),
                available: names,
            });
        }

        Ok(())
    }

    /// Names of all declared sets, in declaration order.
    ///
    /// Entries are not trimmed or deduplicated.
    pub fn available_sets(&self) -> Vec<String> {
        split_sets(self.props.get(KEY_AVAILABLE_SETS).unwrap_or_default())
    }

    /// Check if a set name is declared
    pub fn contains(&self, name: &str) -> bool {
        self.available_sets().iter().any(|n| n == name)
    }

    /// Name of the active set
    pub fn active_set(&self) -> &str {
        self.props.get(KEY_ACTIVE_SET).unwrap_or_default()
    }

    /// Resource directory of a set, if declared
    pub fn location(&self, name: &str) -> Option<&str> {
        self.props.get(&location_key(name))
    }

    /// Resource directory of the active set
    pub fn active_location(&self) -> &str {
        self.location(self.active_set()).unwrap_or_default()
    }

    /// Point `active_set` at another declared set.
    ///
    /// Callers are expected to have checked [`contains`](Self::contains).
    pub(crate) fn set_active(&mut self, name: &str) {
        self.props.set(KEY_ACTIVE_SET, name);
    }
}

/// Build the `location_<name>` key for a set
pub fn location_key(name: &str) -> String {
    format!("{}{}", KEY_LOCATION_PREFIX, name)
}

fn split_sets(value: &str) -> Vec<String> {
    value.split(',').map(str::to_string).collect()
}
