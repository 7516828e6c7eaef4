//! Descriptor of a single icon set (`<location>/icons.props`).

use crate::error::ConfigError;
use crate::icon::IconRole;
use crate::props::Properties;

/// File name of the descriptor inside a set's location.
pub const DESCRIPTOR_FILE: &str = "icons.props";

pub const KEY_SOURCE: &str = "source";
pub const KEY_LICENSE: &str = "license";
pub const KEY_DRIVE: &str = "drive";
pub const KEY_OPEN: &str = "open";
pub const KEY_CLOSED: &str = "closed";
pub const KEY_ICON_SIZE: &str = "icon_size";

/// Required descriptor keys, in the order they are checked.
pub const REQUIRED_KEYS: [&str; 6] = [
    KEY_SOURCE,
    KEY_LICENSE,
    KEY_DRIVE,
    KEY_OPEN,
    KEY_CLOSED,
    KEY_ICON_SIZE,
];

/// Icon size used when `icon_size` is missing or out of range.
pub const DEFAULT_ICON_SIZE: u32 = 16;

/// Largest accepted `icon_size`; larger values fall back to the default.
pub const MAX_ICON_SIZE: u32 = 512;

/// A validated icon-set descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSetDescriptor {
    set: String,
    props: Properties,
}

impl IconSetDescriptor {
    /// Validate the descriptor of `set`.
    pub fn new(set: impl Into<String>, props: Properties) -> Result<Self, ConfigError> {
        let set = set.into();
        Self::check(&set, &props)?;
        Ok(Self { set, props })
    }

    /// Report the first required key that is missing.
    pub fn check(set: &str, props: &Properties) -> Result<(), ConfigError> {
        match REQUIRED_KEYS.into_iter().find(|k| !props.contains_key(k)) {
            Some(key) => Err(ConfigError::MissingDescriptorKey {
                set: set.to_string(),
                key,
            }),
            None => Ok(()),
        }
    }

    /// Name of the set this descriptor belongs to
    pub fn set(&self) -> &str {
        &self.set
    }

    /// Where the icons came from
    pub fn source(&self) -> &str {
        self.props.get(KEY_SOURCE).unwrap_or_default()
    }

    /// License of the icons
    pub fn license(&self) -> &str {
        self.props.get(KEY_LICENSE).unwrap_or_default()
    }

    /// File name for a role, or `None` when the set has no icon for it.
    ///
    /// Blank values count as "no icon". Surrounding whitespace is dropped.
    pub fn file_for(&self, role: IconRole) -> Option<&str> {
        self.props
            .get(role.key())
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Pixel size icons are scaled to.
    ///
    /// Falls back to [`DEFAULT_ICON_SIZE`] when the value is not an integer
    /// in `1..=MAX_ICON_SIZE`; this is intentional and not reported.
    pub fn icon_size(&self) -> u32 {
        self.props
            .get(KEY_ICON_SIZE)
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|size| (1..=MAX_ICON_SIZE).contains(size))
            .unwrap_or(DEFAULT_ICON_SIZE)
    }
}
