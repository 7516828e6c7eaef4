//! The icon manager: active-set switching and cached icon lookup.

use crate::cache::{CacheEntry, IconCache};
use crate::descriptor::{IconSetDescriptor, DESCRIPTOR_FILE};
use crate::error::{ConfigError, IconError, LoadError, Result};
use crate::icon::{Icon, IconRole, ScaleFilter};
use crate::props::Properties;
use crate::registry::Registry;
use crate::resource::{self, EmbeddedResolver, ResourceResolver, BUILTIN_REGISTRY};
use std::fmt;

/// Resolves the icons of the active icon set.
///
/// The registry is validated once at construction. The active set's
/// descriptor is loaded at construction and again on every successful
/// [`set_active_set`](Self::set_active_set). Icons are loaded lazily through
/// the resolver, scaled to [`icon_size`](Self::icon_size) and cached per
/// resolved path for the lifetime of the manager, including failures.
///
/// # Example
/// ```
/// use dirtree_icons::IconManager;
///
/// let mut icons = IconManager::new().unwrap();
/// assert_eq!(icons.active_set(), "default");
///
/// let drive = icons.drive_icon().unwrap();
/// assert_eq!(drive.width(), icons.icon_size());
/// ```
pub struct IconManager {
    resolver: Box<dyn ResourceResolver>,
    registry: Registry,
    descriptor: IconSetDescriptor,
    cache: IconCache,
    filter: ScaleFilter,
}

impl IconManager {
    /// Create a manager over the icon sets bundled with the crate.
    pub fn new() -> Result<Self> {
        Self::from_resource(EmbeddedResolver::builtin(), BUILTIN_REGISTRY)
    }

    /// Create a manager from a registry file read through `resolver`.
    ///
    /// Set locations in the registry are resolved by the same resolver.
    pub fn from_resource(resolver: impl ResourceResolver + 'static, path: &str) -> Result<Self> {
        let props = load_properties(&resolver, path)?;
        Self::from_properties(resolver, props)
    }

    /// Create a manager from registry properties already in memory.
    pub fn from_properties(
        resolver: impl ResourceResolver + 'static,
        props: Properties,
    ) -> Result<Self> {
        let registry = Registry::new(props)?;
        Self::from_registry(resolver, registry)
    }

    /// Create a manager from a validated registry.
    pub fn from_registry(
        resolver: impl ResourceResolver + 'static,
        registry: Registry,
    ) -> Result<Self> {
        let resolver: Box<dyn ResourceResolver> = Box::new(resolver);
        let descriptor = load_descriptor(resolver.as_ref(), &registry, registry.active_set())?;

        tracing::debug!(
            backend = resolver.name(),
            sets = ?registry.available_sets(),
            active = registry.active_set(),
            "Icon manager ready"
        );

        Ok(Self {
            resolver,
            registry,
            descriptor,
            cache: IconCache::new(),
            filter: ScaleFilter::default(),
        })
    }

    /// Use a different resampling filter for icons loaded from now on
    pub fn with_filter(mut self, filter: ScaleFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Names of the declared icon sets, in registry order
    pub fn available_sets(&self) -> Vec<String> {
        self.registry.available_sets()
    }

    /// Name of the active icon set
    pub fn active_set(&self) -> &str {
        self.registry.active_set()
    }

    /// Switch to another icon set.
    ///
    /// Unknown names are rejected with [`IconError::InvalidSet`]. The new
    /// set's descriptor is loaded before anything changes, so a broken set
    /// leaves the current one active.
    pub fn set_active_set(&mut self, name: &str) -> Result<()> {
        if !self.registry.contains(name) {
            return Err(IconError::InvalidSet {
                name: name.to_string(),
                available: self.available_sets(),
            });
        }

        let descriptor = load_descriptor(self.resolver.as_ref(), &self.registry, name)?;
        tracing::debug!(from = self.active_set(), to = name, "Switching icon set");

        self.registry.set_active(name);
        self.descriptor = descriptor;
        Ok(())
    }

    /// Icon for filesystem roots
    pub fn drive_icon(&mut self) -> Option<Icon> {
        self.icon(IconRole::Drive)
    }

    /// Icon for expanded directories
    pub fn open_icon(&mut self) -> Option<Icon> {
        self.icon(IconRole::Open)
    }

    /// Icon for collapsed directories
    pub fn closed_icon(&mut self) -> Option<Icon> {
        self.icon(IconRole::Closed)
    }

    /// Icon for a role of the active set.
    ///
    /// `None` when the set has no file for the role, or when the file could
    /// not be loaded.
    pub fn icon(&mut self, role: IconRole) -> Option<Icon> {
        let path = self.icon_path(role)?;
        self.load_icon(&path)
    }

    /// Resolved resource path for a role of the active set
    pub fn icon_path(&self, role: IconRole) -> Option<String> {
        let file = self.descriptor.file_for(role)?;
        Some(resource::join(self.registry.active_location(), file))
    }

    /// Pixel size of the active set's icons
    pub fn icon_size(&self) -> u32 {
        self.descriptor.icon_size()
    }

    /// Descriptor of the active set
    pub fn descriptor(&self) -> &IconSetDescriptor {
        &self.descriptor
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Resource directory of a declared set
    pub fn location(&self, name: &str) -> Option<&str> {
        self.registry.location(name)
    }

    pub fn filter(&self) -> ScaleFilter {
        self.filter
    }

    /// Number of resolved paths in the icon cache
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Check if a resolved path has been loaded (or has failed)
    pub fn is_cached(&self, path: &str) -> bool {
        self.cache.contains(path)
    }

    /// Cache entry for a resolved path
    pub fn cache_entry(&self, path: &str) -> Option<&CacheEntry> {
        self.cache.get(path)
    }

    fn load_icon(&mut self, path: &str) -> Option<Icon> {
        if let Some(entry) = self.cache.get(path) {
            tracing::trace!(path, failed = entry.is_failed(), "Icon cache hit");
            return entry.icon();
        }

        let size = self.icon_size();
        let filter = self.filter;
        let resolver = self.resolver.as_ref();

        self.cache
            .get_or_insert_with(path, || {
                match read_icon(resolver, path, size, filter) {
                    Ok(icon) => {
                        tracing::debug!(path, size, "Loaded icon");
                        CacheEntry::Loaded(icon)
                    }
                    Err(e) => {
                        tracing::warn!(path, error = %e, "Failed to load icon");
                        CacheEntry::Failed
                    }
                }
            })
            .icon()
    }
}

impl fmt::Debug for IconManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconManager")
            .field("resolver", &self.resolver.name())
            .field("active_set", &self.active_set())
            .field("icon_size", &self.icon_size())
            .field("cached", &self.cache.len())
            .finish()
    }
}

fn read_icon(
    resolver: &dyn ResourceResolver,
    path: &str,
    size: u32,
    filter: ScaleFilter,
) -> std::result::Result<Icon, LoadError> {
    let bytes = resolver.read(path).map_err(|source| LoadError::Resource {
        path: path.to_string(),
        source,
    })?;
    Icon::decode_scaled(path, &bytes, size, filter)
}

fn load_properties(
    resolver: &dyn ResourceResolver,
    path: &str,
) -> std::result::Result<Properties, ConfigError> {
    let bytes = resolver.read(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_string(),
        source,
    })?;
    Properties::from_bytes(&bytes).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}

fn load_descriptor(
    resolver: &dyn ResourceResolver,
    registry: &Registry,
    set: &str,
) -> std::result::Result<IconSetDescriptor, ConfigError> {
    let location = registry.location(set).unwrap_or_default();
    let path = resource::join(location, DESCRIPTOR_FILE);
    tracing::debug!(set, path = %path, "Loading icon set descriptor");

    let props = load_properties(resolver, &path)?;
    IconSetDescriptor::new(set, props)
}
