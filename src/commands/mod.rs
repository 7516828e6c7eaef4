//! Subcommand implementations for the `dirtree-icons` binary.

pub mod export;
pub mod list;
pub mod show;

use crate::config::Config;
use crate::error::Result;
use crate::manager::IconManager;
use crate::resource::{ChainResolver, EmbeddedResolver, FsResolver, BUILTIN_REGISTRY};

/// Build an icon manager as described by the configuration.
///
/// With a `resource_root`, user files take precedence over the built-in
/// sets; the registry is read from `registry` if set, else the built-in one.
pub fn open_manager(config: &Config) -> Result<IconManager> {
    let icons = &config.icons;

    let manager = match &icons.resource_root {
        Some(root) => {
            let resolver = ChainResolver::new()
                .with(FsResolver::new(root))
                .with(EmbeddedResolver::builtin());
            let registry = icons.registry.as_deref().unwrap_or(BUILTIN_REGISTRY);
            tracing::info!(root = %root.display(), registry, "Using user icon sets");
            IconManager::from_resource(resolver, registry)?
        }
        None => IconManager::new()?,
    };
    let mut manager = manager.with_filter(config.scaling.filter);

    if let Some(set) = &icons.active_set {
        manager.set_active_set(set)?;
    }

    Ok(manager)
}

/// Activate `set` if one was requested on the command line
pub(crate) fn select_set(manager: &mut IconManager, set: Option<&str>) -> Result<()> {
    match set {
        Some(set) => manager.set_active_set(set),
        None => Ok(()),
    }
}
