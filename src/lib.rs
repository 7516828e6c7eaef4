//! dirtree-icons - themeable icon sets for directory-picker trees
//!
//! This crate provides:
//! - A registry of named icon sets, each described by an `icons.props` file
//! - Runtime switching of the active set with validation
//! - Lazy loading, scaling and caching of the drive/open/closed icons
//! - Pluggable resource backends (filesystem, embedded, in-memory)

pub mod cache;
pub mod cli;
pub mod commands;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod icon;
pub mod manager;
pub mod props;
pub mod registry;
pub mod resource;

// Re-export commonly used types
pub use config::Config;
pub use error::{ConfigError, IconError, Result};
pub use icon::{Icon, IconRole, ScaleFilter};
pub use manager::IconManager;
pub use props::Properties;
pub use resource::{ChainResolver, EmbeddedResolver, FsResolver, MemoryResolver, ResourceResolver};
