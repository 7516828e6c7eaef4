//! Resource lookup for icon-set files.
//!
//! The manager never touches the filesystem directly. Every registry,
//! descriptor and image is read through a [`ResourceResolver`], which maps
//! a logical `/`-separated path to bytes.

use include_dir::{include_dir, Dir};
use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Icon sets bundled with the crate
static BUILTIN_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Path of the built-in registry inside [`EmbeddedResolver::builtin`]
pub const BUILTIN_REGISTRY: &str = "icons/sets.props";

/// Trait for resource backends.
///
/// A missing resource must be reported as [`io::ErrorKind::NotFound`] so
/// that [`ChainResolver`] can fall through to the next backend.
pub trait ResourceResolver: Send + Sync {
    /// Short backend name used in log output
    fn name(&self) -> &'static str;

    /// Read the full contents of a resource
    fn read(&self, path: &str) -> io::Result<Vec<u8>>;

    /// Check whether a resource exists.
    ///
    /// Default implementation attempts a read.
    fn exists(&self, path: &str) -> bool {
        self.read(path).is_ok()
    }
}

impl<R: ResourceResolver + ?Sized> ResourceResolver for Box<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }

    fn exists(&self, path: &str) -> bool {
        (**self).exists(path)
    }
}

/// Join a set location and a file name with exactly one `/`.
pub fn join(location: &str, file: &str) -> String {
    format!(
        "{}/{}",
        location.trim_end_matches('/'),
        file.trim_start_matches('/')
    )
}

fn normalize(path: &str) -> &str {
    path.trim_start_matches('/')
}

fn not_found(path: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("resource not found: {}", path),
    )
}

/// Resolves resources relative to a directory on disk.
#[derive(Debug, Clone)]
pub struct FsResolver {
    root: PathBuf,
}

impl FsResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> io::Result<PathBuf> {
        let relative = Path::new(normalize(path));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("resource path escapes root: {}", path),
            ));
        }
        Ok(self.root.join(relative))
    }
}

impl ResourceResolver for FsResolver {
    fn name(&self) -> &'static str {
        "filesystem"
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.resolve(path)?)
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).map(|p| p.is_file()).unwrap_or(false)
    }
}

/// Resolves resources from a directory embedded at compile time.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedResolver {
    dir: &'static Dir<'static>,
}

impl EmbeddedResolver {
    pub const fn new(dir: &'static Dir<'static>) -> Self {
        Self { dir }
    }

    /// The icon sets shipped with this crate.
    ///
    /// The registry lives at [`BUILTIN_REGISTRY`].
    pub fn builtin() -> Self {
        Self::new(&BUILTIN_ASSETS)
    }
}

impl ResourceResolver for EmbeddedResolver {
    fn name(&self) -> &'static str {
        "embedded"
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        self.dir
            .get_file(normalize(path))
            .map(|f| f.contents().to_vec())
            .ok_or_else(|| not_found(path))
    }

    fn exists(&self, path: &str) -> bool {
        self.dir.get_file(normalize(path)).is_some()
    }
}

/// Resolves resources from an in-memory map.
#[derive(Debug, Clone, Default)]
pub struct MemoryResolver {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource, replacing any previous content
    pub fn insert(&mut self, path: &str, data: impl Into<Vec<u8>>) {
        self.files.insert(normalize(path).to_string(), data.into());
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, path: &str, data: impl Into<Vec<u8>>) -> Self {
        self.insert(path, data);
        self
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ResourceResolver for MemoryResolver {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        self.files
            .get(normalize(path))
            .cloned()
            .ok_or_else(|| not_found(path))
    }

    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(normalize(path))
    }
}

/// Tries several resolvers in order.
///
/// The first backend that does not report `NotFound` answers the request,
/// so a user directory placed first overlays the built-in sets.
#[derive(Default)]
pub struct ChainResolver {
    resolvers: Vec<Box<dyn ResourceResolver>>,
}

impl ChainResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a backend with lower priority than the existing ones
    pub fn with(mut self, resolver: impl ResourceResolver + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl ResourceResolver for ChainResolver {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        for resolver in &self.resolvers {
            match resolver.read(path) {
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                other => return other,
            }
        }
        Err(not_found(path))
    }

    fn exists(&self, path: &str) -> bool {
        self.resolvers.iter().any(|r| r.exists(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_single_separator() {
        assert_eq!(join("/icons/default", "drive.png"), "/icons/default/drive.png");
        assert_eq!(join("/icons/default/", "drive.png"), "/icons/default/drive.png");
        assert_eq!(join("icons", "/drive.png"), "icons/drive.png");
    }

    #[test]
    fn test_memory_resolver_ignores_leading_slash() {
        let resolver = MemoryResolver::new().with("/icons/a.png", vec![1, 2, 3]);

        assert_eq!(resolver.read("icons/a.png").unwrap(), vec![1, 2, 3]);
        assert_eq!(resolver.read("/icons/a.png").unwrap(), vec![1, 2, 3]);
        assert!(resolver.exists("icons/a.png"));
    }

    #[test]
    fn test_memory_resolver_missing_is_not_found() {
        let resolver = MemoryResolver::new();
        let err = resolver.read("nope").unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!resolver.exists("nope"));
    }

    #[test]
    fn test_fs_resolver_reads_relative_to_root() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("dark")).unwrap();
        std::fs::write(tmp.path().join("dark/icons.props"), "source=x").unwrap();

        let resolver = FsResolver::new(tmp.path());
        assert_eq!(resolver.read("/dark/icons.props").unwrap(), b"source=x");
        assert!(resolver.exists("dark/icons.props"));
        assert!(!resolver.exists("dark"));
    }

    #[test]
    fn test_fs_resolver_rejects_parent_components() {
        let tmp = tempfile::TempDir::new().unwrap();
        let resolver = FsResolver::new(tmp.path().join("root"));

        let err = resolver.read("../secret").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_builtin_contains_registry() {
        let resolver = EmbeddedResolver::builtin();

        assert!(resolver.exists(BUILTIN_REGISTRY));
        assert!(resolver.exists("icons/default/icons.props"));
        assert!(!resolver.exists("icons/missing.props"));
    }

    #[test]
    fn test_chain_prefers_first_backend() {
        let chain = ChainResolver::new()
            .with(MemoryResolver::new().with("a", b"first".to_vec()))
            .with(MemoryResolver::new().with("a", b"second".to_vec()).with("b", b"only".to_vec()));

        assert_eq!(chain.read("a").unwrap(), b"first");
        assert_eq!(chain.read("b").unwrap(), b"only");
        assert_eq!(chain.read("c").unwrap_err().kind(), io::ErrorKind::NotFound);
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_chain_stops_on_other_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let chain = ChainResolver::new()
            .with(FsResolver::new(tmp.path()))
            .with(MemoryResolver::new().with("../x", b"x".to_vec()));

        let err = chain.read("../x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
