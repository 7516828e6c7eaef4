//! Export command implementation

use crate::cli::ExportArgs;
use crate::config::Config;
use crate::icon::IconRole;
use crate::manager::IconManager;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Write the active set's icons to `dir` as `<role>.png`.
///
/// Roles without an icon, or whose icon failed to load, are skipped.
/// Returns the files written.
pub fn export_icons(manager: &mut IconManager, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let mut written = Vec::new();
    for role in IconRole::ALL {
        let Some(icon) = manager.icon(role) else {
            tracing::info!(%role, set = manager.active_set(), "No icon to export");
            continue;
        };

        let target = dir.join(format!("{}.png", role));
        icon.image()
            .save_with_format(&target, image::ImageFormat::Png)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        written.push(target);
    }

    Ok(written)
}

/// Run the export command
pub fn run(args: ExportArgs, config: &Config) -> Result<()> {
    let mut manager = super::open_manager(config)?;
    super::select_set(&mut manager, args.set.as_deref())?;

    let written = export_icons(&mut manager, &args.output)?;
    println!(
        "Exported {} icon(s) from '{}' to {}",
        written.len(),
        manager.active_set(),
        args.output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_builtin_default() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut manager = IconManager::new().unwrap();

        let written = export_icons(&mut manager, tmp.path()).unwrap();
        assert_eq!(written.len(), 3);

        let drive = image::open(tmp.path().join("drive.png")).unwrap();
        assert_eq!((drive.width(), drive.height()), (16, 16));
    }

    #[test]
    fn test_export_creates_nested_dir() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("a/b");
        let mut manager = IconManager::new().unwrap();
        manager.set_active_set("mono").unwrap();

        export_icons(&mut manager, &out).unwrap();

        let closed = image::open(out.join("closed.png")).unwrap();
        assert_eq!(closed.width(), 20);
    }
}
