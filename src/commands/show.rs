//! Show command implementation

use crate::cli::ShowArgs;
use crate::config::Config;
use crate::icon::IconRole;
use crate::manager::IconManager;
use anyhow::Result;
use serde::Serialize;
use std::fmt::Write as _;

/// Load status of one role's icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleStatus {
    /// The set has no icon for the role
    None,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleReport {
    pub role: IconRole,
    pub file: Option<String>,
    pub status: RoleStatus,
}

/// Everything known about the active set
#[derive(Debug, Clone, Serialize)]
pub struct SetReport {
    pub name: String,
    pub location: String,
    pub source: String,
    pub license: String,
    pub icon_size: u32,
    pub icons: Vec<RoleReport>,
}

/// Describe the active set, loading each role's icon
pub fn report(manager: &mut IconManager) -> SetReport {
    let icons = IconRole::ALL
        .into_iter()
        .map(|role| {
            let file = manager.descriptor().file_for(role).map(str::to_string);
            let status = match &file {
                None => RoleStatus::None,
                Some(_) if manager.icon(role).is_some() => RoleStatus::Loaded,
                Some(_) => RoleStatus::Failed,
            };
            RoleReport { role, file, status }
        })
        .collect();

    let descriptor = manager.descriptor();
    SetReport {
        name: manager.active_set().to_string(),
        location: manager.registry().active_location().to_string(),
        source: descriptor.source().to_string(),
        license: descriptor.license().to_string(),
        icon_size: manager.icon_size(),
        icons,
    }
}

/// Render a report as text
pub fn format_report(report: &SetReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Icon set: {}", report.name);
    let _ = writeln!(out, "Location: {}", report.location);
    let _ = writeln!(out, "Source:   {}", report.source);
    let _ = writeln!(out, "License:  {}", report.license);
    let _ = writeln!(out, "Size:     {}x{}", report.icon_size, report.icon_size);
    out.push('\n');

    let width = report
        .icons
        .iter()
        .filter_map(|r| r.file.as_ref().map(String::len))
        .max()
        .unwrap_or(0)
        .max(1);

    for icon in &report.icons {
        let status = match icon.status {
            RoleStatus::None => "none",
            RoleStatus::Loaded => "loaded",
            RoleStatus::Failed => "failed",
        };
        let _ = writeln!(
            out,
            "{:<8}{:<width$}  {}",
            icon.role.to_string(),
            icon.file.as_deref().unwrap_or("-"),
            status,
            width = width
        );
    }

    out.trim_end().to_string()
}

/// Run the show command
pub fn run(args: ShowArgs, config: &Config) -> Result<()> {
    let mut manager = super::open_manager(config)?;
    super::select_set(&mut manager, args.set.as_deref())?;

    let report = report(&mut manager);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_report(&report));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_report_builtin_default() {
        let mut manager = IconManager::new().unwrap();
        let report = report(&mut manager);

        assert_eq!(report.name, "default");
        assert_eq!(report.icon_size, 16);
        assert!(report
            .icons
            .iter()
            .all(|r| r.status == RoleStatus::Loaded));
    }

    #[test]
    fn test_format_report() {
        let report = SetReport {
            name: "dark".into(),
            location: "/icons/dark".into(),
            source: "tango".into(),
            license: "public domain".into(),
            icon_size: 24,
            icons: vec![
                RoleReport {
                    role: IconRole::Drive,
                    file: Some("drive.png".into()),
                    status: RoleStatus::Loaded,
                },
                RoleReport {
                    role: IconRole::Open,
                    file: None,
                    status: RoleStatus::None,
                },
                RoleReport {
                    role: IconRole::Closed,
                    file: Some("folder.png".into()),
                    status: RoleStatus::Failed,
                },
            ],
        };

        assert_snapshot!(format_report(&report), @r"
        Icon set: dark
        Location: /icons/dark
        Source:   tango
        License:  public domain
        Size:     24x24

        drive   drive.png   loaded
        open    -           none
        closed  folder.png  failed
        ");
    }
}
