//! List command implementation

use crate::cli::ListArgs;
use crate::config::Config;
use crate::manager::IconManager;
use anyhow::Result;
use serde::Serialize;

/// One row of the set listing
#[derive(Debug, Clone, Serialize)]
pub struct SetSummary {
    pub name: String,
    pub location: String,
    pub active: bool,
}

/// Summarize every declared set of a manager
pub fn summarize(manager: &IconManager) -> Vec<SetSummary> {
    manager
        .available_sets()
        .into_iter()
        .map(|name| SetSummary {
            location: manager.location(&name).unwrap_or_default().to_string(),
            active: name == manager.active_set(),
            name,
        })
        .collect()
}

/// Render the listing, marking the active set with `*`
pub fn format_sets(sets: &[SetSummary]) -> String {
    let width = sets.iter().map(|s| s.name.len()).max().unwrap_or(0);

    sets.iter()
        .map(|s| {
            let marker = if s.active { '*' } else { ' ' };
            format!("{} {:<width$}  {}", marker, s.name, s.location, width = width)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run the list command
pub fn run(args: ListArgs, config: &Config) -> Result<()> {
    let manager = super::open_manager(config)?;
    let sets = summarize(&manager);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sets)?);
    } else {
        println!("{}", format_sets(&sets));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_format_sets() {
        let sets = vec![
            SetSummary {
                name: "default".into(),
                location: "/icons/default".into(),
                active: true,
            },
            SetSummary {
                name: "dark".into(),
                location: "/icons/dark".into(),
                active: false,
            },
        ];

        assert_snapshot!(format_sets(&sets), @r"
        * default  /icons/default
          dark     /icons/dark
        ");
    }

    #[test]
    fn test_summarize_builtin() {
        let manager = IconManager::new().unwrap();
        let sets = summarize(&manager);

        assert_eq!(sets.len(), 2);
        assert!(sets[0].active);
        assert_eq!(sets[1].name, "mono");
        assert_eq!(sets[1].location, "icons/mono");
    }
}
