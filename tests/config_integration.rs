use dirtree_icons::commands::open_manager;
use dirtree_icons::config::Config;
use dirtree_icons::ScaleFilter;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn parse_complete_config_file() {
    let config_content = r#"
[icons]
registry = "sets.props"
resource_root = "/usr/share/dirtree-icons"
active_set = "dark"

[scaling]
filter = "catmull-rom"
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let config = Config::load(Some(file.path())).unwrap();

    assert_eq!(config.icons.registry.as_deref(), Some("sets.props"));
    assert_eq!(
        config.icons.resource_root,
        Some(PathBuf::from("/usr/share/dirtree-icons"))
    );
    assert_eq!(config.icons.active_set.as_deref(), Some("dark"));
    assert_eq!(config.scaling.filter, ScaleFilter::CatmullRom);
}

#[test]
fn parse_partial_config_uses_defaults() {
    let config_content = r#"
[icons]
active_set = "mono"
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let config = Config::load(Some(file.path())).unwrap();

    assert_eq!(config.icons.active_set.as_deref(), Some("mono"));
    assert!(config.icons.resource_root.is_none());
    assert_eq!(config.scaling.filter, ScaleFilter::Lanczos3);
}

#[test]
fn parse_invalid_toml_returns_error() {
    let config_content = "this is not valid toml [[[";

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let result = Config::load(Some(file.path()));
    assert!(result.is_err());
}

#[test]
fn parse_unknown_filter_returns_error() {
    let config_content = r#"
[scaling]
filter = "bicubic"
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    assert!(Config::load(Some(file.path())).is_err());
}

#[test]
fn registry_without_root_returns_error() {
    let config_content = r#"
[icons]
registry = "sets.props"
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    assert!(Config::load(Some(file.path())).is_err());
}

#[test]
fn config_filter_reaches_manager() {
    let config_content = r#"
[scaling]
filter = "nearest"
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let config = Config::load(Some(file.path())).unwrap();
    let manager = open_manager(&config).unwrap();

    assert_eq!(manager.filter(), ScaleFilter::Nearest);
}

#[test]
fn user_registry_can_reference_builtin_locations() {
    let root = tempfile::TempDir::new().unwrap();
    std::fs::create_dir(root.path().join("tiny")).unwrap();
    std::fs::write(
        root.path().join("tiny/icons.props"),
        "source=me\nlicense=none\ndrive=\nopen=\nclosed=\nicon_size=8\n",
    )
    .unwrap();
    std::fs::write(
        root.path().join("sets.props"),
        "available_sets=tiny,default\nactive_set=tiny\nlocation_tiny=tiny\nlocation_default=icons/default\n",
    )
    .unwrap();

    let mut config = Config::default();
    config.icons.registry = Some("sets.props".into());
    config.icons.resource_root = Some(root.path().to_path_buf());

    let mut manager = open_manager(&config).unwrap();
    assert_eq!(manager.active_set(), "tiny");
    assert_eq!(manager.icon_size(), 8);

    manager.set_active_set("default").unwrap();
    assert!(manager.drive_icon().is_some());
}
