use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum IconError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid icon set name (available: {}): {name}", .available.join(","))]
    InvalidSet { name: String, available: Vec<String> },
}

/// Icon-set definition errors.
///
/// These are integrity problems with the registry or a set descriptor and
/// are never retried.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Icon sets definition invalid: missing sets key: {0}")]
    MissingRegistryKey(&'static str),

    #[error("Icon sets definition invalid: missing sets location key: {0}")]
    MissingLocation(String),

    #[error("Icon sets definition invalid: active set '{active}' is not one of: {}", .available.join(","))]
    UnknownActiveSet {
        active: String,
        available: Vec<String>,
    },

    #[error("Failed to initialize icon set '{set}': missing icon set key: {key}")]
    MissingDescriptorKey { set: String, key: &'static str },

    #[error("Failed to read '{path}': {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: PropsError,
    },

    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Properties-file syntax errors
#[derive(Error, Debug)]
pub enum PropsError {
    #[error("malformed properties: {0}")]
    Syntax(#[from] java_properties::PropertiesError),
}

/// Why a single icon could not be produced.
///
/// Never returned to callers of the manager; logged and remembered.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read icon '{path}': {source}")]
    Resource {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode icon '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, IconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_set_lists_available_names() {
        let err = IconError::InvalidSet {
            name: "neon".into(),
            available: vec!["default".into(), "dark".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("default,dark"));
        assert!(msg.ends_with("neon"));
    }

    #[test]
    fn config_error_conversion() {
        let config_err = ConfigError::MissingRegistryKey("active_set");
        let icon_err: IconError = config_err.into();
        assert!(matches!(icon_err, IconError::Config(_)));
        assert!(icon_err.to_string().contains("active_set"));
    }

    #[test]
    fn descriptor_error_names_set_and_key() {
        let err = ConfigError::MissingDescriptorKey {
            set: "dark".into(),
            key: "license",
        };
        let msg = err.to_string();
        assert!(msg.contains("'dark'"));
        assert!(msg.contains("license"));
    }
}
