//! Configuration management.
//!
//! Parses `docsite.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docsite.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub(crate) struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override site name.
    pub site_name: Option<String>,
    /// Override content table file.
    pub content_file: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub(crate) struct Config {
    /// Server configuration.
    pub server: ServerSection,
    /// Site configuration (paths are relative strings from TOML).
    site: SiteSectionRaw,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteSection,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub(crate) struct ServerSection {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
        }
    }
}

/// Raw site configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteSectionRaw {
    name: Option<String>,
    content_file: Option<String>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug)]
pub(crate) struct SiteSection {
    /// Site name for the page header and browser-tab title.
    pub name: String,
    /// Content table file. None means the built-in table is served.
    pub content_file: Option<PathBuf>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: "Blockstack".to_owned(),
            content_file: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docsite.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub(crate) fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(site_name) = &settings.site_name {
            self.site_resolved.name.clone_from(site_name);
        }
        if let Some(content_file) = &settings.content_file {
            self.site_resolved.content_file = Some(content_file.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::parse(&content, config_dir)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse configuration from TOML and resolve paths against `config_dir`.
    fn parse(content: &str, config_dir: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.resolve_paths(config_dir);
        Ok(config)
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.site_resolved = SiteSection {
            name: self
                .site
                .name
                .clone()
                .unwrap_or_else(|| SiteSection::default().name),
            content_file: self
                .site
                .content_file
                .as_deref()
                .map(|path| config_dir.join(path)),
        };
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(ConfigError::Validation(
                "server.host cannot be empty".to_owned(),
            ));
        }

        // Port 0 is technically valid (OS assigns a random port), but it's
        // unlikely to be intentional in a config file
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        if self.site_resolved.name.is_empty() {
            return Err(ConfigError::Validation(
                "site.name cannot be empty".to_owned(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse("", Path::new("/etc/docsite")).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.site_resolved.name, "Blockstack");
        assert_eq!(config.site_resolved.content_file, None);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [server]
            host = "0.0.0.0"
            port = 3000

            [site]
            name = "Acme Docs"
            content_file = "content/docs.json"
        "#;
        let config = Config::parse(toml, Path::new("/srv/site")).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.site_resolved.name, "Acme Docs");
        assert_eq!(
            config.site_resolved.content_file,
            Some(PathBuf::from("/srv/site/content/docs.json"))
        );
    }

    #[test]
    fn test_cli_settings_override_config() {
        let toml = r#"
            [server]
            port = 3000

            [site]
            name = "Acme Docs"
        "#;
        let mut config = Config::parse(toml, Path::new(".")).unwrap();
        config.apply_cli_settings(&CliSettings {
            host: Some("0.0.0.0".to_owned()),
            port: Some(4000),
            site_name: None,
            content_file: Some(PathBuf::from("other.json")),
        });

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.site_resolved.name, "Acme Docs");
        assert_eq!(
            config.site_resolved.content_file,
            Some(PathBuf::from("other.json"))
        );
    }

    #[test]
    fn test_port_zero_rejected() {
        let toml = r#"
            [server]
            port = 0
        "#;
        let config = Config::parse(toml, Path::new(".")).unwrap();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_site_name_rejected() {
        let toml = r#"
            [site]
            name = ""
        "#;
        let config = Config::parse(toml, Path::new(".")).unwrap();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }
}
