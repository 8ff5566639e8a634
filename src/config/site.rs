//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    /// Prefix for canonical post URLs; the request's date and link are appended
    pub canonical_base: String,

    // Upstream content API
    #[serde(default)]
    pub api: ApiConfig,

    // Serving
    #[serde(default)]
    pub server: ServerConfig,
    pub static_dir: String,

    // Writing
    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Elliot J. Reed".to_string(),
            description: String::new(),
            author: "Elliot J. Reed".to_string(),
            language: "en-GB".to_string(),

            canonical_base: "https://www.elliotjreed.com/blog/".to_string(),

            api: ApiConfig::default(),

            server: ServerConfig::default(),
            static_dir: "static".to_string(),

            highlight: HighlightConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a file, falling back to defaults when it is missing
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            tracing::debug!("Loading configuration from {:?}", path);
            Self::load(path)
        } else {
            tracing::debug!("No configuration at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }
}

/// Shape of the upstream JSON documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Envelope {
    /// The root object is the model itself
    #[default]
    Bare,
    /// The model is wrapped as `{"data": ...}`
    Data,
}

/// Content API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base: String,
    pub timeout_secs: u64,
    pub envelope: Envelope,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base: "https://api.elliotjreed.com/schema/blog".to_string(),
            timeout_secs: 10,
            envelope: Envelope::Bare,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "0.0.0.0".to_string(),
            port: 98,
        }
    }
}

/// Code block highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
    pub line_numbers: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "base16-ocean.dark".to_string(),
            line_numbers: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.api.envelope, Envelope::Bare);
        assert_eq!(config.server.port, 98);
        assert_eq!(config.canonical_base, "https://www.elliotjreed.com/blog/");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
canonical_base: https://www.example.com/blog/
api:
  base: http://localhost:8080/schema/blog
  envelope: data
server:
  port: 8000
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.canonical_base, "https://www.example.com/blog/");
        assert_eq!(config.api.base, "http://localhost:8080/schema/blog");
        assert_eq!(config.api.envelope, Envelope::Data);
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.ip, "0.0.0.0");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api:\n  timeout_secs: 3\nhighlight:\n  enable: false").unwrap();

        let config = SiteConfig::load_or_default(file.path()).unwrap();
        assert_eq!(config.api.timeout(), Duration::from_secs(3));
        assert!(!config.highlight.enable);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load_or_default(dir.path().join("_config.yml")).unwrap();
        assert_eq!(config.static_dir, "static");
    }
}
