//! Configuration support for the portfolio page.
//!
//! Site settings (contact targets, reveal animation, keybindings, log level)
//! are plain serde structs. Every field has a default so a page can embed a
//! partial JSON object and still get a complete configuration.

use serde::{Deserialize, Serialize};

use crate::keybindings::KeyBindings;

/// Log level setting for the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Site configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Version of the configuration format
    #[serde(default = "default_version")]
    pub version: u32,

    /// Portfolio owner, shown in the startup log
    #[serde(default = "default_owner")]
    pub owner: String,

    /// One-line tagline, shown in the startup log
    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Outbound contact targets
    #[serde(default)]
    pub contact: ContactLinks,

    /// Scroll-reveal animation settings
    #[serde(default)]
    pub reveal: RevealOptions,

    /// Box shadow applied to the header once the page is scrolled
    #[serde(default = "default_header_shadow")]
    pub header_shadow: String,

    /// Modal keybindings
    #[serde(default)]
    pub keybindings: KeyBindings,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_owner() -> String {
    "Richard Bellosillo Jr.".to_string()
}

fn default_tagline() -> String {
    "Aspiring UI/UX Designer".to_string()
}

fn default_header_shadow() -> String {
    "0 2px 20px rgba(0, 0, 0, 0.1)".to_string()
}

/// Outbound contact targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactLinks {
    /// Recipient for the email compose window
    pub email: String,
    /// Compose URL prefix the recipient is appended to
    pub compose_url_prefix: String,
    /// Professional profile URL
    pub profile_url: String,
    /// Resume document URL; `None` shows `resume_notice` instead
    pub resume_url: Option<String>,
    /// Notice shown while no resume is published
    pub resume_notice: String,
}

impl Default for ContactLinks {
    fn default() -> Self {
        Self {
            email: "rbellosillojr@gmail.com".to_string(),
            compose_url_prefix: "https://mail.google.com/mail/?view=cm&fs=1&to=".to_string(),
            profile_url: "https://www.linkedin.com/in/richard-jr-bellosillo-30a23a2a5/".to_string(),
            resume_url: None,
            resume_notice: "Resume download placeholder — replace with actual PDF link."
                .to_string(),
        }
    }
}

/// Scroll-reveal animation settings for cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// CSS selector of elements to reveal
    pub selector: String,
    /// Fraction of the element that must be visible
    pub threshold: f64,
    /// IntersectionObserver root margin
    pub root_margin: String,
    /// Initial downward offset in pixels
    pub offset_px: u32,
    /// Transition duration in seconds
    pub duration_secs: f32,
    /// Delay before observers are attached, in milliseconds
    pub start_delay_ms: i32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            selector: ".card, .project-card".to_string(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            offset_px: 20,
            duration_secs: 0.6,
            start_delay_ms: 100,
        }
    }
}

impl SiteConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            owner: default_owner(),
            tagline: default_tagline(),
            contact: ContactLinks::default(),
            reveal: RevealOptions::default(),
            header_shadow: default_header_shadow(),
            keybindings: KeyBindings::default(),
            log_level: LogLevel::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "folio-config.json"
    }

    /// Get the default config file path.
    /// Returns None on WASM (no filesystem access).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("folio").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("folio")
                    .join(Self::default_filename())
            })
        }
    }

    /// Load configuration from `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match Self::load_from_path(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                None
            }
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = SiteConfig::from_json("{}").expect("defaults");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{
            "contact": { "resume_url": "/resume.pdf" },
            "reveal": { "threshold": 0.25 },
            "log_level": "debug"
        }"#;
        let config = SiteConfig::from_json(json).expect("valid config");
        assert_eq!(config.contact.resume_url.as_deref(), Some("/resume.pdf"));
        assert_eq!(config.contact.email, ContactLinks::default().email);
        assert_eq!(config.reveal.threshold, 0.25);
        assert_eq!(config.reveal.root_margin, "0px 0px -50px 0px");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_log_level_filters() {
        let levels = [
            (LogLevel::Error, log::LevelFilter::Error),
            (LogLevel::Warn, log::LevelFilter::Warn),
            (LogLevel::Info, log::LevelFilter::Info),
            (LogLevel::Debug, log::LevelFilter::Debug),
            (LogLevel::Trace, log::LevelFilter::Trace),
        ];
        for (level, filter) in levels {
            assert_eq!(level.to_level_filter(), filter);
        }
    }

    #[test]
    fn test_version_too_new() {
        let json = format!("{{ \"version\": {} }}", CONFIG_VERSION + 1);
        match SiteConfig::from_json(&json) {
            Err(ConfigError::VersionTooNew {
                file_version,
                supported_version,
            }) => {
                assert_eq!(file_version, CONFIG_VERSION + 1);
                assert_eq!(supported_version, CONFIG_VERSION);
            }
            other => panic!("expected VersionTooNew, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            SiteConfig::from_json("{ not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_to_json_is_loadable() {
        let mut config = SiteConfig::new();
        config.owner = "Someone Else".to_string();
        let json = config.to_json().expect("serialize");
        assert_eq!(SiteConfig::from_json(&json).expect("parse"), config);
    }

    #[test]
    fn test_load_from_missing_path() {
        let path = std::env::temp_dir().join("folio-config-that-does-not-exist.json");
        assert!(matches!(
            SiteConfig::load_from_path(&path),
            Err(ConfigError::IoError(_))
        ));
    }
}
