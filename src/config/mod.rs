//! Configuration management

use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;

/// Backend root used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api/";

/// How long a notification stays up before it dismisses itself
pub const DEFAULT_NOTIFICATION_MS: u64 = 6000;

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    /// Root every API path is joined onto (always ends with `/`)
    pub api_base_url: Url,
    pub notification_ms: u64,
    /// No timeout unless configured; a hung request keeps its screen busy
    pub request_timeout_secs: Option<u64>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: normalize_base(DEFAULT_API_BASE_URL)
                .unwrap_or_else(|_| unreachable!("default base URL is valid")),
            notification_ms: DEFAULT_NOTIFICATION_MS,
            request_timeout_secs: None,
        }
    }
}

/// Raw settings as they come out of files and the environment.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default = "default_api_base_url")]
    api_base_url: String,

    #[serde(default = "default_notification_ms")]
    notification_ms: u64,

    #[serde(default)]
    request_timeout_secs: Option<u64>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_notification_ms() -> u64 {
    DEFAULT_NOTIFICATION_MS
}

impl TryFrom<RawConfig> for ConsoleConfig {
    type Error = anyhow::Error;

    fn try_from(raw: RawConfig) -> Result<Self> {
        Ok(Self {
            api_base_url: normalize_base(&raw.api_base_url)?,
            notification_ms: raw.notification_ms,
            request_timeout_secs: raw.request_timeout_secs.filter(|s| *s > 0),
        })
    }
}

/// Parse a base URL and make sure relative joins stay under it.
///
/// `Url::join("tasks/")` on `http://host/api` would replace `api`, so a
/// trailing slash is added when missing.
pub fn normalize_base(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    let url = Url::parse(&with_slash).with_context(|| format!("invalid api_base_url {:?}", raw))?;
    if url.cannot_be_a_base() {
        anyhow::bail!("api_base_url {:?} cannot be used as a base", raw);
    }
    Ok(url)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn get_config_dir() -> std::path::PathBuf {
    directories::ProjectDirs::from("com", "staff-console", "staff-console")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| std::path::PathBuf::from("."))
}

/// Load configuration: defaults, then `config.*` in the config dir, then
/// `STAFF_*` environment variables.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> Result<ConsoleConfig> {
    load_config_from(&get_config_dir().join("config").to_string_lossy())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_config_from(file_stem: &str) -> Result<ConsoleConfig> {
    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("api_base_url", DEFAULT_API_BASE_URL)?
        // Load from config file if it exists
        .add_source(::config::File::with_name(file_stem).required(false))
        // Override with environment variables (STAFF_API_BASE_URL, STAFF_NOTIFICATION_MS, etc.)
        .add_source(
            ::config::Environment::with_prefix("STAFF")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let raw: RawConfig = config.try_deserialize()?;
    raw.try_into()
}

/// Browser builds have no config file; the API root can be baked in at
/// build time with `STAFF_API_BASE_URL`.
#[cfg(target_arch = "wasm32")]
pub fn load_config() -> Result<ConsoleConfig> {
    let raw = RawConfig {
        api_base_url: option_env!("STAFF_API_BASE_URL")
            .map(str::to_string)
            .unwrap_or_else(default_api_base_url),
        notification_ms: default_notification_ms(),
        request_timeout_secs: None,
    };
    raw.try_into()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_normalize_adds_trailing_slash() {
        let url = normalize_base("http://localhost:8000/api").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/");
        assert_eq!(
            url.join("tasks/").unwrap().as_str(),
            "http://localhost:8000/api/tasks/"
        );
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        assert!(normalize_base("not a url").is_err());
        assert!(normalize_base("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_default_matches_backend_root() {
        let cfg = ConsoleConfig::default();
        assert_eq!(cfg.api_base_url.as_str(), DEFAULT_API_BASE_URL);
        assert_eq!(cfg.notification_ms, 6000);
        assert_eq!(cfg.request_timeout_secs, None);
    }

    #[test]
    #[serial]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let stem = dir.path().join("config");
        let cfg = load_config_from(&stem.to_string_lossy()).unwrap();
        assert_eq!(cfg, ConsoleConfig::default());
    }

    #[test]
    #[serial]
    fn test_file_values_are_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "api_base_url = \"https://hr.example.com/api\"").unwrap();
        writeln!(file, "notification_ms = 2500").unwrap();
        writeln!(file, "request_timeout_secs = 30").unwrap();

        let stem = dir.path().join("config");
        let cfg = load_config_from(&stem.to_string_lossy()).unwrap();
        assert_eq!(cfg.api_base_url.as_str(), "https://hr.example.com/api/");
        assert_eq!(cfg.notification_ms, 2500);
        assert_eq!(cfg.request_timeout_secs, Some(30));
    }

    #[test]
    #[serial]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let stem = dir.path().join("config");
        std::env::set_var("STAFF_NOTIFICATION_MS", "1200");
        let cfg = load_config_from(&stem.to_string_lossy());
        std::env::remove_var("STAFF_NOTIFICATION_MS");
        assert_eq!(cfg.unwrap().notification_ms, 1200);
    }
}
