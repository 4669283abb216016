//! Console configuration.
//!
//! Settings come from, in increasing precedence: built-in defaults, the
//! `HOLMES_ADMIN_*` environment variables, command-line flags.

use std::path::PathBuf;

use crate::cli::RunOptions;
use crate::error::ConfigError;
use crate::i18n::is_valid_locale;
use crate::preview::DEFAULT_PREVIEW_PORT;

/// Server used when none is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8085";

pub const ENV_URL: &str = "HOLMES_ADMIN_URL";
pub const ENV_LOCALE: &str = "HOLMES_ADMIN_LOCALE";
pub const ENV_MESSAGES_DIR: &str = "HOLMES_ADMIN_MESSAGES_DIR";
pub const ENV_TEMPLATES_DIR: &str = "HOLMES_ADMIN_TEMPLATES_DIR";
pub const ENV_PREVIEW: &str = "HOLMES_ADMIN_PREVIEW";
pub const ENV_PREVIEW_PORT: &str = "HOLMES_ADMIN_PREVIEW_PORT";
pub const ENV_LOG_DIR: &str = "HOLMES_ADMIN_LOG_DIR";

/// Configuration of one console run.
///
/// # Example
///
/// ```
/// use holmes_admin::config::AdminConfig;
///
/// let config = AdminConfig::default()
///     .with_server_url("http://nas:8085/")
///     .unwrap()
///     .with_preview(false);
/// assert_eq!(config.server_url, "http://nas:8085");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// Base URL of the Holmes server, without trailing slash
    pub server_url: String,
    /// Locale of the message bundle overlay (None: English only)
    pub locale: Option<String>,
    /// Directory holding `messages_<locale>.properties`
    pub messages_dir: Option<PathBuf>,
    /// Directory of `*.html` templates overriding the built-in ones
    pub templates_dir: Option<PathBuf>,
    /// Start the preview server
    pub preview: bool,
    /// Preview server port (default: 3031)
    pub preview_port: u16,
    /// Open the preview page in a browser
    pub open_browser: bool,
    /// Log file directory (None: platform data directory)
    pub log_dir: Option<PathBuf>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            locale: None,
            messages_dir: None,
            templates_dir: None,
            preview: true,
            preview_port: DEFAULT_PREVIEW_PORT,
            open_browser: false,
            log_dir: None,
        }
    }
}

impl AdminConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server URL. Only absolute http(s) URLs are accepted.
    pub fn with_server_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.server_url = validate_server_url(ENV_URL, url)?;
        Ok(self)
    }

    /// Set the locale, e.g. `fr` or `fr_CA`.
    pub fn with_locale(mut self, locale: &str) -> Result<Self, ConfigError> {
        if !is_valid_locale(locale) {
            return Err(ConfigError::invalid(
                ENV_LOCALE,
                locale,
                "expected a tag such as fr or fr_CA",
            ));
        }
        self.locale = Some(locale.to_string());
        Ok(self)
    }

    pub fn with_messages_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.messages_dir = Some(dir.into());
        self
    }

    pub fn with_templates_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = Some(dir.into());
        self
    }

    pub fn with_preview(mut self, enabled: bool) -> Self {
        self.preview = enabled;
        self
    }

    pub fn with_preview_port(mut self, port: u16) -> Self {
        self.preview_port = port;
        self
    }

    pub fn with_open_browser(mut self, open: bool) -> Self {
        self.open_browser = open;
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Create config from the `HOLMES_ADMIN_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create config from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_URL) {
            config = config.with_server_url(&url)?;
        }
        if let Some(locale) = get(ENV_LOCALE) {
            config = config.with_locale(locale.trim())?;
        }
        if let Some(dir) = get(ENV_MESSAGES_DIR) {
            config = config.with_messages_dir(dir);
        }
        if let Some(dir) = get(ENV_TEMPLATES_DIR) {
            config = config.with_templates_dir(dir);
        }
        if let Some(flag) = get(ENV_PREVIEW) {
            config = config.with_preview(parse_switch(ENV_PREVIEW, &flag)?);
        }
        if let Some(port) = get(ENV_PREVIEW_PORT) {
            config = config.with_preview_port(parse_port(ENV_PREVIEW_PORT, &port)?);
        }
        if let Some(dir) = get(ENV_LOG_DIR) {
            config = config.with_log_dir(dir);
        }

        Ok(config)
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, options: &RunOptions) -> Result<Self, ConfigError> {
        if let Some(url) = &options.url {
            self.server_url = validate_server_url("--url", url)?;
        }
        if let Some(locale) = &options.locale {
            if !is_valid_locale(locale) {
                return Err(ConfigError::invalid(
                    "--locale",
                    locale,
                    "expected a tag such as fr or fr_CA",
                ));
            }
            self.locale = Some(locale.clone());
        }
        if options.no_preview {
            self.preview = false;
        }
        if let Some(port) = options.preview_port {
            self.preview_port = port;
        }
        if options.open {
            self.open_browser = true;
        }
        Ok(self)
    }

    /// Directory log files go to.
    pub fn log_directory(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("holmes-admin")
        })
    }
}

fn validate_server_url(name: &str, url: &str) -> Result<String, ConfigError> {
    let trimmed = url.trim().trim_end_matches('/');
    let parsed = reqwest::Url::parse(trimmed).map_err(|e| ConfigError::invalid(name, url, e))?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(ConfigError::invalid(
            name,
            url,
            format!("unsupported scheme '{}'", other),
        )),
    }
}

/// `0`/`false`/`off`/`no` disable, `1`/`true`/`on`/`yes` enable.
fn parse_switch(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "0" | "false" | "off" | "no" => Ok(false),
        "1" | "true" | "on" | "yes" => Ok(true),
        _ => Err(ConfigError::invalid(name, value, "expected 0 or 1")),
    }
}

fn parse_port(name: &str, value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|e| ConfigError::invalid(name, value, e))
}
