//! # Storefront Configuration
//!
//! Endpoints, credentials and storage locations, injected at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_SEARCH_KEY=...                                          │
//! │     STOREFRONT_EMAIL_PUBLIC_KEY=...                                    │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │     ~/Library/Application Support/com.storefront.shop/... (macOS)      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Public endpoints, empty credentials                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Credentials never live in source. With empty credentials the
//! storefront still runs; searches and contact submissions fail and are
//! logged.
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! name = "Corner Shop"
//! currency_symbol = "₹"
//!
//! [search]
//! base_url = "https://api.unsplash.com"
//! access_key = "..."
//! per_page = 10
//!
//! [email]
//! endpoint = "https://api.emailjs.com/api/v1.0/email/send"
//! service_id = "service_x"
//! template_id = "template_y"
//! public_key = "..."
//!
//! [session]
//! dir = "/tmp/storefront-sessions"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ServiceError, ServiceResult};

// =============================================================================
// Store Settings
// =============================================================================

/// Display settings for the storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_store_name")]
    pub name: String,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_store_name() -> String {
    "Storefront".to_string()
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: default_store_name(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

// =============================================================================
// Search Settings
// =============================================================================

/// Image-search API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_search_url")]
    pub base_url: String,

    /// Access credential sent as `client_id`.
    #[serde(default)]
    pub access_key: String,

    /// Results requested per query.
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_search_url() -> String {
    "https://api.unsplash.com".to_string()
}

fn default_per_page() -> u32 {
    10
}

fn default_timeout() -> u64 {
    10
}

impl Default for SearchSettings {
    fn default() -> Self {
        SearchSettings {
            base_url: default_search_url(),
            access_key: String::new(),
            per_page: default_per_page(),
            timeout_secs: default_timeout(),
        }
    }
}

// =============================================================================
// Email Settings
// =============================================================================

/// Email-delivery API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailSettings {
    #[serde(default = "default_email_endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub service_id: String,

    #[serde(default)]
    pub template_id: String,

    /// Access credential sent as `user_id`.
    #[serde(default)]
    pub public_key: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_email_endpoint() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".to_string()
}

impl Default for EmailSettings {
    fn default() -> Self {
        EmailSettings {
            endpoint: default_email_endpoint(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

// =============================================================================
// Session Settings
// =============================================================================

/// Where file-backed sessions are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Session directory. `None` falls back to the platform cache dir.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub search: SearchSettings,

    #[serde(default)]
    pub email: EmailSettings,

    #[serde(default)]
    pub session: SessionSettings,
}

impl StorefrontConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ServiceResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|e| ServiceError::ConfigLoadFailed(e.to_string()))?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ServiceResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ServiceError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ServiceError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| ServiceError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Storefront config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ServiceResult<()> {
        check_http_url("search.base_url", &self.search.base_url)?;
        check_http_url("email.endpoint", &self.email.endpoint)?;

        if self.search.per_page == 0 {
            return Err(ServiceError::InvalidConfig(
                "search.per_page must be greater than 0".into(),
            ));
        }

        if self.search.timeout_secs == 0 || self.email.timeout_secs == 0 {
            return Err(ServiceError::InvalidConfig(
                "timeouts must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Names the credentials that are still empty, for a startup warning.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.search.access_key.is_empty() {
            missing.push("search.access_key");
        }
        if self.email.service_id.is_empty() {
            missing.push("email.service_id");
        }
        if self.email.template_id.is_empty() {
            missing.push("email.template_id");
        }
        if self.email.public_key.is_empty() {
            missing.push("email.public_key");
        }
        missing
    }

    /// Applies `STOREFRONT_*` overrides using the given variable lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("STOREFRONT_SEARCH_URL") {
            debug!(url = %url, "Overriding search URL from environment");
            self.search.base_url = url;
        }

        if let Some(key) = lookup("STOREFRONT_SEARCH_KEY") {
            self.search.access_key = key;
        }

        if let Some(per_page) = lookup("STOREFRONT_SEARCH_PER_PAGE") {
            match per_page.parse::<u32>() {
                Ok(n) => self.search.per_page = n,
                Err(_) => warn!(value = %per_page, "Ignoring invalid STOREFRONT_SEARCH_PER_PAGE"),
            }
        }

        if let Some(url) = lookup("STOREFRONT_EMAIL_URL") {
            debug!(url = %url, "Overriding email endpoint from environment");
            self.email.endpoint = url;
        }

        if let Some(id) = lookup("STOREFRONT_EMAIL_SERVICE_ID") {
            self.email.service_id = id;
        }

        if let Some(id) = lookup("STOREFRONT_EMAIL_TEMPLATE_ID") {
            self.email.template_id = id;
        }

        if let Some(key) = lookup("STOREFRONT_EMAIL_PUBLIC_KEY") {
            self.email.public_key = key;
        }

        if let Some(dir) = lookup("STOREFRONT_SESSION_DIR") {
            self.session.dir = Some(PathBuf::from(dir));
        }
    }

    /// Session directory: configured value or the platform cache dir.
    pub fn session_dir(&self) -> Option<PathBuf> {
        self.session.dir.clone().or_else(|| {
            directories::ProjectDirs::from("com", "storefront", "shop")
                .map(|dirs| dirs.cache_dir().join("sessions"))
        })
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "shop")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}

fn check_http_url(field: &str, value: &str) -> ServiceResult<()> {
    let url = Url::parse(value)
        .map_err(|e| ServiceError::InvalidUrl(format!("{}: {} ({})", field, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ServiceError::InvalidUrl(format!(
            "{} must start with http:// or https://, got: {}",
            field, value
        )));
    }

    Ok(())
}
