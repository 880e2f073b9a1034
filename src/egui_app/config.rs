//! Configuration management for the desktop client.
//!
//! One endpoint set is active at a time, selected by environment:
//! `COREQUARRY_ENV=staging` switches to the staging deployment, and
//! `COREQUARRY_API_URL` overrides the base URL outright (useful when
//! pointing the app at a local service).

/// Production account service URL
const PRODUCTION_BASE_URL: &str = "https://corequarry-core-service.vercel.app";

/// Staging account service URL
const STAGING_BASE_URL: &str = "https://mekarjs-erp-core-service.yogawanadityapratama.com";

/// Deployment the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Production,
    Staging,
}

impl Environment {
    /// Read the environment from `COREQUARRY_ENV`; anything other than
    /// `staging` means production.
    pub fn from_env() -> Self {
        match std::env::var("COREQUARRY_ENV").as_deref() {
            Ok("staging") => Self::Staging,
            _ => Self::Production,
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_BASE_URL,
            Self::Staging => STAGING_BASE_URL,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        let base_url = std::env::var("COREQUARRY_API_URL")
            .unwrap_or_else(|_| Environment::from_env().base_url().to_string());
        Self { base_url }
    }
}

impl Config {
    /// Create a new configuration from the process environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration pointing at an explicit base URL.
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Base URL of the account service.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an API endpoint path.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
