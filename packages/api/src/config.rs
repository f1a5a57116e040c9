use std::fmt;

pub const DEFAULT_WEB3FORMS_ENDPOINT: &str = "https://api.web3forms.com/submit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_MODE").unwrap_or_default())
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

/// Where submitted leads go.
#[derive(Clone, PartialEq, Eq)]
pub enum LeadRelayConfig {
    /// POST to the Web3Forms relay. A missing key is not a startup error:
    /// the site still serves, and submissions report "not configured".
    Web3Forms {
        endpoint: String,
        access_key: Option<String>,
    },
    /// Print leads to stdout (local mode).
    Console,
}

impl fmt::Debug for LeadRelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeadRelayConfig::Web3Forms {
                endpoint,
                access_key,
            } => f
                .debug_struct("Web3Forms")
                .field("endpoint", endpoint)
                .field("access_key", &access_key.as_ref().map(|_| "***"))
                .finish(),
            LeadRelayConfig::Console => f.write_str("Console"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: AppMode,
    pub leads: LeadRelayConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidEndpoint(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidEndpoint(value) => {
                write!(f, "WEB3FORMS_ENDPOINT must be an http(s) URL, got {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| var(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mode = AppMode::parse(&get("APP_MODE").unwrap_or_default());
        let access_key = get("WEB3FORMS_KEY");

        // Local mode only talks to the real relay when a key is provided.
        let leads = if mode == AppMode::Local && access_key.is_none() {
            LeadRelayConfig::Console
        } else {
            let endpoint =
                get("WEB3FORMS_ENDPOINT").unwrap_or_else(|| DEFAULT_WEB3FORMS_ENDPOINT.to_string());
            if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
                return Err(ConfigError::InvalidEndpoint(endpoint));
            }
            LeadRelayConfig::Web3Forms {
                endpoint,
                access_key,
            }
        };

        Ok(AppConfig { mode, leads })
    }
}

/// Load `.env` if present. Missing file is fine.
#[cfg(feature = "server")]
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("config.load_dotenv: loaded {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => eprintln!("startup: WARNING failed to read .env: {e}"),
    }
}
