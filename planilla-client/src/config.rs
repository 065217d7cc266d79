//! Client configuration
//!
//! The backend URL and database tag depend only on the hostname the client
//! runs under: `localhost` selects development, anything else production.
//! [`ClientConfig::global`] fixes that choice for the process lifetime.
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | PLANILLA_HOSTNAME | `$HOSTNAME`, else `localhost` | Host used for environment selection |
//! | PLANILLA_DEV_API_URL | [`DEV_BASE_URL`] | Development backend |
//! | PLANILLA_PROD_API_URL | [`PROD_BASE_URL`] | Production backend |
//! | PLANILLA_DEV_DATABASE | [`DEV_DATABASE`] | Database tag sent by grids in development |
//! | PLANILLA_PROD_DATABASE | [`PROD_DATABASE`] | Database tag sent by grids in production |
//! | PLANILLA_REQUEST_TIMEOUT_SECS | unset (no timeout) | Per-request timeout |
//! | PLANILLA_LOG_LEVEL | info | Log level for [`crate::logger`] |
//! | PLANILLA_LOG_DIR | unset | Directory for daily log files |

use std::sync::OnceLock;
use std::time::Duration;

use shared::CommonRequestData;

use crate::credentials::CredentialSource;
use crate::error::ClientResult;
use crate::transport::NetworkApiClient;

pub const DEV_BASE_URL: &str = "http://localhost:4000/api";
pub const PROD_BASE_URL: &str = "https://api.gestorplanillas.com/api";
pub const DEV_DATABASE: &str = "planilla_dev";
pub const PROD_DATABASE: &str = "planilla_prod";

/// Hostname that selects the development backend
pub const DEVELOPMENT_HOST: &str = "localhost";

static GLOBAL: OnceLock<ClientConfig> = OnceLock::new();

/// Deployment the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Select the environment from the runtime hostname
    pub fn from_hostname(hostname: &str) -> Self {
        if hostname == DEVELOPMENT_HOST {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    pub const fn default_base_url(&self) -> &'static str {
        match self {
            Environment::Development => DEV_BASE_URL,
            Environment::Production => PROD_BASE_URL,
        }
    }

    pub const fn default_database(&self) -> &'static str {
        match self {
            Environment::Development => DEV_DATABASE,
            Environment::Production => PROD_DATABASE,
        }
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Selected environment
    pub environment: Environment,

    /// Backend base URL (e.g., "http://localhost:4000/api")
    pub base_url: String,

    /// Database tag sent with every grid request
    pub database: String,

    /// Request timeout in seconds; `None` waits indefinitely
    pub timeout: Option<u64>,

    /// Log level for the subscriber
    pub log_level: String,

    /// Directory for rolling log files
    pub log_dir: Option<String>,
}

impl ClientConfig {
    /// Configuration for the environment a hostname selects
    pub fn for_hostname(hostname: &str) -> Self {
        Self::for_environment(Environment::from_hostname(hostname))
    }

    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            base_url: environment.default_base_url().to_string(),
            database: environment.default_database().to_string(),
            timeout: None,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }

    /// Load configuration from the process environment (and `.env`)
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let hostname = std::env::var("PLANILLA_HOSTNAME")
            .or_else(|_| std::env::var("HOSTNAME"))
            .unwrap_or_else(|_| DEVELOPMENT_HOST.into());
        let mut config = Self::for_hostname(&hostname);

        let (url_var, db_var) = match config.environment {
            Environment::Development => ("PLANILLA_DEV_API_URL", "PLANILLA_DEV_DATABASE"),
            Environment::Production => ("PLANILLA_PROD_API_URL", "PLANILLA_PROD_DATABASE"),
        };
        if let Ok(url) = std::env::var(url_var) {
            config.base_url = url;
        }
        if let Ok(db) = std::env::var(db_var) {
            config.database = db;
        }
        config.timeout = std::env::var("PLANILLA_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok());
        if let Ok(level) = std::env::var("PLANILLA_LOG_LEVEL") {
            config.log_level = level;
        }
        config.log_dir = std::env::var("PLANILLA_LOG_DIR").ok();

        tracing::debug!(
            hostname = %hostname,
            environment = ?config.environment,
            base_url = %config.base_url,
            "Client configuration loaded"
        );
        config
    }

    /// Process-wide configuration, read from the environment on first use
    pub fn global() -> &'static ClientConfig {
        GLOBAL.get_or_init(Self::from_env)
    }

    /// Set the backend base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the database tag
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<String>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    /// Static fields every grid request carries
    pub fn common_request_data(&self) -> CommonRequestData {
        CommonRequestData::new(self.database.clone())
    }

    /// Create a network API client from this configuration
    pub fn build_api_client<C>(&self, credentials: C) -> ClientResult<NetworkApiClient>
    where
        C: CredentialSource + 'static,
    {
        NetworkApiClient::new(self, credentials)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_environment(Environment::Development)
    }
}
