use crate::abstract_trait::notification::ProviderKind;
use shared::{config::DatabaseConfig, errors::ConfigError};

const DEFAULT_HTTP_PORT: u16 = 8080;
const DEFAULT_POSTGRES_HOST: &str = "localhost";
const DEFAULT_POSTGRES_PORT: u16 = 5432;
const DEFAULT_DB_MAX_CONN: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    /// Public base used for seller self links, without a trailing slash.
    pub base_url: String,
    pub database: DatabaseConfig,
    pub notification_provider: ProviderKind,
    pub is_dev: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let http_port = match get("HTTP_PORT") {
            Some(v) => parse_number("HTTP_PORT", &v)?,
            None => DEFAULT_HTTP_PORT,
        };

        let base_url = get("BASE_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("http://localhost:{http_port}"));

        let database = DatabaseConfig {
            host: get("POSTGRES_HOST").unwrap_or_else(|| DEFAULT_POSTGRES_HOST.to_string()),
            port: match get("POSTGRES_PORT") {
                Some(v) => parse_number("POSTGRES_PORT", &v)?,
                None => DEFAULT_POSTGRES_PORT,
            },
            username: get("POSTGRES_USER").ok_or(ConfigError::Missing("POSTGRES_USER"))?,
            password: get("POSTGRES_PASSWORD").ok_or(ConfigError::Missing("POSTGRES_PASSWORD"))?,
            database: get("POSTGRES_DB").ok_or(ConfigError::Missing("POSTGRES_DB"))?,
            max_connections: match get("DB_MAX_CONN") {
                Some(v) => parse_number("DB_MAX_CONN", &v)?,
                None => DEFAULT_DB_MAX_CONN,
            },
        };

        let notification_provider = match get("NOTI_PROVIDER_TYPE") {
            Some(v) => v.parse::<ProviderKind>()?,
            None => ProviderKind::Email,
        };

        Ok(Self {
            http_port,
            base_url,
            database,
            notification_provider,
            is_dev: get("DEV_MODE").is_some_and(|v| is_truthy(&v)),
            enable_file_log: get("ENABLE_FILE_LOG").is_some_and(|v| is_truthy(&v)),
        })
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim(), "true" | "1")
}
