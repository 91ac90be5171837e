use sqlx::{
    Pool, Postgres,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use std::fmt;

pub type ConnectionPool = Pool<Postgres>;

/// Connection components of the relational store.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Components are handed to the driver as-is, so credentials never need
    /// URL escaping.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(config: &DatabaseConfig) -> anyhow::Result<ConnectionPool> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(config.connect_options())
            .await
            .map_err(|err| anyhow::anyhow!("Failed to create database connection pool: {}", err))?;

        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DatabaseConfig {
        DatabaseConfig {
            host: "db".into(),
            port: 5433,
            username: "catalog".into(),
            password: "secret".into(),
            database: "catalog".into(),
            max_connections: 5,
        }
    }

    #[test]
    fn connect_options_carry_components() {
        let options = config().connect_options();
        assert_eq!(options.get_host(), "db");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_username(), "catalog");
        assert_eq!(options.get_database(), Some("catalog"));
    }

    #[test]
    fn reserved_characters_in_password_keep_host_and_database() {
        let config = DatabaseConfig {
            password: "p@ss/w#rd:1".into(),
            ..config()
        };
        let options = config.connect_options();
        assert_eq!(options.get_host(), "db");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_database(), Some("catalog"));
    }

    #[test]
    fn debug_masks_password() {
        let printed = format!("{:?}", config());
        assert!(!printed.contains("secret"));
    }
}
