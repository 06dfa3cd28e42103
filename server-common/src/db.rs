use std::time::Duration;

use sqlx::{
    postgres::{PgConnectOptions, PgSslMode},
    Connection as _, PgConnection,
};

/// Connection parameters for a single short-lived Postgres session.
/// There is no pool here: callers open one connection, run their statement
/// and close it again.
#[derive(Clone)]
pub struct DbConnectConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub require_ssl: bool,
    pub connect_timeout: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("connection to {host}:{port} timed out after {timeout:?}")]
    Timeout {
        host: String,
        port: u16,
        timeout: Duration,
    },

    #[error(transparent)]
    Connect(#[from] sqlx::Error),
}

impl DbConnectConfig {
    fn options(&self) -> PgConnectOptions {
        let ssl_mode = if self.require_ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Prefer
        };
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
            .ssl_mode(ssl_mode)
    }

    /// Opens a fresh connection, bounding the connect phase by
    /// `connect_timeout`. Statement execution is not bounded here.
    pub async fn connect(&self) -> Result<PgConnection, ConnectError> {
        tokio::time::timeout(self.connect_timeout, PgConnection::connect_with(&self.options()))
            .await
            .map_err(|_| ConnectError::Timeout {
                host: self.host.clone(),
                port: self.port,
                timeout: self.connect_timeout,
            })?
            .map_err(ConnectError::Connect)
    }
}
