use serde::Deserialize;

pub mod api;
pub mod app;

/// Human-facing service name, shown by the info endpoint and Swagger UI.
pub const SERVICE_NAME: &str = "Canias Table Query API";

/// Process environment. Required variables fail startup with a descriptive
/// envy error instead of proceeding with empty credentials.
#[derive(Debug, Clone, Deserialize)]
pub struct Env {
    #[serde(default = "default_port")]
    pub port: u16,

    pub pguser: String,
    pub pgpassword: String,
    pub postgres_host: String,
    pub pgdatabase: String,
    #[serde(default = "default_pg_port")]
    pub pgport: u16,
    #[serde(default = "default_require_ssl")]
    pub pg_require_ssl: bool,
    #[serde(default = "default_connect_timeout")]
    pub database_connect_timeout: u64,

    /// Comma-separated list of queryable table names.
    pub allowed_tables: String,
}

fn default_port() -> u16 {
    8080
}

fn default_pg_port() -> u16 {
    5432
}

fn default_require_ssl() -> bool {
    true
}

fn default_connect_timeout() -> u64 {
    5
}
