use std::env;

// Local file-based store for zero-config operation; created on first connect.
const DEFAULT_DATABASE_URL: &str = "sqlite://mergington.db?mode=rwc";

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "debug".into());

        Self {
            database_url,
            bind_addr,
            rust_log,
        }
    }
}
