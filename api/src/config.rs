use std::env;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// HTTP listen port
    pub port: u16,
    /// Upper bound of the connection pool
    pub db_max_connections: u32,
    /// Create missing tables from the entity definitions at startup
    pub init_schema: bool,
    /// Load the reference catalog when the product table is empty
    pub seed_database: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: parse_var("PORT", 8080)?,
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", 10)?,
            init_schema: parse_flag("INIT_SCHEMA", true)?,
            seed_database: parse_flag("SEED_DATABASE", false)?,
        })
    }
}

fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{} has an invalid value: {}", name, value)),
        Err(_) => Ok(default),
    }
}

fn parse_flag(name: &str, default: bool) -> anyhow::Result<bool> {
    match env::var(name) {
        Ok(value) => parse_bool(&value)
            .with_context(|| format!("{} must be a boolean, got: {}", name, value)),
        Err(_) => Ok(default),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
