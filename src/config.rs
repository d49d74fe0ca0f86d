use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub entity_name: String,
    pub generate_days: u32,
    pub log_level: String,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub schema: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        // Load .env if present
        let _ = dotenvy::dotenv();

        let entity_name =
            std::env::var("ENTITY_NAME").unwrap_or_else(|_| "smart_skid".to_string());
        let generate_days = std::env::var("GENERATE_DAYS")
            .unwrap_or_else(|_| "0".to_string())
            .parse::<u32>()
            .context("GENERATE_DAYS must be a non-negative integer")?;
        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/iot_analytics".to_string());
        let schema = std::env::var("DB_SCHEMA").ok();

        Ok(Self {
            entity_name,
            generate_days,
            log_level,
            database: DatabaseConfig { url, schema },
        })
    }
}
