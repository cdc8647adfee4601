use std::env;
use anyhow::{bail, Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub enable_docs: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let enable_docs = match env::var("SERVICE_ENABLE_DOCS") {
            Ok(raw) => parse_flag(&raw).context("SERVICE_ENABLE_DOCS must be true, false, 1 or 0")?,
            Err(_) => false,
        };

        Ok(Config {
            service_port,
            service_host,
            enable_docs,
        })
    }

    /// `host:port` string to bind the listener to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}", self.bind_addr());
        tracing::info!("  OpenAPI docs: {}", if self.enable_docs { "enabled" } else { "disabled" });
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => bail!("invalid boolean flag '{}'", other),
    }
}
