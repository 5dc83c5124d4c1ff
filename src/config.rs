use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

/// Runtime configuration for the pipeline core.
///
/// Every network-facing setting is optional so the core can run fully
/// offline: without `BACKEND_BASE_URL` mutations are applied locally only,
/// and without `NOTIFY_GATEWAY_URL` notifications go to the console channel.
#[derive(Debug, Clone)]
pub struct Config {
    pub company_name: String,
    pub backend_base_url: Option<String>,
    pub api_token: Option<String>,
    pub notify_gateway_url: Option<String>,
    pub http_timeout_secs: u64,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            company_name: env::var("COMPANY_NAME")
                .unwrap_or_else(|_| "CareersAdmin".to_string()),
            backend_base_url: get_env_opt("BACKEND_BASE_URL"),
            api_token: get_env_opt("API_TOKEN"),
            notify_gateway_url: get_env_opt("NOTIFY_GATEWAY_URL"),
            http_timeout_secs: get_env_parse_or("HTTP_TIMEOUT_SECS", 10)?,
        })
    }
}

fn get_env_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match get_env_opt(name) {
        Some(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        None => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
