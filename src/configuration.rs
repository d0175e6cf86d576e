use thiserror::Error;

const DEFAULT_ORIGINATOR: &str = "BeautyBird";
const DEFAULT_PORT: u16 = 3000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVariable(&'static str),

    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Configuration {
    pub access_key: String,
    pub country_code: String,
    pub originator: String,
    pub port: u16,
}

impl Configuration {
    pub fn from_env() -> Result<Self, ConfigError> {
        let access_key = required("MESSAGEBIRD_API_KEY")?;
        let country_code = required("COUNTRY_CODE")?;
        let originator =
            std::env::var("ORIGINATOR").unwrap_or_else(|_| DEFAULT_ORIGINATOR.to_string());
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            access_key,
            country_code,
            originator,
            port,
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVariable(name)),
    }
}
