use serde::{Deserialize, Serialize};

use std::{env, fs, path::Path};

const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const EXAMPLE_CONFIG_PATH: &str = "config.example.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub pg_dsn: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed origins, empty means any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },

    #[error("{0} environment variable is required")]
    MissingVar(&'static str),

    #[error("failed to parse {name}: {value}")]
    InvalidVar { name: &'static str, value: String },
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8000
}

impl Config {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn from_yaml(path: &str, contents: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Builds the config from variables resolved through `lookup`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let pg_dsn = lookup("PG_DSN").ok_or(ConfigError::MissingVar("PG_DSN"))?;

        let host = lookup("HOST").unwrap_or_else(default_host);

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidVar { name: "PORT", value })?,
            None => default_port(),
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        Ok(Self {
            pg_dsn,
            host,
            port,
            cors_origins,
        })
    }
}

fn read_file(path: &str) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    Config::from_yaml(path, &contents)
}

/// Resolution order: the file named by `NOTEFUL_CONFIG` (default
/// `config.yaml`), then `config.example.yaml`, then environment variables.
pub fn load_config() -> Result<Config, ConfigError> {
    let config_path =
        env::var("NOTEFUL_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    if Path::new(&config_path).exists() {
        return read_file(&config_path);
    }

    if Path::new(EXAMPLE_CONFIG_PATH).exists() {
        tracing::warn!(
            "Config file '{}' not found, falling back to '{}'\
             \n This file should not be used and should be replaced with actual data",
            config_path,
            EXAMPLE_CONFIG_PATH
        );
        return read_file(EXAMPLE_CONFIG_PATH);
    }

    tracing::info!(
        "No config file found, attempting to load configuration from environment variables"
    );
    Config::from_vars(|name| env::var(name).ok())
}
