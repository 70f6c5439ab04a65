use std::collections::HashMap;
use std::{fs, path::Path};

use dotenv::dotenv;
use envsubst::substitute;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

impl Config {
    /// Loads configuration from a YAML file, interpolating `SERVER_*` and
    /// `DATABASE_*` environment variables into it (a `.env` file is honored
    /// first). Missing `SERVER_PORT` falls back to 5000. A missing
    /// `DATABASE_URI` leaves its placeholder in the file untouched, which
    /// [`DatabaseConfig::uri_is_set`] reports and `main` treats as fatal.
    pub fn from_yaml(path: impl AsRef<Path>) -> Self {
        dotenv().ok();

        let file_content = fs::read_to_string(path.as_ref()).unwrap_or_else(|e| {
            panic!("failed to read config file {}: {e}", path.as_ref().display())
        });

        let mut env_vars: HashMap<String, String> = std::env::vars()
            .filter(|(key, value)| {
                !value.is_empty() && (key.starts_with("SERVER_") || key.starts_with("DATABASE_"))
            })
            .collect();
        env_vars
            .entry("SERVER_PORT".to_string())
            .or_insert_with(|| "5000".to_string());

        let interpolated = substitute(&file_content, &env_vars)
            .expect("failed to substitute environment variables in YAML");

        serde_yaml::from_str(&interpolated).expect("failed to parse YAML configuration")
    }

    pub fn server_uri(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub uri: String,
    pub name: String,
}

impl DatabaseConfig {
    /// False when `DATABASE_URI` was absent from the environment and the
    /// `${DATABASE_URI}` placeholder survived interpolation untouched.
    pub fn uri_is_set(&self) -> bool {
        !self.uri.is_empty() && !self.uri.starts_with("${")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub challenge_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial_test::serial]
    fn test_load_config_from_yaml() {
        // Keep ambient env out of the assertion.
        unsafe {
            std::env::remove_var("SERVER_PORT");
            std::env::remove_var("DATABASE_URI");
        }

        let config = Config::from_yaml("config/test.yaml");

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.name, "regrant-test");
        assert_eq!(config.auth.challenge_message, "Welcome to Regrant");

        // No DATABASE_URI in the environment means no connection string.
        assert!(!config.database.uri_is_set());
    }

    #[test]
    #[serial_test::serial]
    fn test_config_with_env_vars() {
        unsafe {
            std::env::set_var("SERVER_PORT", "9000");
            std::env::set_var("DATABASE_URI", "mongodb://localhost:27017");
        }

        let config = Config::from_yaml("config/test.yaml");

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server_uri(), "127.0.0.1:9000");
        assert_eq!(config.database.uri, "mongodb://localhost:27017");

        unsafe {
            std::env::remove_var("SERVER_PORT");
            std::env::remove_var("DATABASE_URI");
        }
    }
}
