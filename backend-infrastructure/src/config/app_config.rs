use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::RuntimeConfig;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub catalog_path: String,
    /// Fixed seed for the loot generator; entropy-seeded when unset.
    pub rng_seed: Option<u64>,
    pub history_default_limit: usize,
    pub history_max_limit: usize,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub log_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3234".to_string(),
            api_token: None,
            catalog_path: "./catalog.yaml".to_string(),
            rng_seed: None,
            history_default_limit: 10,
            history_max_limit: 100,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
            log_dir: None,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("RIFTWALK_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        Self::load_from(&path).await
    }

    pub async fn load_from(path: &str) -> Result<Self> {
        let file_path = Path::new(path);
        let base_dir = file_path.parent();
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            Self::from_toml(&content)?
        } else {
            warn!("{} not found, using defaults", path);
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| anyhow!("invalid config: {}", err))
    }

    pub fn normalize(&mut self) {
        if let Some(api_token) = &self.api_token {
            if api_token.trim().is_empty() {
                self.api_token = None;
            }
        }
        if let Some(log_dir) = &self.log_dir {
            if log_dir.trim().is_empty() {
                self.log_dir = None;
            }
        }
        self.catalog_path = self.catalog_path.trim().to_string();
        if self.history_max_limit > 0 && self.history_default_limit > self.history_max_limit {
            self.history_default_limit = self.history_max_limit;
        }
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.catalog_path = resolve_path(base, &self.catalog_path);
        if let Some(log_dir) = &self.log_dir {
            self.log_dir = Some(resolve_path(base, log_dir));
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.catalog_path.is_empty() {
            return Err(anyhow!("catalog_path must not be empty"));
        }
        if self.history_default_limit == 0 || self.history_max_limit == 0 {
            return Err(anyhow!("history limits must be greater than 0"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            catalog_path: self.catalog_path.clone(),
            history_default_limit: self.history_default_limit,
            history_max_limit: self.history_max_limit,
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("RIFTWALK_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("RIFTWALK_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Ok(value) = env::var("RIFTWALK_CATALOG_PATH") {
            self.catalog_path = value;
        }
        if let Ok(value) = env::var("RIFTWALK_RNG_SEED") {
            self.rng_seed = value.parse().ok();
        }
        if let Ok(value) = env::var("RIFTWALK_HISTORY_DEFAULT_LIMIT") {
            self.history_default_limit = value.parse().unwrap_or(self.history_default_limit);
        }
        if let Ok(value) = env::var("RIFTWALK_HISTORY_MAX_LIMIT") {
            self.history_max_limit = value.parse().unwrap_or(self.history_max_limit);
        }
        if let Ok(value) = env::var("RIFTWALK_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("RIFTWALK_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Ok(value) = env::var("RIFTWALK_LOG_DIR") {
            self.log_dir = Some(value);
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
bind_addr = "0.0.0.0:8080"
rng_seed = 42
"#,
        )
        .expect("parse");
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.history_default_limit, 10);
        assert_eq!(config.catalog_path, "./catalog.yaml");
        config.validate().expect("valid");
    }

    #[test]
    fn normalize_drops_blank_optionals() {
        let mut config = AppConfig {
            api_token: Some("   ".to_string()),
            log_dir: Some(String::new()),
            history_default_limit: 500,
            ..AppConfig::default()
        };
        config.normalize();
        assert!(config.api_token.is_none());
        assert!(config.log_dir.is_none());
        assert_eq!(config.history_default_limit, 100);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let bad_addr = AppConfig {
            bind_addr: "not-an-addr".to_string(),
            ..AppConfig::default()
        };
        assert!(bad_addr.validate().is_err());

        let zero_limit = AppConfig {
            history_max_limit: 0,
            ..AppConfig::default()
        };
        assert!(zero_limit.validate().is_err());

        let no_catalog = AppConfig {
            catalog_path: String::new(),
            ..AppConfig::default()
        };
        assert!(no_catalog.validate().is_err());
    }

    #[test]
    fn relative_paths_follow_config_dir() {
        let mut config = AppConfig {
            catalog_path: "catalog.yaml".to_string(),
            log_dir: Some("/var/log/riftwalk".to_string()),
            ..AppConfig::default()
        };
        config.resolve_paths(Some(Path::new("/etc/riftwalk")));
        assert_eq!(config.catalog_path, "/etc/riftwalk/catalog.yaml");
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/riftwalk"));
    }
}
