use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    pub request_timeout_secs: u64,
    pub max_redirects: usize,
    pub user_agent: String,
    pub referer: Option<String>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 15,
            max_redirects: 10,
            user_agent: "Mozilla/5.0".to_string(),
            referer: Some("https://www.pac-group.net/".to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file path; `None` logs to stdout only.
    pub file: Option<String>,
    pub level: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: Some("logs/itinerary.log".to_string()),
            level: Some("info".to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub fetcher: FetcherConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let explicit_path = std::env::var("CONFIG_FILE").ok();
        let config = if let Some(path) = explicit_path {
            let path = PathBuf::from(path);
            if !path.exists() {
                return Err(anyhow!("config file {:?} not found", path));
            }
            Self::load_from_file(&path)?
        } else {
            let path = locate_default_config();
            if let Some(path) = path {
                Self::load_from_file(&path)?
            } else {
                AppConfig::default()
            }
        };

        Self::apply_env_overrides(config)
    }

    fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {:?}", path))?;
        Self::from_yaml(&contents).with_context(|| format!("failed to parse config file {:?}", path))
    }

    fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        let config: AppConfig = serde_yaml::from_str(contents)?;
        Ok(config)
    }

    fn apply_env_overrides(mut config: AppConfig) -> anyhow::Result<AppConfig> {
        if let Ok(bind) = std::env::var("SERVER_BIND") {
            config.server.bind = bind;
        }

        if let Some(timeout) = parse_optional_env("FETCH_TIMEOUT_SECS")? {
            config.fetcher.request_timeout_secs = timeout;
        }

        if let Some(redirects) = parse_optional_env("FETCH_MAX_REDIRECTS")? {
            config.fetcher.max_redirects = redirects;
        }

        if let Ok(user_agent) = std::env::var("FETCH_USER_AGENT") {
            config.fetcher.user_agent = user_agent;
        }

        if let Ok(referer) = std::env::var("FETCH_REFERER") {
            config.fetcher.referer = Some(referer).filter(|value| !value.trim().is_empty());
        }

        if let Ok(log_file) = std::env::var("LOG_FILE_PATH") {
            config.logging.file = Some(log_file).filter(|path| !path.trim().is_empty());
        }

        if let Ok(log_level) = std::env::var("LOG_LEVEL") {
            config.logging.level = Some(log_level);
        }

        if config.fetcher.user_agent.trim().is_empty() {
            return Err(anyhow!(
                "fetcher user agent missing; set FETCH_USER_AGENT or fetcher.user_agent"
            ));
        }

        Ok(config)
    }
}

fn parse_optional_env<T>(key: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(v) => Ok(Some(
            v.parse::<T>()
                .with_context(|| format!("{key} must be a valid value"))?,
        )),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn locate_default_config() -> Option<PathBuf> {
    let path = PathBuf::from("config/config.yaml");
    path.exists().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_source_site() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert_eq!(config.fetcher.user_agent, "Mozilla/5.0");
        assert_eq!(
            config.fetcher.referer.as_deref(),
            Some("https://www.pac-group.net/")
        );
        assert_eq!(config.fetcher.request_timeout_secs, 15);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = AppConfig::from_yaml(
            "server:\n  bind: 0.0.0.0:9000\nfetcher:\n  request_timeout_secs: 30\n",
        )
        .unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.fetcher.request_timeout_secs, 30);
        assert_eq!(config.fetcher.max_redirects, 10);
        assert_eq!(config.logging.file.as_deref(), Some("logs/itinerary.log"));
    }

    #[test]
    fn file_logging_can_be_disabled() {
        let config = AppConfig::from_yaml("logging:\n  file: null\n  level: debug\n").unwrap();
        assert!(config.logging.file.is_none());
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
    }

    #[test]
    fn referer_can_be_disabled() {
        let config = AppConfig::from_yaml("fetcher:\n  referer: null\n").unwrap();
        assert!(config.fetcher.referer.is_none());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(AppConfig::from_yaml("fetcher:\n  request_timeout_secs: soon\n").is_err());
    }
}
