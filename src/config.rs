use std::{collections::HashMap, fmt, str::FromStr, time::Duration};

pub const DEFAULT_TIKWM_API_URL: &str = "https://www.tikwm.com/api/";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing {0}")]
    MissingKey(&'static str),
    #[error("Invalid {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Key/value view of the process environment, read once at startup.
#[derive(Clone, Debug, Default)]
pub struct SecretStore {
    secrets: HashMap<String, String>,
}

impl SecretStore {
    pub fn from_env() -> Self {
        Self {
            secrets: std::env::vars().collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.secrets
            .get(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SecretStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            secrets: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub telegram: TelegramConfig,
    pub tikwm: TikwmConfig,
    pub http: HttpConfig,
    pub language: Language,
}

#[derive(Clone)]
pub struct TelegramConfig {
    pub token: String,
    pub timeout: Duration,
}

// keep the token out of logs
impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("token", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct TikwmConfig {
    pub api_url: String,
    pub resolve_timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct HttpConfig {
    pub fetch_timeout: Duration,
    pub proxy_url: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Russian,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Russian => "ru",
        }
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Self::English),
            "ru" => Ok(Self::Russian),
            _ => Err(ConfigError::Invalid {
                key: "BOT_LANGUAGE",
                value: s.to_string(),
            }),
        }
    }
}

fn parse_secs(secret_store: &SecretStore, key: &'static str, default: u64) -> Result<Duration, ConfigError> {
    match secret_store.get(key) {
        Some(value) => value
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .ok_or(ConfigError::Invalid { key, value }),
        None => Ok(Duration::from_secs(default)),
    }
}

pub fn build_config(secret_store: &SecretStore) -> Result<AppConfig, ConfigError> {
    info!("Building AppConfig...");

    let config = AppConfig {
        telegram: TelegramConfig {
            token: secret_store
                .get("TELEGRAM_BOT_TOKEN")
                .ok_or(ConfigError::MissingKey("TELEGRAM_BOT_TOKEN"))?,
            timeout: parse_secs(secret_store, "TELEGRAM_TIMEOUT_SECS", 120)?,
        },
        tikwm: TikwmConfig {
            api_url: secret_store
                .get("TIKWM_API_URL")
                .unwrap_or_else(|| DEFAULT_TIKWM_API_URL.to_string()),
            resolve_timeout: parse_secs(secret_store, "RESOLVE_TIMEOUT_SECS", 30)?,
        },
        http: HttpConfig {
            fetch_timeout: parse_secs(secret_store, "FETCH_TIMEOUT_SECS", 60)?,
            proxy_url: secret_store.get("HTTP_PROXY_URL"),
        },
        language: secret_store
            .get("BOT_LANGUAGE")
            .map(|value| value.parse::<Language>())
            .transpose()?
            .unwrap_or_default(),
    };

    info!("AppConfig built: {:?}", config);

    Ok(config)
}
