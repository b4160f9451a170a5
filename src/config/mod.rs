use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SessionConfig {
    pub token: Option<String>,
    pub display_name: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RefreshConfig {
    pub insights_secs: u64,
    pub schedule_secs: u64,
    pub announcements_secs: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            insights_secs: 15,
            schedule_secs: 15,
            announcements_secs: 30,
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default values
            .set_default("api.base_url", "http://localhost:8000")?
            .set_default("api.timeout_secs", 10)?
            .set_default("refresh.insights_secs", 15)?
            .set_default("refresh.schedule_secs", 15)?
            .set_default("refresh.announcements_secs", 30)?
            // Add config file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (with CLASSTRACK__ prefix, double underscore separates levels)
            .add_source(Environment::with_prefix("CLASSTRACK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8000".to_string(),
                timeout_secs: 10,
            },
            session: SessionConfig::default(),
            refresh: RefreshConfig::default(),
        }
    }
}
