use std::str::FromStr;

use serde::Deserialize;
use strum::{Display, EnumString};

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub search: SearchSettings,
    pub metadata: MetadataSettings,
    pub triage: TriageSettings,
}

#[derive(Deserialize, Clone)]
pub struct SearchSettings {
    pub url: String,
}

#[derive(Deserialize, Clone)]
pub struct MetadataSettings {
    pub api_url: String,
    pub log_bucket_url: String,
}

#[derive(Deserialize, Clone)]
pub struct TriageSettings {
    /// How far back similarity lookups reach by default, in hours.
    pub lookback_hours: i64,
}

pub fn read_config() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let config_directory = base_path.join("config");

    let environment = Environment::from_str(
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .as_str(),
    )
    .expect("Failed to parse APP_ENVIRONMENT");
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")))
        .add_source(config::File::from(
            config_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("DRCI")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Display, Debug, EnumString)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}
