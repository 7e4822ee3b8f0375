use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub scraper: ScraperSettings,
    pub output: OutputSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ScraperSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub request_timeout_secs: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub min_delay_secs: f64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_delay_secs: f64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_cards_per_page: usize,
}

#[derive(serde::Deserialize, Clone)]
pub struct OutputSettings {
    pub directory: String,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    let settings = config::Config::builder()
        .add_source(config::File::from(base_path.join("configuration.yaml")))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
