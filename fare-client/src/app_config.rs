use std::env;

use fare_shared::{RenderMode, TripType};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub defaults: DefaultsConfig,
    pub form: FormConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    /// Whole-request timeout; a hung request becomes a query failure
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_timeout() -> u64 { 30 }

/// Values the filter controls start with
#[derive(Debug, Deserialize, Clone)]
pub struct DefaultsConfig {
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub trip_type: TripType,
    pub connections_min: u32,
    pub connections_max: u32,
    /// Upper bound of the connections slider
    pub connections_domain_max: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FormConfig {
    /// Send date, passenger and cabin parameters
    pub date_filters: bool,
    #[serde(default)]
    pub render: RenderMode,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Layered load from `dir`: built-in defaults, then `default`,
    /// `{RUN_MODE}` and `local` files (all optional), then `FARE__*`
    /// environment variables.
    pub fn load_from(dir: &str) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .set_default("api.base_url", "http://localhost:5000")?
            .set_default("api.timeout_seconds", default_timeout())?
            .set_default("defaults.origin", "PAR")?
            .set_default("defaults.destination", "LIS")?
            .set_default("defaults.trip_type", "RT")?
            .set_default("defaults.connections_min", 0)?
            .set_default("defaults.connections_max", 5)?
            .set_default("defaults.connections_domain_max", 5)?
            .set_default("form.date_filters", true)?
            .set_default("form.render", "chart")?
            .add_source(config::File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            // Eg.. `FARE__API__BASE_URL=http://fares:5000`
            .add_source(config::Environment::with_prefix("FARE").prefix_separator("__").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().to_str().unwrap()).unwrap();

        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.defaults.origin, "PAR");
        assert_eq!(config.defaults.destination, "LIS");
        assert_eq!(config.defaults.trip_type, TripType::RoundTrip);
        assert_eq!(config.defaults.connections_domain_max, 5);
        assert!(config.form.date_filters);
        assert_eq!(config.form.render, RenderMode::Chart);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("default.toml")).unwrap();
        writeln!(file, "[api]\nbase_url = \"http://fares.internal:8080\"\n").unwrap();
        writeln!(file, "[defaults]\norigin = \"AMS\"\ntrip_type = \"OW\"\nconnections_domain_max = 4\n").unwrap();
        writeln!(file, "[form]\ndate_filters = false\nrender = \"text\"").unwrap();

        let config = Config::load_from(dir.path().to_str().unwrap()).unwrap();

        assert_eq!(config.api.base_url, "http://fares.internal:8080");
        assert_eq!(config.defaults.origin, "AMS");
        assert_eq!(config.defaults.destination, "LIS");
        assert_eq!(config.defaults.trip_type, TripType::OneWay);
        assert_eq!(config.defaults.connections_domain_max, 4);
        assert!(!config.form.date_filters);
        assert_eq!(config.form.render, RenderMode::Text);
    }
}
