use std::time::Duration;

use chrono::NaiveDate;
use fare_chart::{ResultRenderer, ResultView};
use fare_client::app_config::{DefaultsConfig, FormConfig};
use fare_client::{Config, HttpFareApi};
use fare_core::{FilterState, RangeSelector};

pub mod app;
pub mod cli;
pub mod controller;
pub mod error;
pub mod terminal;

pub use app::FareApp;
pub use controller::{SearchController, SearchOutcome};
pub use error::AppError;
pub use terminal::TerminalView;

/// Initial filter state from configured defaults. The route itself is
/// applied later, once city suggestions have loaded.
pub fn initial_filter(
    defaults: &DefaultsConfig,
    form: &FormConfig,
    today: NaiveDate,
) -> Result<FilterState, AppError> {
    let connections = RangeSelector::new(0..=defaults.connections_domain_max)?
        .with_start(defaults.connections_min, defaults.connections_max);

    let mut filter = FilterState::new(connections);
    filter.trip_type = defaults.trip_type;
    if form.date_filters {
        filter = filter.with_date_filters(today);
    }
    Ok(filter)
}

pub fn api(config: &Config) -> Result<HttpFareApi, AppError> {
    let timeout = Duration::from_secs(config.api.timeout_seconds);
    Ok(HttpFareApi::new(&config.api.base_url, timeout)?)
}

/// Wire the form to the HTTP API described by `config`.
pub fn app<V: ResultView>(
    config: &Config,
    view: V,
    today: NaiveDate,
) -> Result<FareApp<HttpFareApi, V>, AppError> {
    let filter = initial_filter(&config.defaults, &config.form, today)?;
    let controller = SearchController::new(api(config)?, view, ResultRenderer::new(config.form.render));

    Ok(FareApp::new(
        controller,
        filter,
        &config.defaults.origin,
        &config.defaults.destination,
    ))
}
