use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use fare_core::dates::parse_iso_date;
use fare_core::{CoreResult, DateRangeSelector, FilterState, Handle};
use fare_shared::RenderMode;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "fare-explorer", version, about = "Median flight prices by advance purchase")]
pub struct Cli {
    /// Directory holding default.toml and its overrides
    #[arg(long, global = true, default_value = "config")]
    pub config_dir: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List known origin and destination codes
    Cities(CitiesArgs),
    /// Run the start-up search with optional filter overrides
    Search(SearchArgs),
}

#[derive(Args, Debug, Default)]
pub struct CitiesArgs {
    /// Only codes starting with this prefix
    #[arg(long)]
    pub prefix: Option<String>,

    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum RenderArg {
    Text,
    Chart,
}

impl From<RenderArg> for RenderMode {
    fn from(arg: RenderArg) -> Self {
        match arg {
            RenderArg::Text => RenderMode::Text,
            RenderArg::Chart => RenderMode::Chart,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    #[arg(long)]
    pub origin: Option<String>,

    #[arg(long)]
    pub destination: Option<String>,

    /// As labelled in the form: "One way" selects one-way fares,
    /// anything else round trips
    #[arg(long)]
    pub trip_type: Option<String>,

    #[arg(long)]
    pub connections_min: Option<f64>,

    #[arg(long)]
    pub connections_max: Option<f64>,

    #[arg(long, value_parser = parse_date)]
    pub search_from: Option<NaiveDate>,

    #[arg(long, value_parser = parse_date)]
    pub search_to: Option<NaiveDate>,

    /// Send the default two-year search window
    #[arg(long)]
    pub clear_search_dates: bool,

    #[arg(long, value_parser = parse_date)]
    pub departure_from: Option<NaiveDate>,

    #[arg(long, value_parser = parse_date)]
    pub departure_to: Option<NaiveDate>,

    #[arg(long)]
    pub clear_departure_dates: bool,

    /// Value sent as `is_one_adult`
    #[arg(long)]
    pub one_adult: Option<String>,

    #[arg(long)]
    pub cabin: Option<String>,

    /// Stay-duration buckets to keep selected (repeatable)
    #[arg(long = "stay")]
    pub stays: Vec<String>,

    #[arg(long, value_enum)]
    pub render: Option<RenderArg>,

    /// Print the chart spec or message as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    parse_iso_date(value).map_err(|e| e.to_string())
}

impl SearchArgs {
    /// Apply the overrides the way a user would operate the controls.
    pub fn apply(&self, filter: &mut FilterState) -> CoreResult<()> {
        if let Some(origin) = &self.origin {
            filter.origin_city = origin.clone();
        }
        if let Some(destination) = &self.destination {
            filter.destination_city = destination.clone();
        }
        if let Some(trip_type) = &self.trip_type {
            filter.set_trip_type_input(trip_type);
        }

        match (self.connections_min, self.connections_max) {
            (Some(min), Some(max)) => filter.connections.set(min, max),
            (Some(min), None) => filter.connections.drag(Handle::Lower, min),
            (None, Some(max)) => filter.connections.drag(Handle::Upper, max),
            (None, None) => {}
        }

        apply_dates(
            "search",
            filter.search_dates.as_mut(),
            self.search_from,
            self.search_to,
            self.clear_search_dates,
        );
        apply_dates(
            "departure",
            filter.departure_dates.as_mut(),
            self.departure_from,
            self.departure_to,
            self.clear_departure_dates,
        );

        if self.one_adult.is_some() || self.cabin.is_some() {
            if filter.has_date_filters() {
                if self.one_adult.is_some() {
                    filter.passenger_mode = self.one_adult.clone();
                }
                if self.cabin.is_some() {
                    filter.cabin_class = self.cabin.clone();
                }
            } else {
                warn!("Ignoring passenger and cabin: date filters are disabled");
            }
        }

        if !self.stays.is_empty() {
            filter.stay_durations.toggle_all(false);
            for stay in &self.stays {
                filter.stay_durations.set_peer_by_label(stay, true)?;
            }
        }

        Ok(())
    }
}

fn apply_dates(
    name: &str,
    selector: Option<&mut DateRangeSelector>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    clear: bool,
) {
    let touched = clear || from.is_some() || to.is_some();
    let Some(selector) = selector else {
        if touched {
            warn!("Ignoring {} dates: date filters are disabled", name);
        }
        return;
    };

    if clear {
        selector.clear();
    } else if touched {
        let current = selector.effective();
        selector.select(&from.unwrap_or(current.start), &to.unwrap_or(current.end));
    }
}
