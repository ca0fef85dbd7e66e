use fare_core::FareError;
use fare_shared::{FlightPriceRecord, RenderMode, TripType};
use tracing::debug;

use crate::chart::ChartSpec;

pub const NO_DATA_MESSAGE: &str = "No data available for this search.";
pub const ERROR_MESSAGE: &str = "An error occurred while fetching flight data. Please try again.";

/// Output surface for search results.
///
/// Every content call replaces whatever was shown before.
pub trait ResultView {
    fn show_loading(&mut self);
    fn hide_loading(&mut self);

    /// A centered notice (no data, error)
    fn show_message(&mut self, message: &str);

    fn show_lines(&mut self, lines: &[String]);
    fn show_chart(&mut self, chart: &ChartSpec);
}

/// What a render call put on the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    NoData,
    Error,
    Lines(usize),
    Chart { series: usize },
}

/// Text line for one record, as listed in text mode
pub fn text_line(record: &FlightPriceRecord) -> String {
    format!(
        "Median price: {}, Advance purchase: {}, Main airline: {}, Ond: {}",
        record.median_price, record.adv_purchase, record.main_airline, record.ond
    )
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResultRenderer {
    mode: RenderMode,
}

impl ResultRenderer {
    pub fn new(mode: RenderMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Engage the loading indicator for a request about to be sent.
    pub fn begin<V: ResultView + ?Sized>(&self, view: &mut V) {
        view.show_loading();
    }

    /// Present a finished request. The loading indicator is released
    /// first, whatever the outcome.
    pub fn render<V: ResultView + ?Sized>(
        &self,
        view: &mut V,
        result: &Result<Vec<FlightPriceRecord>, FareError>,
        trip_type: TripType,
    ) -> Rendered {
        view.hide_loading();

        let records = match result {
            Ok(records) => records,
            Err(_) => {
                view.show_message(ERROR_MESSAGE);
                return Rendered::Error;
            }
        };

        if records.is_empty() {
            debug!("Empty result, showing no-data notice");
            view.show_message(NO_DATA_MESSAGE);
            return Rendered::NoData;
        }

        match self.mode {
            RenderMode::Text => {
                let lines: Vec<String> = records.iter().map(text_line).collect();
                view.show_lines(&lines);
                Rendered::Lines(lines.len())
            }
            RenderMode::Chart => match ChartSpec::from_records(records, trip_type) {
                Some(chart) => {
                    view.show_chart(&chart);
                    Rendered::Chart { series: chart.series.len() }
                }
                None => {
                    view.show_message(NO_DATA_MESSAGE);
                    Rendered::NoData
                }
            },
        }
    }
}
