use fare_shared::{FlightPriceRecord, TripType};
use serde::Serialize;

use crate::series::{group_by_airline, ChartSeries};

pub const X_AXIS_TITLE: &str = "Advance purchase (days)";
pub const Y_AXIS_TITLE: &str = "Price";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    /// Draw values right-to-left
    pub reversed: bool,
    pub allow_decimals: bool,
}

/// Hover text: `"<series>: <value> <suffix>"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub value_decimals: usize,
    pub value_suffix: String,
}

impl Tooltip {
    pub fn format(&self, series_name: &str, y: f64) -> String {
        format!("{}: {}", series_name, self.format_value(y))
    }

    pub fn format_value(&self, y: f64) -> String {
        format!("{:.*} {}", self.value_decimals, y, self.value_suffix)
    }
}

impl Default for Tooltip {
    fn default() -> Self {
        Self {
            value_decimals: 2,
            value_suffix: "€".to_string(),
        }
    }
}

/// Everything a line/point chart widget needs to draw one response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub tooltip: Tooltip,
    pub series: Vec<ChartSeries>,
}

impl ChartSpec {
    /// `None` for an empty response; there is nothing to chart.
    pub fn from_records(records: &[FlightPriceRecord], trip_type: TripType) -> Option<Self> {
        let first = records.first()?;

        Some(Self {
            title: format!("{} {}", first.ond, trip_type.chart_label()),
            x_axis: Axis {
                title: X_AXIS_TITLE.to_string(),
                reversed: true,
                allow_decimals: false,
            },
            y_axis: Axis {
                title: Y_AXIS_TITLE.to_string(),
                reversed: false,
                allow_decimals: true,
            },
            tooltip: Tooltip::default(),
            series: group_by_airline(records),
        })
    }

    /// Distinct x values across all series, in drawing order.
    pub fn x_categories(&self) -> Vec<i64> {
        let mut xs: Vec<i64> = self
            .series
            .iter()
            .flat_map(|s| s.data.iter().map(|p| p.x))
            .collect();
        xs.sort_unstable();
        xs.dedup();
        if self.x_axis.reversed {
            xs.reverse();
        }
        xs
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
