use std::collections::HashMap;

use fare_shared::FlightPriceRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Advance purchase, in days
    pub x: i64,
    /// Median price
    pub y: f64,
}

/// All points of one airline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub data: Vec<ChartPoint>,
}

/// Group records per `main_airline`.
///
/// Series follow the order in which airlines first appear; points
/// within a series are sorted by ascending advance purchase, ties kept
/// in input order.
pub fn group_by_airline(records: &[FlightPriceRecord]) -> Vec<ChartSeries> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut series: Vec<ChartSeries> = Vec::new();

    for record in records {
        let slot = *index.entry(record.main_airline.as_str()).or_insert_with(|| {
            series.push(ChartSeries {
                name: record.main_airline.clone(),
                data: Vec::new(),
            });
            series.len() - 1
        });
        series[slot].data.push(ChartPoint {
            x: record.adv_purchase,
            y: record.median_price,
        });
    }

    for s in &mut series {
        s.data.sort_by_key(|p| p.x);
    }

    series
}
