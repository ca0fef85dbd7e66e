use std::io::Write;

use fare_chart::{ChartSpec, ResultView};
use tracing::warn;

const LOADING_TEXT: &str = "Loading...";

/// Writes results to a terminal or any other byte sink.
///
/// Charts are drawn as a table, one row per airline and one column per
/// advance-purchase value in axis order. An airline with several prices
/// at the same advance purchase shows all of them in one cell, joined
/// by `/`. In JSON mode the chart spec is
/// printed as-is and status lines are suppressed, keeping the output
/// machine-readable.
pub struct TerminalView<W: Write> {
    out: W,
    json: bool,
    loading: bool,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, json: bool) -> Self {
        Self {
            out,
            json,
            loading: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            warn!("Failed to write output: {}", e);
        }
    }

    fn chart_table(chart: &ChartSpec) -> Vec<String> {
        let xs = chart.x_categories();

        let mut rows: Vec<Vec<String>> = Vec::with_capacity(chart.series.len() + 1);
        let mut header = vec!["Airline".to_string()];
        header.extend(xs.iter().map(|x| x.to_string()));
        rows.push(header);

        for series in &chart.series {
            let mut row = vec![series.name.clone()];
            row.extend(xs.iter().map(|x| {
                let values: Vec<String> = series
                    .data
                    .iter()
                    .filter(|p| p.x == *x)
                    .map(|p| chart.tooltip.format_value(p.y))
                    .collect();
                if values.is_empty() {
                    "-".to_string()
                } else {
                    values.join(" / ")
                }
            }));
            rows.push(row);
        }

        let columns = xs.len() + 1;
        let widths: Vec<usize> = (0..columns)
            .map(|c| rows.iter().map(|r| r[c].chars().count()).max().unwrap_or(0))
            .collect();

        rows.iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(c, cell)| {
                        if c == 0 {
                            format!("{:<width$}", cell, width = widths[c])
                        } else {
                            format!("{:>width$}", cell, width = widths[c])
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect()
    }
}

impl<W: Write> ResultView for TerminalView<W> {
    fn show_loading(&mut self) {
        self.loading = true;
        if !self.json {
            self.emit(LOADING_TEXT);
        }
    }

    fn hide_loading(&mut self) {
        self.loading = false;
    }

    fn show_message(&mut self, message: &str) {
        if self.json {
            let body = serde_json::json!({ "message": message });
            self.emit(&body.to_string());
        } else {
            self.emit(message);
        }
    }

    fn show_lines(&mut self, lines: &[String]) {
        if self.json {
            let body = serde_json::json!({ "lines": lines });
            self.emit(&body.to_string());
            return;
        }
        for line in lines {
            self.emit(line);
        }
    }

    fn show_chart(&mut self, chart: &ChartSpec) {
        if self.json {
            match chart.to_json() {
                Ok(body) => self.emit(&body),
                Err(e) => warn!("Failed to serialize chart: {}", e),
            }
            return;
        }

        self.emit(&chart.title);
        self.emit(&format!("{} by {}", chart.y_axis.title, chart.x_axis.title));
        for line in Self::chart_table(chart) {
            self.emit(&line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fare_shared::{FlightPriceRecord, TripType};

    fn record(airline: &str, adv: i64, price: f64) -> FlightPriceRecord {
        FlightPriceRecord {
            median_price: price,
            adv_purchase: adv,
            main_airline: airline.to_string(),
            ond: "PAR-LIS".to_string(),
        }
    }

    fn output(view: TerminalView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn test_chart_table_reversed_columns() {
        let records = vec![record("A", 5, 100.0), record("B", 2, 200.0), record("A", 1, 90.0)];
        let chart = ChartSpec::from_records(&records, TripType::RoundTrip).unwrap();
        let mut view = TerminalView::new(Vec::new(), false);
        view.show_chart(&chart);

        let text = output(view);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "PAR-LIS round trips");
        assert_eq!(lines[2], "Airline |        5 |        2 |       1");
        assert_eq!(lines[3], "A       | 100.00 € |        - | 90.00 €");
        assert_eq!(lines[4], "B       |        - | 200.00 € |       -");
    }

    #[test]
    fn test_chart_table_keeps_duplicate_points() {
        let records = vec![record("A", 3, 100.0), record("A", 3, 120.0), record("B", 1, 80.0)];
        let chart = ChartSpec::from_records(&records, TripType::OneWay).unwrap();
        let mut view = TerminalView::new(Vec::new(), false);
        view.show_chart(&chart);

        let text = output(view);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "Airline |                   3 |       1");
        assert_eq!(lines[3], "A       | 100.00 € / 120.00 € |       -");
        assert_eq!(lines[4], "B       |                   - | 80.00 €");
    }

    #[test]
    fn test_loading_tracked_and_printed() {
        let mut view = TerminalView::new(Vec::new(), false);
        view.show_loading();
        assert!(view.is_loading());
        view.hide_loading();
        assert!(!view.is_loading());
        assert_eq!(output(view), "Loading...\n");
    }

    #[test]
    fn test_json_mode_is_machine_readable() {
        let mut view = TerminalView::new(Vec::new(), true);
        view.show_loading();
        view.hide_loading();
        view.show_message("No data");

        let text = output(view);
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["message"], "No data");
    }
}
