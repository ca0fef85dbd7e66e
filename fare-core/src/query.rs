use fare_shared::TripType;
use serde::Serialize;

use crate::dates::{format_date_to_iso, DateRange};
use crate::filter::FilterState;

/// Parameters of one `GET /api/flights` request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightQuery {
    pub origin: String,
    pub destination: String,
    pub trip_type: TripType,
    pub nb_connections_min: u32,
    pub nb_connections_max: u32,
    pub is_one_adult: Option<String>,
    pub cabin: Option<String>,
    pub search_dates: Option<DateRange>,
    pub departure_dates: Option<DateRange>,
}

impl FlightQuery {
    /// Snapshot the filter controls. A cleared date picker still sends
    /// its two-year default. Passenger mode and cabin ride along with the
    /// date pickers and are dropped on forms without them.
    pub fn from_filter(filter: &FilterState) -> Self {
        let extended = filter.has_date_filters();
        Self {
            origin: filter.origin_city.trim().to_string(),
            destination: filter.destination_city.trim().to_string(),
            trip_type: filter.trip_type,
            nb_connections_min: filter.connections.min(),
            nb_connections_max: filter.connections.max(),
            is_one_adult: filter.passenger_mode.clone().filter(|_| extended),
            cabin: filter.cabin_class.clone().filter(|_| extended),
            search_dates: filter.search_dates.as_ref().map(|s| s.effective()),
            departure_dates: filter.departure_dates.as_ref().map(|s| s.effective()),
        }
    }

    /// Query-string pairs in wire order.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("origin", self.origin.clone()),
            ("destination", self.destination.clone()),
            ("trip_type", self.trip_type.code().to_string()),
            ("nb_connections_min", self.nb_connections_min.to_string()),
            ("nb_connections_max", self.nb_connections_max.to_string()),
        ];

        if let Some(mode) = &self.is_one_adult {
            params.push(("is_one_adult", mode.clone()));
        }
        if let Some(cabin) = &self.cabin {
            params.push(("cabin", cabin.clone()));
        }
        if let Some(range) = &self.search_dates {
            params.push(("search_date_start", format_date_to_iso(&range.start)));
            params.push(("search_date_end", format_date_to_iso(&range.end)));
        }
        if let Some(range) = &self.departure_dates {
            params.push(("departure_date_start", format_date_to_iso(&range.start)));
            params.push(("departure_date_end", format_date_to_iso(&range.end)));
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_basic_params_in_order() {
        let mut filter = FilterState::default();
        filter.connections.set(1.0, 3.0);
        let params = FlightQuery::from_filter(&filter).to_params();

        let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["origin", "destination", "trip_type", "nb_connections_min", "nb_connections_max"]
        );
        assert_eq!(param(&params, "origin"), Some("PAR"));
        assert_eq!(param(&params, "destination"), Some("LIS"));
        assert_eq!(param(&params, "trip_type"), Some("RT"));
        assert_eq!(param(&params, "nb_connections_min"), Some("1"));
        assert_eq!(param(&params, "nb_connections_max"), Some("3"));
    }

    #[test]
    fn test_trip_type_mapping() {
        let mut filter = FilterState::default();
        filter.set_trip_type_input("One way");
        assert_eq!(param(&FlightQuery::from_filter(&filter).to_params(), "trip_type"), Some("OW"));

        for other in ["Round trip", "Multi-city", ""] {
            filter.set_trip_type_input(other);
            assert_eq!(param(&FlightQuery::from_filter(&filter).to_params(), "trip_type"), Some("RT"));
        }
    }

    #[test]
    fn test_cleared_dates_fall_back_to_two_years() {
        let today = day(2026, 10, 17);
        let mut filter = FilterState::default().with_date_filters(today);
        if let Some(s) = filter.search_dates.as_mut() {
            s.clear();
        }
        if let Some(s) = filter.departure_dates.as_mut() {
            s.clear();
        }

        let params = FlightQuery::from_filter(&filter).to_params();
        assert_eq!(param(&params, "search_date_start"), Some("2024-10-17"));
        assert_eq!(param(&params, "search_date_end"), Some("2026-10-17"));
        assert_eq!(param(&params, "departure_date_start"), Some("2024-10-17"));
        assert_eq!(param(&params, "departure_date_end"), Some("2026-10-17"));
    }

    #[test]
    fn test_extended_params() {
        let today = day(2026, 10, 17);
        let mut filter = FilterState::default().with_date_filters(today);
        filter.passenger_mode = Some("true".to_string());
        filter.cabin_class = Some("ECONOMY".to_string());
        if let Some(s) = filter.departure_dates.as_mut() {
            s.select(&day(2026, 5, 1), &day(2026, 6, 30));
        }

        let params = FlightQuery::from_filter(&filter).to_params();
        let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();
        assert_eq!(&keys[5..], &[
            "is_one_adult",
            "cabin",
            "search_date_start",
            "search_date_end",
            "departure_date_start",
            "departure_date_end",
        ]);
        assert_eq!(param(&params, "cabin"), Some("ECONOMY"));
        assert_eq!(param(&params, "departure_date_start"), Some("2026-05-01"));
        assert_eq!(param(&params, "departure_date_end"), Some("2026-06-30"));
    }

    #[test]
    fn test_passenger_and_cabin_need_date_filters() {
        let mut filter = FilterState::default();
        filter.passenger_mode = Some("true".to_string());
        filter.cabin_class = Some("BUSINESS".to_string());

        let params = FlightQuery::from_filter(&filter).to_params();
        let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["origin", "destination", "trip_type", "nb_connections_min", "nb_connections_max"]
        );
    }

    #[test]
    fn test_origin_whitespace_trimmed() {
        let mut filter = FilterState::default();
        filter.origin_city = "  AMS ".to_string();
        assert_eq!(FlightQuery::from_filter(&filter).origin, "AMS");
    }
}
