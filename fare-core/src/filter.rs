use chrono::NaiveDate;
use fare_shared::TripType;
use serde::Serialize;

use crate::checkbox::CheckboxGroup;
use crate::dates::DateRangeSelector;
use crate::range::RangeSelector;

pub const DEFAULT_ORIGIN: &str = "PAR";
pub const DEFAULT_DESTINATION: &str = "LIS";

/// Upper bound of the connections slider
pub const MAX_CONNECTIONS: u32 = 5;

/// Stay-duration buckets offered next to the route fields
pub const STAY_DURATIONS: [&str; 4] = ["1-3 days", "4-7 days", "8-14 days", "15+ days"];

/// Current selection of every search control.
///
/// Owned by the UI layer, which updates it on control changes, and
/// read by [`crate::FlightQuery::from_filter`] at search time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterState {
    pub origin_city: String,
    pub destination_city: String,
    pub trip_type: TripType,
    pub connections: RangeSelector,

    /// Absent when the form has no date pickers
    pub search_dates: Option<DateRangeSelector>,
    pub departure_dates: Option<DateRangeSelector>,

    pub passenger_mode: Option<String>,
    pub cabin_class: Option<String>,

    pub stay_durations: CheckboxGroup,
}

impl FilterState {
    /// Route, trip type and connections only.
    pub fn new(connections: RangeSelector) -> Self {
        Self {
            origin_city: String::new(),
            destination_city: String::new(),
            trip_type: TripType::default(),
            connections,
            search_dates: None,
            departure_dates: None,
            passenger_mode: None,
            cabin_class: None,
            stay_durations: CheckboxGroup::new(STAY_DURATIONS, true),
        }
    }

    /// Adds both date pickers, each capped at `today`.
    pub fn with_date_filters(mut self, today: NaiveDate) -> Self {
        self.search_dates = Some(DateRangeSelector::new(today));
        self.departure_dates = Some(DateRangeSelector::new(today));
        self
    }

    pub fn has_date_filters(&self) -> bool {
        self.search_dates.is_some() || self.departure_dates.is_some()
    }

    /// Fill in the route applied once city codes are loaded.
    pub fn apply_route_defaults(&mut self, origin: &str, destination: &str) {
        self.origin_city = origin.to_string();
        self.destination_city = destination.to_string();
    }

    /// Read the trip-type control's displayed value.
    pub fn set_trip_type_input(&mut self, value: &str) {
        self.trip_type = TripType::from_form_value(value);
    }
}

impl Default for FilterState {
    fn default() -> Self {
        let mut state = Self::new(RangeSelector::up_to(MAX_CONNECTIONS));
        state.apply_route_defaults(DEFAULT_ORIGIN, DEFAULT_DESTINATION);
        state
    }
}
