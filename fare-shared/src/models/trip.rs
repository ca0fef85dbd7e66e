use serde::{Deserialize, Serialize};

/// Fare category sent as `trip_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TripType {
    #[serde(rename = "OW")]
    OneWay,
    #[default]
    #[serde(rename = "RT")]
    RoundTrip,
}

impl TripType {
    /// Label the trip-type select shows for one-way fares
    pub const ONE_WAY_LABEL: &'static str = "One way";

    /// Maps the trip-type control's value. Only the exact one-way label
    /// selects `OneWay`; every other value is a round trip.
    pub fn from_form_value(value: &str) -> Self {
        if value == Self::ONE_WAY_LABEL {
            TripType::OneWay
        } else {
            TripType::RoundTrip
        }
    }

    /// Wire code for the `trip_type` parameter
    pub fn code(&self) -> &'static str {
        match self {
            TripType::OneWay => "OW",
            TripType::RoundTrip => "RT",
        }
    }

    /// Suffix used in chart titles
    pub fn chart_label(&self) -> &'static str {
        match self {
            TripType::OneWay => "one way",
            TripType::RoundTrip => "round trips",
        }
    }
}

/// How a non-empty result is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// One text line per record, in response order
    Text,
    /// Series per airline, handed to a chart
    #[default]
    Chart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_value_mapping() {
        assert_eq!(TripType::from_form_value("One way"), TripType::OneWay);
        assert_eq!(TripType::from_form_value("Round trip"), TripType::RoundTrip);
        assert_eq!(TripType::from_form_value("one way"), TripType::RoundTrip);
        assert_eq!(TripType::from_form_value(""), TripType::RoundTrip);
    }

    #[test]
    fn test_wire_codes() {
        assert_eq!(TripType::OneWay.code(), "OW");
        assert_eq!(TripType::RoundTrip.code(), "RT");
        assert_eq!(serde_json::to_string(&TripType::OneWay).unwrap(), "\"OW\"");
        let parsed: TripType = serde_json::from_str("\"RT\"").unwrap();
        assert_eq!(parsed, TripType::RoundTrip);
    }

    #[test]
    fn test_render_mode_lowercase() {
        let mode: RenderMode = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(mode, RenderMode::Text);
    }
}
