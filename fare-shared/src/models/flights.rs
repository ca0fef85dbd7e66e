use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// One row of the `/api/flights` response.
///
/// Fields are taken as sent; a missing, null or mistyped field decodes
/// to its default rather than failing the whole response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FlightPriceRecord {
    /// Median of the cheapest fares found per search, in EUR
    #[serde(default, deserialize_with = "lenient")]
    pub median_price: f64,

    /// Days between booking and departure
    #[serde(default, deserialize_with = "whole_days")]
    pub adv_purchase: i64,

    #[serde(default, deserialize_with = "lenient")]
    pub main_airline: String,

    /// Origin-and-destination label, e.g. `PAR-LIS`
    #[serde(default, deserialize_with = "lenient")]
    pub ond: String,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field<T> {
        Value(T),
        Other(IgnoredAny),
    }

    Ok(match Field::<T>::deserialize(deserializer)? {
        Field::Value(value) => value,
        Field::Other(IgnoredAny) => T::default(),
    })
}

/// Integer day counts, also accepted as floats with no fractional part
/// (`3.0`). Anything else decodes to 0.
fn whole_days<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Days {
        Int(i64),
        Float(f64),
        Other(IgnoredAny),
    }

    Ok(match Days::deserialize(deserializer)? {
        Days::Int(days) => days,
        Days::Float(days) if days.is_finite() && days.fract() == 0.0 => days as i64,
        Days::Float(_) | Days::Other(IgnoredAny) => 0,
    })
}

/// Known city codes returned by `/api/cities`, in server order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CityCodes {
    #[serde(default)]
    pub origins: Vec<String>,
    #[serde(default)]
    pub destinations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserialization() {
        let json = r#"
            [
                {"median_price": 123.5, "adv_purchase": 14, "main_airline": "TP", "ond": "PAR-LIS"},
                {"median_price": 98.0, "adv_purchase": 3, "main_airline": "AF", "ond": "PAR-LIS"}
            ]
        "#;
        let records: Vec<FlightPriceRecord> = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].main_airline, "TP");
        assert_eq!(records[0].adv_purchase, 14);
        assert_eq!(records[1].median_price, 98.0);
    }

    #[test]
    fn test_record_missing_fields_default() {
        let record: FlightPriceRecord = serde_json::from_str(r#"{"median_price": 10.0}"#).unwrap();
        assert_eq!(record.adv_purchase, 0);
        assert!(record.main_airline.is_empty());
    }

    #[test]
    fn test_null_field_keeps_other_records() {
        let json = r#"
            [
                {"median_price": 50.0, "adv_purchase": 7, "main_airline": null, "ond": "PAR-LIS"},
                {"median_price": 98.0, "adv_purchase": 3, "main_airline": "AF", "ond": "PAR-LIS"}
            ]
        "#;
        let records: Vec<FlightPriceRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].main_airline, "");
        assert_eq!(records[0].adv_purchase, 7);
        assert_eq!(records[1].main_airline, "AF");
    }

    #[test]
    fn test_adv_purchase_as_whole_float() {
        let json = r#"
            [
                {"median_price": 80, "adv_purchase": 3.0, "main_airline": "TP", "ond": "PAR-LIS"},
                {"median_price": 90.0, "adv_purchase": 2.5, "main_airline": "TP", "ond": "PAR-LIS"},
                {"median_price": null, "adv_purchase": "soon", "main_airline": 42, "ond": "PAR-LIS"}
            ]
        "#;
        let records: Vec<FlightPriceRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].adv_purchase, 3);
        assert_eq!(records[0].median_price, 80.0);
        assert_eq!(records[1].adv_purchase, 0);
        assert_eq!(records[2].median_price, 0.0);
        assert_eq!(records[2].adv_purchase, 0);
        assert!(records[2].main_airline.is_empty());
    }

    #[test]
    fn test_city_codes_preserve_order() {
        let json = r#"{"origins": ["PAR", "AMS", "BER"], "destinations": ["LIS"]}"#;
        let cities: CityCodes = serde_json::from_str(json).unwrap();
        assert_eq!(cities.origins, vec!["PAR", "AMS", "BER"]);
        assert_eq!(cities.destinations, vec!["LIS"]);
    }
}
