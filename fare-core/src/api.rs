use async_trait::async_trait;
use fare_shared::{CityCodes, FlightPriceRecord};

use crate::query::FlightQuery;

/// The two ways a fare API call can fail. Each carries the transport or
/// decoding cause as text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FareError {
    #[error("City lookup failed: {0}")]
    CityLookup(String),

    #[error("Flight query failed: {0}")]
    FlightQuery(String),
}

/// Read-only access to the fare search API
#[async_trait]
pub trait FareApi: Send + Sync {
    /// `GET /api/cities`
    async fn fetch_cities(&self) -> Result<CityCodes, FareError>;

    /// `GET /api/flights`; an empty vector means no data
    async fn fetch_flights(&self, query: &FlightQuery) -> Result<Vec<FlightPriceRecord>, FareError>;
}
