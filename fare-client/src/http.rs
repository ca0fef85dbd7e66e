use std::time::Duration;

use async_trait::async_trait;
use fare_core::{FareApi, FareError, FlightQuery};
use fare_shared::{CityCodes, FlightPriceRecord};
use reqwest::Url;
use tracing::{debug, info};

const CITIES_PATH: &str = "api/cities";
const FLIGHTS_PATH: &str = "api/flights";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid API base url '{0}': {1}")]
    InvalidBaseUrl(String, String),

    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// [`FareApi`] over HTTP.
#[derive(Clone)]
pub struct HttpFareApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpFareApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        // A trailing slash keeps any path prefix when joining endpoints
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| ClientError::InvalidBaseUrl(base_url.to_string(), e.to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn cities_url(&self) -> Result<Url, FareError> {
        self.base_url
            .join(CITIES_PATH)
            .map_err(|e| FareError::CityLookup(e.to_string()))
    }

    /// Full request url with the query's parameters appended in order.
    pub fn flights_url(&self, query: &FlightQuery) -> Result<Url, FareError> {
        let mut url = self
            .base_url
            .join(FLIGHTS_PATH)
            .map_err(|e| FareError::FlightQuery(e.to_string()))?;
        url.query_pairs_mut().extend_pairs(query.to_params());
        Ok(url)
    }
}

#[async_trait]
impl FareApi for HttpFareApi {
    async fn fetch_cities(&self) -> Result<CityCodes, FareError> {
        let url = self.cities_url()?;
        debug!("GET {}", url);

        let cities = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| FareError::CityLookup(e.to_string()))?
            .json::<CityCodes>()
            .await
            .map_err(|e| FareError::CityLookup(e.to_string()))?;

        Ok(cities)
    }

    async fn fetch_flights(&self, query: &FlightQuery) -> Result<Vec<FlightPriceRecord>, FareError> {
        let url = self.flights_url(query)?;
        info!("Fetching flights {} -> {} ({})", query.origin, query.destination, query.trip_type.code());
        debug!("GET {}", url);

        let records = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| FareError::FlightQuery(e.to_string()))?
            .json::<Vec<FlightPriceRecord>>()
            .await
            .map_err(|e| FareError::FlightQuery(e.to_string()))?;

        debug!("Received {} flight records", records.len());
        Ok(records)
    }
}
