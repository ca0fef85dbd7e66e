use serde::Serialize;
use tracing::{info, warn};

use crate::api::{FareApi, FareError};

/// Suggestions offered for a free-text city field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuggestionList {
    entries: Vec<String>,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entries with one per code, keeping the given order.
    pub fn populate<I, S>(&mut self, codes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries = codes.into_iter().map(Into::into).collect();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries starting with `input`, ignoring ASCII case
    pub fn matching(&self, input: &str) -> Vec<&str> {
        let needle = input.trim().to_ascii_uppercase();
        self.entries
            .iter()
            .filter(|e| e.to_ascii_uppercase().starts_with(&needle))
            .map(String::as_str)
            .collect()
    }
}

/// Fetch city codes once and fill both suggestion lists.
///
/// On failure the lists are left untouched and the error is returned
/// for the caller to ignore; the fields still accept free text.
pub async fn populate_suggestions<A>(
    api: &A,
    origins: &mut SuggestionList,
    destinations: &mut SuggestionList,
) -> Result<(), FareError>
where
    A: FareApi + ?Sized,
{
    match api.fetch_cities().await {
        Ok(cities) => {
            info!(
                "Loaded {} origin and {} destination codes",
                cities.origins.len(),
                cities.destinations.len()
            );
            origins.populate(cities.origins);
            destinations.populate(cities.destinations);
            Ok(())
        }
        Err(e) => {
            warn!("Error fetching city data: {}", e);
            Err(e)
        }
    }
}
