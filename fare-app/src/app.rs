use fare_chart::ResultView;
use fare_core::lookup::populate_suggestions;
use fare_core::{FareApi, FilterState, SuggestionList};
use tracing::info;

use crate::controller::{SearchController, SearchOutcome};

/// The search form: filter controls, city suggestions and the result
/// area, wired to one API.
pub struct FareApp<A, V> {
    controller: SearchController<A, V>,
    filter: FilterState,
    origins: SuggestionList,
    destinations: SuggestionList,
    default_origin: String,
    default_destination: String,
}

impl<A, V> FareApp<A, V>
where
    A: FareApi,
    V: ResultView,
{
    pub fn new(
        controller: SearchController<A, V>,
        filter: FilterState,
        default_origin: &str,
        default_destination: &str,
    ) -> Self {
        Self {
            controller,
            filter,
            origins: SuggestionList::new(),
            destinations: SuggestionList::new(),
            default_origin: default_origin.to_string(),
            default_destination: default_destination.to_string(),
        }
    }

    /// Load city suggestions, then apply the default route. A failed
    /// lookup leaves the suggestions empty and is otherwise ignored.
    pub async fn load(&mut self) {
        if populate_suggestions(self.controller.api(), &mut self.origins, &mut self.destinations)
            .await
            .is_err()
        {
            info!("City suggestions unavailable, free-text entry only");
        }
        self.filter
            .apply_route_defaults(&self.default_origin, &self.default_destination);
    }

    /// Page-load sequence: lookup, defaults, then the first search.
    pub async fn start(&mut self) -> SearchOutcome {
        self.load().await;
        self.submit().await
    }

    /// Explicit user search with the current filter state.
    pub async fn submit(&self) -> SearchOutcome {
        self.controller.search(&self.filter).await
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut FilterState {
        &mut self.filter
    }

    pub fn origins(&self) -> &SuggestionList {
        &self.origins
    }

    pub fn destinations(&self) -> &SuggestionList {
        &self.destinations
    }

    pub fn controller(&self) -> &SearchController<A, V> {
        &self.controller
    }

    pub fn into_controller(self) -> SearchController<A, V> {
        self.controller
    }
}
