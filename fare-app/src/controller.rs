use std::cell::{Cell, Ref, RefCell};

use fare_chart::{Rendered, ResultRenderer, ResultView};
use fare_core::{FareApi, FilterState, FlightQuery};
use tracing::{debug, error, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Rendered(Rendered),
    /// A newer search was issued before this one completed; its
    /// response was dropped without touching the view.
    Superseded,
}

/// Runs searches against the API and renders them into one view.
///
/// Each search takes the next sequence number. Only the response
/// carrying the latest number is rendered, so a slow earlier request
/// can never overwrite a newer result.
pub struct SearchController<A, V> {
    api: A,
    view: RefCell<V>,
    renderer: ResultRenderer,
    latest: Cell<u64>,
}

impl<A, V> SearchController<A, V>
where
    A: FareApi,
    V: ResultView,
{
    pub fn new(api: A, view: V, renderer: ResultRenderer) -> Self {
        Self {
            api,
            view: RefCell::new(view),
            renderer,
            latest: Cell::new(0),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> Ref<'_, V> {
        self.view.borrow()
    }

    pub fn into_view(self) -> V {
        self.view.into_inner()
    }

    /// Sequence number of the most recently issued search
    pub fn latest_sequence(&self) -> u64 {
        self.latest.get()
    }

    pub async fn search(&self, filter: &FilterState) -> SearchOutcome {
        let query = FlightQuery::from_filter(filter);
        let sequence = self.latest.get() + 1;
        self.latest.set(sequence);

        self.renderer.begin(&mut *self.view.borrow_mut());
        let result = self.api.fetch_flights(&query).await;

        let latest = self.latest.get();
        if sequence != latest {
            debug!("Dropping response #{} superseded by #{}", sequence, latest);
            return SearchOutcome::Superseded;
        }

        if let Err(e) = &result {
            error!("Error fetching flights: {}", e);
        }

        let rendered = self
            .renderer
            .render(&mut *self.view.borrow_mut(), &result, query.trip_type);
        info!(
            "Search #{} {} -> {} rendered as {:?}",
            sequence, query.origin, query.destination, rendered
        );
        SearchOutcome::Rendered(rendered)
    }
}
