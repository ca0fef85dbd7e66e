pub mod api;
pub mod checkbox;
pub mod dates;
pub mod filter;
pub mod lookup;
pub mod query;
pub mod range;

pub use api::{FareApi, FareError};
pub use checkbox::CheckboxGroup;
pub use dates::{DateRange, DateRangeSelector};
pub use filter::FilterState;
pub use lookup::SuggestionList;
pub use query::FlightQuery;
pub use range::{Handle, RangeSelector};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
