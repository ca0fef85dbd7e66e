pub mod models;

pub use models::flights::{CityCodes, FlightPriceRecord};
pub use models::trip::{RenderMode, TripType};
