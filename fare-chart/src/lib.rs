pub mod chart;
pub mod render;
pub mod series;

pub use chart::{Axis, ChartSpec, Tooltip};
pub use render::{Rendered, ResultRenderer, ResultView};
pub use series::{group_by_airline, ChartPoint, ChartSeries};
