pub mod controller;
pub mod element;
pub mod query;

pub use controller::{ComponentVisibility, VisualizationConfig};
pub use element::{AxisRole, AxisSelection};
pub use query::QuerySpec;
