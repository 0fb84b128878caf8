//! Water-quality reading domain entities.

pub mod location;
pub mod model;
pub mod parameter;

pub use location::GeoPoint;
pub use model::{CreateReading, Reading};
pub use parameter::Parameter;
