pub mod health;
pub mod location;

pub use health::HealthResponse;
pub use location::{LocationFailure, LocationResponse};
