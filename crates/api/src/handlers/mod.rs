pub mod doh;
pub mod fallback;
pub mod health;
pub mod location;

pub use doh::{doh_get, doh_post};
pub use fallback::{method_not_allowed, not_found};
pub use health::health_check;
pub use location::test_location;
