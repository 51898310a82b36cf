pub mod diagnostics;
pub mod doh;

pub use diagnostics::{EgressLocation, GetEgressLocationUseCase};
pub use doh::ForwardDohQueryUseCase;
