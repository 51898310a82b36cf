mod get_egress_location;

pub use get_egress_location::{EgressLocation, GetEgressLocationUseCase};
