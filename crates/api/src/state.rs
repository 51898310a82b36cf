use ferrous_doh_application::use_cases::{ForwardDohQueryUseCase, GetEgressLocationUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub forward_query: Arc<ForwardDohQueryUseCase>,
    pub egress_location: Arc<GetEgressLocationUseCase>,
}

impl AppState {
    pub fn pool_size(&self) -> usize {
        self.forward_query.selector().pool().len()
    }

    pub fn rule_count(&self) -> usize {
        self.forward_query.routing().rules().len()
    }
}
