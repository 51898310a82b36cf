mod forward_doh_query;

pub use forward_doh_query::ForwardDohQueryUseCase;
