pub mod diagnostics;
pub mod dns;
