mod rotation_cursor;
mod upstream_selector;

pub use rotation_cursor::RotationCursor;
pub use upstream_selector::{ForwardedResponse, UpstreamSelector};
