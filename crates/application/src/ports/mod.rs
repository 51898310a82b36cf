mod ip_echo;
mod upstream_client;

pub use ip_echo::IpEchoPort;
pub use upstream_client::{ResponseBody, UpstreamClient, UpstreamResponse};
