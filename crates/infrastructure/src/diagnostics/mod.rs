pub mod ip_echo;

pub use ip_echo::HttpIpEchoClient;
