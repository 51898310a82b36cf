#![allow(dead_code)]

mod mock_server;

pub use mock_server::*;
