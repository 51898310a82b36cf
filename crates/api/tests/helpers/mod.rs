#![allow(dead_code)]


pub use mocks::*;

use axum::{body::Body, http::Request, Router};
use ferrous_doh_api::{create_routes, AppState};
use ferrous_doh_application::services::UpstreamSelector;
use ferrous_doh_application::use_cases::{ForwardDohQueryUseCase, GetEgressLocationUseCase};
use ferrous_doh_domain::{ResolverPool, RouteTarget, RoutingRule, RoutingTable};
use http_body_util::BodyExt;
use std::sync::Arc;

pub const S1: &str = "https://s1.example/dns-query";
pub const S2: &str = "https://s2.example/dns-query";
pub const MAPPED: &str = "https://mapped.example/dns-query";
pub const DOH_PATH: &str = "/dns-query";

pub struct TestApp {
    pub router: Router,
    pub upstream: ScriptedUpstream,
}

pub fn build_app(upstream: ScriptedUpstream, echo: StubIpEcho) -> TestApp {
    let pool = ResolverPool::parse(&[S1, S2]).unwrap();
    let rules = vec![RoutingRule::new("mapped.example", MAPPED.parse().unwrap())];
    let routing = Arc::new(RoutingTable::new(rules, RouteTarget::DefaultPool));
    let selector = Arc::new(UpstreamSelector::new(pool, Arc::new(upstream.clone())));

    let state = AppState {
        forward_query: Arc::new(ForwardDohQueryUseCase::new(routing, selector)),
        egress_location: Arc::new(GetEgressLocationUseCase::new(Arc::new(echo))),
    };

    TestApp {
        router: create_routes(state, DOH_PATH),
        upstream,
    }
}

pub fn wire_query(name: &str) -> Vec<u8> {
    let mut msg = vec![0x12, 0x34, 0x01, 0x00, 0x00, 0x01, 0, 0, 0, 0, 0, 0];
    for label in name.split('.').filter(|l| !l.is_empty()) {
        msg.push(label.len() as u8);
        msg.extend_from_slice(label.as_bytes());
    }
    msg.extend_from_slice(&[0x00, 0x00, 0x01, 0x00, 0x01]);
    msg
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
