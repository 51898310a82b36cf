#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_doh_application::ports::{IpEchoPort, UpstreamClient, UpstreamResponse};
use ferrous_doh_domain::{DohQuery, DomainError, ResolverEndpoint, DNS_MESSAGE_CONTENT_TYPE};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum MockBehavior {
    Respond {
        status: u16,
        body: Vec<u8>,
        delay: Duration,
    },
    Fail {
        reason: String,
        delay: Duration,
    },
}

/// Scripted upstream client. Unscripted endpoints fail with a transport error.
#[derive(Clone, Default)]
pub struct MockUpstreamClient {
    behaviors: Arc<Mutex<HashMap<String, MockBehavior>>>,
    calls: Arc<Mutex<Vec<(String, DohQuery)>>>,
    completed: Arc<Mutex<Vec<String>>>,
}

impl MockUpstreamClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, endpoint: &str, status: u16, body: &[u8]) -> &Self {
        self.respond_after(endpoint, status, body, Duration::ZERO)
    }

    pub fn respond_after(&self, endpoint: &str, status: u16, body: &[u8], delay: Duration) -> &Self {
        self.behaviors.lock().unwrap().insert(
            endpoint.to_string(),
            MockBehavior::Respond {
                status,
                body: body.to_vec(),
                delay,
            },
        );
        self
    }

    pub fn fail(&self, endpoint: &str) -> &Self {
        self.fail_after(endpoint, Duration::ZERO)
    }

    pub fn fail_after(&self, endpoint: &str, delay: Duration) -> &Self {
        self.behaviors.lock().unwrap().insert(
            endpoint.to_string(),
            MockBehavior::Fail {
                reason: "connection refused".to_string(),
                delay,
            },
        );
        self
    }

    pub fn calls(&self) -> Vec<(String, DohQuery)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn called_endpoints(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(e, _)| e.clone())
            .collect()
    }

    /// Endpoints whose attempt has settled, in completion order.
    pub fn completed(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamClient for MockUpstreamClient {
    async fn send(
        &self,
        endpoint: &ResolverEndpoint,
        query: &DohQuery,
    ) -> Result<UpstreamResponse, DomainError> {
        let url = endpoint.to_string();
        self.calls.lock().unwrap().push((url.clone(), query.clone()));

        let behavior = self.behaviors.lock().unwrap().get(&url).cloned();
        let result = match behavior {
            Some(MockBehavior::Respond {
                status,
                body,
                delay,
            }) => {
                pause(delay).await;
                Ok(UpstreamResponse::from_bytes(
                    status,
                    Some(DNS_MESSAGE_CONTENT_TYPE),
                    body,
                ))
            }
            Some(MockBehavior::Fail { reason, delay }) => {
                pause(delay).await;
                Err(DomainError::TransportFailure {
                    endpoint: url.clone(),
                    reason,
                })
            }
            None => Err(DomainError::TransportFailure {
                endpoint: url.clone(),
                reason: "no mock behavior".to_string(),
            }),
        };

        self.completed.lock().unwrap().push(url);
        result
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

pub struct MockIpEcho {
    result: Result<String, DomainError>,
}

impl MockIpEcho {
    pub fn returning(ip: &str) -> Self {
        Self {
            result: Ok(ip.to_string()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            result: Err(DomainError::TransportFailure {
                endpoint: "https://httpbin.org/ip".to_string(),
                reason: reason.to_string(),
            }),
        }
    }
}

#[async_trait]
impl IpEchoPort for MockIpEcho {
    async fn public_ip(&self) -> Result<String, DomainError> {
        self.result.clone()
    }
}
