use crate::dns_message::{DnsMessage, DomainName};
use bytes::Bytes;
use std::sync::Arc;

/// RFC 8484 media type for wire-format DNS messages.
pub const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";

/// A DoH query in the encoding the client used. Forwarded as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DohQuery {
    /// `GET ?dns=<base64url>`; the parameter is kept verbatim.
    Get { dns: Arc<str> },
    /// `POST` with a binary `application/dns-message` body.
    Post { body: Bytes },
}

impl DohQuery {
    pub fn get(dns: impl Into<Arc<str>>) -> Self {
        Self::Get { dns: dns.into() }
    }

    pub fn post(body: impl Into<Bytes>) -> Self {
        Self::Post { body: body.into() }
    }

    /// Best-effort question name. `None` is a normal outcome.
    pub fn question_name(&self) -> Option<DomainName> {
        match self {
            Self::Get { dns } => DomainName::from_base64url(dns),
            Self::Post { body } => DomainName::from_wire(body),
        }
    }

    pub fn method_name(&self) -> &'static str {
        match self {
            Self::Get { .. } => "GET",
            Self::Post { .. } => "POST",
        }
    }
}

impl From<DnsMessage> for DohQuery {
    fn from(message: DnsMessage) -> Self {
        Self::post(message.into_bytes())
    }
}
