//! Question-name extraction straight from DNS wire format.
//!
//! Only the first question name is walked. The 12-byte header is skipped
//! without being interpreted, and compression pointers are not followed:
//! a pointer byte is read as an ordinary label length and normally runs past
//! the end of the buffer, which yields no name.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use bytes::Bytes;
use std::fmt;
use std::sync::Arc;

const HEADER_LEN: usize = 12;

/// RFC 8484 base64url. Padding is optional on input.
const BASE64URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A wire-format DNS query, kept as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsMessage(Bytes);

impl DnsMessage {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    /// Decode the `dns` parameter of a DoH GET request.
    pub fn from_base64url(encoded: &str) -> Option<Self> {
        BASE64URL.decode(encoded).ok().map(Self::new)
    }

    pub fn to_base64url(&self) -> String {
        BASE64URL.encode(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    pub fn question_name(&self) -> Option<DomainName> {
        DomainName::from_wire(&self.0)
    }
}

/// Lowercase, dot-joined question name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName(Arc<str>);

impl DomainName {
    pub fn new(name: &str) -> Self {
        Self(name.to_lowercase().into())
    }

    /// Walk the length-prefixed labels that start right after the header.
    ///
    /// Labels are decoded as Latin-1, one char per byte. Any read past the end
    /// of `message`, or a root-only name, gives `None`.
    pub fn from_wire(message: &[u8]) -> Option<Self> {
        let mut pos = HEADER_LEN;
        let mut labels: Vec<String> = Vec::new();

        loop {
            let len = *message.get(pos)? as usize;
            if len == 0 {
                break;
            }
            pos += 1;
            let label = message.get(pos..pos + len)?;
            labels.push(label.iter().copied().map(char::from).collect());
            pos += len;
        }

        if labels.is_empty() {
            return None;
        }

        Some(Self::new(&labels.join(".")))
    }

    /// Decode a base64url `dns` parameter and extract its question name.
    pub fn from_base64url(encoded: &str) -> Option<Self> {
        DnsMessage::from_base64url(encoded)?.question_name()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
