#![allow(dead_code)]

/// Builds wire-format DNS queries with a single question.
pub struct DnsQueryBuilder {
    id: u16,
    labels: Vec<Vec<u8>>,
    qtype: u16,
}

impl DnsQueryBuilder {
    pub fn new() -> Self {
        Self {
            id: 0x1234,
            labels: Vec::new(),
            qtype: 1,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.labels = name
            .split('.')
            .filter(|l| !l.is_empty())
            .map(|l| l.as_bytes().to_vec())
            .collect();
        self
    }

    pub fn raw_label(mut self, label: &[u8]) -> Self {
        self.labels.push(label.to_vec());
        self
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn qtype(mut self, qtype: u16) -> Self {
        self.qtype = qtype;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut msg = Vec::with_capacity(64);
        msg.extend_from_slice(&self.id.to_be_bytes());
        msg.extend_from_slice(&[0x01, 0x00]); // RD
        msg.extend_from_slice(&[0x00, 0x01]); // QDCOUNT
        msg.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
        for label in &self.labels {
            msg.push(label.len() as u8);
            msg.extend_from_slice(label);
        }
        msg.push(0);
        msg.extend_from_slice(&self.qtype.to_be_bytes());
        msg.extend_from_slice(&[0x00, 0x01]);
        msg
    }
}

impl Default for DnsQueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
