//! In-memory connector
//!
//! Records every message instead of sending it. Used for dry runs and tests.

use crate::{AsyncConnector, ConnectionStats, ConnectorError};

/// One recorded message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedMessage {
    /// Topic
    pub topic: String,
    /// Payload bytes
    pub payload: Vec<u8>,
    /// Whether it was sent as retained
    pub retained: bool,
}

impl PublishedMessage {
    /// Payload as UTF-8 text, if it is
    pub fn payload_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.payload).ok()
    }
}

/// Connector that keeps messages in a `Vec`
#[derive(Debug, Clone)]
pub struct MemoryConnector {
    messages: Vec<PublishedMessage>,
    connected: bool,
    stats: ConnectionStats,
}

impl Default for MemoryConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryConnector {
    /// Connected, empty connector
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            connected: true,
            stats: ConnectionStats::default(),
        }
    }

    /// Simulate losing or regaining the connection
    pub fn set_connected(&mut self, connected: bool) {
        if connected && !self.connected {
            self.stats.reconnections += 1;
        }
        self.connected = connected;
    }

    /// Messages in send order
    pub fn messages(&self) -> &[PublishedMessage] {
        &self.messages
    }

    /// First message on `topic`
    pub fn message(&self, topic: &str) -> Option<&PublishedMessage> {
        self.messages.iter().find(|m| m.topic == topic)
    }

    /// Drain recorded messages
    pub fn take_messages(&mut self) -> Vec<PublishedMessage> {
        std::mem::take(&mut self.messages)
    }

    /// Connection statistics
    pub fn stats(&self) -> &ConnectionStats {
        &self.stats
    }

    fn record(&mut self, topic: &str, data: &[u8], retained: bool) -> Result<(), ConnectorError> {
        if !self.connected {
            self.stats.record_failure(ConnectorError::NotConnected);
            return Err(ConnectorError::NotConnected);
        }

        self.stats.record_sent(data.len());
        self.messages.push(PublishedMessage {
            topic: topic.to_string(),
            payload: data.to_vec(),
            retained,
        });
        Ok(())
    }
}

#[async_trait::async_trait]
impl AsyncConnector for MemoryConnector {
    type Error = ConnectorError;

    async fn send(&mut self, topic: &str, data: &[u8]) -> Result<(), Self::Error> {
        self.record(topic, data, false)
    }

    async fn send_retained(&mut self, topic: &str, data: &[u8]) -> Result<(), Self::Error> {
        self.record(topic, data, true)
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn stats(&self) -> ConnectionStats {
        self.stats.clone()
    }
}
