//! Publishing Connectors for wxgate
//!
//! ## Overview
//!
//! The calculation engine is transport-agnostic. This crate moves its output to
//! consumers: a [`Publisher`](publisher::Publisher) turns a raw gateway payload
//! into messages and hands them to a connector.
//!
//! ## Publishing Modes
//!
//! ### JSON
//!
//! One message per upload, on `{prefix}/{device}`, carrying the flat
//! `{key: value}` object. Suited to consumers that parse JSON themselves
//! (Node-RED, Telegraf, custom dashboards).
//!
//! ### Discovery
//!
//! One entity per reading, announced with a retained config message so a home
//! automation hub creates it without manual setup:
//!
//! ```text
//! {discovery_prefix}/{component}/{device}/{key}/config      retained, entity metadata
//! {prefix}/{device}/{key}/state                              value
//! {prefix}/{device}/{key}/attributes                         JSON, only when present
//! ```
//!
//! ## Connectors
//!
//! | Connector         | Feature | Use                                    |
//! |-------------------|---------|----------------------------------------|
//! | `MqttConnector`   | `mqtt`  | Broker publishing over rumqttc         |
//! | `MemoryConnector` | `std`   | Dry runs, tests, inspecting the output |
//!
//! ## Example Usage
//!
//! ```no_run
//! use wxgate_connectors::mqtt::{MqttConfig, MqttConnector};
//! use wxgate_connectors::publisher::{Publisher, PublisherConfig};
//! use wxgate_core::{CalculationConfig, RawPayload};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mqtt = MqttConnector::connect(
//!     MqttConfig::new("broker.local", 1883)
//!         .client_id("wxgate")
//!         .credentials("user", "secret"),
//! )
//! .await?;
//!
//! let mut publisher = Publisher::new(
//!     mqtt,
//!     PublisherConfig::new("GW2000A").discovery(),
//!     CalculationConfig::default(),
//! );
//!
//! let payload = RawPayload::from_pairs([("tempf", "74.7"), ("humidity", "31")]);
//! publisher.publish(&payload).await?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "std")]
pub mod memory;

#[cfg(feature = "mqtt")]
pub mod mqtt;

#[cfg(feature = "std")]
pub mod publisher;

// Re-export common types
#[cfg(feature = "std")]
pub use memory::{MemoryConnector, PublishedMessage};

#[cfg(feature = "mqtt")]
pub use mqtt::{MqttConfig, MqttConnector};

#[cfg(feature = "std")]
pub use publisher::{PublishError, PublishMode, Publisher, PublisherConfig};

use thiserror::Error;

/// Common connector errors
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// No live connection to send on
    #[error("Not connected")]
    NotConnected,

    /// Connection did not come up in time
    #[error("Timeout")]
    Timeout,

    /// Transport rejected the message
    #[error("Protocol error: {0}")]
    ProtocolError(String),

    /// Connector settings are unusable
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Transport the publisher drives
#[cfg(feature = "std")]
#[async_trait::async_trait]
pub trait AsyncConnector: Send {
    /// Error type
    type Error;

    /// Send one message
    async fn send(&mut self, topic: &str, data: &[u8]) -> Result<(), Self::Error>;

    /// Send one message the transport should keep for late subscribers.
    /// Transports without retention send it like any other message.
    async fn send_retained(&mut self, topic: &str, data: &[u8]) -> Result<(), Self::Error> {
        self.send(topic, data).await
    }

    /// Check if connected
    fn is_connected(&self) -> bool;

    /// Get connection statistics
    fn stats(&self) -> ConnectionStats;
}

/// Connection statistics common to all connectors
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConnectionStats {
    /// Total messages sent successfully
    pub messages_sent: u64,
    /// Total messages failed to send
    pub messages_failed: u64,
    /// Total bytes sent
    pub bytes_sent: u64,
    /// Number of reconnections
    pub reconnections: u32,
    /// Last error message
    pub last_error: Option<String>,
}

impl ConnectionStats {
    /// Record a successful send of `bytes`
    pub fn record_sent(&mut self, bytes: usize) {
        self.messages_sent += 1;
        self.bytes_sent += bytes as u64;
    }

    /// Record a failed send
    pub fn record_failure(&mut self, error: impl ToString) {
        self.messages_failed += 1;
        self.last_error = Some(error.to_string());
    }
}
