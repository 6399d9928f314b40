//! MQTT connector for wxgate
//!
//! Wraps a rumqttc [`AsyncClient`]. The client's event loop runs on its own
//! tokio task for the lifetime of the connector; it keeps the connection alive
//! and reconnects after failures. [`MqttConnector::connect`] returns once the
//! broker has acknowledged the first connection.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use rumqttc::{AsyncClient, Event, EventLoop, MqttOptions, Packet};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub use rumqttc::QoS;

use crate::{AsyncConnector, ConnectionStats, ConnectorError};

/// Pause between reconnection attempts after a connection error
const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// MQTT configuration
#[derive(Debug, Clone)]
pub struct MqttConfig {
    /// Broker host name or address
    pub host: String,
    /// Broker port
    pub port: u16,
    /// Client identifier
    pub client_id: String,
    /// Username and password
    pub credentials: Option<(String, String)>,
    /// Keep-alive interval
    pub keep_alive: Duration,
    /// Quality of service for every publish
    pub qos: QoS,
    /// How long `connect` waits for the broker
    pub connect_timeout: Duration,
    /// Outgoing request queue length
    pub capacity: usize,
}

impl MqttConfig {
    /// Create new configuration for a broker
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            client_id: format!("wxgate-{}", wxgate_core::VERSION),
            credentials: None,
            keep_alive: Duration::from_secs(60),
            qos: QoS::AtLeastOnce,
            connect_timeout: Duration::from_secs(10),
            capacity: 64,
        }
    }

    /// Set the client identifier
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    /// Set username and password
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some((username.into(), password.into()));
        self
    }

    /// Set keep-alive in seconds
    pub fn keep_alive_secs(mut self, secs: u64) -> Self {
        self.keep_alive = Duration::from_secs(secs);
        self
    }

    /// Set the publish QoS
    pub fn qos(mut self, qos: QoS) -> Self {
        self.qos = qos;
        self
    }

    /// Set the connect timeout in seconds
    pub fn connect_timeout_secs(mut self, secs: u64) -> Self {
        self.connect_timeout = Duration::from_secs(secs);
        self
    }

    /// Check the settings before opening a connection
    pub fn validate(&self) -> Result<(), ConnectorError> {
        if self.host.trim().is_empty() {
            return Err(ConnectorError::ConfigError("Broker host is empty".into()));
        }
        if self.port == 0 {
            return Err(ConnectorError::ConfigError("Broker port must be non-zero".into()));
        }
        if self.client_id.is_empty() {
            return Err(ConnectorError::ConfigError("Client id is empty".into()));
        }
        // rumqttc rejects keep-alives under 5 seconds
        if self.keep_alive < Duration::from_secs(5) {
            return Err(ConnectorError::ConfigError("Keep-alive must be at least 5 seconds".into()));
        }
        if self.capacity == 0 {
            return Err(ConnectorError::ConfigError("Capacity must be non-zero".into()));
        }
        Ok(())
    }

    fn options(&self) -> MqttOptions {
        let mut options = MqttOptions::new(self.client_id.clone(), self.host.clone(), self.port);
        options.set_keep_alive(self.keep_alive);
        if let Some((username, password)) = &self.credentials {
            options.set_credentials(username.clone(), password.clone());
        }
        options
    }
}

/// MQTT connector
pub struct MqttConnector {
    client: AsyncClient,
    qos: QoS,
    connected: Arc<AtomicBool>,
    stats: Arc<Mutex<ConnectionStats>>,
    event_loop: JoinHandle<()>,
}

impl MqttConnector {
    /// Connect to the broker and wait for its acknowledgement
    pub async fn connect(config: MqttConfig) -> Result<Self, ConnectorError> {
        config.validate()?;

        let (client, event_loop) = AsyncClient::new(config.options(), config.capacity);
        let connected = Arc::new(AtomicBool::new(false));
        let stats = Arc::new(Mutex::new(ConnectionStats::default()));
        let (ready_tx, ready_rx) = oneshot::channel();

        let event_loop = tokio::spawn(drive(
            event_loop,
            Arc::clone(&connected),
            Arc::clone(&stats),
            ready_tx,
        ));

        match tokio::time::timeout(config.connect_timeout, ready_rx).await {
            Ok(Ok(())) => {
                log::debug!("Connected to {}:{}", config.host, config.port);
                Ok(Self {
                    client,
                    qos: config.qos,
                    connected,
                    stats,
                    event_loop,
                })
            }
            Ok(Err(_)) => {
                event_loop.abort();
                Err(ConnectorError::NotConnected)
            }
            Err(_) => {
                event_loop.abort();
                Err(ConnectorError::Timeout)
            }
        }
    }

    async fn publish(&mut self, topic: &str, data: &[u8], retain: bool) -> Result<(), ConnectorError> {
        let result = self
            .client
            .publish(topic, self.qos, retain, data.to_vec())
            .await
            .map_err(|e| ConnectorError::ProtocolError(e.to_string()));

        let mut stats = self.stats.lock().unwrap_or_else(PoisonError::into_inner);
        match &result {
            Ok(()) => stats.record_sent(data.len()),
            Err(error) => {
                log::warn!("Publish to {} failed: {}", topic, error);
                stats.record_failure(error);
            }
        }
        result
    }
}

impl Drop for MqttConnector {
    fn drop(&mut self) {
        self.event_loop.abort();
    }
}

/// Poll the event loop forever, tracking connection state
async fn drive(
    mut event_loop: EventLoop,
    connected: Arc<AtomicBool>,
    stats: Arc<Mutex<ConnectionStats>>,
    ready: oneshot::Sender<()>,
) {
    let mut ready = Some(ready);

    loop {
        match event_loop.poll().await {
            Ok(Event::Incoming(Packet::ConnAck(_))) => {
                let was_connected_before = ready.is_none();
                connected.store(true, Ordering::Release);
                if let Some(ready) = ready.take() {
                    let _ = ready.send(());
                }
                if was_connected_before {
                    stats.lock().unwrap_or_else(PoisonError::into_inner).reconnections += 1;
                }
            }
            Ok(_) => {}
            Err(error) => {
                connected.store(false, Ordering::Release);
                log::warn!("MQTT connection error: {}", error);
                stats.lock().unwrap_or_else(PoisonError::into_inner).last_error = Some(error.to_string());
                tokio::time::sleep(RECONNECT_DELAY).await;
            }
        }
    }
}

#[async_trait::async_trait]
impl AsyncConnector for MqttConnector {
    type Error = ConnectorError;

    async fn send(&mut self, topic: &str, data: &[u8]) -> Result<(), Self::Error> {
        self.publish(topic, data, false).await
    }

    async fn send_retained(&mut self, topic: &str, data: &[u8]) -> Result<(), Self::Error> {
        self.publish(topic, data, true).await
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }

    fn stats(&self) -> ConnectionStats {
        self.stats.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}
