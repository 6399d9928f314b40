//! Payload Publisher
//!
//! ## Overview
//!
//! The publisher is the glue between a gateway upload and a connector:
//!
//! ```text
//! RawPayload ──> calculate() ──> CalculatedReadings ──┬─> JSON blob ───────────> {prefix}/{device}
//!                                                     └─> DescriptorCache ──┬──> .../config (retained)
//!                                                                           ├──> .../state
//!                                                                           └──> .../attributes
//! ```
//!
//! It owns the [`DescriptorCache`], so descriptors are resolved once per device
//! and key for the publisher's lifetime.
//!
//! ## Discovery Payloads
//!
//! Each config message follows the Home Assistant MQTT discovery schema:
//! `name`, `unique_id`, `state_topic`, `unit_of_measurement`, `device_class`,
//! `icon`, the optional `json_attributes_topic`, `payload_on`/`payload_off`
//! for binary sensors, and a `device` block grouping every entity of one
//! gateway.

use serde::Serialize;
use thiserror::Error;
use wxgate_core::battery::{STATE_OFF, STATE_ON};
use wxgate_core::{
    calculate, CalculatedDataPoint, CalculatedReadings, CalculationConfig, Component,
    DescriptorCache, EntityDescriptor, RawPayload,
};

use crate::{AsyncConnector, ConnectorError};

/// Default topic prefix for state and JSON messages
pub const DEFAULT_PREFIX: &str = "wxgate";

/// Default discovery prefix
pub const DEFAULT_DISCOVERY_PREFIX: &str = "homeassistant";

/// Publisher errors
#[derive(Debug, Error)]
pub enum PublishError {
    /// Payload could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Connector failed to send
    #[error("Connector error: {0}")]
    Connector(#[from] ConnectorError),
}

/// What the publisher sends per upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublishMode {
    /// One flat JSON message
    #[default]
    Json,
    /// Discovery config, state and attributes per reading
    Discovery,
}

/// Publisher configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherConfig {
    /// Device identifier used in topics and unique ids
    pub device: String,
    /// Prefix for state and JSON topics
    pub prefix: String,
    /// Prefix for discovery config topics
    pub discovery_prefix: String,
    /// Publishing mode
    pub mode: PublishMode,
}

impl PublisherConfig {
    /// JSON-mode configuration for `device` with default prefixes
    pub fn new(device: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            prefix: DEFAULT_PREFIX.to_string(),
            discovery_prefix: DEFAULT_DISCOVERY_PREFIX.to_string(),
            mode: PublishMode::Json,
        }
    }

    /// Set the state/JSON topic prefix
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the discovery prefix
    pub fn discovery_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.discovery_prefix = prefix.into();
        self
    }

    /// Publish one JSON message per upload
    pub fn json(mut self) -> Self {
        self.mode = PublishMode::Json;
        self
    }

    /// Publish discovery entities
    pub fn discovery(mut self) -> Self {
        self.mode = PublishMode::Discovery;
        self
    }

    /// Topic of the JSON message
    pub fn json_topic(&self) -> String {
        format!("{}/{}", self.prefix, self.device)
    }

    /// Retained discovery config topic for `key`
    pub fn config_topic(&self, component: Component, key: &str) -> String {
        format!("{}/{}/{}/{}/config", self.discovery_prefix, component, self.device, key)
    }

    /// State topic for `key`
    pub fn state_topic(&self, key: &str) -> String {
        format!("{}/{}/{}/state", self.prefix, self.device, key)
    }

    /// Attributes topic for `key`
    pub fn attributes_topic(&self, key: &str) -> String {
        format!("{}/{}/{}/attributes", self.prefix, self.device, key)
    }
}

#[derive(Serialize)]
struct DiscoveryDevice<'a> {
    identifiers: [&'a str; 1],
    name: &'a str,
    sw_version: &'static str,
}

#[derive(Serialize)]
struct DiscoveryConfig<'a> {
    name: &'a str,
    unique_id: String,
    state_topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    json_attributes_topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit_of_measurement: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    device_class: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload_on: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload_off: Option<&'static str>,
    device: DiscoveryDevice<'a>,
}

impl<'a> DiscoveryConfig<'a> {
    fn new(
        config: &'a PublisherConfig,
        key: &'a str,
        descriptor: &EntityDescriptor,
        point: &CalculatedDataPoint,
    ) -> Self {
        let binary = descriptor.component == Component::BinarySensor;
        Self {
            name: key,
            unique_id: format!("{}_{}", config.device, key),
            state_topic: config.state_topic(key),
            json_attributes_topic: (!point.attributes.is_empty()).then(|| config.attributes_topic(key)),
            unit_of_measurement: descriptor.unit,
            device_class: descriptor.device_class,
            icon: descriptor.icon,
            payload_on: binary.then_some(STATE_ON),
            payload_off: binary.then_some(STATE_OFF),
            device: DiscoveryDevice {
                identifiers: [config.device.as_str()],
                name: &config.device,
                sw_version: wxgate_core::VERSION,
            },
        }
    }
}

/// Calculates gateway payloads and publishes them through a connector
pub struct Publisher<C> {
    connector: C,
    config: PublisherConfig,
    calculation: CalculationConfig,
    descriptors: DescriptorCache,
}

impl<C> Publisher<C>
where
    C: AsyncConnector<Error = ConnectorError>,
{
    /// New publisher with an empty descriptor cache
    pub fn new(connector: C, config: PublisherConfig, calculation: CalculationConfig) -> Self {
        Self {
            connector,
            config,
            calculation,
            descriptors: DescriptorCache::new(),
        }
    }

    /// Publisher configuration
    pub fn config(&self) -> &PublisherConfig {
        &self.config
    }

    /// The connector
    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Descriptors resolved so far
    pub fn descriptors(&self) -> &DescriptorCache {
        &self.descriptors
    }

    /// Give back the connector
    pub fn into_connector(self) -> C {
        self.connector
    }

    /// Calculate `payload` and publish it. Returns the number of messages sent.
    pub async fn publish(&mut self, payload: &RawPayload) -> Result<usize, PublishError> {
        let readings = calculate(payload, &self.calculation);
        log::debug!("Publishing {} readings for {}", readings.len(), self.config.device);

        match self.config.mode {
            PublishMode::Json => self.publish_json(&readings).await,
            PublishMode::Discovery => self.publish_discovery(&readings).await,
        }
    }

    async fn publish_json(&mut self, readings: &CalculatedReadings) -> Result<usize, PublishError> {
        let data = serde_json::to_vec(&readings.values())?;
        let topic = self.config.json_topic();
        self.send(&topic, &data, false).await?;
        Ok(1)
    }

    async fn publish_discovery(&mut self, readings: &CalculatedReadings) -> Result<usize, PublishError> {
        let described = readings.describe(&self.config.device, &self.descriptors, &self.calculation);
        let mut sent = 0;

        for (key, descriptor, point) in described {
            let discovery = DiscoveryConfig::new(&self.config, key, &descriptor, point);
            let config_payload = serde_json::to_vec(&discovery)?;
            let config_topic = self.config.config_topic(descriptor.component, key);
            let state_topic = discovery.state_topic.clone();
            let attributes_topic = discovery.json_attributes_topic.clone();

            self.send(&config_topic, &config_payload, true).await?;
            self.send(&state_topic, point.value.to_string().as_bytes(), false).await?;
            sent += 2;

            if let Some(topic) = attributes_topic {
                let attributes = serde_json::to_vec(&point.attributes)?;
                self.send(&topic, &attributes, false).await?;
                sent += 1;
            }
        }

        Ok(sent)
    }

    async fn send(&mut self, topic: &str, data: &[u8], retained: bool) -> Result<(), PublishError> {
        let result = if retained {
            self.connector.send_retained(topic, data).await
        } else {
            self.connector.send(topic, data).await
        };

        result.map_err(|error| {
            log::warn!("Failed to publish {}: {}", topic, error);
            PublishError::Connector(error)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryConnector;
    use wxgate_core::UnitSystem;

    fn payload() -> RawPayload {
        RawPayload::from_pairs([
            ("tempf", "74.2"),
            ("humidity", "31"),
            ("windspeedmph", "14.2"),
            ("leak_ch1", "0"),
        ])
    }

    fn metric() -> CalculationConfig {
        CalculationConfig::builder()
            .output_unit_system(UnitSystem::Metric)
            .build()
            .unwrap()
    }

    #[test]
    fn test_topics() {
        let config = PublisherConfig::new("GW2000A").prefix("weather").discovery_prefix("ha");

        assert_eq!(config.json_topic(), "weather/GW2000A");
        assert_eq!(config.config_topic(Component::BinarySensor, "leak_ch1"), "ha/binary_sensor/GW2000A/leak_ch1/config");
        assert_eq!(config.state_topic("tempf"), "weather/GW2000A/tempf/state");
        assert_eq!(config.attributes_topic("beaufortscale"), "weather/GW2000A/beaufortscale/attributes");
    }

    #[tokio::test]
    async fn test_json_mode() {
        let mut publisher = Publisher::new(MemoryConnector::new(), PublisherConfig::new("GW2000A"), metric());

        assert_eq!(publisher.publish(&payload()).await.unwrap(), 1);

        let messages = publisher.connector().messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].topic, "wxgate/GW2000A");
        assert!(!messages[0].retained);

        let json: serde_json::Value = serde_json::from_slice(&messages[0].payload).unwrap();
        assert_eq!(json["tempf"], 23.4);
        assert_eq!(json["leak_ch1"], "OFF");
        assert!(json["windchill"].is_null());
    }

    #[tokio::test]
    async fn test_discovery_mode() {
        let mut publisher = Publisher::new(
            MemoryConnector::new(),
            PublisherConfig::new("GW2000A").discovery(),
            metric(),
        );
        publisher.publish(&payload()).await.unwrap();

        let connector = publisher.connector();

        let config = connector.message("homeassistant/sensor/GW2000A/tempf/config").unwrap();
        assert!(config.retained);
        let config: serde_json::Value = serde_json::from_slice(&config.payload).unwrap();
        assert_eq!(config["unit_of_measurement"], "°C");
        assert_eq!(config["device_class"], "temperature");
        assert_eq!(config["state_topic"], "wxgate/GW2000A/tempf/state");
        assert_eq!(config["unique_id"], "GW2000A_tempf");
        assert!(config.get("json_attributes_topic").is_none());

        let state = connector.message("wxgate/GW2000A/tempf/state").unwrap();
        assert_eq!(state.payload_str(), Some("23.4"));

        let leak = connector.message("homeassistant/binary_sensor/GW2000A/leak_ch1/config").unwrap();
        let leak: serde_json::Value = serde_json::from_slice(&leak.payload).unwrap();
        assert_eq!(leak["payload_on"], "ON");
        assert_eq!(leak["payload_off"], "OFF");

        let chill = connector.message("wxgate/GW2000A/windchill/state").unwrap();
        assert_eq!(chill.payload_str(), Some("None"));
    }

    #[tokio::test]
    async fn test_attributes_published_when_present() {
        let mut publisher = Publisher::new(
            MemoryConnector::new(),
            PublisherConfig::new("GW2000A").discovery(),
            CalculationConfig::default(),
        );
        publisher.publish(&payload()).await.unwrap();

        let connector = publisher.connector();
        let attributes = connector.message("wxgate/GW2000A/beaufortscale/attributes").unwrap();
        assert_eq!(attributes.payload_str(), Some(r#"{"description":"Moderate breeze"}"#));
        let state = connector.message("wxgate/GW2000A/beaufortscale/state").unwrap();
        assert_eq!(state.payload_str(), Some("4"));

        let config = connector.message("homeassistant/sensor/GW2000A/beaufortscale/config").unwrap();
        let config: serde_json::Value = serde_json::from_slice(&config.payload).unwrap();
        assert_eq!(config["json_attributes_topic"], "wxgate/GW2000A/beaufortscale/attributes");
    }

    #[tokio::test]
    async fn test_descriptors_cached_across_uploads() {
        let mut publisher = Publisher::new(
            MemoryConnector::new(),
            PublisherConfig::new("GW2000A").discovery(),
            metric(),
        );
        publisher.publish(&payload()).await.unwrap();
        let cached = publisher.descriptors().len();
        publisher.publish(&payload()).await.unwrap();

        assert!(cached > 0);
        assert_eq!(publisher.descriptors().len(), cached);
    }

    #[tokio::test]
    async fn test_connector_failure_surfaces() {
        let mut connector = MemoryConnector::new();
        connector.set_connected(false);
        let mut publisher = Publisher::new(connector, PublisherConfig::new("GW2000A"), metric());

        let result = publisher.publish(&payload()).await;
        assert!(matches!(result, Err(PublishError::Connector(ConnectorError::NotConnected))));
    }
}
