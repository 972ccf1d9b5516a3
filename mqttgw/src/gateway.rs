use std::sync::Arc;

use anyhow::anyhow;

use mqttgw_conf::listener::Listener;
use mqttgw_conf::{AmqpClient, DeviceIdentity};

use crate::error::AssembleError;

/// The assembled bridge. Owns the three validated configuration objects for
/// its entire lifetime; nothing is mutated after construction, so clones share
/// them freely across threads. Created once per process by the assembler.
#[derive(Debug, Clone)]
pub struct Gateway {
    amqp: Arc<AmqpClient>,
    mqtt: Arc<Listener>,
    device: Arc<DeviceIdentity>,
}

impl Gateway {
    /// Construct the gateway from validated configuration.
    ///
    /// Fails when the listener's TLS material is half-configured; a cert and
    /// key must be supplied together or not at all.
    pub fn new(amqp: AmqpClient, mqtt: Listener, device: DeviceIdentity) -> Result<Self, AssembleError> {
        match (&mqtt.cert, &mqtt.key) {
            (Some(_), None) => {
                return Err(AssembleError::Construction(anyhow!("mqtt.cert is set but mqtt.key is missing")))
            }
            (None, Some(_)) => {
                return Err(AssembleError::Construction(anyhow!("mqtt.key is set but mqtt.cert is missing")))
            }
            _ => {}
        }
        Ok(Self { amqp: Arc::new(amqp), mqtt: Arc::new(mqtt), device: Arc::new(device) })
    }

    #[inline]
    pub fn amqp(&self) -> &AmqpClient {
        &self.amqp
    }

    #[inline]
    pub fn mqtt(&self) -> &Listener {
        &self.mqtt
    }

    #[inline]
    pub fn device(&self) -> &DeviceIdentity {
        &self.device
    }

    pub fn logs(&self) {
        log::info!(
            "mqtt listener \"{}\" on {} (tls: {}), secure_protocols: {:?}",
            self.mqtt.name,
            self.mqtt.addr,
            self.mqtt.tls_enabled(),
            self.mqtt.secure_protocols
        );
        log::info!("amqp backend is {}:{} (tls: {})", self.amqp.host, self.amqp.port, self.amqp.tls);
        log::info!("device_id is {:?}", self.device.device_id);
    }
}
