use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;

use super::{deserialize_addr, deserialize_duration};

/// Settings for the MQTT-facing listener the gateway exposes to devices.
#[derive(Debug, Clone, Deserialize)]
pub struct Listener {
    #[serde(default = "Listener::name_default")]
    pub name: String,
    #[serde(default = "Listener::addr_default", deserialize_with = "deserialize_addr")]
    pub addr: SocketAddr,
    #[serde(default = "Listener::max_connections_default")]
    pub max_connections: usize,
    #[serde(default = "Listener::handshake_timeout_default", deserialize_with = "deserialize_duration")]
    pub handshake_timeout: Duration,

    /// This certificate is used to authenticate the gateway during TLS handshakes.
    #[serde(default)]
    pub cert: Option<String>,
    /// This key is used to establish a secure connection with the device.
    #[serde(default)]
    pub key: Option<String>,

    /// Transport-security versions accepted during the TLS handshake.
    /// Left empty here, the policy default is substituted at assembly.
    #[serde(default)]
    pub secure_protocols: Vec<String>,
}

impl Default for Listener {
    #[inline]
    fn default() -> Self {
        Self {
            name: Self::name_default(),
            addr: Self::addr_default(),
            max_connections: Self::max_connections_default(),
            handshake_timeout: Self::handshake_timeout_default(),
            cert: None,
            key: None,
            secure_protocols: Vec::new(),
        }
    }
}

impl Listener {
    fn name_default() -> String {
        "gateway/mqtt".into()
    }
    #[inline]
    fn addr_default() -> SocketAddr {
        ([0, 0, 0, 0], 8883).into()
    }
    #[inline]
    fn max_connections_default() -> usize {
        1024000
    }
    #[inline]
    fn handshake_timeout_default() -> Duration {
        Duration::from_secs(15)
    }

    /// Whether TLS material has been supplied for this listener.
    #[inline]
    pub fn tls_enabled(&self) -> bool {
        self.cert.is_some() || self.key.is_some()
    }
}
