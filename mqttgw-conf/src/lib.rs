#![deny(unsafe_code)]

//! Configuration schemas and binding for the mqttgw protocol gateway.
//!
//! The raw configuration source is a key-prefixed namespace (files plus
//! `MQTTGW_*` environment variables); each schema binds its own prefix and
//! resolves unsupplied fields to documented defaults. Binding says nothing
//! about whether the sections are jointly usable; that check belongs to the
//! assembler in the core crate.

use std::time::Duration;

use bytestring::ByteString;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use self::listener::Listener;
use self::logging::Log;
use self::options::Options;

pub mod listener;
pub mod logging;
pub mod options;
pub mod tls;
pub mod utils;

pub use utils::{deserialize_addr, deserialize_duration, to_duration};

/// All gateway settings, bound once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub mqtt: Listener,
    pub amqp: AmqpClient,
    pub device: DeviceIdentity,
    pub log: Log,
    pub opts: Options,
}

impl Settings {
    /// Materialize the raw configuration source: layered config files and
    /// environment variables, lowest priority first.
    pub fn raw_source(opts: &Options) -> Result<Config, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::with_name("/etc/mqttgw/mqttgw").required(false))
            .add_source(File::with_name("mqttgw").required(false))
            .add_source(
                Environment::with_prefix("mqttgw")
                    .try_parsing(true)
                    .list_separator(" ")
                    .with_list_parse_key("mqtt.secure_protocols"),
            );

        if let Some(cfg) = opts.cfg_name.as_ref() {
            builder = builder.add_source(File::with_name(cfg).required(true));
        }

        builder.build()
    }

    /// Bind all sections from an already-materialized raw source, then apply
    /// command-line overrides.
    pub fn bind(raw: &Config, opts: Options) -> Result<Self, ConfigError> {
        let mqtt = Listener::bind(raw)?;
        let mut amqp = AmqpClient::bind(raw)?;
        let mut device = DeviceIdentity::bind(raw)?;
        let log = Log::bind(raw)?;

        //Command line configuration overriding file configuration
        if let Some(device_id) = opts.device_id.as_ref() {
            device.device_id = ByteString::from(device_id.as_str());
        }
        if let Some(amqp_host) = opts.amqp_host.as_ref() {
            amqp.host.clone_from(amqp_host);
        }

        Ok(Self { mqtt, amqp, device, log, opts })
    }
}

/// Bind one schema from its prefix in the raw source. A missing section falls
/// back to the schema defaults unless the implementor overrides `required()`.
trait BindPrefix: Sized + Default + for<'de> Deserialize<'de> {
    const PREFIX: &'static str;

    fn required() -> bool {
        false
    }

    fn bind(raw: &Config) -> Result<Self, ConfigError> {
        match raw.get::<Self>(Self::PREFIX) {
            Err(ConfigError::NotFound(key)) if !Self::required() => {
                log::debug!("section {key:?} not configured, defaults apply");
                Ok(Self::default())
            }
            other => other,
        }
    }
}

impl BindPrefix for Listener {
    const PREFIX: &'static str = "mqtt";
}

impl BindPrefix for Log {
    const PREFIX: &'static str = "log";
}

impl Listener {
    pub fn bind(raw: &Config) -> Result<Self, ConfigError> {
        <Self as BindPrefix>::bind(raw)
    }
}

impl Log {
    pub fn bind(raw: &Config) -> Result<Self, ConfigError> {
        <Self as BindPrefix>::bind(raw)
    }
}

/// Settings for the AMQP-facing backend connection.
#[derive(Debug, Clone, Deserialize)]
pub struct AmqpClient {
    /// Backend host, mandatory.
    pub host: String,
    #[serde(default = "AmqpClient::port_default")]
    pub port: u16,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub tls: bool,
    #[serde(default = "AmqpClient::connect_timeout_default", deserialize_with = "deserialize_duration")]
    pub connect_timeout: Duration,
    #[serde(default = "AmqpClient::request_timeout_default", deserialize_with = "deserialize_duration")]
    pub request_timeout: Duration,
    /// Reconnect attempts before giving up; unlimited when unset.
    #[serde(default)]
    pub reconnect_limit: Option<usize>,
}

impl Default for AmqpClient {
    #[inline]
    fn default() -> Self {
        Self {
            host: String::new(),
            port: Self::port_default(),
            username: None,
            password: None,
            tls: false,
            connect_timeout: Self::connect_timeout_default(),
            request_timeout: Self::request_timeout_default(),
            reconnect_limit: None,
        }
    }
}

impl BindPrefix for AmqpClient {
    const PREFIX: &'static str = "amqp";

    // The backend host has no usable default, the section must exist.
    fn required() -> bool {
        true
    }
}

impl AmqpClient {
    fn port_default() -> u16 {
        5672
    }
    #[inline]
    fn connect_timeout_default() -> Duration {
        Duration::from_secs(10)
    }
    #[inline]
    fn request_timeout_default() -> Duration {
        Duration::from_secs(30)
    }

    pub fn bind(raw: &Config) -> Result<Self, ConfigError> {
        <Self as BindPrefix>::bind(raw)
    }
}

/// The single statically configured device identity that inbound MQTT
/// connections are authenticated against. Not a device registry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceIdentity {
    #[serde(default)]
    pub device_id: ByteString,
    #[serde(default)]
    pub password: Option<String>,
}

impl BindPrefix for DeviceIdentity {
    const PREFIX: &'static str = "device";
}

impl DeviceIdentity {
    pub fn bind(raw: &Config) -> Result<Self, ConfigError> {
        <Self as BindPrefix>::bind(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn raw(toml: &str) -> Config {
        Config::builder().add_source(File::from_str(toml, FileFormat::Toml)).build().unwrap()
    }

    #[test]
    fn test_bind_defaults() {
        let raw = raw(
            r#"
            [amqp]
            host = "amqp.example.org"
            "#,
        );
        let settings = Settings::bind(&raw, Options::default()).unwrap();
        assert_eq!(settings.mqtt.addr, ([0, 0, 0, 0], 8883).into());
        assert_eq!(settings.mqtt.name, "gateway/mqtt");
        assert!(settings.mqtt.secure_protocols.is_empty());
        assert_eq!(settings.amqp.port, 5672);
        assert_eq!(settings.amqp.connect_timeout, Duration::from_secs(10));
        assert!(settings.device.device_id.is_empty());
    }

    #[test]
    fn test_bind_explicit_values() {
        let raw = raw(
            r#"
            [mqtt]
            addr = "127.0.0.1:18883"
            handshake_timeout = "30s"
            secure_protocols = ["TLSv1.2", "TLSv1.3"]

            [amqp]
            host = "amqp.example.org"
            port = 5671
            username = "gw"
            password = "secret"
            tls = true
            connect_timeout = "5s"
            reconnect_limit = 3

            [device]
            device_id = "demo-1"
            password = "demo-secret"
            "#,
        );
        let settings = Settings::bind(&raw, Options::default()).unwrap();
        assert_eq!(settings.mqtt.addr, ([127, 0, 0, 1], 18883).into());
        assert_eq!(settings.mqtt.handshake_timeout, Duration::from_secs(30));
        assert_eq!(settings.mqtt.secure_protocols, vec!["TLSv1.2".to_owned(), "TLSv1.3".to_owned()]);
        assert_eq!(settings.amqp.port, 5671);
        assert!(settings.amqp.tls);
        assert_eq!(settings.amqp.connect_timeout, Duration::from_secs(5));
        assert_eq!(settings.amqp.reconnect_limit, Some(3));
        assert_eq!(&*settings.device.device_id, "demo-1");
    }

    #[test]
    fn test_bind_missing_amqp_section() {
        let raw = raw("[mqtt]\naddr = \"0.0.0.0:8883\"\n");
        assert!(Settings::bind(&raw, Options::default()).is_err());
    }

    #[test]
    fn test_bind_missing_amqp_host() {
        let raw = raw("[amqp]\nport = 5672\n");
        let err = Settings::bind(&raw, Options::default()).unwrap_err();
        assert!(err.to_string().contains("host"), "unexpected error: {err}");
    }

    #[test]
    fn test_bind_bad_port_shape() {
        let raw = raw("[amqp]\nhost = \"h\"\nport = \"not-a-port\"\n");
        assert!(Settings::bind(&raw, Options::default()).is_err());
    }

    #[test]
    fn test_options_override_binding() {
        let raw = raw(
            r#"
            [amqp]
            host = "file.example.org"

            [device]
            device_id = "from-file"
            "#,
        );
        let opts = Options {
            device_id: Some("from-cli".into()),
            amqp_host: Some("cli.example.org".into()),
            ..Default::default()
        };
        let settings = Settings::bind(&raw, opts).unwrap();
        assert_eq!(&*settings.device.device_id, "from-cli");
        assert_eq!(settings.amqp.host, "cli.example.org");
    }
}
