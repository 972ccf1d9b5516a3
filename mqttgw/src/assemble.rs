use config::Config;

use mqttgw_conf::options::Options;
use mqttgw_conf::{tls, Settings};

use crate::error::AssembleError;
use crate::gateway::Gateway;

/// Assemble the gateway from a materialized raw configuration source.
///
/// Binds the configuration sections, applies the secure protocol default,
/// validates, and constructs the [`Gateway`]; any failure aborts assembly with
/// no partial state. Deterministic for identical input, performs no I/O of its
/// own, and is meant to run exactly once at process startup.
pub fn assemble(raw: &Config, opts: Options) -> Result<Gateway, AssembleError> {
    let settings = Settings::bind(raw, opts)?;
    assemble_settings(settings)
}

/// The post-binding steps, for callers that bind early (the binary binds
/// settings before logging is up, matching the settings-then-logger order).
pub fn assemble_settings(mut settings: Settings) -> Result<Gateway, AssembleError> {
    tls::apply_default(&mut settings.mqtt);
    validate(&settings)?;

    let Settings { mqtt, amqp, device, .. } = settings;
    Gateway::new(amqp, mqtt, device)
}

/// Completeness checks across the bound sections. Schemas stay ignorant of
/// each other; whether they are jointly usable is decided here.
fn validate(settings: &Settings) -> Result<(), AssembleError> {
    if settings.amqp.host.is_empty() {
        return Err(AssembleError::validation("amqp.host", "must not be empty"));
    }
    if settings.amqp.port == 0 {
        return Err(AssembleError::validation("amqp.port", "must not be zero"));
    }
    if settings.device.device_id.is_empty() {
        return Err(AssembleError::validation("device.device_id", "must not be empty"));
    }

    // Unrecognized versions are passed through as configured, the listener
    // decides what its TLS stack actually supports.
    for p in &settings.mqtt.secure_protocols {
        if !tls::is_known_version(p) {
            log::warn!("unrecognized secure protocol version {p:?} in mqtt.secure_protocols");
        }
    }
    Ok(())
}
