use config::ConfigError;

/// Startup errors, all fatal. Configuration problems are a human-fixable
/// condition; the process halts rather than run a misconfigured bridge.
#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    /// The raw source could not populate a required field, or a field had an
    /// unparsable shape. The source error names the offending key.
    #[error("configuration binding failed: {0}")]
    Binding(#[from] ConfigError),
    /// Sections bound successfully but fail a completeness or cross-field check.
    #[error("invalid configuration: {field}: {reason}")]
    Validation { field: &'static str, reason: String },
    /// Propagated unchanged from the gateway constructor.
    #[error("gateway construction failed: {0}")]
    Construction(#[source] anyhow::Error),
}

impl AssembleError {
    #[inline]
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        AssembleError::Validation { field, reason: reason.into() }
    }
}
