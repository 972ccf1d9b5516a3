use crate::listener::Listener;

/// Default secure protocol versions accepted by the MQTT listener when the
/// operator has not configured an explicit list.
pub const DEFAULT_SECURE_PROTOCOLS: [&str; 3] = ["TLSv1", "TLSv1.1", "TLSv1.2"];

/// Transport-security versions this gateway recognizes. Entries outside this
/// set are accepted as configured but reported during validation.
pub const KNOWN_SECURE_PROTOCOLS: [&str; 4] = ["TLSv1", "TLSv1.1", "TLSv1.2", "TLSv1.3"];

/// Fill in [`DEFAULT_SECURE_PROTOCOLS`] when no explicit list is configured.
///
/// An explicit non-empty list always wins, with no merging. Idempotent.
pub fn apply_default(listener: &mut Listener) {
    if listener.secure_protocols.is_empty() {
        listener.secure_protocols = DEFAULT_SECURE_PROTOCOLS.iter().map(|p| p.to_string()).collect();
    }
}

#[inline]
pub fn is_known_version(version: &str) -> bool {
    KNOWN_SECURE_PROTOCOLS.contains(&version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_default_when_unset() {
        let mut listener = Listener::default();
        assert!(listener.secure_protocols.is_empty());
        apply_default(&mut listener);
        assert_eq!(listener.secure_protocols, DEFAULT_SECURE_PROTOCOLS.to_vec());

        // Same list, in the same order, every invocation
        let mut other = Listener::default();
        apply_default(&mut other);
        assert_eq!(listener.secure_protocols, other.secure_protocols);
    }

    #[test]
    fn test_apply_default_keeps_explicit_list() {
        let mut listener = Listener { secure_protocols: vec!["TLSv1.2".into()], ..Default::default() };
        apply_default(&mut listener);
        assert_eq!(listener.secure_protocols, vec!["TLSv1.2".to_owned()]);
    }

    #[test]
    fn test_apply_default_idempotent() {
        let mut listener = Listener::default();
        apply_default(&mut listener);
        let once = listener.secure_protocols.clone();
        apply_default(&mut listener);
        assert_eq!(listener.secure_protocols, once);
    }

    #[test]
    fn test_known_versions() {
        assert!(is_known_version("TLSv1.3"));
        assert!(!is_known_version("SSLv3"));
    }
}
