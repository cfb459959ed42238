use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional integrations are active.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function. Every field defaults to `false` so that a
/// missing or incomplete config file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Forward contact-form messages to the server instead of only toasting.
    #[serde(default)]
    pub contact_relay: bool,
    #[serde(default)]
    pub telemetry: bool,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.contact_relay);
        assert!(!flags.telemetry);
    }

    #[test]
    fn deserialize_empty_toml_defaults_all_false() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.features, FeatureFlags::default());
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            contact_relay = true
            "#,
        )
        .unwrap();
        assert!(config.features.contact_relay);
        assert!(!config.features.telemetry);
    }

    #[test]
    fn deserialize_json_with_missing_fields_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }
}
