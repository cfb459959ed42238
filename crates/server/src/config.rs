use shared_types::{AppConfig, FeatureFlags};
use std::path::Path;
use std::sync::OnceLock;

static FLAGS: OnceLock<FeatureFlags> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Parse flags from a config file. A missing or malformed file turns every
/// flag off.
pub fn read_feature_flags(path: &Path) -> FeatureFlags {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
            Ok(config) => config.features,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "config unparseable, all flags off");
                FeatureFlags::default()
            }
        },
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "config not found, all flags off");
            FeatureFlags::default()
        }
    }
}

/// Load `config.toml` into the global flags. Only the first call has effect.
pub fn load_feature_flags() {
    let flags = FLAGS.get_or_init(|| read_feature_flags(Path::new(CONFIG_PATH)));
    tracing::info!(?flags, "feature flags loaded");
}

/// Loaded flags, or all-off defaults before `load_feature_flags()` runs.
pub fn feature_flags() -> &'static FeatureFlags {
    static DEFAULT: FeatureFlags = FeatureFlags {
        contact_relay: false,
        telemetry: false,
    };
    FLAGS.get().unwrap_or(&DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_disables_everything() {
        let flags = read_feature_flags(Path::new("/nonexistent/groupdeliver.toml"));
        assert_eq!(flags, FeatureFlags::default());
    }

    #[test]
    fn reads_flags_from_file() {
        let path = std::env::temp_dir().join(format!("gd-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[features]\ncontact_relay = true\n").unwrap();
        let flags = read_feature_flags(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(flags.contact_relay);
        assert!(!flags.telemetry);
    }

    #[test]
    fn malformed_file_disables_everything() {
        let path = std::env::temp_dir().join(format!("gd-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "[features\ncontact_relay = ").unwrap();
        let flags = read_feature_flags(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }
}
