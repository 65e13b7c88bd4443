//! Reveal configuration system
//!
//! This crate provides centralized configuration management for the reveal
//! engine, loading settings and the named-animation table from `reveal.toml`
//! as an alternative to hard-coded registries.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Main configuration structure for the reveal engine
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RevealConfig {
    /// Engine behavior settings
    pub engine: EngineConfig,
    /// Named animation descriptors, keyed by the name elements reference
    /// through their `data-animation` attribute
    pub animations: BTreeMap<String, AnimationEntry>,
}

/// Engine behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Use the scroll-poll fallback even when the intersection driver is
    /// available
    pub force_fallback: bool,
    /// Intersection ratios at which the driver dispatches records
    pub thresholds: Vec<f64>,
    /// Margin in pixels added around the observation root
    pub root_margin: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            force_fallback: false,
            thresholds: vec![0.0],
            root_margin: 0.0,
        }
    }
}

/// One named animation as declared in `reveal.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationEntry {
    /// Selector for the descendants the styles apply to; absent targets the
    /// element itself
    pub child: Option<String>,
    /// Style block applied in the hidden state, e.g. `"opacity: 0"`
    pub before: String,
    /// Style block applied in the revealed state, e.g. `"opacity: 1"`
    pub after: String,
    /// Incremental per-child transition delay in milliseconds
    pub stagger_ms: u64,
}

impl Default for AnimationEntry {
    fn default() -> Self {
        Self {
            child: None,
            before: String::new(),
            after: String::new(),
            stagger_ms: 0,
        }
    }
}

impl RevealConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the reveal.toml configuration file
    ///
    /// # Returns
    /// * `Ok(RevealConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (reveal.toml in the
    /// current directory) or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("reveal.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// This allows for temporary overrides without modifying the config file.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("REVEAL_FORCE_FALLBACK") {
            self.engine.force_fallback = val == "1" || val.eq_ignore_ascii_case("true");
        }
        if let Ok(val) = std::env::var("REVEAL_ROOT_MARGIN") {
            if let Ok(margin) = val.parse::<f64>() {
                self.engine.root_margin = margin;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RevealConfig::default();
        assert!(!config.engine.force_fallback);
        assert_eq!(config.engine.thresholds, vec![0.0]);
        assert_eq!(config.engine.root_margin, 0.0);
        assert!(config.animations.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_src = r#"
            [engine]
            force_fallback = true
            thresholds = [0.0, 0.5, 1.0]
            root_margin = 16.0

            [animations.fade-up]
            child = ".card"
            before = "opacity: 0; transform: translateY(24px)"
            after = "opacity: 1; transform: translateY(0)"
            stagger_ms = 100

            [animations.pop]
            after = "transform: scale(1)"
        "#;

        let config: RevealConfig = toml::from_str(toml_src).unwrap();
        assert!(config.engine.force_fallback);
        assert_eq!(config.engine.thresholds, vec![0.0, 0.5, 1.0]);

        let fade = &config.animations["fade-up"];
        assert_eq!(fade.child.as_deref(), Some(".card"));
        assert_eq!(fade.stagger_ms, 100);

        // Omitted fields fall back to entry defaults
        let pop = &config.animations["pop"];
        assert!(pop.child.is_none());
        assert!(pop.before.is_empty());
        assert_eq!(pop.stagger_ms, 0);
    }

    #[test]
    fn test_empty_config_is_defaults() {
        let config: RevealConfig = toml::from_str("").unwrap();
        assert_eq!(config.engine.thresholds, vec![0.0]);
        assert!(config.animations.is_empty());
    }
}
