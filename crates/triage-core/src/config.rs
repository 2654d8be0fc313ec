use crate::on_error::ErrorPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Oracle provider settings. Credentials are not configuration: the caller
/// supplies the API key when it constructs the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
        }
    }
}

fn default_model() -> String {
    "gemini-pro".to_string()
}

fn default_temperature() -> f32 {
    0.5
}

/// Engine settings, loadable from a YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Inputs longer than this many characters are rejected before any
    /// oracle call.
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,

    /// Enforced minimum spacing between consecutive oracle calls.
    #[serde(default = "default_min_interval_ms")]
    pub min_interval_ms: u64,

    /// What to do when an oracle call fails mid-batch.
    #[serde(default)]
    pub on_error: ErrorPolicy,

    /// Optional bounded-concurrency mode: number of in-flight oracle calls.
    /// `None` keeps the sequential reference behavior.
    #[serde(default)]
    pub parallel: Option<usize>,

    #[serde(default)]
    pub provider: ProviderConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_input_chars: default_max_input_chars(),
            min_interval_ms: default_min_interval_ms(),
            on_error: ErrorPolicy::default(),
            parallel: None,
            provider: ProviderConfig::default(),
        }
    }
}

fn default_max_input_chars() -> usize {
    1000
}

fn default_min_interval_ms() -> u64 {
    1000
}

impl EngineConfig {
    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }

    /// Load from a YAML file. Missing keys fall back to defaults; parse
    /// failures carry the offending path.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config {}: {}", path.display(), e))?;
        let cfg: Self = serde_yaml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("failed to parse config {}: {}", path.display(), e))?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_the_documented_bounds() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.max_input_chars, 1000);
        assert_eq!(cfg.min_interval_ms, 1000);
        assert_eq!(cfg.on_error, ErrorPolicy::FailFast);
        assert!(cfg.parallel.is_none());
        assert_eq!(cfg.provider.model, "gemini-pro");
    }

    #[test]
    fn load_applies_defaults_for_missing_keys() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "max_input_chars: 700").unwrap();
        writeln!(f, "on_error: substitute_indeterminate").unwrap();

        let cfg = EngineConfig::load(f.path()).unwrap();
        assert_eq!(cfg.max_input_chars, 700);
        assert_eq!(cfg.on_error, ErrorPolicy::SubstituteIndeterminate);
        assert_eq!(cfg.min_interval_ms, 1000);
    }

    #[test]
    fn load_reports_parse_failures_with_path() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "max_input_chars: [not a number]").unwrap();

        let err = EngineConfig::load(f.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }
}
