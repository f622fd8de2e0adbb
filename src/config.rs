// ABOUTME: Configuration loading for plainchat.
// ABOUTME: Reads ~/.plainchat/config.toml, environment overrides, and CLI overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::generate::GenerationConfig;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub sampling: SamplingConfig,
}

/// Generation backend configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub backend: String,
    pub model: String,
    pub base_url: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            backend: "ollama".to_string(),
            model: "gpt2".to_string(),
            base_url: "http://localhost:11434".to_string(),
        }
    }
}

/// Startup values for the four sampling knobs; the operator adjusts them live
/// in the settings row afterwards.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub repetition_penalty: f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            max_new_tokens: 120,
            temperature: 0.5,
            top_p: 0.9,
            repetition_penalty: 1.15,
        }
    }
}

impl Config {
    /// Load config from ~/.plainchat/config.toml, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from an explicit path, then apply environment overrides.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        // .env has already been loaded by the app at this point.
        if let Ok(url) = std::env::var("PLAINCHAT_BASE_URL") {
            if !url.is_empty() {
                config.generator.base_url = url;
            }
        }

        Ok(config)
    }

    /// Path to the config file.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Directory holding config and logs.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".plainchat")
    }

    /// Initial knob values, clamped into their declared ranges.
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            max_new_tokens: self.sampling.max_new_tokens,
            temperature: self.sampling.temperature,
            top_p: self.sampling.top_p,
            repetition_penalty: self.sampling.repetition_penalty,
        }
        .clamped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.generator.backend, "ollama");
        assert_eq!(config.generator.base_url, "http://localhost:11434");
        assert_eq!(config.sampling.max_new_tokens, 120);
    }

    #[test]
    fn parse_config_toml() {
        let toml_str = r#"
[generator]
backend = "ollama"
model = "llama3.2"
base_url = "http://10.0.0.5:11434"

[sampling]
max_new_tokens = 200
temperature = 0.8
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generator.model, "llama3.2");
        assert_eq!(config.generator.base_url, "http://10.0.0.5:11434");
        assert_eq!(config.sampling.max_new_tokens, 200);
        assert_eq!(config.sampling.temperature, 0.8);
    }

    #[test]
    fn parse_partial_config_uses_defaults() {
        let toml_str = r#"
[generator]
model = "mistral"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generator.model, "mistral");
        assert_eq!(config.generator.backend, "ollama");
        assert_eq!(config.sampling.top_p, 0.9);
    }

    #[test]
    fn load_from_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.generator.backend, "ollama");
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[generator]\nmodel = \"tinyllama\"\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.generator.model, "tinyllama");
    }

    #[test]
    fn generation_config_clamps_file_values() {
        let config: Config = toml::from_str(
            r#"
[sampling]
max_new_tokens = 9999
temperature = 0.0
"#,
        )
        .unwrap();
        let generation = config.generation_config();
        assert_eq!(generation.max_new_tokens, 300);
        assert_eq!(generation.temperature, 0.1);
    }
}
