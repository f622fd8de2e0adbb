// ABOUTME: Generation boundary — sampling config, the Generator trait, and the backend factory.
// ABOUTME: The rest of the crate depends only on this seam, never on a concrete backend.

pub mod http;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::GeneratorConfig;

/// The four sampling knobs, each set directly by the operator per request.
///
/// Values always sit inside their declared ranges; the UI steppers clamp on
/// every adjustment, so the core logic never validates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub repetition_penalty: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_new_tokens: 120,
            temperature: 0.5,
            top_p: 0.9,
            repetition_penalty: 1.15,
        }
    }
}

/// One adjustable sampling parameter, with its UI range and step size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    MaxNewTokens,
    Temperature,
    TopP,
    RepetitionPenalty,
}

impl Param {
    pub const ALL: [Param; 4] = [
        Param::MaxNewTokens,
        Param::Temperature,
        Param::TopP,
        Param::RepetitionPenalty,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Param::MaxNewTokens => "max tokens",
            Param::Temperature => "temp",
            Param::TopP => "top-p",
            Param::RepetitionPenalty => "repeat",
        }
    }
}

impl GenerationConfig {
    /// Display the current value of one knob.
    pub fn display(&self, param: Param) -> String {
        match param {
            Param::MaxNewTokens => self.max_new_tokens.to_string(),
            Param::Temperature => format!("{:.2}", self.temperature),
            Param::TopP => format!("{:.2}", self.top_p),
            Param::RepetitionPenalty => format!("{:.2}", self.repetition_penalty),
        }
    }

    /// Nudge one knob up or down by its step, clamped to its range.
    pub fn step(&mut self, param: Param, up: bool) {
        let dir = if up { 1.0 } else { -1.0 };
        match param {
            Param::MaxNewTokens => {
                let delta: i64 = if up { 10 } else { -10 };
                self.max_new_tokens = (self.max_new_tokens as i64 + delta).clamp(20, 300) as u32;
            }
            Param::Temperature => {
                self.temperature = round2((self.temperature + 0.1 * dir).clamp(0.1, 1.0));
            }
            Param::TopP => {
                self.top_p = round2((self.top_p + 0.05 * dir).clamp(0.1, 1.0));
            }
            Param::RepetitionPenalty => {
                self.repetition_penalty =
                    round2((self.repetition_penalty + 0.05 * dir).clamp(1.0, 2.0));
            }
        }
    }

    /// Clamp every knob into its declared range. Applied once to config-file
    /// values so out-of-range defaults can't leak past the input layer.
    pub fn clamped(mut self) -> Self {
        self.max_new_tokens = self.max_new_tokens.clamp(20, 300);
        self.temperature = self.temperature.clamp(0.1, 1.0);
        self.top_p = self.top_p.clamp(0.1, 1.0);
        self.repetition_penalty = self.repetition_penalty.clamp(1.0, 2.0);
        self
    }
}

/// Round to two decimals so repeated stepping doesn't accumulate float drift.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// External text-generation collaborator.
///
/// `generate` is a single blocking round-trip from the caller's point of view:
/// it resolves once the whole continuation is available. Implementations
/// return the prompt and continuation concatenated as one string, the shape
/// the answer extractor expects.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> anyhow::Result<String>;
}

/// Create the generator named by config. Built once per process at startup and
/// shared read-only afterwards; tests bypass this and inject their own stub.
pub fn create_generator(config: &GeneratorConfig) -> anyhow::Result<Arc<dyn Generator>> {
    match config.backend.as_str() {
        "ollama" => Ok(Arc::new(http::HttpGenerator::new(
            &config.base_url,
            &config.model,
        )?)),
        other => anyhow::bail!("Unknown generation backend: '{}'. Expected: ollama", other),
    }
}
