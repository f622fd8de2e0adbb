// ABOUTME: HTTP generation backend — raw completions against an Ollama-style /api/generate.
// ABOUTME: Returns the prompt and continuation concatenated, matching the Generator contract.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::generate::{GenerationConfig, Generator};

/// A generation call can sit behind a slow local model; give it plenty of room.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Backend speaking the Ollama generate API in raw mode.
///
/// Raw mode bypasses the server-side chat template, so the prompt text built
/// by the prompt builder reaches the model verbatim and stopping is governed
/// by the model's own end-of-sequence token. That is fixed at construction,
/// never per request.
pub struct HttpGenerator {
    client: reqwest::Client,
    endpoint: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    raw: bool,
    stream: bool,
    options: SamplingOptions,
}

#[derive(Serialize)]
struct SamplingOptions {
    num_predict: u32,
    temperature: f64,
    top_p: f64,
    repeat_penalty: f64,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl HttpGenerator {
    pub fn new(base_url: &str, model: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/api/generate", base_url.trim_end_matches('/')),
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl Generator for HttpGenerator {
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> anyhow::Result<String> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            raw: true,
            stream: false,
            options: SamplingOptions {
                num_predict: config.max_new_tokens,
                temperature: config.temperature,
                top_p: config.top_p,
                repeat_penalty: config.repetition_penalty,
            },
        };

        tracing::debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            max_new_tokens = config.max_new_tokens,
            "sending generation request"
        );

        let response: GenerateResponse = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        // The server returns only the continuation; the extractor works on
        // prompt + continuation as one string.
        Ok(format!("{}{}", prompt, response.response))
    }
}
