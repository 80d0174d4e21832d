//! HTTP client for a local Ollama-compatible model endpoint
//!
//! Thin async wrapper over the endpoint's REST API: listing installed models
//! and streaming NDJSON generation responses.

use std::time::Duration;

use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PlannerError, Result};

/// Installed model metadata from `GET /api/tags`
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    /// On-disk size in bytes
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub modified_at: String,
    #[serde(default)]
    pub details: ModelDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelDetails {
    #[serde(default)]
    pub parameter_size: String,
    #[serde(default)]
    pub quantization_level: String,
    #[serde(default)]
    pub format: String,
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

/// Generation request body for `POST /api/generate`
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub system: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// One NDJSON chunk of a streaming generation. The final chunk has
/// `done = true` and carries the timing stats.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateChunk {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub done: bool,
    pub eval_count: Option<u64>,
    pub eval_duration: Option<u64>,
}

impl GenerateChunk {
    /// Decoded tokens per second, when the chunk carries timing stats.
    pub fn tokens_per_second(&self) -> Option<f64> {
        match (self.eval_count, self.eval_duration) {
            (Some(count), Some(nanos)) if nanos > 0 => {
                Some(count as f64 / (nanos as f64 / 1e9))
            }
            _ => None,
        }
    }
}

/// Async client for one endpoint instance.
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
}

impl OllamaClient {
    /// Create a client for `http://{host}:{port}`.
    pub fn new(host: &str, port: u16) -> Result<Self> {
        // No overall request timeout: generations stream for minutes.
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            base_url: format!("http://{host}:{port}"),
        })
    }

    /// List the models installed on the endpoint.
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        let url = format!("{}/api/tags", self.base_url);
        debug!(%url, "listing installed models");

        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(PlannerError::EndpointError(format!(
                "HTTP {} from {url}",
                resp.status()
            )));
        }

        let tags: TagsResponse = resp.json().await?;
        Ok(tags.models)
    }

    /// Stream a generation, invoking `on_chunk` for every fragment as it
    /// arrives. Returns the last chunk seen (the `done` one on a clean
    /// finish) so the caller can report timing stats.
    pub async fn generate<F>(
        &self,
        request: &GenerateRequest,
        mut on_chunk: F,
    ) -> Result<Option<GenerateChunk>>
    where
        F: FnMut(&GenerateChunk),
    {
        let url = format!("{}/api/generate", self.base_url);
        debug!(%url, model = %request.model, "starting streamed generation");

        let resp = self.http.post(&url).json(request).send().await?;
        if !resp.status().is_success() {
            return Err(PlannerError::EndpointError(format!(
                "HTTP {} from {url}",
                resp.status()
            )));
        }

        let mut stream = resp.bytes_stream();
        let mut buf: Vec<u8> = Vec::new();
        let mut last = None;

        while let Some(bytes) = stream.next().await {
            buf.extend_from_slice(&bytes?);

            // The endpoint emits one JSON object per line.
            while let Some(pos) = buf.iter().position(|&b| b == b'\n') {
                let line: Vec<u8> = buf.drain(..=pos).collect();
                let line = String::from_utf8_lossy(&line);
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let chunk: GenerateChunk = serde_json::from_str(line)?;
                on_chunk(&chunk);
                let done = chunk.done;
                last = Some(chunk);
                if done {
                    return Ok(last);
                }
            }
        }

        Ok(last)
    }
}
