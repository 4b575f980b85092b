use anyhow::Result;
use async_trait::async_trait;
use ollama_rs::generation::completion::request::GenerationRequest;
use ollama_rs::generation::options::GenerationOptions;
use ollama_rs::Ollama;

use crate::{config, profile};

/// Minimal capability the rest of the program needs from a model backend:
/// one prompt in, one text response out.
#[async_trait]
pub trait Generator: Send + Sync {
  async fn generate(&self, prompt: &str) -> Result<String>;
}

pub struct OllamaClient {
  client: Ollama,
  model:  String
}

impl OllamaClient {
  /// Client for the configured endpoint and model.
  pub fn new() -> Self {
    Self::with_endpoint(config::APP.ollama_host(), config::APP.ollama_port(), config::APP.model())
  }

  pub fn with_endpoint(host: String, port: u16, model: String) -> Self {
    Self { client: Ollama::new(host, port), model }
  }
}

impl Default for OllamaClient {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl Generator for OllamaClient {
  async fn generate(&self, prompt: &str) -> Result<String> {
    profile!("Ollama generate");

    let request = GenerationRequest::new(self.model.clone(), prompt.to_string()).options(GenerationOptions::default());

    let res = self.client.generate(request).await?;
    Ok(res.response)
  }
}
