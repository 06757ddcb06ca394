use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{parse_llm_provider_model, LlmConfig};
use crate::error::{MemoError, Result};
use crate::llm::api::{default_base_url, LlmApiClient};

/// The single outbound dependency of the generation pipeline: prompt in,
/// raw text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmBackend {
    OpenAI,
    OpenRouter,
    Ollama,
    LmStudio,
    Gemini,
    OpenAICompatible { base_url: String },
    Unavailable { reason: String },
}

#[derive(Debug, Clone)]
pub struct LlmProvider {
    backend: LlmBackend,
    config: Arc<LlmConfig>,
}

impl LlmProvider {
    pub fn new(config: &LlmConfig) -> Self {
        let (provider, _model) = parse_llm_provider_model(&config.model);

        let backend = match provider.to_lowercase().as_str() {
            "openai" => LlmBackend::OpenAI,
            "openrouter" => LlmBackend::OpenRouter,
            "ollama" => LlmBackend::Ollama,
            "lmstudio" => LlmBackend::LmStudio,
            "gemini" => LlmBackend::Gemini,
            _ => {
                if let Some(base_url) = &config.base_url {
                    LlmBackend::OpenAICompatible {
                        base_url: base_url.clone(),
                    }
                } else {
                    LlmBackend::Unavailable {
                        reason: format!(
                            "Unknown provider in model '{}' and LLM_BASE_URL is not set",
                            config.model
                        ),
                    }
                }
            }
        };

        Self {
            backend,
            config: Arc::new(config.clone()),
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self.backend, LlmBackend::Unavailable { .. })
    }

    pub fn backend(&self) -> &LlmBackend {
        &self.backend
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    pub fn base_url(&self) -> Option<&str> {
        if let Some(base_url) = self.config.base_url.as_deref() {
            return Some(base_url);
        }
        match &self.backend {
            LlmBackend::Unavailable { .. } => None,
            LlmBackend::OpenAICompatible { base_url } => Some(base_url.as_str()),
            _ => {
                let (provider, _) = parse_llm_provider_model(&self.config.model);
                Some(default_base_url(provider))
            }
        }
    }

    pub async fn complete(&self, prompt: &str) -> Result<String> {
        if let LlmBackend::Unavailable { reason } = &self.backend {
            return Err(MemoError::Configuration(reason.clone()));
        }

        let client = LlmApiClient::new(&self.config)?;
        client.complete(prompt).await
    }
}

#[async_trait]
impl TextGenerator for LlmProvider {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.complete(prompt).await
    }
}
