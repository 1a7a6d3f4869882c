use ccgauge_engine::{RunDescription, Verdict};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::OpenAiChatConfig;
use crate::error::ProviderError;
use crate::traits::NarrativeProvider;

const SYSTEM_PROMPT: &str = "You are a concise, technically accurate guardrail \
    composability coach. Respond in Markdown.";

#[derive(Clone)]
pub struct OpenAiChatProvider {
    config: OpenAiChatConfig,
    client: Client,
}

impl OpenAiChatProvider {
    pub fn new(config: OpenAiChatConfig) -> Result<Self, ProviderError> {
        if config.api_key.trim().is_empty() {
            return Err(ProviderError::Config("api_key is empty".to_string()));
        }
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn chat_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn build_prompt(run: &RunDescription, verdict: &Verdict) -> String {
        format!(
            "Given a guardrail composition run and its verdict (label + CC metric), \
             explain what the result means and what the team should do next.\n\n\
             Requirements:\n\
             - Start with a short 2-3 sentence summary.\n\
             - Then 3-5 bullet points with concrete insights.\n\
             - End with 1-2 suggested next tests.\n\
             - Keep it under 250 words.\n\n\
             Run JSON:\n{}\n\nVerdict JSON:\n{}\n",
            run.to_mapping(),
            verdict.to_mapping()
        )
    }
}

#[async_trait::async_trait]
impl NarrativeProvider for OpenAiChatProvider {
    fn name(&self) -> &'static str {
        "openai-compatible"
    }

    async fn explain(
        &self,
        run: &RunDescription,
        verdict: &Verdict,
    ) -> Result<String, ProviderError> {
        let payload = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: Self::build_prompt(run, verdict),
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let res = self
            .client
            .post(self.chat_url())
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, body });
        }

        let parsed: ChatResponse = res.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                ProviderError::InvalidResponse("no message content in choices".to_string())
            })?;

        Ok(content)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}
