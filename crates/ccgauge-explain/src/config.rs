use std::time::Duration;

#[derive(Debug, Clone)]
pub struct OpenAiChatConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl OpenAiChatConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.openai.com".to_string(),
            model: model.into(),
            timeout: Duration::from_secs(15),
            temperature: 0.3,
            max_tokens: 400,
        }
    }
}

#[derive(Debug, Clone)]
pub enum NarrativeProviderConfig {
    OpenAiCompatible(OpenAiChatConfig),
}
