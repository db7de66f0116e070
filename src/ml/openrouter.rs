use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::services::mood::MoodClassifier;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

const SYSTEM_PROMPT: &str =
    "Kamu adalah ahli analisis emosi yang selalu memberikan jawaban singkat satu kata.";

const INSTRUCTION: &str = "\
Analisis mood dari teks berikut ini. Pilih satu mood yang paling tepat:
bosan = jika terkait kebosanan, kejenuhan, rutinitas
sedih = jika terkait kesedihan, kekecewaan
senang = jika terkait kebahagiaan, keceriaan
semangat = jika terkait antusiasme, energi
takut = jika terkait ketakutan, kecemasan
penasaran = jika terkait rasa ingin tahu
marah = jika terkait kemarahan, kejengkelan
cinta = jika terkait perasaan romantis
tegang = jika terkait ketegangan, stress
Berikan jawaban dalam satu kata saja.";

/// Mood classifier backed by an OpenRouter-style chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct OpenRouterClassifier {
    client: Client,
    api_key: String,
    completions_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    stop: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: String,
}

impl OpenRouterClassifier {
    pub fn new(api_key: &str, config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.classifier_timeout_seconds))
            .build()
            .map_err(|e| {
                ApiError::InternalError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            completions_url: format!(
                "{}/chat/completions",
                config.openrouter_base_url.trim_end_matches('/')
            ),
            model: config.openrouter_model.clone(),
        })
    }
}

#[async_trait]
impl MoodClassifier for OpenRouterClassifier {
    async fn classify(&self, text: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!("{}\nTeks: {}\nMood:", INSTRUCTION, text),
                },
            ],
            max_tokens: 10,
            temperature: 0.1,
            stop: vec!["\n", ".", ",", "!", "?"],
        };

        debug!(model = %self.model, "Sending mood classification request");
        let response = self
            .client
            .post(&self.completions_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                ApiError::ClassifierError(format!("Classifier request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Classifier returned non-success status {}: {}", status, body);
            return Err(ApiError::ClassifierError(format!(
                "Classifier returned status {}",
                status
            )));
        }

        let reply: ChatResponse = response.json().await.map_err(|e| {
            ApiError::ClassifierError(format!("Failed to parse classifier response: {}", e))
        })?;

        let word = reply
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .ok_or_else(|| {
                ApiError::ClassifierError("Classifier returned an empty reply".to_string())
            })?;

        debug!(reply = %word, "Classifier replied");
        Ok(word)
    }
}
