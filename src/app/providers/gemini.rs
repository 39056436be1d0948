use crate::config::toml_config::ProviderSection;
use crate::core::schema::parse_menu_payload;
use crate::domain::model::{MenuSet, Theme};
use crate::domain::ports::ContentProvider;
use crate::utils::error::{MenuError, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

pub const PROVIDER_NAME: &str = "gemini";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Content provider backed by the Gemini `generateContent` endpoint.
pub struct GeminiProvider {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiProvider {
    pub fn new(settings: &ProviderSection) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_key: settings.api_key.clone().filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn request_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    fn request_body(theme: Theme) -> Value {
        json!({
            "systemInstruction": {
                "parts": [{ "text": system_instruction(theme) }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": format!("Generate the menu for theme: {}", theme.label()) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema()
            }
        })
    }
}

fn system_instruction(theme: Theme) -> String {
    format!(
        "You are a world-class menu engineer and chef.\n\
         Create a list of 10 distinct, gourmet dishes for a restaurant with the theme: \"{}\".\n\
         The output must be in Russian language.\n\n\
         You must designate:\n\
         - 1 item as a 'special' (High profit, visually stunning, meant for the optical center).\n\
         - 2 items as 'starter'.\n\
         - 5 items as 'main'.\n\
         - 2 items as 'dessert'.\n\n\
         Also provide a creative Restaurant Name and a short, elegant tagline suitable for an upscale paper menu.\n\
         Prices should be realistic for a high-end restaurant in Rubles (e.g., 850₽, 1200₽).",
        theme.label()
    )
}

fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "restaurantName": { "type": "STRING" },
            "tagline": { "type": "STRING" },
            "dishes": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "INTEGER" },
                        "name": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "price": { "type": "STRING" },
                        "category": {
                            "type": "STRING",
                            "enum": ["starter", "main", "dessert", "special"]
                        },
                        "highlight": {
                            "type": "BOOLEAN",
                            "description": "True if this is a high margin item meant for the golden triangle"
                        }
                    },
                    "required": ["id", "name", "description", "price", "category"]
                }
            }
        },
        "required": ["restaurantName", "tagline", "dishes"]
    })
}

/// Concatenated text parts of the first candidate.
fn extract_text(body: &str) -> Result<String> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| MenuError::malformed("$", format!("unexpected response envelope: {}", e)))?;

    let candidate = parsed
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| MenuError::malformed("candidates", "no candidates returned"))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(MenuError::malformed(
            "candidates[0].content",
            format!(
                "empty response text (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            ),
        ));
    }
    Ok(text)
}

fn remote_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.chars().take(200).collect())
}

#[async_trait::async_trait]
impl ContentProvider for GeminiProvider {
    async fn generate(&self, theme: Theme) -> Result<MenuSet> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| MenuError::MissingCredential {
                provider: PROVIDER_NAME.to_string(),
                env_var: API_KEY_ENV.to_string(),
            })?;

        let url = self.request_url();
        tracing::debug!("Requesting menu for theme '{}' from {}", theme.label(), url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&Self::request_body(theme))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Provider response status: {}", status);
        let body = response.text().await?;

        if !status.is_success() {
            return Err(MenuError::RemoteError {
                status: status.as_u16(),
                message: remote_message(&body),
            });
        }

        let text = extract_text(&body)?;
        let menu = parse_menu_payload(&text)?;
        tracing::info!(
            "Generated '{}' with {} dishes",
            menu.restaurant_name,
            menu.dishes.len()
        );
        Ok(menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_carries_theme_and_schema() {
        let body = GeminiProvider::request_body(Theme::FrenchBistro);

        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("Французское Бистро"));

        let instruction = body["systemInstruction"]["parts"][0]["text"].as_str().unwrap();
        assert!(instruction.contains("5 items as 'main'"));

        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(
            config["responseSchema"]["required"],
            json!(["restaurantName", "tagline", "dishes"])
        );
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let body = json!({
            "candidates": [{
                "content": {"parts": [{"text": "{\"a\":"}, {"text": "1}"}]},
                "finishReason": "STOP"
            }]
        })
        .to_string();
        assert_eq!(extract_text(&body).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn test_extract_text_rejects_empty_candidates() {
        let err = extract_text("{\"candidates\": []}").unwrap_err();
        assert!(matches!(err, MenuError::MalformedResponse { .. }));

        let blocked = json!({"candidates": [{"finishReason": "SAFETY"}]}).to_string();
        let err = extract_text(&blocked).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_remote_message_prefers_error_field() {
        let body = json!({"error": {"code": 403, "message": "API key not valid"}}).to_string();
        assert_eq!(remote_message(&body), "API key not valid");
        assert_eq!(remote_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let settings = ProviderSection {
            api_key: Some("  ".to_string()),
            ..ProviderSection::default()
        };
        let provider = GeminiProvider::new(&settings).unwrap();
        assert!(!provider.has_credential());
    }
}
