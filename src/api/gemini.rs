//! Gemini generateContent API types

use serde::{Deserialize, Serialize};

/// One text part of a content block
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Part {
    pub text: String,
}

/// Content block: a list of parts
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Request envelope for the generateContent endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Wrap a prompt in the single content/part envelope Gemini expects.
    /// The prompt text is carried through unmodified.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

/// One generated response option
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Candidate {
    pub content: Content,
}

/// Response envelope from the generateContent endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if present.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .first()
            .map(|p| p.text.as_str())
    }
}

/// Models list response from /v1beta/models (used by the connectivity check)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelsResponse {
    #[serde(default)]
    pub models: Vec<ModelInfo>,
}

/// Model entry in the models listing
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_prompt_envelope_shape() {
        let req = GenerateContentRequest::from_prompt("hello");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["contents"].as_array().unwrap().len(), 1);
        assert_eq!(json["contents"][0]["parts"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_from_prompt_preserves_text_exactly() {
        // No trimming or escaping beyond standard JSON encoding
        let prompt = "  \"quoted\"\nnewline\ttab 日本語  ";
        let req = GenerateContentRequest::from_prompt(prompt);
        let encoded = serde_json::to_string(&req).unwrap();
        let decoded: GenerateContentRequest = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.contents[0].parts[0].text, prompt);
    }

    #[test]
    fn test_first_text_extracts_first_candidate() {
        let reply: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    { "content": { "parts": [ { "text": "first" }, { "text": "second" } ] } },
                    { "content": { "parts": [ { "text": "other candidate" } ] } }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(reply.first_text(), Some("first"));
    }

    #[test]
    fn test_first_text_empty_body() {
        let reply: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(reply.first_text(), None);
    }

    #[test]
    fn test_first_text_candidate_without_parts() {
        let reply: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{}}]}"#).unwrap();
        assert_eq!(reply.first_text(), None);
    }

    #[test]
    fn test_models_response_camel_case() {
        let listing: ModelsResponse = serde_json::from_str(
            r#"{"models":[{"name":"models/gemini-2.0-flash","displayName":"Gemini 2.0 Flash"}]}"#,
        )
        .unwrap();
        assert_eq!(listing.models[0].name, "models/gemini-2.0-flash");
        assert_eq!(
            listing.models[0].display_name.as_deref(),
            Some("Gemini 2.0 Flash")
        );
    }
}
