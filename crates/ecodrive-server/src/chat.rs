//! Proxy to the external generative-language chat service.
//!
//! The handler forwards the full conversation plus the fixed system
//! instruction to the `generateContent` endpoint and returns the candidate
//! text verbatim. Every failure path degrades to the fixed fallback reply —
//! chat never surfaces as an HTTP error to the client. Unlike the original
//! deployment, the outbound call carries a request timeout.

use std::time::Duration;

use axum::{Json, extract::State};
use ecodrive_core::{
  chat::{ChatMessage, ChatRole, EMPTY_REPLY, FALLBACK_REPLY, system_instruction},
  store::BlobStore,
};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::AppState;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

// ─── Error ───────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ChatError {
  /// No API key in the server configuration.
  #[error("assistant is not configured")]
  NotConfigured,

  #[error("chat request failed: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("chat endpoint returned status {0}")]
  Status(StatusCode),
}

// ─── Wire format ─────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
  system_instruction: Content,
  contents:           Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
  #[serde(skip_serializing_if = "Option::is_none")]
  role:  Option<ChatRole>,
  parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
  text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
  #[serde(default)]
  candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
  content: Content,
}

/// First candidate's text, or the canned empty-reply line when the service
/// answered without usable text.
fn extract_text(response: GenerateResponse) -> String {
  let text = response
    .candidates
    .into_iter()
    .next()
    .map(|c| {
      c.content
        .parts
        .into_iter()
        .map(|p| p.text)
        .collect::<String>()
    })
    .unwrap_or_default();

  if text.is_empty() {
    EMPTY_REPLY.to_string()
  } else {
    text
  }
}

// ─── Client ──────────────────────────────────────────────────────────────────

/// HTTP client for the generative-language service.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ChatClient {
  http:    Client,
  api_key: Option<String>,
  url:     String,
}

impl ChatClient {
  pub fn new(
    endpoint: &str,
    model: &str,
    api_key: Option<String>,
  ) -> Result<Self, ChatError> {
    let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    let url = format!(
      "{}/v1beta/models/{model}:generateContent",
      endpoint.trim_end_matches('/'),
    );
    Ok(ChatClient { http, api_key, url })
  }

  /// A client with no API key: every `ask` fails, and the handler serves the
  /// fallback reply. Lets the rest of the server run without chat.
  pub fn unconfigured() -> Self {
    ChatClient {
      http:    Client::new(),
      api_key: None,
      url:     format!("{DEFAULT_ENDPOINT}/v1beta/models/{DEFAULT_MODEL}:generateContent"),
    }
  }

  /// Send the conversation and return the assistant text.
  pub async fn ask(&self, history: &[ChatMessage]) -> Result<String, ChatError> {
    let api_key = self.api_key.as_deref().ok_or(ChatError::NotConfigured)?;

    let request = GenerateRequest {
      system_instruction: Content {
        role:  None,
        parts: vec![Part { text: system_instruction() }],
      },
      contents: history
        .iter()
        .map(|m| Content {
          role:  Some(m.role),
          parts: vec![Part { text: m.text.clone() }],
        })
        .collect(),
    };

    let response = self
      .http
      .post(&self.url)
      .header("x-goog-api-key", api_key)
      .json(&request)
      .send()
      .await?;

    if !response.status().is_success() {
      return Err(ChatError::Status(response.status()));
    }

    let parsed: GenerateResponse = response.json().await?;
    Ok(extract_text(parsed))
  }
}

// ─── Handler ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatBody {
  pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
  pub reply: ChatMessage,
}

/// `POST /api/chat` — always `200`; failures become the fallback reply.
pub async fn handler<S: BlobStore>(
  State(state): State<AppState<S>>,
  Json(body): Json<ChatBody>,
) -> Json<ChatReply> {
  let text = match state.chat.ask(&body.messages).await {
    Ok(text) => text,
    Err(e) => {
      tracing::warn!(error = %e, "chat proxy failed, serving fallback reply");
      FALLBACK_REPLY.to_string()
    }
  };

  Json(ChatReply {
    reply: ChatMessage { role: ChatRole::Model, text },
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn request_uses_wire_field_names() {
    let request = GenerateRequest {
      system_instruction: Content {
        role:  None,
        parts: vec![Part { text: "be helpful".to_string() }],
      },
      contents: vec![Content {
        role:  Some(ChatRole::User),
        parts: vec![Part { text: "Olá".to_string() }],
      }],
    };

    let json = serde_json::to_value(&request).unwrap();
    assert!(json.get("systemInstruction").is_some());
    assert_eq!(json["contents"][0]["role"], "user");
    // An absent role must not serialize at all.
    assert!(json["systemInstruction"].get("role").is_none());
  }

  #[test]
  fn extract_text_joins_candidate_parts() {
    let response: GenerateResponse = serde_json::from_str(
      r#"{
        "candidates": [{
          "content": {
            "role": "model",
            "parts": [{"text": "Olá! "}, {"text": "Posso ajudar?"}]
          }
        }]
      }"#,
    )
    .unwrap();

    assert_eq!(extract_text(response), "Olá! Posso ajudar?");
  }

  #[test]
  fn extract_text_falls_back_on_empty_candidates() {
    let response: GenerateResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(extract_text(response), EMPTY_REPLY);
  }

  #[tokio::test]
  async fn ask_without_key_is_not_configured() {
    let client = ChatClient::unconfigured();
    let err = client.ask(&[]).await.unwrap_err();
    assert!(matches!(err, ChatError::NotConfigured));
  }
}
