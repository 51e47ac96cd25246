//! Remote translation and language detection client.

use crate::credentials;
use crate::error::{Result, ScribeError};
use crate::translate::translator::Translator;
use async_trait::async_trait;
use serde::Serialize;

pub struct GoogleTranslateClient {
    endpoint: String,
    client: reqwest::Client,
}

impl GoogleTranslateClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn detect_endpoint(&self) -> String {
        format!("{}/detect", self.endpoint.trim_end_matches('/'))
    }

    async fn post_json(
        &self,
        url: &str,
        body: &impl Serialize,
        what: &str,
    ) -> Result<serde_json::Value> {
        let key = credentials::api_key()?;
        let response = self
            .client
            .post(url)
            .query(&[("key", key)])
            .json(body)
            .send()
            .await
            .map_err(|e| ScribeError::Translation {
                message: format!("{what} request failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(ScribeError::Translation {
                message: format!("{what} service returned status {}", response.status()),
            });
        }

        response.json().await.map_err(|e| ScribeError::Translation {
            message: format!("failed to parse {what} response: {e}"),
        })
    }
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    target: &'a str,
    format: &'static str,
}

#[derive(Serialize)]
struct DetectRequest<'a> {
    q: &'a str,
}

#[async_trait]
impl Translator for GoogleTranslateClient {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
        let request = TranslateRequest {
            q: text,
            target: target_language,
            // "text" keeps the service from HTML-escaping the sentinel
            format: "text",
        };

        let body = self
            .post_json(&self.endpoint, &request, "translation")
            .await?;

        body["data"]["translations"][0]["translatedText"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| ScribeError::Translation {
                message: "translation response missing translatedText".to_string(),
            })
    }

    async fn detect_language(&self, text: &str) -> Result<String> {
        let request = DetectRequest { q: text };

        let body = self
            .post_json(&self.detect_endpoint(), &request, "language detection")
            .await
            .map_err(|e| match e {
                ScribeError::Translation { message } => ScribeError::Detection { message },
                other => other,
            })?;

        body["data"]["detections"][0][0]["language"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| ScribeError::Detection {
                message: "detection response missing language".to_string(),
            })
    }
}
