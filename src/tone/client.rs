//! HTTP client for the tone advisory function.
//!
//! Speaks the tonality contract: POST a JSON body with the field text, read
//! guidance back from `analysis` with `content` as the fallback key.

use super::sanitize::sanitize_api_error;
use super::{ToneAdvisor, build_tone_client};
use crate::config::ToneConfig;
use crate::error::ToneError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Advisor backed by a remote tonality function.
pub struct HttpToneAdvisor {
    endpoint: String,
    api_key: Option<String>,
    /// Pre-computed `Authorization` value (avoids `format!` per request).
    cached_auth_header: Option<String>,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ToneRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ToneResponse {
    #[serde(default)]
    analysis: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

fn first_nonempty(text: Option<&str>) -> Option<String> {
    text.and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Guidance key preference: `analysis` wins, `content` is the fallback.
/// Empty or whitespace-only values count as absent.
fn extract_guidance(response: &ToneResponse) -> Option<String> {
    first_nonempty(response.analysis.as_deref())
        .or_else(|| first_nonempty(response.content.as_deref()))
}

impl HttpToneAdvisor {
    pub fn new(endpoint: &str, api_key: Option<&str>) -> Self {
        Self::with_client(endpoint, api_key, build_tone_client(15, 5))
    }

    pub fn from_config(config: &ToneConfig) -> Self {
        Self::with_client(
            &config.endpoint,
            config.api_key.as_deref(),
            build_tone_client(config.timeout_secs, config.connect_timeout_secs),
        )
    }

    fn with_client(endpoint: &str, api_key: Option<&str>, client: Client) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.map(ToString::to_string),
            cached_auth_header: api_key.map(|k| format!("Bearer {k}")),
            client,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn apply_auth_header(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(value) = &self.cached_auth_header {
            req.header("Authorization", value)
        } else {
            req
        }
    }
}

#[async_trait]
impl ToneAdvisor for HttpToneAdvisor {
    async fn analyze(&self, text: &str) -> Result<String, ToneError> {
        let request = ToneRequest { text };

        debug!(endpoint = %self.endpoint, chars = text.chars().count(), "tone check request");

        let response = self
            .apply_auth_header(self.client.post(&self.endpoint).json(&request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read tone error body>".to_string());
            return Err(ToneError::Api {
                status: status.as_u16(),
                detail: sanitize_api_error(&body),
            });
        }

        let body = response.text().await?;
        let payload: ToneResponse = serde_json::from_str(&body).map_err(|e| ToneError::Malformed {
            detail: format!("tone response was not JSON: {e}"),
        })?;

        extract_guidance(&payload).ok_or_else(|| ToneError::Malformed {
            detail: "no usable analysis or content field".into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_advisor(url: &str, key: Option<&str>) -> HttpToneAdvisor {
        HttpToneAdvisor::new(url, key)
    }

    #[test]
    fn creates_with_key() {
        let a = make_advisor("https://tone.example.com/tonality", Some("tn-key"));
        assert_eq!(a.endpoint(), "https://tone.example.com/tonality");
        assert_eq!(a.api_key.as_deref(), Some("tn-key"));
        assert_eq!(a.cached_auth_header.as_deref(), Some("Bearer tn-key"));
    }

    #[test]
    fn creates_without_key() {
        let a = make_advisor("https://tone.example.com/tonality", None);
        assert!(a.api_key.is_none());
        assert!(a.cached_auth_header.is_none());
    }

    #[test]
    fn strips_trailing_slash() {
        let a = make_advisor("https://tone.example.com/tonality/", None);
        assert_eq!(a.endpoint(), "https://tone.example.com/tonality");
    }

    #[test]
    fn request_serializes_text_only() {
        let req = ToneRequest {
            text: "Sarah clearly explained the rollout",
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"text":"Sarah clearly explained the rollout"}"#);
    }

    #[test]
    fn guidance_prefers_analysis_over_content() {
        let payload: ToneResponse =
            serde_json::from_str(r#"{"analysis":"Sounds specific","content":"ignored"}"#).unwrap();
        assert_eq!(extract_guidance(&payload).as_deref(), Some("Sounds specific"));
    }

    #[test]
    fn guidance_falls_back_to_content_when_analysis_empty() {
        let payload: ToneResponse =
            serde_json::from_str(r#"{"analysis":"","content":"Try naming the project"}"#).unwrap();
        assert_eq!(
            extract_guidance(&payload).as_deref(),
            Some("Try naming the project")
        );
    }

    #[test]
    fn guidance_absent_when_both_keys_blank() {
        let payload: ToneResponse =
            serde_json::from_str(r#"{"analysis":"  ","content":""}"#).unwrap();
        assert!(extract_guidance(&payload).is_none());
    }

    #[tokio::test]
    async fn analyze_posts_json_and_returns_analysis() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/functions/v1/tonality"))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_json(serde_json::json!({"text": "great teamwork"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                serde_json::json!({"analysis": "Warm and specific. Consider one concrete example."}),
            ))
            .expect(1)
            .mount(&server)
            .await;

        let advisor = make_advisor(
            &format!("{}/functions/v1/tonality", server.uri()),
            Some("test-key"),
        );
        let guidance = advisor.analyze("great teamwork").await.unwrap();

        assert_eq!(
            guidance,
            "Warm and specific. Consider one concrete example."
        );
    }

    #[tokio::test]
    async fn analyze_uses_content_key_when_analysis_missing() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tonality"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"content": "Reads as constructive."})),
            )
            .mount(&server)
            .await;

        let advisor = make_advisor(&format!("{}/tonality", server.uri()), None);
        let guidance = advisor.analyze("needs work").await.unwrap();

        assert_eq!(guidance, "Reads as constructive.");
    }

    #[tokio::test]
    async fn analyze_maps_http_error_to_api_cause() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tonality"))
            .respond_with(ResponseTemplate::new(503).set_body_string("function overloaded"))
            .mount(&server)
            .await;

        let advisor = make_advisor(&format!("{}/tonality", server.uri()), None);
        let err = advisor.analyze("hello").await.unwrap_err();

        match err {
            ToneError::Api { status, detail } => {
                assert_eq!(status, 503);
                assert!(detail.contains("function overloaded"));
            }
            other => panic!("expected Api cause, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn analyze_error_detail_redacts_secrets() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tonality"))
            .respond_with(ResponseTemplate::new(401).set_body_string(
                "{\"error\":\"invalid credentials api_key=raw-secret-123\"}",
            ))
            .mount(&server)
            .await;

        let advisor = make_advisor(&format!("{}/tonality", server.uri()), Some("key"));
        let err = advisor.analyze("hello").await.unwrap_err().to_string();

        assert!(!err.contains("raw-secret-123"));
        assert!(err.contains("[REDACTED]"));
    }

    #[tokio::test]
    async fn analyze_non_json_body_is_malformed_cause() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tonality"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let advisor = make_advisor(&format!("{}/tonality", server.uri()), None);
        let err = advisor.analyze("hello").await.unwrap_err();

        assert!(matches!(err, ToneError::Malformed { .. }));
    }

    #[tokio::test]
    async fn analyze_json_without_guidance_keys_is_malformed_cause() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tonality"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .mount(&server)
            .await;

        let advisor = make_advisor(&format!("{}/tonality", server.uri()), None);
        let err = advisor.analyze("hello").await.unwrap_err();

        match err {
            ToneError::Malformed { detail } => {
                assert!(detail.contains("no usable analysis or content"));
            }
            other => panic!("expected Malformed cause, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn analyze_unreachable_endpoint_is_transport_cause() {
        // Port 9 (discard) is unassigned on test hosts; connection is refused.
        let advisor = make_advisor("http://127.0.0.1:9/tonality", None);
        let err = advisor.analyze("hello").await.unwrap_err();

        assert!(matches!(err, ToneError::Transport(_)));
    }
}
