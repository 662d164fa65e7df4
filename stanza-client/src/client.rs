//! Client for the Stanza analysis service
//!
//! One `POST /analyze` per call, no retries. Callers decide how to treat
//! failures; the smoke tests treat every one of them as terminal.

use std::time::Duration;

use reqwest::{header, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::StanzaError;
use crate::models::{Analysis, AnalyzeRequest};

/// Status and UTF-8 body of an `/analyze` response, before any interpretation
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    /// Any 2xx status counts as success
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

#[derive(Clone)]
pub struct StanzaClient {
    analyze_url: String,
    http_client: reqwest::Client,
}

impl StanzaClient {
    pub fn new(config: &Config) -> Result<Self, StanzaError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder
            .build()
            .map_err(|e| StanzaError::Client(e.to_string()))?;

        Ok(Self {
            analyze_url: config.analyze_url(),
            http_client,
        })
    }

    pub fn analyze_url(&self) -> &str {
        &self.analyze_url
    }

    /// Send `request` and return the status with the body decoded as UTF-8.
    pub async fn post_analyze(&self, request: &AnalyzeRequest) -> Result<RawResponse, StanzaError> {
        tracing::debug!(
            url = %self.analyze_url,
            lang = %request.lang,
            text_len = request.text.chars().count(),
            "Sending analyze request"
        );

        let transport = |source: reqwest::Error| StanzaError::Transport {
            url: self.analyze_url.clone(),
            source,
        };

        let response = self
            .http_client
            .post(&self.analyze_url)
            .header(header::ACCEPT, "application/json")
            .json(request)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(transport)?;
        let body = String::from_utf8(bytes.to_vec())?;

        Ok(RawResponse { status, body })
    }

    /// Analyze `text` and parse the response as sentences of `T` tokens.
    ///
    /// Fails with [`StanzaError::UnexpectedStatus`] on a non-2xx status and
    /// [`StanzaError::MalformedResponse`] if the body is not an array of
    /// arrays.
    pub async fn analyze<T: DeserializeOwned>(
        &self,
        text: &str,
        lang: &str,
    ) -> Result<Analysis<T>, StanzaError> {
        let raw = self.post_analyze(&AnalyzeRequest::new(text, lang)).await?;

        if !raw.is_success() {
            tracing::warn!(
                status = raw.status.as_u16(),
                url = %self.analyze_url,
                "Analysis service returned an error status"
            );
            return Err(StanzaError::UnexpectedStatus {
                status: raw.status.as_u16(),
                body: raw.body,
            });
        }

        let analysis: Analysis<T> = serde_json::from_str(&raw.body)?;

        tracing::debug!(
            status = raw.status.as_u16(),
            sentences = analysis.sentence_count(),
            "Analysis received"
        );

        Ok(analysis)
    }
}
