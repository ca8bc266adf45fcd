//! Live backend HTTP client.
//!
//! Thin blocking wrapper over the tracker's HTTP API. A 404 on per-resource
//! getters means "legitimately absent" and becomes `Ok(None)`; every other
//! non-2xx status is an error surfaced to the caller. Nothing here retries:
//! retry is a user-triggered action at the UI layer.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use crate::error::{ApiErrorKind, Result, TrackerError};
use crate::model::{
    Image, ImageGraph, ImagePage, Provenance, ReleaseNotes, Scorecard, Vulnerability, WorkflowRun,
};

use super::{resource, ApiClient, ImageQuery};

/// Live client configuration.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL of the backend API
    pub api_base: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:8080/api".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// [`ApiClient`] implementation against the live backend.
pub struct HttpApiClient {
    client: Client,
    config: HttpClientConfig,
}

fn network_error(msg: &str, err: reqwest::Error) -> TrackerError {
    TrackerError::api(msg, ApiErrorKind::Network(err.to_string()))
}

impl HttpApiClient {
    /// Create a new live client.
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| network_error("Failed to create HTTP client", e))?;

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.config.api_base.trim_end_matches('/'))
    }

    /// GET a JSON payload; any non-2xx status is an error.
    fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(String, String)]) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .map_err(|e| network_error("Failed to send request", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(TrackerError::api(
                format!("GET {path}"),
                ApiErrorKind::Status {
                    status: status.as_u16(),
                    body,
                },
            ));
        }

        response.json().map_err(|e| {
            TrackerError::api(
                format!("GET {path}"),
                ApiErrorKind::InvalidResponse(e.to_string()),
            )
        })
    }

    /// GET a per-image resource; 404 normalizes to `Ok(None)`.
    fn get_resource<T: DeserializeOwned>(&self, kind: &str, reference: &str) -> Result<Option<T>> {
        let url = self.url(&format!("image/{kind}"));
        tracing::debug!(%url, reference, "GET resource");
        let response = self
            .client
            .get(&url)
            .query(&[("reference", reference)])
            .send()
            .map_err(|e| network_error("Failed to send request", e))?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(TrackerError::api(
                format!("GET image/{kind}"),
                ApiErrorKind::Status {
                    status: status.as_u16(),
                    body,
                },
            ));
        }

        let value = response.json().map_err(|e| {
            TrackerError::api(
                format!("GET image/{kind}"),
                ApiErrorKind::InvalidResponse(e.to_string()),
            )
        })?;
        Ok(Some(value))
    }
}

impl ApiClient for HttpApiClient {
    fn get_tags(&self) -> Result<Vec<String>> {
        self.get_json("tags", &[])
    }

    fn get_images(&self, query: &ImageQuery) -> Result<ImagePage> {
        self.get_json("images", &query.to_query_pairs())
    }

    fn get_image(&self, reference: &str) -> Result<Option<Image>> {
        self.get_resource(resource::IMAGE, reference)
    }

    fn get_image_description(&self, reference: &str) -> Result<Option<String>> {
        self.get_resource(resource::DESCRIPTION, reference)
    }

    fn get_image_release_notes(&self, reference: &str) -> Result<Option<ReleaseNotes>> {
        self.get_resource(resource::RELEASE_NOTES, reference)
    }

    fn get_image_graph(&self, reference: &str) -> Result<Option<ImageGraph>> {
        self.get_resource(resource::GRAPH, reference)
    }

    fn get_image_scorecard(&self, reference: &str) -> Result<Option<Scorecard>> {
        self.get_resource(resource::SCORECARD, reference)
    }

    fn get_image_provenance(&self, reference: &str) -> Result<Option<Provenance>> {
        self.get_resource(resource::PROVENANCE, reference)
    }

    fn get_image_sbom(&self, reference: &str) -> Result<Option<serde_json::Value>> {
        self.get_resource(resource::SBOM, reference)
    }

    fn get_image_vulnerabilities(&self, reference: &str) -> Result<Option<Vec<Vulnerability>>> {
        self.get_resource(resource::VULNERABILITIES, reference)
    }

    fn get_latest_image_workflow(&self, reference: &str) -> Result<Option<WorkflowRun>> {
        self.get_resource(&format!("{}/latest", resource::WORKFLOW), reference)
    }

    fn get_logo_url(&self, reference: &str) -> Option<String> {
        Some(format!(
            "{}?reference={}",
            self.url(&format!("image/{}", resource::LOGO)),
            urlencoding::encode(reference)
        ))
    }

    fn schedule_image_scan(&self, reference: &str) -> Result<()> {
        let url = self.url("image/scan");
        tracing::debug!(%url, reference, "POST scan");
        let response = self
            .client
            .post(&url)
            .query(&[("reference", reference)])
            .send()
            .map_err(|e| network_error("Failed to schedule scan", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(TrackerError::api(
                "POST image/scan",
                ApiErrorKind::Status {
                    status: status.as_u16(),
                    body,
                },
            ));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
