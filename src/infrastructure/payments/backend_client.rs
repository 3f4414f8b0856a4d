use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{RequestBuilder, header::AUTHORIZATION};
use serde::Deserialize;
use tracing::{debug, error};
use uuid::Uuid;

use crate::{
    domain::{
        repositories::{payments::PaymentBackend, zip_downloads::ZipStatusRepository},
        value_objects::{
            checkout::{DryRunPaymentModel, DryRunPaymentResult},
            zip_downloads::ZipStatusModel,
        },
    },
    infrastructure::throttle::RequestThrottle,
};

#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    message: Option<String>,
    code: Option<String>,
}

/// JSON client for the gallery/payment backend. Every request passes the shared throttle.
pub struct PaymentBackendClient {
    http: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
    throttle: Arc<RequestThrottle>,
}

impl PaymentBackendClient {
    pub fn new(base_url: &str, api_token: Option<String>, throttle: Arc<RequestThrottle>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
            throttle,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        }
    }

    async fn ensure_success(resp: reqwest::Response, context: &str) -> Result<reqwest::Response> {
        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status();
        let body = match resp.text().await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => "<empty response body>".to_string(),
            Err(err) => format!("<failed to read response body: {err}>"),
        };

        let (backend_error_code, backend_error_message) =
            match serde_json::from_str::<BackendErrorBody>(&body) {
                Ok(parsed) => (parsed.code, parsed.message),
                Err(_) => (None, None),
            };

        error!(
            status = %status,
            backend_error_code = ?backend_error_code,
            backend_error_message = ?backend_error_message,
            response_body = %body,
            context = %context,
            "payment backend request failed"
        );

        anyhow::bail!("payment backend request failed: {} (status {})", context, status);
    }
}

#[async_trait]
impl PaymentBackend for PaymentBackendClient {
    async fn dry_run_payment(&self, model: DryRunPaymentModel) -> Result<DryRunPaymentResult> {
        self.throttle.acquire().await;
        debug!(gallery_id = %model.gallery_id, plan_key = %model.plan_key, "backend_client: dry run payment");

        let resp = self
            .authorized(self.http.post(self.endpoint("payments/dry-run")))
            .json(&model)
            .send()
            .await
            .context("dry run payment request")?;
        let resp = Self::ensure_success(resp, "dry run payment").await?;

        resp.json::<DryRunPaymentResult>()
            .await
            .context("decode dry run payment response")
    }
}

#[async_trait]
impl ZipStatusRepository for PaymentBackendClient {
    async fn zip_status(&self, gallery_id: Uuid) -> Result<ZipStatusModel> {
        self.throttle.acquire().await;
        debug!(%gallery_id, "backend_client: zip status");

        let resp = self
            .authorized(
                self.http
                    .get(self.endpoint(&format!("galleries/{gallery_id}/zip-status"))),
            )
            .send()
            .await
            .context("zip status request")?;
        let resp = Self::ensure_success(resp, "zip status").await?;

        resp.json::<ZipStatusModel>()
            .await
            .context("decode zip status response")
    }
}
