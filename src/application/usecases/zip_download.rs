use std::{sync::Arc, time::Duration};

use axum::http::StatusCode;
use thiserror::Error;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::domain::{
    repositories::zip_downloads::ZipStatusRepository,
    value_objects::{
        enums::zip_statuses::ZipStatus,
        zip_downloads::{ZipReady, ZipStatusModel},
    },
};

#[derive(Debug, Error)]
pub enum ZipPollError {
    #[error("zip generation failed: {0}")]
    GenerationFailed(String),
    #[error("zip reported ready without a download url")]
    MissingDownloadUrl,
    #[error("zip not ready after {attempts} attempts")]
    TimedOut { attempts: u32 },
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl ZipPollError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ZipPollError::GenerationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ZipPollError::MissingDownloadUrl | ZipPollError::Backend(_) => StatusCode::BAD_GATEWAY,
            ZipPollError::TimedOut { .. } => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

/// Polls the backend until a gallery's ZIP archive is generated.
pub struct ZipDownloadUseCase<R>
where
    R: ZipStatusRepository + Send + Sync + 'static,
{
    zip_status_repo: Arc<R>,
    poll_interval: Duration,
    max_attempts: u32,
}

impl<R> ZipDownloadUseCase<R>
where
    R: ZipStatusRepository + Send + Sync + 'static,
{
    pub fn new(zip_status_repo: Arc<R>, poll_interval: Duration, max_attempts: u32) -> Self {
        Self {
            zip_status_repo,
            poll_interval,
            max_attempts: max_attempts.max(1),
        }
    }

    pub async fn current_status(&self, gallery_id: Uuid) -> Result<ZipStatusModel, ZipPollError> {
        self.zip_status_repo
            .zip_status(gallery_id)
            .await
            .map_err(|err| {
                error!(%gallery_id, error = ?err, "zip_download: failed to load status");
                ZipPollError::Backend(err)
            })
    }

    pub async fn wait_until_ready(&self, gallery_id: Uuid) -> Result<ZipReady, ZipPollError> {
        info!(%gallery_id, max_attempts = self.max_attempts, "zip_download: waiting for archive");

        for attempt in 1..=self.max_attempts {
            let model = self.current_status(gallery_id).await?;
            debug!(%gallery_id, attempt, status = %model.status, "zip_download: polled status");

            match model.status {
                ZipStatus::Ready => {
                    let download_url = model.download_url.ok_or_else(|| {
                        warn!(%gallery_id, "zip_download: ready status without url");
                        ZipPollError::MissingDownloadUrl
                    })?;
                    info!(%gallery_id, attempt, "zip_download: archive ready");
                    return Ok(ZipReady {
                        gallery_id,
                        download_url,
                        attempts: attempt,
                    });
                }
                ZipStatus::Failed => {
                    let reason = model.error.unwrap_or_else(|| "unknown error".to_string());
                    warn!(%gallery_id, attempt, %reason, "zip_download: generation failed");
                    return Err(ZipPollError::GenerationFailed(reason));
                }
                ZipStatus::Pending | ZipStatus::Generating => {
                    if attempt < self.max_attempts {
                        tokio::time::sleep(self.poll_interval).await;
                    }
                }
            }
        }

        warn!(%gallery_id, attempts = self.max_attempts, "zip_download: gave up waiting");
        Err(ZipPollError::TimedOut {
            attempts: self.max_attempts,
        })
    }
}
