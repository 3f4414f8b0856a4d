use std::{sync::Arc, time::Duration};

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    application::usecases::zip_download::ZipDownloadUseCase,
    config::config_model::ZipPoll,
    domain::repositories::zip_downloads::ZipStatusRepository,
    infrastructure::axum_http::error_responses::AppError,
};

#[derive(Debug, Deserialize)]
pub struct ZipStatusQuery {
    #[serde(default)]
    pub wait: bool,
}

pub fn routes<R>(zip_status_repo: Arc<R>, zip_poll: &ZipPoll) -> Router
where
    R: ZipStatusRepository + Send + Sync + 'static,
{
    let usecase = ZipDownloadUseCase::new(
        zip_status_repo,
        Duration::from_millis(zip_poll.interval_ms),
        zip_poll.max_attempts,
    );

    Router::new()
        .route("/galleries/:gallery_id/zip", get(zip_status::<R>))
        .with_state(Arc::new(usecase))
}

/// Returns the current ZIP status, or with `?wait=true` blocks until the archive is ready.
pub async fn zip_status<R>(
    State(usecase): State<Arc<ZipDownloadUseCase<R>>>,
    gallery_id: Result<Path<Uuid>, PathRejection>,
    query: Result<Query<ZipStatusQuery>, QueryRejection>,
) -> Result<Response, AppError>
where
    R: ZipStatusRepository + Send + Sync + 'static,
{
    let Path(gallery_id) = gallery_id?;
    let Query(query) = query?;

    if query.wait {
        let ready = usecase.wait_until_ready(gallery_id).await?;
        return Ok(Json(ready).into_response());
    }

    let status = usecase.current_status(gallery_id).await?;
    Ok(Json(status).into_response())
}
