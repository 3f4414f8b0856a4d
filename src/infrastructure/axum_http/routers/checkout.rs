use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    application::usecases::checkout::CheckoutUseCase,
    domain::{
        repositories::payments::PaymentBackend,
        value_objects::checkout::{CheckoutPreview, CheckoutRequest},
    },
    infrastructure::axum_http::{
        error_responses::AppError,
        routers::pricing::{parse_plan_key, parse_referral},
    },
};

#[derive(Debug, Deserialize)]
pub struct DryRunRequest {
    pub gallery_id: Uuid,
    pub plan_key: String,
    #[serde(default)]
    pub is_selection_gallery: bool,
    #[serde(default)]
    pub referral_code: Option<String>,
    #[serde(default)]
    pub referral_discount_percent: Option<i64>,
}

pub fn routes<B>(payment_backend: Arc<B>) -> Router
where
    B: PaymentBackend + Send + Sync + 'static,
{
    let checkout_usecase = CheckoutUseCase::new(payment_backend);

    Router::new()
        .route("/checkout/dry-run", post(dry_run::<B>))
        .with_state(Arc::new(checkout_usecase))
}

pub async fn dry_run<B>(
    State(checkout_usecase): State<Arc<CheckoutUseCase<B>>>,
    request: Result<Json<DryRunRequest>, JsonRejection>,
) -> Result<Json<CheckoutPreview>, AppError>
where
    B: PaymentBackend + Send + Sync + 'static,
{
    let Json(request) = request?;
    let checkout_request = CheckoutRequest {
        gallery_id: request.gallery_id,
        plan_key: parse_plan_key(&request.plan_key)?,
        is_selection_gallery: request.is_selection_gallery,
        referral_code: request.referral_code,
        referral_discount: parse_referral(request.referral_discount_percent)?,
    };

    let preview = checkout_usecase.dry_run(checkout_request).await?;
    Ok(Json(preview))
}
