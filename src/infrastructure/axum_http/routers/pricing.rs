use axum::{
    Json, Router,
    extract::{
        Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    application::usecases::{plan_resolver, price_calculator},
    domain::{
        entities::plans::PlanMetadata,
        value_objects::{
            enums::plan_durations::PlanDuration,
            plan_keys::PlanKey,
            pricing::{BestPlanModel, PlanGroup, PriceQuote},
            referrals::ReferralDiscount,
        },
    },
    infrastructure::axum_http::error_responses::AppError,
};

#[derive(Debug, Deserialize)]
pub struct BestPlanQuery {
    pub uploaded_bytes: u64,
    pub duration: String,
}

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub plan_key: String,
    #[serde(default)]
    pub is_selection_gallery: bool,
    #[serde(default)]
    pub referral_discount_percent: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub key: PlanKey,
    pub metadata: PlanMetadata,
}

pub fn routes() -> Router {
    Router::new()
        .route("/plans", get(list_plans))
        .route("/plans/:key", get(get_plan))
        .route("/best-plan", get(best_plan))
        .route("/quote", post(quote))
}

pub(crate) fn parse_plan_key(raw: &str) -> Result<PlanKey, AppError> {
    raw.parse::<PlanKey>()
        .map_err(|err| AppError::BadRequest(err.to_string()))
}

pub(crate) fn parse_duration(raw: &str) -> Result<PlanDuration, AppError> {
    raw.parse::<PlanDuration>()
        .map_err(|err| AppError::BadRequest(err.to_string()))
}

pub(crate) fn parse_referral(percent: Option<i64>) -> Result<Option<ReferralDiscount>, AppError> {
    percent
        .map(ReferralDiscount::try_from)
        .transpose()
        .map_err(|err| AppError::BadRequest(err.to_string()))
}

pub async fn list_plans() -> Json<Vec<PlanGroup>> {
    Json(plan_resolver::get_all_plans_grouped_by_storage())
}

pub async fn get_plan(Path(key): Path<String>) -> Result<Json<PlanResponse>, AppError> {
    let (key, metadata) = plan_resolver::get_plan_by_key_str(&key)
        .ok_or_else(|| AppError::NotFound(format!("Plan not found: {key}")))?;

    Ok(Json(PlanResponse { key, metadata }))
}

pub async fn best_plan(
    query: Result<Query<BestPlanQuery>, QueryRejection>,
) -> Result<Json<BestPlanModel>, AppError> {
    let Query(query) = query?;
    let duration = parse_duration(&query.duration)?;

    let plan_key = plan_resolver::calculate_best_plan(query.uploaded_bytes, duration);
    let metadata = plan_resolver::get_plan(plan_key)
        .ok_or_else(|| AppError::NotFound(format!("Plan not found: {plan_key}")))?;
    let exceeds_largest_plan = plan_resolver::exceeds_largest_plan(query.uploaded_bytes);

    if exceeds_largest_plan {
        warn!(
            uploaded_bytes = query.uploaded_bytes,
            %plan_key,
            "pricing: upload exceeds largest plan"
        );
    }

    Ok(Json(BestPlanModel {
        plan_key,
        metadata,
        uploaded_bytes: query.uploaded_bytes,
        exceeds_largest_plan,
    }))
}

pub async fn quote(
    request: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<PriceQuote>, AppError> {
    let Json(request) = request?;
    let plan_key = parse_plan_key(&request.plan_key)?;
    let referral = parse_referral(request.referral_discount_percent)?;

    let quote = price_calculator::quote(plan_key, request.is_selection_gallery, referral);
    info!(
        %plan_key,
        price_cents = quote.price_cents,
        "pricing: quote computed"
    );

    Ok(Json(quote))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn call(request: Request<Body>) -> (StatusCode, Value) {
        let response = routes().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn lists_grouped_plans() {
        let (status, body) = call(get("/plans")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);
        assert_eq!(body[0]["tier"], "1GB");
        assert_eq!(body[0]["plans"][2]["key"], "1GB-12m");
        assert_eq!(body[2]["plans"][0]["metadata"]["price_cents"], 1400);
    }

    #[tokio::test]
    async fn unknown_plan_is_not_found() {
        let (status, body) = call(get("/plans/20GB-1m")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 404);
    }

    #[tokio::test]
    async fn best_plan_flags_oversized_upload() {
        let uploaded = 11u64 * 1024 * 1024 * 1024;
        let (status, body) = call(get(&format!(
            "/best-plan?uploaded_bytes={uploaded}&duration=3m"
        )))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["plan_key"], "10GB-3m");
        assert_eq!(body["exceeds_largest_plan"], true);
    }

    #[tokio::test]
    async fn quote_applies_referral_discount() {
        let (status, body) = call(post_json(
            "/quote",
            json!({ "plan_key": "1GB-1m", "is_selection_gallery": true, "referral_discount_percent": 10 }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["price_cents"], 630);
        assert_eq!(body["discount"]["kind"], "referral");
    }

    #[tokio::test]
    async fn quote_rejects_unsupported_percent() {
        let (status, _) = call(post_json(
            "/quote",
            json!({ "plan_key": "1GB-1m", "referral_discount_percent": 50 }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn quote_rejects_out_of_range_percent_as_json_error() {
        for percent in [300, -15] {
            let (status, body) = call(post_json(
                "/quote",
                json!({ "plan_key": "1GB-1m", "referral_discount_percent": percent }),
            ))
            .await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{percent}");
            assert_eq!(body["code"], 400);
            assert!(body["message"].as_str().unwrap().contains(&percent.to_string()));
        }
    }

    #[tokio::test]
    async fn quote_reports_malformed_body_as_json_error() {
        let (status, body) = call(post_json("/quote", json!({ "plan_key": 7 }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
    }

    #[tokio::test]
    async fn best_plan_rejects_unknown_duration_as_json_error() {
        let (status, body) = call(get("/best-plan?uploaded_bytes=1&duration=6m")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
        assert!(body["message"].as_str().unwrap().contains("6m"));

        let (status, body) = call(get("/best-plan?uploaded_bytes=lots&duration=1m")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
    }
}
