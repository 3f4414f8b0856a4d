use std::sync::Arc;

use axum::http::StatusCode;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::{
    application::usecases::price_calculator,
    domain::{
        repositories::payments::PaymentBackend,
        value_objects::{
            checkout::{CheckoutPreview, CheckoutRequest, DryRunPaymentModel},
            enums::payment_methods::PaymentMethod,
            plan_keys::PlanKey,
        },
    },
};

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("invalid checkout request: {0}")]
    InvalidRequest(String),
    #[error("price mismatch for {plan_key}: expected {expected_cents}, backend quoted {backend_cents}")]
    PriceMismatch {
        plan_key: PlanKey,
        expected_cents: u64,
        backend_cents: u64,
    },
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl CheckoutError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CheckoutError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CheckoutError::PriceMismatch { .. } => StatusCode::CONFLICT,
            CheckoutError::Backend(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, CheckoutError>;

/// Confirms with the payment backend how a plan purchase would be settled,
/// without charging anything.
pub struct CheckoutUseCase<B>
where
    B: PaymentBackend + Send + Sync + 'static,
{
    payment_backend: Arc<B>,
}

impl<B> CheckoutUseCase<B>
where
    B: PaymentBackend + Send + Sync + 'static,
{
    pub fn new(payment_backend: Arc<B>) -> Self {
        Self { payment_backend }
    }

    pub async fn dry_run(&self, request: CheckoutRequest) -> UseCaseResult<CheckoutPreview> {
        let gallery_id = request.gallery_id;
        let plan_key = request.plan_key;
        info!(
            %gallery_id,
            %plan_key,
            is_selection_gallery = request.is_selection_gallery,
            "checkout: dry run requested"
        );

        let referral_code = match (request.referral_code, request.referral_discount) {
            (Some(code), _) if code.trim().is_empty() => {
                let err = CheckoutError::InvalidRequest("referral code is empty".to_string());
                warn!(%gallery_id, status = err.status_code().as_u16(), "checkout: empty referral code");
                return Err(err);
            }
            (None, Some(_)) => {
                let err = CheckoutError::InvalidRequest(
                    "referral discount requires a referral code".to_string(),
                );
                warn!(%gallery_id, status = err.status_code().as_u16(), "checkout: referral discount without code");
                return Err(err);
            }
            (Some(_), None) => {
                let err = CheckoutError::InvalidRequest(
                    "referral code requires a referral discount".to_string(),
                );
                warn!(%gallery_id, status = err.status_code().as_u16(), "checkout: referral code without discount");
                return Err(err);
            }
            (code, _) => code,
        };

        let quote = price_calculator::quote(
            plan_key,
            request.is_selection_gallery,
            request.referral_discount,
        );

        let result = self
            .payment_backend
            .dry_run_payment(DryRunPaymentModel {
                gallery_id,
                plan_key,
                is_selection_gallery: request.is_selection_gallery,
                referral_code,
            })
            .await
            .map_err(|err| {
                error!(%gallery_id, %plan_key, error = ?err, "checkout: dry run call failed");
                CheckoutError::Backend(err)
            })?;

        if result.amount_cents != quote.price_cents {
            error!(
                %gallery_id,
                %plan_key,
                expected_cents = quote.price_cents,
                backend_cents = result.amount_cents,
                "checkout: backend price diverges from local quote"
            );
            return Err(CheckoutError::PriceMismatch {
                plan_key,
                expected_cents: quote.price_cents,
                backend_cents: result.amount_cents,
            });
        }

        let card_top_up_cents = match result.payment_method {
            PaymentMethod::Wallet => 0,
            PaymentMethod::Card => quote.price_cents.saturating_sub(result.wallet_balance_cents),
        };

        info!(
            %gallery_id,
            %plan_key,
            payment_method = %result.payment_method,
            price_cents = quote.price_cents,
            card_top_up_cents,
            "checkout: dry run confirmed"
        );

        Ok(CheckoutPreview {
            gallery_id,
            quote,
            payment_method: result.payment_method,
            wallet_balance_cents: result.wallet_balance_cents,
            card_top_up_cents,
        })
    }
}
