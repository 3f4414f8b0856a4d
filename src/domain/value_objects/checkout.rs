use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{
    enums::payment_methods::PaymentMethod, plan_keys::PlanKey, pricing::PriceQuote,
    referrals::ReferralDiscount,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub gallery_id: Uuid,
    pub plan_key: PlanKey,
    pub is_selection_gallery: bool,
    pub referral_code: Option<String>,
    pub referral_discount: Option<ReferralDiscount>,
}

/// Payload of the backend's dry-run payment call. Nothing is charged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DryRunPaymentModel {
    pub gallery_id: Uuid,
    pub plan_key: PlanKey,
    pub is_selection_gallery: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DryRunPaymentResult {
    pub payment_method: PaymentMethod,
    pub amount_cents: u64,
    pub wallet_balance_cents: u64,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckoutPreview {
    pub gallery_id: Uuid,
    pub quote: PriceQuote,
    pub payment_method: PaymentMethod,
    pub wallet_balance_cents: u64,
    pub card_top_up_cents: u64,
}
