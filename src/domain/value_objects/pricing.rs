use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::plans::PlanMetadata,
    value_objects::{
        enums::{plan_durations::PlanDuration, storage_tiers::StorageTier},
        plan_keys::PlanKey,
    },
};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlanOption {
    pub duration: PlanDuration,
    pub key: PlanKey,
    pub metadata: PlanMetadata,
}

/// One row of the plan grid: a storage tier and its plans by duration.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlanGroup {
    pub tier: StorageTier,
    pub plans: Vec<PlanOption>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BestPlanModel {
    pub plan_key: PlanKey,
    pub metadata: PlanMetadata,
    pub uploaded_bytes: u64,
    pub exceeds_largest_plan: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AppliedDiscount {
    None,
    NonSelection { percent: u8 },
    Referral { percent: u8 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceQuote {
    pub plan_key: PlanKey,
    pub base_price_cents: u64,
    pub price_cents: u64,
    pub discount: AppliedDiscount,
}
