use serde::Serialize;

use crate::domain::value_objects::{
    enums::{plan_durations::PlanDuration, storage_tiers::StorageTier},
    plan_keys::PlanKey,
};

/// Catalog entry for one plan key. Prices are in the smallest currency unit.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PlanMetadata {
    pub price_cents: u64,
    pub storage_limit_bytes: u64,
    pub expiry_days: u32,
    pub storage_label: &'static str,
    pub duration_label: &'static str,
}

/// Plans that accept a percentage referral discount.
pub const REFERRAL_ELIGIBLE_PLANS: [PlanKey; 4] = [
    PlanKey::new(StorageTier::OneGb, PlanDuration::OneMonth),
    PlanKey::new(StorageTier::OneGb, PlanDuration::ThreeMonths),
    PlanKey::new(StorageTier::ThreeGb, PlanDuration::OneMonth),
    PlanKey::new(StorageTier::ThreeGb, PlanDuration::ThreeMonths),
];

/// Every (tier, duration) pair in catalog order: tier ascending, then duration ascending.
pub fn catalog_keys() -> impl Iterator<Item = PlanKey> {
    StorageTier::ALL.into_iter().flat_map(|tier| {
        PlanDuration::ALL
            .into_iter()
            .map(move |duration| PlanKey::new(tier, duration))
    })
}

/// The fixed price list. The match is exhaustive, so every key has exactly one entry.
pub fn catalog_entry(key: PlanKey) -> PlanMetadata {
    use PlanDuration::*;
    use StorageTier::*;

    let price_cents = match (key.tier(), key.duration()) {
        (OneGb, OneMonth) => 700,
        (OneGb, ThreeMonths) => 1_400,
        (OneGb, TwelveMonths) => 2_900,
        (ThreeGb, OneMonth) => 1_200,
        (ThreeGb, ThreeMonths) => 2_100,
        (ThreeGb, TwelveMonths) => 3_900,
        (TenGb, OneMonth) => 1_400,
        (TenGb, ThreeMonths) => 2_900,
        (TenGb, TwelveMonths) => 5_900,
    };

    PlanMetadata {
        price_cents,
        storage_limit_bytes: key.tier().limit_bytes(),
        expiry_days: key.duration().expiry_days(),
        storage_label: key.tier().label(),
        duration_label: key.duration().label(),
    }
}
