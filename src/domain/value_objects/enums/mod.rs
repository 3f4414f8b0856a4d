pub mod payment_methods;
pub mod plan_durations;
pub mod storage_tiers;
pub mod zip_statuses;
