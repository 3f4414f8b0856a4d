//! Lookups over the fixed plan catalog.
//!
//! String-level helpers accept loosely-typed input (query strings, stored keys)
//! and resolve misses to `None`; callers fall back to a safe default plan.

use crate::domain::{
    entities::plans::{PlanMetadata, catalog_entry, catalog_keys},
    value_objects::{
        enums::{plan_durations::PlanDuration, storage_tiers::StorageTier},
        plan_keys::PlanKey,
        pricing::{PlanGroup, PlanOption},
    },
};

/// Every typed key is in the catalog; the `Option` mirrors the string-level lookups.
pub fn get_plan(key: PlanKey) -> Option<PlanMetadata> {
    Some(catalog_entry(key))
}

pub fn get_plan_by_key_str(key: &str) -> Option<(PlanKey, PlanMetadata)> {
    let key = key.parse::<PlanKey>().ok()?;
    get_plan(key).map(|metadata| (key, metadata))
}

pub fn get_plan_by_storage_and_duration(
    tier: StorageTier,
    duration: PlanDuration,
) -> Option<PlanKey> {
    let key = PlanKey::new(tier, duration);
    get_plan(key).map(|_| key)
}

pub fn get_plan_by_storage_and_duration_str(tier: &str, duration: &str) -> Option<PlanKey> {
    let tier = tier.parse::<StorageTier>().ok()?;
    let duration = duration.parse::<PlanDuration>().ok()?;
    get_plan_by_storage_and_duration(tier, duration)
}

/// Reads the `-1m` / `-3m` / `-12m` suffix of a plan key string.
pub fn extract_duration_from_plan_key(key: &str) -> Option<PlanDuration> {
    let (_, suffix) = key.trim().rsplit_once('-')?;
    suffix.parse().ok()
}

/// Reads the `1GB-` / `3GB-` / `10GB-` prefix of a plan key string.
pub fn extract_storage_from_plan_key(key: &str) -> Option<StorageTier> {
    let (prefix, _) = key.trim().split_once('-')?;
    prefix.parse().ok()
}

/// Smallest plan for `duration` whose limit covers `uploaded_bytes` (inclusive).
///
/// Never fails: an upload larger than every tier resolves to the largest plan,
/// and callers check [`exceeds_largest_plan`] to warn about it.
pub fn calculate_best_plan(uploaded_bytes: u64, duration: PlanDuration) -> PlanKey {
    catalog_keys()
        .filter(|key| key.duration() == duration)
        .map(|key| (key, catalog_entry(key).storage_limit_bytes))
        .filter(|(_, limit)| *limit >= uploaded_bytes)
        .min_by_key(|(_, limit)| *limit)
        .map(|(key, _)| key)
        .unwrap_or_else(|| largest_plan(duration))
}

fn largest_plan(duration: PlanDuration) -> PlanKey {
    PlanKey::new(StorageTier::TenGb, duration)
}

pub fn largest_storage_limit_bytes() -> u64 {
    catalog_keys()
        .map(|key| catalog_entry(key).storage_limit_bytes)
        .max()
        .unwrap_or(0)
}

pub fn exceeds_largest_plan(uploaded_bytes: u64) -> bool {
    uploaded_bytes > largest_storage_limit_bytes()
}

pub fn get_all_plans_grouped_by_storage() -> Vec<PlanGroup> {
    StorageTier::ALL
        .into_iter()
        .map(|tier| PlanGroup {
            tier,
            plans: PlanDuration::ALL
                .into_iter()
                .filter_map(|duration| {
                    let key = get_plan_by_storage_and_duration(tier, duration)?;
                    Some(PlanOption {
                        duration,
                        key,
                        metadata: catalog_entry(key),
                    })
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GIB: u64 = 1024 * 1024 * 1024;

    #[test]
    fn every_combination_resolves_to_matching_metadata() {
        for tier in StorageTier::ALL {
            for duration in PlanDuration::ALL {
                let key = get_plan_by_storage_and_duration(tier, duration).unwrap();
                let plan = get_plan(key).unwrap();

                assert_eq!(plan.storage_limit_bytes, tier.limit_bytes());
                assert_eq!(plan.storage_label, tier.label());
                assert_eq!(plan.duration_label, duration.label());
                assert_eq!(plan.expiry_days, duration.expiry_days());
            }
        }
    }

    #[test]
    fn string_lookup_rejects_unknown_tokens() {
        assert_eq!(
            get_plan_by_storage_and_duration_str("3GB", "12m"),
            Some(PlanKey::new(StorageTier::ThreeGb, PlanDuration::TwelveMonths))
        );
        assert_eq!(get_plan_by_storage_and_duration_str("2GB", "12m"), None);
        assert_eq!(get_plan_by_storage_and_duration_str("3GB", "24m"), None);
        assert!(get_plan_by_key_str("1GB-1m").is_some());
        assert!(get_plan_by_key_str("premium").is_none());
    }

    #[test]
    fn extracted_parts_round_trip_to_the_same_key() {
        for key in catalog_keys() {
            let raw = key.to_string();
            let tier = extract_storage_from_plan_key(&raw).unwrap();
            let duration = extract_duration_from_plan_key(&raw).unwrap();
            assert_eq!(get_plan_by_storage_and_duration(tier, duration), Some(key));
        }
    }

    #[test]
    fn extraction_tolerates_garbage() {
        assert_eq!(extract_duration_from_plan_key("10GB-12m"), Some(PlanDuration::TwelveMonths));
        assert_eq!(extract_duration_from_plan_key("10GB-2m"), None);
        assert_eq!(extract_duration_from_plan_key("12m"), None);
        assert_eq!(extract_storage_from_plan_key("10GB-1m"), Some(StorageTier::TenGb));
        assert_eq!(extract_storage_from_plan_key("0GB-1m"), None);
        assert_eq!(extract_storage_from_plan_key(""), None);
    }

    #[test]
    fn best_plan_for_empty_upload_is_smallest() {
        assert_eq!(
            calculate_best_plan(0, PlanDuration::OneMonth).to_string(),
            "1GB-1m"
        );
    }

    #[test]
    fn best_plan_limit_is_inclusive() {
        assert_eq!(
            calculate_best_plan(3 * GIB, PlanDuration::TwelveMonths).to_string(),
            "3GB-12m"
        );
        assert_eq!(
            calculate_best_plan(3 * GIB + 1, PlanDuration::TwelveMonths).to_string(),
            "10GB-12m"
        );
    }

    #[test]
    fn best_plan_falls_back_to_largest_when_nothing_fits() {
        let uploaded = largest_storage_limit_bytes() + 1;
        assert_eq!(
            calculate_best_plan(uploaded, PlanDuration::ThreeMonths).to_string(),
            "10GB-3m"
        );
        assert!(exceeds_largest_plan(uploaded));
        assert!(!exceeds_largest_plan(10 * GIB));
    }

    #[test]
    fn largest_plan_has_the_largest_limit_for_each_duration() {
        for duration in PlanDuration::ALL {
            let largest = largest_plan(duration);
            assert_eq!(largest.duration(), duration);
            assert_eq!(
                catalog_entry(largest).storage_limit_bytes,
                largest_storage_limit_bytes()
            );
        }
    }

    #[test]
    fn grouping_is_ordered_by_tier_then_duration() {
        let groups = get_all_plans_grouped_by_storage();
        let keys: Vec<String> = groups
            .iter()
            .flat_map(|group| group.plans.iter().map(|plan| plan.key.to_string()))
            .collect();

        assert_eq!(
            keys,
            vec![
                "1GB-1m", "1GB-3m", "1GB-12m", "3GB-1m", "3GB-3m", "3GB-12m", "10GB-1m",
                "10GB-3m", "10GB-12m",
            ]
        );
        assert_eq!(groups[2].tier, StorageTier::TenGb);
    }
}
