//! Discount policy applied on top of catalog prices.
//!
//! All arithmetic is exact integer math on cents. The payment backend charges
//! with the same rounding, so a displayed price always equals the charged one.

use crate::domain::{
    entities::plans::{REFERRAL_ELIGIBLE_PLANS, catalog_entry},
    value_objects::{
        plan_keys::PlanKey,
        pricing::{AppliedDiscount, PriceQuote},
        referrals::ReferralDiscount,
    },
};

/// Discount for galleries where the client receives every photo.
pub const NON_SELECTION_DISCOUNT_PERCENT: u8 = 20;

pub fn base_price(key: PlanKey) -> u64 {
    catalog_entry(key).price_cents
}

pub fn is_referral_eligible(key: PlanKey) -> bool {
    REFERRAL_ELIGIBLE_PLANS.contains(&key)
}

/// Selection galleries pay list price; all others get 20% off, rounded half-up.
pub fn calculate_price_with_discount(key: PlanKey, is_selection_gallery: bool) -> u64 {
    let base = base_price(key);
    if is_selection_gallery {
        return base;
    }
    discounted_rounded(base, NON_SELECTION_DISCOUNT_PERCENT)
}

/// Referral rates only apply to eligible plans and always round down.
pub fn calculate_price_with_referral_discount(
    key: PlanKey,
    referral: Option<ReferralDiscount>,
) -> u64 {
    let base = base_price(key);
    match referral {
        Some(referral) if is_referral_eligible(key) => discounted_floor(base, referral.percent()),
        _ => base,
    }
}

/// Builds the price shown at checkout. Discounts never stack: an applicable
/// referral discount replaces the selection policy only when it is cheaper.
pub fn quote(
    key: PlanKey,
    is_selection_gallery: bool,
    referral: Option<ReferralDiscount>,
) -> PriceQuote {
    let base_price_cents = base_price(key);

    let selection = if is_selection_gallery {
        (base_price_cents, AppliedDiscount::None)
    } else {
        (
            calculate_price_with_discount(key, false),
            AppliedDiscount::NonSelection {
                percent: NON_SELECTION_DISCOUNT_PERCENT,
            },
        )
    };

    let referral = referral
        .filter(|_| is_referral_eligible(key))
        .map(|referral| {
            (
                calculate_price_with_referral_discount(key, Some(referral)),
                AppliedDiscount::Referral {
                    percent: referral.percent(),
                },
            )
        });

    // Ties keep the selection policy.
    let (price_cents, discount) = match referral {
        Some(referral) if referral.0 < selection.0 => referral,
        _ => selection,
    };

    PriceQuote {
        plan_key: key,
        base_price_cents,
        price_cents,
        discount,
    }
}

fn discounted_floor(base: u64, percent: u8) -> u64 {
    base * u64::from(100 - percent.min(100)) / 100
}

fn discounted_rounded(base: u64, percent: u8) -> u64 {
    (base * u64::from(100 - percent.min(100)) + 50) / 100
}
