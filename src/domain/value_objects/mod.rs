pub mod checkout;
pub mod enums;
pub mod plan_keys;
pub mod pricing;
pub mod referrals;
pub mod zip_downloads;
