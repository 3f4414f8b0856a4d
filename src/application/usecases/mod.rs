pub mod checkout;
pub mod plan_resolver;
pub mod price_calculator;
pub mod zip_download;
