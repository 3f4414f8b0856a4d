pub mod checkout;
pub mod downloads;
pub mod pricing;
