pub mod payments;
pub mod zip_downloads;
