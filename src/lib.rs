//! Storage-plan pricing for photo galleries: the fixed plan catalog, best-plan
//! and discount calculations, plus the HTTP surface and backend client around them.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod observability;
