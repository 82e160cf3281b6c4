//! Light definition records and the per-kind default catalog.
#![forbid(unsafe_code)]

pub mod catalog;
pub mod defs;

pub use catalog::Catalog;
pub use defs::LightDef;
