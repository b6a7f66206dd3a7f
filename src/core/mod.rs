//! Core module: transcript model, rules engine, and the file boundaries around it

pub mod audit;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod transcript;

pub use catalog::Catalog;
pub use error::AuditError;

/// Returns the current version of the `degree-audit` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
