//! Library for `degree-audit`
//! Evaluates a student's transcript against a course catalog: yearly and overall GPA,
//! degree eligibility, honors class, and grade diagnostics.

pub mod core;

pub use crate::core::{config, get_version};
