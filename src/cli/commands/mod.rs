//! CLI command handlers for `degreeaudit`.
//!
//! Each command is implemented in its own submodule.

pub mod audit;
pub mod config;
