//! Shared wire types, errors, and configuration for Pivot.
//!
//! This crate provides common types used across all other crates:
//! - `Money` with integral units and nanosecond-scale fractional part
//! - Validated three-letter currency codes
//! - The payment charge request/response contract
//! - Health serving status
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::AppError;
