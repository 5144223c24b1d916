//! Core conversion logic for Pivot.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! Every function here is synchronous and free of shared mutable state, so the
//! transport layer may call into it from any number of tasks at once.
//!
//! # Modules
//!
//! - `currency` - Fixed-point money arithmetic, rate table, two-hop conversion
//! - `payment` - Seam for the external payment charge processor

pub mod currency;
pub mod payment;
