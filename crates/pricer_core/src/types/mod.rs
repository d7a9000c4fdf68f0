//! Core contract and error types.
//!
//! This module provides:
//! - `contract`: The call-scoped option description shared by every pricer
//! - `error`: Structured error types for validation of typed inputs
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionContract`], [`OptionKind`] from `contract`
//! - [`PricingError`] from `error`

pub mod contract;
pub mod error;

// Re-export commonly used types at module level
pub use contract::{OptionContract, OptionKind};
pub use error::PricingError;
