//! Error types for structured error handling.
//!
//! Numeric operations across the kernel are total and never fail; these
//! errors only surface when typed inputs (kind codes, contract fields) are
//! validated before a computation.

use thiserror::Error;

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or parameters
/// - `UnknownKindCode`: Integer discriminator outside the known set
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Integer kind code with no matching variant
    #[error("Unknown {family} code: {code}")]
    UnknownKindCode {
        /// Which discriminator family was being decoded
        family: &'static str,
        /// The offending code
        code: i32,
    },
}
