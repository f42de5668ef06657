//! Generic construction trait for pool instantiation from configuration.
//!
//! # Validation Contract
//!
//! Implementations **must** validate all configuration invariants during
//! construction.  A successfully constructed pool is guaranteed to be in
//! a valid initial state: positive finite reserves, a fee rate in
//! `[0, 1)`, and an LP share in `[0, 1]`.

use crate::error::AmmError;

/// Construction of a pool from its configuration record.
///
/// The configuration is taken by reference because it may be reused
/// (e.g., to reset a simulation).
///
/// # Errors
///
/// Returns [`AmmError::InvalidConfiguration`] (or a more specific
/// variant) if the configuration is invalid.
pub trait FromConfig<C> {
    /// Creates a new pool instance from the given configuration.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if any parameter is out of
    ///   range.
    /// - [`AmmError::InvalidFee`] if the fee rate is unsupported.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
