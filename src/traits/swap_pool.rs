//! Core swap pool trait for executing swaps and querying pool state.
//!
//! [`SwapPool`] is the seam between the pricing engine and its callers
//! (the interactive session, the shared handle, tests).  It covers the
//! full lifecycle of a swap:
//!
//! 1. **Quote**: [`SwapPool::quote`] prices a trade without touching state.
//! 2. **Execute**: [`SwapPool::swap`] commits the trade and its fee
//!    distribution.
//! 3. **Price**: [`SwapPool::spot_price`] returns `reserve_y / reserve_x`.
//! 4. **Inspect**: [`SwapPool::snapshot`] copies the public state.
//!
//! # Fee Deduction Invariant
//!
//! All swap implementations **must** deduct fees from the input amount
//! before applying the pricing formula:
//!
//! ```text
//! fee        = amount_in × fee_rate
//! net_input  = amount_in × (1 − fee_rate)
//! amount_out = reserve_out − k / (reserve_in + net_input)
//! ```

use crate::domain::{PoolSnapshot, Quote, Side, SwapResult};
use crate::error::AmmError;

/// Core trait for two-asset constant-product pools.
///
/// # Implementors
///
/// - `ConstantProductPool`: the engine itself, owned by one caller.
/// - `SharedPool`: a cloneable handle that serialises access to one
///   engine across threads.
///
/// # Errors
///
/// Methods that can fail return [`Result<T, AmmError>`].  Common error
/// variants include:
///
/// - [`AmmError::InvalidAmount`]: input is not finite and positive
/// - [`AmmError::InsufficientLiquidity`]: the trade would drain a reserve
/// - [`AmmError::DivisionByZero`]: a zero denominator was reached
/// - [`AmmError::Overflow`]: a non-finite intermediate result
pub trait SwapPool {
    /// Executes a swap, selling `amount_in` of `side` into the pool.
    ///
    /// Validation happens before any mutation: on `Err` the pool is left
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `amount_in` is not finite and
    ///   positive.
    /// - [`AmmError::InsufficientLiquidity`] if a reserve would not stay
    ///   positive.
    /// - [`AmmError::Overflow`] if any intermediate arithmetic overflows.
    fn swap(&mut self, amount_in: f64, side: Side) -> Result<SwapResult, AmmError>;

    /// Prices a swap without mutating the pool.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SwapPool::swap`].
    fn quote(&self, amount_in: f64, side: Side) -> Result<Quote, AmmError>;

    /// Returns the spot price `reserve_y / reserve_x`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `reserve_x` is zero.
    fn spot_price(&self) -> Result<f64, AmmError>;

    /// Returns a copy of the pool's public state.
    #[must_use]
    fn snapshot(&self) -> PoolSnapshot;
}
