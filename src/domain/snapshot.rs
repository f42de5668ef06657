//! Read-only copy of a pool's public state.

use crate::error::AmmError;
use crate::math::CheckedFloat;

/// Point-in-time view of a pool, as consumed by status displays and the
/// curve chart.
///
/// `k` is the *nominal* invariant fixed at construction; compare it with
/// [`current_product`](Self::current_product) to observe drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolSnapshot {
    pub reserve_x: f64,
    pub reserve_y: f64,
    pub k: f64,
    pub lp_earnings: f64,
}

impl PoolSnapshot {
    /// Spot price of X in units of Y: `reserve_y / reserve_x`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `reserve_x` is zero.
    pub fn spot_price(&self) -> Result<f64, AmmError> {
        self.reserve_y.checked_div_f(self.reserve_x)
    }

    /// `reserve_x × reserve_y` as of this snapshot.
    #[must_use]
    pub fn current_product(&self) -> f64 {
        self.reserve_x * self.reserve_y
    }
}
