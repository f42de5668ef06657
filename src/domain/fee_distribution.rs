//! How a collected fee is split between LPs and the reserves.

use core::fmt;

/// Record of one fee distribution.
///
/// The LP portion (`collected × lp_share`) always accrues to LP earnings.
/// The reserve portion (`collected × (1 − lp_share)`) is split evenly into
/// both reserves only when `reserve_x < reserve_y` held at distribution
/// time; otherwise it is dropped and [`discarded`](Self::discarded)
/// reports how much.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeDistribution {
    pub(crate) collected: f64,
    pub(crate) lp_payment: f64,
    pub(crate) reserve_payment: f64,
    pub(crate) reserve_top_up: f64,
    pub(crate) rebalanced: bool,
}

impl FeeDistribution {
    /// Returns the total fee that was distributed.
    #[must_use]
    pub const fn collected(&self) -> f64 {
        self.collected
    }

    /// Returns the amount credited to LP earnings.
    #[must_use]
    pub const fn lp_payment(&self) -> f64 {
        self.lp_payment
    }

    /// Returns the pool's share of the fee, whether or not it was applied.
    #[must_use]
    pub const fn reserve_payment(&self) -> f64 {
        self.reserve_payment
    }

    /// Returns the amount added to *each* reserve (zero unless rebalanced).
    #[must_use]
    pub const fn reserve_top_up(&self) -> f64 {
        self.reserve_top_up
    }

    /// Returns `true` if the reserve share was added to the reserves.
    #[must_use]
    pub const fn rebalanced(&self) -> bool {
        self.rebalanced
    }

    /// Returns the reserve share that was dropped.
    #[must_use]
    pub fn discarded(&self) -> f64 {
        if self.rebalanced {
            0.0
        } else {
            self.reserve_payment
        }
    }
}

impl fmt::Display for FeeDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FeeDistribution(collected={}, lp={}, reserves={}, rebalanced={})",
            self.collected, self.lp_payment, self.reserve_payment, self.rebalanced
        )
    }
}
