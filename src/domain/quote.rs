//! Price/output computation for a prospective swap.

use core::fmt;

use super::Side;

/// The priced outcome of selling `amount_in` on `side`, before any state
/// change.
///
/// Produced by [`SwapPool::quote`](crate::traits::SwapPool::quote).
/// Fields follow the curve evaluation step by step:
///
/// ```text
/// fee                 = amount_in × fee_rate
/// amount_in_after_fee = amount_in × (1 − fee_rate)
/// reserve_in_after    = reserve_in + amount_in_after_fee
/// reserve_out_after   = k / reserve_in_after
/// amount_out          = reserve_out − reserve_out_after
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub(crate) side: Side,
    pub(crate) amount_in: f64,
    pub(crate) fee: f64,
    pub(crate) amount_in_after_fee: f64,
    pub(crate) reserve_in_after: f64,
    pub(crate) reserve_out_after: f64,
    pub(crate) amount_out: f64,
}

impl Quote {
    /// Returns the side receiving the input.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Returns the gross input amount.
    #[must_use]
    pub const fn amount_in(&self) -> f64 {
        self.amount_in
    }

    /// Returns the fee collected on the input.
    #[must_use]
    pub const fn fee(&self) -> f64 {
        self.fee
    }

    /// Returns the input left after the fee is taken.
    #[must_use]
    pub const fn amount_in_after_fee(&self) -> f64 {
        self.amount_in_after_fee
    }

    /// Returns the input-side reserve at which the curve was evaluated.
    #[must_use]
    pub const fn reserve_in_after(&self) -> f64 {
        self.reserve_in_after
    }

    /// Returns the output-side reserve implied by the curve.
    #[must_use]
    pub const fn reserve_out_after(&self) -> f64 {
        self.reserve_out_after
    }

    /// Returns the amount paid out on the opposite side.
    #[must_use]
    pub const fn amount_out(&self) -> f64 {
        self.amount_out
    }

    /// Realized exchange rate `amount_out / amount_in`.
    ///
    /// `amount_in` is positive for every quote the pool produces, so the
    /// ratio is always finite.
    #[must_use]
    pub fn effective_price(&self) -> f64 {
        self.amount_out / self.amount_in
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quote(in={} {}, out={} {}, fee={})",
            self.amount_in,
            self.side,
            self.amount_out,
            self.side.opposite(),
            self.fee
        )
    }
}
