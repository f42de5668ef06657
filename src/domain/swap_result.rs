//! Outcome of a swap operation.

use core::fmt;

use super::{FeeDistribution, Quote, Side};
use crate::error::AmmError;

/// The outcome of a committed swap: the priced trade plus the fee
/// distribution that ran alongside it.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
/// - `distribution.collected == quote.fee`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapResult {
    quote: Quote,
    distribution: FeeDistribution,
}

impl SwapResult {
    /// Pairs a quote with the fee distribution applied for it.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if either amount is not positive.
    /// - [`AmmError::InvalidAmount`] if the distribution was computed for
    ///   a different fee than the quote collected.
    pub fn new(quote: Quote, distribution: FeeDistribution) -> Result<Self, AmmError> {
        if quote.amount_in() <= 0.0 {
            return Err(AmmError::InvalidAmount("amount_in must be positive"));
        }
        if quote.amount_out() <= 0.0 {
            return Err(AmmError::InvalidAmount("amount_out must be positive"));
        }
        if quote.fee().to_bits() != distribution.collected().to_bits() {
            return Err(AmmError::InvalidAmount(
                "distributed fee differs from quoted fee",
            ));
        }
        Ok(Self {
            quote,
            distribution,
        })
    }

    /// Returns the side that received the input.
    pub const fn side(&self) -> Side {
        self.quote.side()
    }

    /// Returns the input amount.
    pub const fn amount_in(&self) -> f64 {
        self.quote.amount_in()
    }

    /// Returns the output amount.
    pub const fn amount_out(&self) -> f64 {
        self.quote.amount_out()
    }

    /// Returns the fee paid.
    pub const fn fee(&self) -> f64 {
        self.quote.fee()
    }

    /// Returns the full quote this swap executed at.
    pub const fn quote(&self) -> &Quote {
        &self.quote
    }

    /// Returns the fee distribution applied during the swap.
    pub const fn distribution(&self) -> &FeeDistribution {
        &self.distribution
    }

    /// Computes the realized price as `amount_out / amount_in`.
    pub fn effective_price(&self) -> f64 {
        self.quote.effective_price()
    }

    /// Computes the slippage percentage relative to a reference price.
    ///
    /// The formula is `|effective_price - reference_price| / reference_price * 100`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `reference_price` is zero.
    pub fn slippage_percent(&self, reference_price: f64) -> Result<f64, AmmError> {
        if reference_price == 0.0 {
            return Err(AmmError::DivisionByZero);
        }
        let diff = (self.effective_price() - reference_price).abs();
        Ok(diff / reference_price * 100.0)
    }
}

impl fmt::Display for SwapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapResult(in={} {}, out={} {}, fee={})",
            self.amount_in(),
            self.side(),
            self.amount_out(),
            self.side().opposite(),
            self.fee()
        )
    }
}
