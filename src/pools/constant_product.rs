//! Constant-product pool implementation with split fee distribution.
//!
//! The pricing curve is `x × y = k`, where `k` is fixed when the pool is
//! built.  Fees are deducted from the input amount **before** the curve
//! is evaluated and then split between LP earnings and the reserves.
//!
//! # Swap Algorithm (asset X → asset Y)
//!
//! 1. `fee = amount_in × fee_rate`
//! 2. `net_input = amount_in × (1 − fee_rate)`
//! 3. `amount_out = reserve_y − k / (reserve_x + net_input)`
//! 4. Fee distribution, evaluated against the reserves from *before*
//!    this swap:
//!    - `lp_earnings += fee × lp_share`
//!    - if `reserve_x < reserve_y`, both reserves gain
//!      `fee × (1 − lp_share) / 2`; otherwise that share is dropped.
//! 5. `reserve_x += amount_in` (the fee is not removed from the pool)
//! 6. `reserve_y -= amount_out`
//!
//! # Nominal Invariant
//!
//! `k` is never recomputed.  Because the full input (fee included) lands
//! in the reserves and the fee top-up bypasses the curve, the live
//! product `reserve_x × reserve_y` drifts upward from `k`.
//! [`ConstantProductPool::current_product`] and
//! [`ConstantProductPool::invariant_drift`] expose that drift.

use log::{debug, info};

use crate::config::PoolConfig;
use crate::domain::{FeeDistribution, PoolSnapshot, Quote, Side, SwapResult};
use crate::error::AmmError;
use crate::math::CheckedFloat;
use crate::traits::{FromConfig, SwapPool};

/// A two-asset constant-product AMM pool (`x · y = k`).
///
/// Created from a [`PoolConfig`] via [`FromConfig`].  The pool validates
/// the configuration on construction and is immediately ready for swaps.
///
/// # State
///
/// - `reserve_x` / `reserve_y`: current asset balances (fees included)
/// - `k`: nominal invariant, `reserve_x × reserve_y` at construction
/// - `fee_rate` / `lp_share`: fixed fee parameters
/// - `lp_earnings`: lifetime fees credited to liquidity providers
///
/// # Example
///
/// ```rust
/// use token_swap::config::PoolConfig;
/// use token_swap::domain::Side;
/// use token_swap::pools::ConstantProductPool;
/// use token_swap::traits::{FromConfig, SwapPool};
///
/// let cfg = PoolConfig::new(10_000.0, 10_000.0, 0.003, 0.5).expect("valid config");
/// let mut pool = ConstantProductPool::from_config(&cfg).expect("pool created");
///
/// let result = pool.swap(1_000.0, Side::AssetX).expect("swap ok");
/// assert!(result.amount_out() > 906.0 && result.amount_out() < 907.0);
/// assert!((pool.lp_earnings() - 1.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantProductPool {
    reserve_x: f64,
    reserve_y: f64,
    k: f64,
    fee_rate: f64,
    lp_share: f64,
    lp_earnings: f64,
}

impl ConstantProductPool {
    /// Returns the current reserve of asset X.
    pub const fn reserve_x(&self) -> f64 {
        self.reserve_x
    }

    /// Returns the current reserve of asset Y.
    pub const fn reserve_y(&self) -> f64 {
        self.reserve_y
    }

    /// Returns the nominal invariant fixed at construction.
    pub const fn k(&self) -> f64 {
        self.k
    }

    /// Returns the fraction of each input taken as fee.
    pub const fn fee_rate(&self) -> f64 {
        self.fee_rate
    }

    /// Returns the fraction of each fee credited to LPs.
    pub const fn lp_share(&self) -> f64 {
        self.lp_share
    }

    /// Returns the cumulative fees credited to LPs.
    pub const fn lp_earnings(&self) -> f64 {
        self.lp_earnings
    }

    /// Live product `reserve_x × reserve_y`.
    #[must_use]
    pub fn current_product(&self) -> f64 {
        self.reserve_x * self.reserve_y
    }

    /// How far the live product has moved from the nominal `k`.
    #[must_use]
    pub fn invariant_drift(&self) -> f64 {
        self.current_product() - self.k
    }

    /// Splits `collected` between LP earnings and the reserves.
    ///
    /// The reserve share is added (half to each reserve) only when
    /// `reserve_x < reserve_y`; otherwise it is dropped.  Inside a swap
    /// this runs against the reserves from before the swap's own deltas.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `collected` is negative or not
    ///   finite.
    /// - [`AmmError::Overflow`] if an updated balance is not finite.
    pub fn distribute_fee(&mut self, collected: f64) -> Result<FeeDistribution, AmmError> {
        let distribution = self.plan_fee_distribution(collected)?;

        let lp_earnings = self.lp_earnings.checked_add_f(distribution.lp_payment)?;
        let reserve_x = self.reserve_x.checked_add_f(distribution.reserve_top_up)?;
        let reserve_y = self.reserve_y.checked_add_f(distribution.reserve_top_up)?;

        self.lp_earnings = lp_earnings;
        self.reserve_x = reserve_x;
        self.reserve_y = reserve_y;

        debug!("distributed fee: {distribution}");
        Ok(distribution)
    }

    /// Returns `(reserve_in, reserve_out)` for a trade selling `side`.
    const fn reserves_for(&self, side: Side) -> (f64, f64) {
        match side {
            Side::AssetX => (self.reserve_x, self.reserve_y),
            Side::AssetY => (self.reserve_y, self.reserve_x),
        }
    }

    /// Evaluates the curve for an exact-in trade.
    ///
    /// Formula: `amount_out = reserve_out − k / (reserve_in + amount_in × (1 − fee_rate))`
    fn compute_quote(&self, amount_in: f64, side: Side) -> Result<Quote, AmmError> {
        if !amount_in.is_finite() || amount_in <= 0.0 {
            return Err(AmmError::InvalidAmount(
                "amount must be finite and positive",
            ));
        }

        let (reserve_in, reserve_out) = self.reserves_for(side);

        let fee = amount_in.checked_mul_f(self.fee_rate)?;
        let amount_in_after_fee = amount_in.checked_mul_f(1.0 - self.fee_rate)?;
        let reserve_in_after = reserve_in.checked_add_f(amount_in_after_fee)?;
        let reserve_out_after = self.k.checked_div_f(reserve_in_after)?;
        let amount_out = reserve_out.checked_sub_f(reserve_out_after)?;

        // Rounding can swallow inputs that are tiny relative to the reserve.
        if amount_out <= 0.0 {
            return Err(AmmError::InvalidAmount(
                "amount too small to produce any output",
            ));
        }
        if amount_out >= reserve_out {
            return Err(AmmError::InsufficientLiquidity);
        }

        Ok(Quote {
            side,
            amount_in,
            fee,
            amount_in_after_fee,
            reserve_in_after,
            reserve_out_after,
            amount_out,
        })
    }

    /// Computes a fee distribution against the current reserves without
    /// applying it.
    fn plan_fee_distribution(&self, collected: f64) -> Result<FeeDistribution, AmmError> {
        if !collected.is_finite() || collected < 0.0 {
            return Err(AmmError::InvalidAmount(
                "fee must be finite and non-negative",
            ));
        }

        let lp_payment = collected.checked_mul_f(self.lp_share)?;
        let reserve_payment = collected.checked_mul_f(1.0 - self.lp_share)?;

        let rebalanced = self.reserve_x < self.reserve_y;
        let reserve_top_up = if rebalanced {
            reserve_payment / 2.0
        } else {
            0.0
        };

        Ok(FeeDistribution {
            collected,
            lp_payment,
            reserve_payment,
            reserve_top_up,
            rebalanced,
        })
    }
}

impl FromConfig<PoolConfig> for ConstantProductPool {
    /// Creates a new pool from the given configuration.
    ///
    /// The nominal invariant is set to `reserve_x × reserve_y` and LP
    /// earnings start at zero.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        config.validate()?;

        let reserve_x = config.reserve_x();
        let reserve_y = config.reserve_y();
        let k = reserve_x.checked_mul_f(reserve_y)?;

        info!(
            "created constant-product pool: x={reserve_x} y={reserve_y} k={k} fee_rate={} lp_share={}",
            config.fee_rate(),
            config.lp_share()
        );

        Ok(Self {
            reserve_x,
            reserve_y,
            k,
            fee_rate: config.fee_rate(),
            lp_share: config.lp_share(),
            lp_earnings: 0.0,
        })
    }
}

impl SwapPool for ConstantProductPool {
    /// Executes a swap on the constant-product pool.
    ///
    /// The output is priced from the reserves as they stand on entry.  The
    /// fee distribution is then evaluated against those same reserves, and
    /// the swap's own deltas are applied on top of any top-up.  Every new
    /// value is computed before anything is written, so an error leaves
    /// the pool unchanged.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `amount_in` is not finite and
    ///   positive, or too small to move the curve.
    /// - [`AmmError::InsufficientLiquidity`] if a reserve would not stay
    ///   positive.
    /// - [`AmmError::Overflow`] if any arithmetic overflows.
    fn swap(&mut self, amount_in: f64, side: Side) -> Result<SwapResult, AmmError> {
        let quote = self.compute_quote(amount_in, side)?;
        let distribution = self.plan_fee_distribution(quote.fee)?;

        let lp_earnings = self.lp_earnings.checked_add_f(distribution.lp_payment)?;
        let topped_x = self.reserve_x.checked_add_f(distribution.reserve_top_up)?;
        let topped_y = self.reserve_y.checked_add_f(distribution.reserve_top_up)?;

        let (reserve_x, reserve_y) = match side {
            Side::AssetX => (
                topped_x.checked_add_f(quote.amount_in)?,
                topped_y.checked_sub_f(quote.amount_out)?,
            ),
            Side::AssetY => (
                topped_x.checked_sub_f(quote.amount_out)?,
                topped_y.checked_add_f(quote.amount_in)?,
            ),
        };

        if reserve_x <= 0.0 || reserve_y <= 0.0 {
            return Err(AmmError::InsufficientLiquidity);
        }

        let result = SwapResult::new(quote, distribution)?;

        self.lp_earnings = lp_earnings;
        self.reserve_x = reserve_x;
        self.reserve_y = reserve_y;

        debug!(
            "swap {result}; {distribution}; reserves now x={reserve_x} y={reserve_y}"
        );
        if !distribution.rebalanced {
            debug!("reserve fee share {} discarded", distribution.discarded());
        }

        Ok(result)
    }

    fn quote(&self, amount_in: f64, side: Side) -> Result<Quote, AmmError> {
        let quote = self.compute_quote(amount_in, side)?;
        debug!("quoted {quote}");
        Ok(quote)
    }

    /// Returns the spot price `reserve_y / reserve_x`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `reserve_x` is zero.
    fn spot_price(&self) -> Result<f64, AmmError> {
        if self.reserve_x == 0.0 {
            return Err(AmmError::DivisionByZero);
        }
        self.reserve_y.checked_div_f(self.reserve_x)
    }

    fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            reserve_x: self.reserve_x,
            reserve_y: self.reserve_y,
            k: self.k,
            lp_earnings: self.lp_earnings,
        }
    }
}
