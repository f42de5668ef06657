//! Configuration for the constant-product pool.

use serde::{Deserialize, Serialize};

use crate::error::AmmError;

/// Initial reserve of each asset used by [`PoolConfig::default`].
pub const DEFAULT_RESERVE: f64 = 10_000.0;

/// Default swap fee rate (0.3%).
pub const DEFAULT_FEE_RATE: f64 = 0.003;

/// Default share of each fee credited to LPs.
pub const DEFAULT_LP_SHARE: f64 = 0.5;

/// Configuration for a constant-product pool (`x · y = k`).
///
/// Defines the immutable parameters of the pool: initial reserves, fee
/// rate, and LP fee share.
///
/// # Derived Values
///
/// - Nominal invariant: `k = reserve_x × reserve_y`
/// - Initial spot price: `P₀ = reserve_y / reserve_x`
///
/// # Validation
///
/// - Both reserves must be finite and strictly positive.
/// - `fee_rate` must lie in `[0, 1)`.
/// - `lp_share` must lie in `[0, 1]`.
/// - `reserve_x × reserve_y` must be finite and positive.
///
/// # TOML
///
/// Missing keys fall back to the defaults; unknown keys are rejected.
///
/// ```
/// use token_swap::config::PoolConfig;
///
/// let cfg = PoolConfig::from_toml_str("reserve_x = 5000.0\nfee_rate = 0.01\n")
///     .expect("valid config");
/// assert_eq!(cfg.reserve_x(), 5000.0);
/// assert_eq!(cfg.reserve_y(), 10_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoolConfig {
    reserve_x: f64,
    reserve_y: f64,
    fee_rate: f64,
    lp_share: f64,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    pub fn new(
        reserve_x: f64,
        reserve_y: f64,
        fee_rate: f64,
        lp_share: f64,
    ) -> Result<Self, AmmError> {
        let config = Self {
            reserve_x,
            reserve_y,
            fee_rate,
            lp_share,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ConfigParse`] if the document is malformed or has
    ///   unknown keys.
    /// - Any error from [`PoolConfig::validate`].
    pub fn from_toml_str(input: &str) -> Result<Self, AmmError> {
        let config: Self =
            toml::from_str(input).map_err(|e| AmmError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if a reserve is not finite and
    ///   positive, `lp_share` is outside `[0, 1]`, or the reserve product
    ///   underflows to zero.
    /// - [`AmmError::InvalidFee`] if `fee_rate` is outside `[0, 1)`.
    /// - [`AmmError::Overflow`] if the reserve product is not finite.
    pub fn validate(&self) -> Result<(), AmmError> {
        if !self.reserve_x.is_finite() || self.reserve_x <= 0.0 {
            return Err(AmmError::InvalidConfiguration(
                "reserve_x must be finite and positive",
            ));
        }
        if !self.reserve_y.is_finite() || self.reserve_y <= 0.0 {
            return Err(AmmError::InvalidConfiguration(
                "reserve_y must be finite and positive",
            ));
        }
        if !(0.0..1.0).contains(&self.fee_rate) {
            return Err(AmmError::InvalidFee("fee_rate must be in [0, 1)"));
        }
        if !(0.0..=1.0).contains(&self.lp_share) {
            return Err(AmmError::InvalidConfiguration(
                "lp_share must be in [0, 1]",
            ));
        }
        let product = self.reserve_x * self.reserve_y;
        if !product.is_finite() {
            return Err(AmmError::Overflow("initial k overflow"));
        }
        if product <= 0.0 {
            return Err(AmmError::InvalidConfiguration(
                "reserve product underflows",
            ));
        }
        Ok(())
    }

    /// Returns a copy with `reserve_x` replaced (unvalidated).
    #[must_use]
    pub fn with_reserve_x(mut self, reserve_x: f64) -> Self {
        self.reserve_x = reserve_x;
        self
    }

    /// Returns a copy with `reserve_y` replaced (unvalidated).
    #[must_use]
    pub fn with_reserve_y(mut self, reserve_y: f64) -> Self {
        self.reserve_y = reserve_y;
        self
    }

    /// Returns a copy with `fee_rate` replaced (unvalidated).
    #[must_use]
    pub fn with_fee_rate(mut self, fee_rate: f64) -> Self {
        self.fee_rate = fee_rate;
        self
    }

    /// Returns a copy with `lp_share` replaced (unvalidated).
    #[must_use]
    pub fn with_lp_share(mut self, lp_share: f64) -> Self {
        self.lp_share = lp_share;
        self
    }

    /// Returns the initial reserve of asset X.
    pub const fn reserve_x(&self) -> f64 {
        self.reserve_x
    }

    /// Returns the initial reserve of asset Y.
    pub const fn reserve_y(&self) -> f64 {
        self.reserve_y
    }

    /// Returns the fee rate.
    pub const fn fee_rate(&self) -> f64 {
        self.fee_rate
    }

    /// Returns the LP share of each fee.
    pub const fn lp_share(&self) -> f64 {
        self.lp_share
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            reserve_x: DEFAULT_RESERVE,
            reserve_y: DEFAULT_RESERVE,
            fee_rate: DEFAULT_FEE_RATE,
            lp_share: DEFAULT_LP_SHARE,
        }
    }
}
