//! Unified error types for the token-swap library.
//!
//! All fallible pool, math, and configuration operations return
//! [`AmmError`], so callers deal with a single error vocabulary.  The
//! interactive session driver adds [`SessionError`] for I/O failures on
//! its input and output handles.
//!
//! Every variant is detected *before* any pool state is mutated: a call
//! that returns `Err` leaves the pool exactly as it was.

use thiserror::Error;

/// Errors produced by pool construction, quoting, and swapping.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmmError {
    /// An input or fee amount is zero, negative, NaN, or infinite.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// A side label is neither `X` nor `Y`.
    #[error("invalid side: token must be 'X' or 'Y'")]
    InvalidSide,

    /// A denominator reached zero (spot price or curve evaluation).
    #[error("division by zero")]
    DivisionByZero,

    /// The swap would drain or overdraw a reserve.
    #[error("insufficient liquidity in pool reserves")]
    InsufficientLiquidity,

    /// An intermediate result is not finite.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// The fee rate lies outside `[0, 1)`.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Errors that end an interactive session abnormally.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading the input handle or writing the output handle failed.
    #[error("session I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
