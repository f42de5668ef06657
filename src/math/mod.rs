//! Arithmetic utilities for AMM calculations.
//!
//! The engine uses `f64` throughout; [`CheckedFloat`] turns non-finite
//! results and zero divisors into [`AmmError`](crate::error::AmmError)
//! values so they propagate with `?`.

mod float;

pub use float::CheckedFloat;
