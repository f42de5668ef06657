//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use token_swap::prelude::*;
//!
//! let mut pool = ConstantProductPool::from_config(&PoolConfig::default()).expect("pool");
//! let result = pool.swap(10.0, Side::AssetY).expect("swap");
//! assert!(result.amount_out() > 0.0);
//! ```

pub use crate::chart::CurveChart;
pub use crate::config::PoolConfig;
pub use crate::domain::{FeeDistribution, PoolSnapshot, Quote, Side, SwapResult};
pub use crate::error::{AmmError, Result, SessionError};
pub use crate::pools::{ConstantProductPool, SharedPool};
pub use crate::session::{Session, SessionEnd};
pub use crate::traits::{FromConfig, SwapPool};
