//! # token-swap
//!
//! A two-asset constant-product automated market maker: swap one asset
//! for the other at a price set by the pool's reserves, while a fee on
//! every input is split between liquidity providers and the pool.
//!
//! The pricing/fee engine is [`ConstantProductPool`](pools::ConstantProductPool).
//! Around it the crate provides a thread-safe handle, a text chart of the
//! curve, and the interactive session used by the `token-swap` binary.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli` | yes | Builds the `token-swap` binary (`clap`, `env_logger`, `anyhow`) |
//!
//! ## Create a pool and execute a swap
//!
//! ```rust
//! use token_swap::config::PoolConfig;
//! use token_swap::domain::Side;
//! use token_swap::pools::ConstantProductPool;
//! use token_swap::traits::{FromConfig, SwapPool};
//!
//! // 1. Describe the pool: 10 000 X, 10 000 Y, 0.3% fee, half to LPs
//! let config = PoolConfig::new(10_000.0, 10_000.0, 0.003, 0.5).expect("valid config");
//!
//! // 2. Build it
//! let mut pool = ConstantProductPool::from_config(&config).expect("pool created");
//!
//! // 3. Price a trade without touching state, then execute it
//! let quote = pool.quote(1_000.0, Side::AssetX).expect("quote");
//! let result = pool.swap(1_000.0, Side::AssetX).expect("swap succeeded");
//! assert_eq!(quote.amount_out(), result.amount_out());
//!
//! // 4. Inspect the new state
//! assert_eq!(pool.reserve_x(), 11_000.0);
//! assert!((pool.lp_earnings() - 1.5).abs() < 1e-9);
//! assert!(pool.current_product() > pool.k());
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Session     │  menu loop over BufRead / Write
//! └──────┬───────┘
//!        │ SwapPool::swap / snapshot
//!        ▼
//! ┌──────────────┐        ┌──────────────┐
//! │    Pools      │ ─────▶ │    Chart      │  reads PoolSnapshot only
//! └──────┬───────┘        └──────────────┘
//!        │ Quote, FeeDistribution, SwapResult
//!        ▼
//! ┌──────────────┐
//! │    Domain     │
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Side`](domain::Side), [`Quote`](domain::Quote), [`SwapResult`](domain::SwapResult), etc. |
//! | [`traits`] | [`SwapPool`](traits::SwapPool) and [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) record, validation, TOML loading |
//! | [`pools`]  | [`ConstantProductPool`](pools::ConstantProductPool) and [`SharedPool`](pools::SharedPool) |
//! | [`math`]   | Finite-checked `f64` arithmetic |
//! | [`chart`]  | Text plot of the curve and current reserves |
//! | [`session`] | Interactive menu driver |
//! | [`error`]  | [`AmmError`](error::AmmError) and [`SessionError`](error::SessionError) |
//! | [`prelude`] | Convenience re-exports |

pub mod chart;
pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod session;
pub mod traits;
