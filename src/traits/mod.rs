//! Core trait abstractions for pool operations.
//!
//! [`SwapPool`] covers quoting, swapping, and state inspection;
//! [`FromConfig`] covers validated construction from a configuration
//! record.

mod from_config;
mod swap_pool;

pub use from_config::FromConfig;
pub use swap_pool::SwapPool;
