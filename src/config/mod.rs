//! Declarative pool configuration.
//!
//! A [`PoolConfig`] fully describes the immutable parameters of a pool.
//! Pools are built from it through
//! [`FromConfig`](crate::traits::FromConfig), which validates the record
//! before any state is created.  Configurations can also be loaded from a
//! TOML document with [`PoolConfig::from_toml_str`].

mod constant_product;

pub use constant_product::{PoolConfig, DEFAULT_FEE_RATE, DEFAULT_LP_SHARE, DEFAULT_RESERVE};
