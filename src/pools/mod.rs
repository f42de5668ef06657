//! Pool implementations.
//!
//! | Type | Ownership | Use |
//! |------|-----------|-----|
//! | [`ConstantProductPool`] | owned, `&mut self` swaps | single caller (session, tests) |
//! | [`SharedPool`] | `Arc<Mutex<_>>` handle | several threads swapping on one pool |

mod constant_product;
mod shared;

#[cfg(test)]
mod proptest_properties;

pub use constant_product::ConstantProductPool;
pub use shared::SharedPool;
