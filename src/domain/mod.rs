//! Domain value types used throughout the library.
//!
//! These types describe a swap from selection of the input side through
//! pricing, fee distribution, and the final committed result.

mod fee_distribution;
mod quote;
mod side;
mod snapshot;
mod swap_result;

pub use fee_distribution::FeeDistribution;
pub use quote::Quote;
pub use side::Side;
pub use snapshot::PoolSnapshot;
pub use swap_result::SwapResult;
