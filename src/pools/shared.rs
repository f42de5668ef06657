//! Thread-safe handle around a single pool.
//!
//! [`SharedPool`] serialises every operation on one
//! [`ConstantProductPool`] behind a mutex.  A swap reads and writes both
//! reserves and the LP earnings, so the whole operation runs while the
//! lock is held; two swaps never interleave.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::ConstantProductPool;
use crate::domain::{PoolSnapshot, Quote, Side, SwapResult};
use crate::error::AmmError;
use crate::traits::SwapPool;

/// Cloneable, `Send + Sync` handle to one constant-product pool.
///
/// Cloning the handle does not clone the pool: all clones operate on the
/// same reserves.
///
/// # Example
///
/// ```rust
/// use std::thread;
///
/// use token_swap::config::PoolConfig;
/// use token_swap::domain::Side;
/// use token_swap::pools::{ConstantProductPool, SharedPool};
/// use token_swap::traits::FromConfig;
///
/// let pool = ConstantProductPool::from_config(&PoolConfig::default()).expect("pool");
/// let shared = SharedPool::new(pool);
///
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let pool = shared.clone();
///         thread::spawn(move || pool.swap(10.0, Side::AssetX))
///     })
///     .collect();
/// for handle in handles {
///     assert!(handle.join().expect("thread").is_ok());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SharedPool {
    inner: Arc<Mutex<ConstantProductPool>>,
}

impl SharedPool {
    /// Wraps `pool` for shared use.
    #[must_use]
    pub fn new(pool: ConstantProductPool) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pool)),
        }
    }

    /// Executes a swap under the pool lock.
    ///
    /// # Errors
    ///
    /// Same as [`SwapPool::swap`] on [`ConstantProductPool`].
    pub fn swap(&self, amount_in: f64, side: Side) -> Result<SwapResult, AmmError> {
        self.lock().swap(amount_in, side)
    }

    /// Prices a swap against the current state.
    ///
    /// # Errors
    ///
    /// Same as [`SwapPool::quote`] on [`ConstantProductPool`].
    pub fn quote(&self, amount_in: f64, side: Side) -> Result<Quote, AmmError> {
        self.lock().quote(amount_in, side)
    }

    /// Returns the current spot price.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `reserve_x` is zero.
    pub fn spot_price(&self) -> Result<f64, AmmError> {
        self.lock().spot_price()
    }

    /// Returns a consistent copy of the pool's public state.
    #[must_use]
    pub fn snapshot(&self) -> PoolSnapshot {
        self.lock().snapshot()
    }

    /// Returns the inner pool if this is the last handle, or the handle
    /// itself otherwise.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged when other clones are still alive.
    pub fn into_inner(self) -> Result<ConstantProductPool, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => Ok(mutex.into_inner().unwrap_or_else(PoisonError::into_inner)),
            Err(inner) => Err(Self { inner }),
        }
    }

    // A swap commits only after every check has passed, so a pool behind a
    // poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, ConstantProductPool> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SwapPool for SharedPool {
    fn swap(&mut self, amount_in: f64, side: Side) -> Result<SwapResult, AmmError> {
        Self::swap(self, amount_in, side)
    }

    fn quote(&self, amount_in: f64, side: Side) -> Result<Quote, AmmError> {
        Self::quote(self, amount_in, side)
    }

    fn spot_price(&self) -> Result<f64, AmmError> {
        Self::spot_price(self)
    }

    fn snapshot(&self) -> PoolSnapshot {
        Self::snapshot(self)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::thread;

    use super::*;
    use crate::config::PoolConfig;
    use crate::traits::FromConfig;

    fn make_shared() -> SharedPool {
        let Ok(cfg) = PoolConfig::new(100_000.0, 100_000.0, 0.003, 0.5) else {
            panic!("valid config");
        };
        let Ok(pool) = ConstantProductPool::from_config(&cfg) else {
            panic!("valid pool");
        };
        SharedPool::new(pool)
    }

    #[test]
    fn clones_share_state() {
        let a = make_shared();
        let b = a.clone();
        let Ok(_) = a.swap(100.0, Side::AssetX) else {
            panic!("expected Ok");
        };
        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(b.snapshot().reserve_x, 100_100.0);
    }

    #[test]
    fn concurrent_swaps_are_serialised() {
        let shared = make_shared();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let pool = shared.clone();
                thread::spawn(move || {
                    let side = if i % 2 == 0 { Side::AssetX } else { Side::AssetY };
                    let mut fees = 0.0;
                    for _ in 0..25 {
                        let Ok(result) = pool.swap(10.0, side) else {
                            panic!("swap failed");
                        };
                        fees += result.fee();
                    }
                    fees
                })
            })
            .collect();

        let mut total_fees = 0.0;
        for handle in handles {
            let Ok(fees) = handle.join() else {
                panic!("thread panicked");
            };
            total_fees += fees;
        }

        let snap = shared.snapshot();
        assert!((snap.lp_earnings - total_fees * 0.5).abs() < 1e-9);
        assert!(snap.current_product() >= snap.k);
    }

    #[test]
    fn rejected_swap_leaves_shared_state_unchanged() {
        let shared = make_shared();
        let before = shared.snapshot();
        assert!(shared.swap(-1.0, Side::AssetY).is_err());
        assert_eq!(shared.snapshot(), before);
    }

    #[test]
    fn into_inner_requires_last_handle() {
        let shared = make_shared();
        let other = shared.clone();
        let Err(shared) = shared.into_inner() else {
            panic!("other handle still alive");
        };
        drop(other);
        let Ok(pool) = shared.into_inner() else {
            panic!("last handle");
        };
        assert_eq!(pool.reserve_x(), 100_000.0);
    }

    #[test]
    fn generic_callers_accept_shared_pool() {
        fn sell_x<P: SwapPool>(pool: &mut P) -> f64 {
            let Ok(result) = pool.swap(50.0, Side::AssetX) else {
                panic!("expected Ok");
            };
            result.amount_out()
        }
        let mut shared = make_shared();
        let out = sell_x(&mut shared);
        assert!(out > 0.0);

        let snap = SwapPool::snapshot(&shared);
        let Ok(q) = SwapPool::quote(&shared, 50.0, Side::AssetX) else {
            panic!("expected Ok");
        };
        let expected = snap.reserve_y - snap.k / (snap.reserve_x + 50.0 * (1.0 - 0.003));
        assert!((q.amount_out() - expected).abs() < 1e-9);
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let shared = make_shared();
        let pool = shared.clone();
        let outcome = thread::spawn(move || {
            let _guard = pool.lock();
            panic!("poison the pool lock");
        })
        .join();
        assert!(outcome.is_err());
        assert!(shared.inner.is_poisoned());

        let Ok(result) = shared.swap(100.0, Side::AssetX) else {
            panic!("swap after poisoning failed");
        };
        assert!(result.amount_out() > 0.0);
        assert_eq!(shared.snapshot().reserve_x, 100_100.0);

        let Ok(pool) = shared.into_inner() else {
            panic!("last handle");
        };
        assert_eq!(pool.reserve_x(), 100_100.0);
    }
}
