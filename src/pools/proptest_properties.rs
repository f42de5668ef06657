//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Output bound**: `0 < amount_out < reserve_out` for every valid quote.
//! 2. **Fee proportionality**: `fee == amount_in × fee_rate` exactly.
//! 3. **LP earnings**: cumulative earnings equal `Σ fee × lp_share` and
//!    never decrease.
//! 4. **Conditional rebalancing**: reserves gain the fee top-up iff
//!    `reserve_x < reserve_y` held before the swap.
//! 5. **Rejection is side-effect free**: invalid amounts leave the pool
//!    unchanged.
//! 6. **Drift direction**: the live product never falls below `k`.
//! 7. **Swap reversibility**: a round trip X→Y→X returns less than sent.

use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::domain::Side;
use crate::error::AmmError;
use crate::pools::ConstantProductPool;
use crate::traits::{FromConfig, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn make_pool(rx: f64, ry: f64, fee_rate: f64, lp_share: f64) -> ConstantProductPool {
    let Ok(cfg) = PoolConfig::new(rx, ry, fee_rate, lp_share) else {
        panic!("valid config");
    };
    let Ok(pool) = ConstantProductPool::from_config(&cfg) else {
        panic!("valid pool");
    };
    pool
}

fn relative_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in [100, 10_000_000].
fn reserve_strategy() -> impl Strategy<Value = f64> {
    (100u32..=10_000_000u32).prop_map(f64::from)
}

/// Fee rates in [0, 0.1] in steps of one basis point.
fn fee_strategy() -> impl Strategy<Value = f64> {
    (0u32..=1_000u32).prop_map(|bp| f64::from(bp) / 10_000.0)
}

/// LP shares in [0, 1] in 1% steps.
fn lp_share_strategy() -> impl Strategy<Value = f64> {
    (0u32..=100u32).prop_map(|v| f64::from(v) / 100.0)
}

/// Trade size as a fraction of the input reserve: [0.1%, 50%].
fn trade_fraction_strategy() -> impl Strategy<Value = f64> {
    (1u32..=500u32).prop_map(|v| f64::from(v) / 1_000.0)
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::AssetX), Just(Side::AssetY)]
}

fn reserve_in(pool: &ConstantProductPool, side: Side) -> f64 {
    match side {
        Side::AssetX => pool.reserve_x(),
        Side::AssetY => pool.reserve_y(),
    }
}

fn reserve_out(pool: &ConstantProductPool, side: Side) -> f64 {
    reserve_in(pool, side.opposite())
}

// ---------------------------------------------------------------------------
// Property 1 & 2: Output bound and fee proportionality
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_output_bounded_by_reserve(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        fee in fee_strategy(),
        fraction in trade_fraction_strategy(),
        side in side_strategy(),
    ) {
        let pool = make_pool(rx, ry, fee, 0.5);
        let amount = reserve_in(&pool, side) * fraction;
        let Ok(q) = pool.quote(amount, side) else {
            return Err(TestCaseError::fail("quote failed"));
        };
        prop_assert!(q.amount_out() > 0.0);
        prop_assert!(q.amount_out() < reserve_out(&pool, side));
    }

    #[test]
    fn prop_fee_is_exactly_proportional(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        fee in fee_strategy(),
        fraction in trade_fraction_strategy(),
        side in side_strategy(),
    ) {
        let mut pool = make_pool(rx, ry, fee, 0.5);
        let amount = reserve_in(&pool, side) * fraction;
        let Ok(result) = pool.swap(amount, side) else {
            return Err(TestCaseError::fail("swap failed"));
        };
        prop_assert_eq!(result.fee().to_bits(), (amount * fee).to_bits());
    }
}

// ---------------------------------------------------------------------------
// Property 3: LP earnings
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_lp_earnings_sum_of_shares(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        share in lp_share_strategy(),
        trades in prop::collection::vec((trade_fraction_strategy(), side_strategy()), 1..20),
    ) {
        let mut pool = make_pool(rx, ry, 0.003, share);
        let mut expected = 0.0;
        let mut previous = pool.lp_earnings();

        for (fraction, side) in trades {
            let amount = reserve_in(&pool, side) * fraction;
            let Ok(result) = pool.swap(amount, side) else {
                return Err(TestCaseError::fail("swap failed"));
            };
            expected += result.fee() * share;
            prop_assert!(pool.lp_earnings() >= previous);
            previous = pool.lp_earnings();
        }

        prop_assert!(relative_eq(pool.lp_earnings(), expected));
    }
}

// ---------------------------------------------------------------------------
// Property 4: Conditional rebalancing
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_top_up_iff_x_below_y(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        share in lp_share_strategy(),
        fraction in trade_fraction_strategy(),
        side in side_strategy(),
    ) {
        let mut pool = make_pool(rx, ry, 0.003, share);
        let x_below_y = pool.reserve_x() < pool.reserve_y();
        let amount = reserve_in(&pool, side) * fraction;

        let Ok(result) = pool.swap(amount, side) else {
            return Err(TestCaseError::fail("swap failed"));
        };
        let dist = result.distribution();
        let top_up = if x_below_y { result.fee() * (1.0 - share) / 2.0 } else { 0.0 };

        prop_assert_eq!(dist.rebalanced(), x_below_y);
        prop_assert_eq!(dist.reserve_top_up().to_bits(), top_up.to_bits());

        let (expected_x, expected_y) = match side {
            Side::AssetX => (rx + top_up + amount, ry + top_up - result.amount_out()),
            Side::AssetY => (rx + top_up - result.amount_out(), ry + top_up + amount),
        };
        prop_assert!(relative_eq(pool.reserve_x(), expected_x));
        prop_assert!(relative_eq(pool.reserve_y(), expected_y));
    }
}

// ---------------------------------------------------------------------------
// Property 5: Rejection is side-effect free
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_invalid_amount_leaves_pool_unchanged(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        amount in prop_oneof![
            (0u32..=1_000_000u32).prop_map(|v| -f64::from(v)),
            Just(f64::NAN),
            Just(f64::INFINITY),
        ],
        side in side_strategy(),
    ) {
        let mut pool = make_pool(rx, ry, 0.003, 0.5);
        let before = pool.clone();
        let result = pool.swap(amount, side);
        prop_assert!(matches!(result, Err(AmmError::InvalidAmount(_))));
        prop_assert_eq!(pool, before);
    }
}

// ---------------------------------------------------------------------------
// Property 6: Drift direction
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_product_never_below_nominal_k(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        fee in fee_strategy(),
        trades in prop::collection::vec((trade_fraction_strategy(), side_strategy()), 1..20),
    ) {
        let mut pool = make_pool(rx, ry, fee, 0.5);
        let k = pool.k();
        for (fraction, side) in trades {
            let amount = reserve_in(&pool, side) * fraction;
            let Ok(_) = pool.swap(amount, side) else {
                return Err(TestCaseError::fail("swap failed"));
            };
            prop_assert_eq!(pool.k().to_bits(), k.to_bits());
            prop_assert!(pool.current_product() >= k * (1.0 - 1e-12));
        }
    }
}

// ---------------------------------------------------------------------------
// Property 7: Swap reversibility
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_loses_value(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        fraction in trade_fraction_strategy(),
    ) {
        let mut pool = make_pool(rx, ry, 0.003, 0.5);
        let sent = rx * fraction;

        let Ok(forward) = pool.swap(sent, Side::AssetX) else {
            return Err(TestCaseError::fail("forward swap failed"));
        };
        let Ok(back) = pool.swap(forward.amount_out(), Side::AssetY) else {
            return Err(TestCaseError::fail("reverse swap failed"));
        };

        prop_assert!(
            back.amount_out() < sent,
            "round-trip should lose value: final={} >= original={}",
            back.amount_out(), sent
        );
    }
}
