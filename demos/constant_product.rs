//! Constant-product pool walkthrough.
//!
//! Builds the default 10 000 / 10 000 pool, prices and executes swaps in
//! both directions, shows when the reserve share of a fee tops the pool
//! up, and draws the curve at the end.
//!
//! # Run
//!
//! ```bash
//! cargo run --example constant_product
//! ```

use token_swap::chart::CurveChart;
use token_swap::config::PoolConfig;
use token_swap::domain::Side;
use token_swap::pools::ConstantProductPool;
use token_swap::traits::{FromConfig, SwapPool};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Constant Product AMM (x · y = k) ===\n");

    // ── 1. Configure: 10 000 X, 10 000 Y, 0.30% fee, half to LPs ───────
    let config = PoolConfig::new(10_000.0, 10_000.0, 0.003, 0.5)?;
    let mut pool = ConstantProductPool::from_config(&config)?;
    println!("Reserve X:   {:.2}", pool.reserve_x());
    println!("Reserve Y:   {:.2}", pool.reserve_y());
    println!("k:           {:.2}", pool.k());
    println!("Spot price:  {:.5}", pool.spot_price()?);

    // ── 2. Quote before trading; quoting leaves the pool untouched ──────
    let quote = pool.quote(1_000.0, Side::AssetX)?;
    println!("\n--- Quote: sell 1 000 X ---");
    println!("  {quote}");

    // ── 3. Execute the same swap ────────────────────────────────────────
    let result = pool.swap(1_000.0, Side::AssetX)?;
    println!("\n--- Swap: sell 1 000 X ---");
    println!("  Amount out:  {:.4} Y", result.amount_out());
    println!("  Fee paid:    {:.4} X", result.fee());
    println!("  Eff. price:  {:.5}", result.effective_price());
    println!("  Slippage:    {:.3}%", result.slippage_percent(1.0)?);
    println!("  Top-up:      {}", result.distribution().rebalanced());

    // ── 4. Push Y above X so the next fee is folded back in ─────────────
    let push = pool.swap(6_000.0, Side::AssetY)?;
    println!("\n--- Swap: sell 6 000 Y ---");
    println!("  Amount out:  {:.4} X", push.amount_out());
    println!("  X < Y now:   {}", pool.reserve_x() < pool.reserve_y());

    let topped = pool.swap(200.0, Side::AssetX)?;
    let distribution = topped.distribution();
    println!("\n--- Swap: sell 200 X ---");
    println!("  Fee:         {:.4}", distribution.collected());
    println!("  To LPs:      {:.4}", distribution.lp_payment());
    println!("  Top-up each: {:.4}", distribution.reserve_top_up());

    // ── 5. Final state ──────────────────────────────────────────────────
    println!("\nLP earnings:     {:.4}", pool.lp_earnings());
    println!("Current x·y:     {:.2}", pool.current_product());
    println!("Drift from k:    {:.2}", pool.invariant_drift());

    println!("\n{}", CurveChart::default().render(&pool.snapshot()));
    println!("=== Done ===");
    Ok(())
}
