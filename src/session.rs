//! Interactive, line-oriented swap session.
//!
//! [`Session`] drives a [`SwapPool`] from a menu read off any
//! [`BufRead`] and writes prompts and results to any [`Write`].  The
//! binary wires it to stdin/stdout; tests feed it scripted input.
//!
//! | Choice | Action |
//! |--------|--------|
//! | `1` | prompt for an amount, swap X → Y |
//! | `2` | prompt for an amount, swap Y → X |
//! | `3` | print pool status (and chart) |
//! | `4` | print pool status and exit |
//!
//! An amount that does not parse as a number ends the session with
//! `Session interrupted.`; an amount the pool rejects is reported and the
//! menu continues.

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::chart::CurveChart;
use crate::domain::Side;
use crate::error::SessionError;
use crate::traits::SwapPool;

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose `4`.
    Exited,
    /// A non-numeric amount was entered.
    Interrupted,
    /// The input stream ended.
    EndOfInput,
}

/// Menu-driven session over a pool.
#[derive(Debug)]
pub struct Session<P, R, W> {
    pool: P,
    input: R,
    output: W,
    chart: Option<CurveChart>,
}

impl<P, R, W> Session<P, R, W>
where
    P: SwapPool,
    R: BufRead,
    W: Write,
{
    /// Creates a session with the default chart enabled.
    pub fn new(pool: P, input: R, output: W) -> Self {
        Self {
            pool,
            input,
            output,
            chart: Some(CurveChart::default()),
        }
    }

    /// Replaces the chart drawn with each status report; `None` disables it.
    #[must_use]
    pub fn with_chart(mut self, chart: Option<CurveChart>) -> Self {
        self.chart = chart;
        self
    }

    /// Returns the pool being driven.
    pub const fn pool(&self) -> &P {
        &self.pool
    }

    /// Consumes the session, returning the pool and the output handle.
    pub fn into_parts(self) -> (P, W) {
        (self.pool, self.output)
    }

    /// Runs the menu loop until exit, interruption, or end of input.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] if reading input or writing output
    /// fails.
    pub fn run(&mut self) -> Result<SessionEnd, SessionError> {
        writeln!(self.output, "=== Token Swap Simulator ===")?;
        writeln!(self.output, "Initial pool status:")?;
        self.print_status()?;

        let end = loop {
            writeln!(self.output)?;
            writeln!(self.output, "[Options]")?;
            writeln!(self.output, "1. Swap Token X -> Token Y")?;
            writeln!(self.output, "2. Swap Token Y -> Token X")?;
            writeln!(self.output, "3. View pool status")?;
            writeln!(self.output, "4. Exit")?;

            let Some(choice) = self.prompt("Select an option: ")? else {
                break SessionEnd::EndOfInput;
            };

            match choice.trim() {
                "1" => {
                    if let Some(end) = self.swap_step(Side::AssetX)? {
                        break end;
                    }
                }
                "2" => {
                    if let Some(end) = self.swap_step(Side::AssetY)? {
                        break end;
                    }
                }
                "3" => self.print_status()?,
                "4" => {
                    self.print_status()?;
                    writeln!(self.output, "Exiting session.")?;
                    break SessionEnd::Exited;
                }
                other => {
                    debug!("unrecognised menu choice {other:?}");
                    writeln!(self.output, "Invalid choice. Please select again.")?;
                }
            }
        };

        self.output.flush()?;
        info!("session ended: {end:?}");
        Ok(end)
    }

    /// Prompts for an amount and swaps it; returns `Some` if the session
    /// must end.
    fn swap_step(&mut self, side: Side) -> Result<Option<SessionEnd>, SessionError> {
        let sold = side.label();
        let bought = side.opposite().label();

        let prompt = format!("Enter the amount of Token {sold} to swap: ");
        let Some(line) = self.prompt(&prompt)? else {
            return Ok(Some(SessionEnd::EndOfInput));
        };

        let Ok(amount) = line.trim().parse::<f64>() else {
            writeln!(self.output, "Session interrupted.")?;
            return Ok(Some(SessionEnd::Interrupted));
        };

        match self.pool.swap(amount, side) {
            Ok(result) => writeln!(
                self.output,
                "You swapped {:.2} Token {sold} for {:.2} Token {bought}.",
                result.amount_in(),
                result.amount_out()
            )?,
            Err(err) => {
                debug!("swap of {amount} {sold} rejected: {err}");
                writeln!(self.output, "Swap rejected: {err}")?;
            }
        }
        Ok(None)
    }

    fn print_status(&mut self) -> Result<(), SessionError> {
        let snapshot = self.pool.snapshot();
        writeln!(self.output)?;
        writeln!(self.output, "Current Pool Status:")?;
        writeln!(self.output, "Reserve X: {:.2}", snapshot.reserve_x)?;
        writeln!(self.output, "Reserve Y: {:.2}", snapshot.reserve_y)?;
        writeln!(self.output, "LP Earnings: {:.2}", snapshot.lp_earnings)?;
        match self.pool.spot_price() {
            Ok(price) => writeln!(self.output, "Price of Y (in X): {price:.5}")?,
            Err(err) => writeln!(self.output, "Price of Y (in X): unavailable ({err})")?,
        }
        if let Some(chart) = &self.chart {
            writeln!(self.output, "{}", chart.render(&snapshot))?;
        }
        Ok(())
    }

    /// Writes `text` and reads one line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, SessionError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::PoolConfig;
    use crate::pools::ConstantProductPool;
    use crate::traits::FromConfig;

    fn make_pool() -> ConstantProductPool {
        let Ok(pool) = ConstantProductPool::from_config(&PoolConfig::default()) else {
            panic!("valid pool");
        };
        pool
    }

    fn run_script(script: &str) -> (SessionEnd, ConstantProductPool, String) {
        let mut session =
            Session::new(make_pool(), script.as_bytes(), Vec::new()).with_chart(None);
        let Ok(end) = session.run() else {
            panic!("session I/O failed");
        };
        let (pool, output) = session.into_parts();
        let Ok(text) = String::from_utf8(output) else {
            panic!("utf-8 output");
        };
        (end, pool, text)
    }

    #[test]
    fn swap_then_exit() {
        let (end, pool, out) = run_script("1\n1000\n4\n");
        assert_eq!(end, SessionEnd::Exited);
        assert!(out.contains("You swapped 1000.00 Token X for 906.61 Token Y."));
        assert!(out.contains("Reserve X: 11000.00"));
        assert!(out.contains("Reserve Y: 9093.39"));
        assert!(out.contains("LP Earnings: 1.50"));
        assert!(out.trim_end().ends_with("Exiting session."));
        assert_eq!(pool.reserve_x(), 11_000.0);
    }

    #[test]
    fn y_swap_reports_mirrored_tokens() {
        let (_, _, out) = run_script("2\n500\n4\n");
        assert!(out.contains("Token Y for"));
        assert!(out.contains("Token X."));
    }

    #[test]
    fn initial_status_shows_price_to_five_places() {
        let (_, _, out) = run_script("4\n");
        assert!(out.starts_with("=== Token Swap Simulator ===\nInitial pool status:"));
        assert!(out.contains("Price of Y (in X): 1.00000"));
    }

    #[test]
    fn invalid_choice_reprompts() {
        let (end, pool, out) = run_script("9\nx\n4\n");
        assert_eq!(end, SessionEnd::Exited);
        assert_eq!(out.matches("Invalid choice. Please select again.").count(), 2);
        assert_eq!(pool.lp_earnings(), 0.0);
    }

    #[test]
    fn non_numeric_amount_interrupts() {
        let (end, pool, out) = run_script("1\nabc\n4\n");
        assert_eq!(end, SessionEnd::Interrupted);
        assert!(out.trim_end().ends_with("Session interrupted."));
        assert!(!out.contains("Exiting session."));
        assert_eq!(pool.reserve_x(), 10_000.0);
    }

    #[test]
    fn rejected_amount_continues() {
        let (end, pool, out) = run_script("1\n-5\n2\n0\n4\n");
        assert_eq!(end, SessionEnd::Exited);
        assert_eq!(out.matches("Swap rejected: invalid amount").count(), 2);
        assert_eq!(pool.reserve_x(), 10_000.0);
        assert_eq!(pool.reserve_y(), 10_000.0);
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let (end, _, _) = run_script("3\n");
        assert_eq!(end, SessionEnd::EndOfInput);
        let (end, _, _) = run_script("1\n");
        assert_eq!(end, SessionEnd::EndOfInput);
    }

    #[test]
    fn whitespace_around_input_is_ignored() {
        let (end, _, out) = run_script("  1 \n  250.5  \n4\n");
        assert_eq!(end, SessionEnd::Exited);
        assert!(out.contains("You swapped 250.50 Token X"));
    }

    #[test]
    fn status_includes_chart_when_enabled() {
        let mut session = Session::new(make_pool(), "3\n4\n".as_bytes(), Vec::new())
            .with_chart(Some(CurveChart::new(20, 6)));
        let Ok(SessionEnd::Exited) = session.run() else {
            panic!("expected exit");
        };
        let (_, output) = session.into_parts();
        let text = String::from_utf8_lossy(&output);
        assert_eq!(text.matches("Token Swap Pool State").count(), 3);
    }
}
