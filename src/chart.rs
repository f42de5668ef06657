//! Text rendering of the pool curve and the current reserve point.
//!
//! The chart is a read-only diagnostic: it only looks at a
//! [`PoolSnapshot`] and plots `y = k / x` for `x` between half and double
//! the current `reserve_x`, marking `(reserve_x, reserve_y)` with `o`.
//! Because `k` is the nominal invariant, the marker sits above the curve
//! once fees have pushed the live product past `k`.
//!
//! ```text
//! Token Swap Pool State (Reserve Y vs Reserve X)
//!     20000.00 |*
//!              | **
//!              |   ***
//!              |      **o**
//!              |           *******
//!      5000.00 |                  ********
//!              +------------------------
//!               5000.00         20000.00
//! * x * y = k (pool curve)   o current state (x=10000.00, y=10000.00)
//! ```

use crate::domain::PoolSnapshot;

/// Default chart width in columns.
pub const DEFAULT_WIDTH: usize = 60;
/// Default chart height in rows.
pub const DEFAULT_HEIGHT: usize = 20;
/// Smallest width the chart will render at.
pub const MIN_WIDTH: usize = 8;
/// Smallest height the chart will render at.
pub const MIN_HEIGHT: usize = 4;

const CURVE: char = '*';
const MARKER: char = 'o';
const LABEL_WIDTH: usize = 12;

/// Samples the curve `y = k / x` at `samples` evenly spaced points from
/// `0.5 × reserve_x` to `2 × reserve_x`, both ends included.
///
/// Fewer than two samples are treated as two.  Returns an empty vector if
/// `reserve_x` or `k` is not finite and positive.
#[must_use]
pub fn curve_points(snapshot: &PoolSnapshot, samples: usize) -> Vec<(f64, f64)> {
    if !is_plottable(snapshot) {
        return Vec::new();
    }
    let samples = samples.max(2);
    let (start, end) = x_range(snapshot);
    #[allow(clippy::cast_precision_loss)]
    let step = (end - start) / (samples - 1) as f64;

    (0..samples)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let x = if i == samples - 1 {
                end
            } else {
                start + step * i as f64
            };
            (x, snapshot.k / x)
        })
        .collect()
}

/// Fixed-size text plot of the pool curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveChart {
    width: usize,
    height: usize,
}

impl CurveChart {
    /// Creates a chart of `width` columns by `height` rows, clamped to
    /// [`MIN_WIDTH`] × [`MIN_HEIGHT`].
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.max(MIN_WIDTH),
            height: height.max(MIN_HEIGHT),
        }
    }

    /// Returns the plot width in columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the plot height in rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Renders the curve and current point as multi-line text.
    ///
    /// The output has a title line, `height` plot rows, an x-axis, an
    /// x-range label line, and a legend line.
    #[must_use]
    pub fn render(&self, snapshot: &PoolSnapshot) -> String {
        if !is_plottable(snapshot) {
            return String::from("(curve unavailable: reserve_x and k must be finite and positive)");
        }

        let points = curve_points(snapshot, self.width);
        let (x_start, x_end) = x_range(snapshot);

        let (mut y_min, mut y_max) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
                (lo.min(y), hi.max(y))
            });
        if snapshot.reserve_y.is_finite() {
            y_min = y_min.min(snapshot.reserve_y);
            y_max = y_max.max(snapshot.reserve_y);
        }
        let y_span = if y_max > y_min { y_max - y_min } else { 1.0 };

        let mut grid = vec![vec![' '; self.width]; self.height];
        for (col, &(_, y)) in points.iter().enumerate() {
            let row = self.row_of(y, y_max, y_span);
            grid[row][col] = CURVE;
        }
        if snapshot.reserve_y.is_finite() {
            let col = self.col_of(snapshot.reserve_x, x_start, x_end);
            let row = self.row_of(snapshot.reserve_y, y_max, y_span);
            grid[row][col] = MARKER;
        }

        let mut lines = Vec::with_capacity(self.height + 4);
        lines.push(String::from(
            "Token Swap Pool State (Reserve Y vs Reserve X)",
        ));
        for (i, row) in grid.iter().enumerate() {
            let label = if i == 0 {
                format!("{y_max:.2}")
            } else if i == self.height - 1 {
                format!("{y_min:.2}")
            } else {
                String::new()
            };
            let cells: String = row.iter().collect();
            lines.push(format!("{label:>LABEL_WIDTH$} |{}", cells.trim_end()));
        }
        lines.push(format!("{:LABEL_WIDTH$} +{}", "", "-".repeat(self.width)));

        let left = format!("{x_start:.2}");
        let right = format!("{x_end:.2}");
        let gap = self.width.saturating_sub(left.len() + right.len()).max(1);
        lines.push(format!(
            "{:LABEL_WIDTH$}  {left}{}{right}",
            "",
            " ".repeat(gap)
        ));
        lines.push(format!(
            "{CURVE} x * y = k (pool curve)   {MARKER} current state (x={:.2}, y={:.2})",
            snapshot.reserve_x, snapshot.reserve_y
        ));

        lines.join("\n")
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn row_of(&self, y: f64, y_max: f64, y_span: f64) -> usize {
        let frac = ((y_max - y) / y_span).clamp(0.0, 1.0);
        let row = (frac * (self.height - 1) as f64).round() as usize;
        row.min(self.height - 1)
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn col_of(&self, x: f64, x_start: f64, x_end: f64) -> usize {
        let frac = ((x - x_start) / (x_end - x_start)).clamp(0.0, 1.0);
        let col = (frac * (self.width - 1) as f64).round() as usize;
        col.min(self.width - 1)
    }
}

impl Default for CurveChart {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

fn is_plottable(snapshot: &PoolSnapshot) -> bool {
    snapshot.reserve_x.is_finite()
        && snapshot.reserve_x > 0.0
        && snapshot.k.is_finite()
        && snapshot.k > 0.0
}

fn x_range(snapshot: &PoolSnapshot) -> (f64, f64) {
    (snapshot.reserve_x * 0.5, snapshot.reserve_x * 2.0)
}
