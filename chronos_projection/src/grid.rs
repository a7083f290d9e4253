// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertical time grid.

use alloc::string::String;
use alloc::vec::Vec;

use chronos_model::format_year;
use chronos_view::TimelineViewport;

use crate::ProjectionConfig;

/// Round year increments the grid may use, ascending.
pub const GRID_STEPS: [f64; 20] = [
    1.0,
    5.0,
    10.0,
    25.0,
    50.0,
    100.0,
    250.0,
    500.0,
    1_000.0,
    2_500.0,
    5_000.0,
    10_000.0,
    25_000.0,
    50_000.0,
    100_000.0,
    250_000.0,
    500_000.0,
    1_000_000.0,
    2_500_000.0,
    5_000_000.0,
];

/// One vertical grid line.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLine {
    /// World year of the line.
    pub year: f64,
    /// Screen x of the line.
    pub x: f64,
    /// Header label, see [`chronos_model::format_year`].
    pub label: String,
}

/// Grid lines for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
    /// Year increment between lines.
    pub step: f64,
    /// Lines, left to right.
    pub lines: Vec<GridLine>,
}

/// Picks the smallest step from [`GRID_STEPS`] whose on-screen spacing is at
/// least `min_spacing` pixels at `scale`.
///
/// Falls back to the largest step when none is wide enough.
///
/// ```rust
/// use chronos_projection::grid_step;
///
/// // 160 px at 0.01 px/year is 16000 years: the next round step is 25000.
/// assert_eq!(grid_step(0.01, 160.0), 25_000.0);
/// assert_eq!(grid_step(20.0, 160.0), 10.0);
/// ```
#[must_use]
pub fn grid_step(scale: f64, min_spacing: f64) -> f64 {
    GRID_STEPS
        .into_iter()
        .find(|&step| step * scale >= min_spacing)
        .unwrap_or(GRID_STEPS[GRID_STEPS.len() - 1])
}

/// Computes grid lines across a view `width` pixels wide.
///
/// Lines start at `floor(view_start / step) * step` and continue through the
/// end of the visible range. Lines further than
/// [`ProjectionConfig::grid_margin`] outside the view are dropped.
#[must_use]
pub fn grid_lines(viewport: &TimelineViewport, width: f64, config: &ProjectionConfig) -> Grid {
    let step = grid_step(viewport.scale(), config.min_grid_spacing);
    let years = viewport.visible_year_range(width);
    if !(years.start.is_finite() && years.end.is_finite()) {
        return Grid {
            step,
            lines: Vec::new(),
        };
    }

    let first = libm::floor(years.start / step) * step;
    // At far offsets `first + k * step` can stop advancing.
    let max_k = libm::ceil(width / (step * viewport.scale())) + 2.0;
    let mut lines = Vec::new();
    let mut k = 0.0;
    while k <= max_k {
        let year = first + k * step;
        if year > years.end {
            break;
        }
        let x = viewport.screen_x(year);
        if x >= -config.grid_margin && x <= width + config.grid_margin {
            lines.push(GridLine {
                year,
                x,
                label: format_year(year),
            });
        }
        k += 1.0;
    }

    Grid { step, lines }
}
