// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::{String, ToString};

/// Earliest world year on the timeline (three million years ago).
pub const MIN_YEAR: f64 = -3_000_000.0;

/// Latest world year on the timeline.
pub const MAX_YEAR: f64 = 2025.0;

/// Total span of the timeline in years.
pub const TOTAL_YEARS: f64 = MAX_YEAR - MIN_YEAR;

/// Formats a world year for labels.
///
/// - Magnitudes of a million years or more use `Ma` with up to two decimals.
/// - Magnitudes of ten thousand years or more use `k ya` with up to one decimal.
/// - Other negative years are `BC`; year zero is shown as `1 AD`.
///
/// ```rust
/// use chronos_model::format_year;
///
/// assert_eq!(format_year(-2_500_000.0), "2.5 Ma");
/// assert_eq!(format_year(-12_000.0), "12k ya");
/// assert_eq!(format_year(-753.0), "753 BC");
/// assert_eq!(format_year(0.0), "1 AD");
/// assert_eq!(format_year(1066.0), "1066 AD");
/// ```
#[must_use]
pub fn format_year(year: f64) -> String {
    let abs = year.abs();

    if abs >= 1_000_000.0 {
        return format!("{} Ma", trimmed(abs / 1_000_000.0, 2));
    }
    if abs >= 10_000.0 {
        return format!("{}k ya", trimmed(abs / 1_000.0, 1));
    }
    if year < 0.0 {
        return format!("{abs} BC");
    }
    if year == 0.0 {
        return "1 AD".to_string();
    }
    format!("{year} AD")
}

/// Rounds to `decimals` places and drops trailing zeros.
fn trimmed(value: f64, decimals: usize) -> String {
    let fixed = format!("{value:.decimals$}");
    if !fixed.contains('.') {
        return fixed;
    }
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
