//! Display formatting for axis ticks, tooltips and legends
//!
//! Non-finite values are rendered as [`MISSING`] instead of `NaN`/`inf`, so
//! undefined statistics show up as a placeholder rather than a bogus number.

use vizcore_stats::breaks::BreakSet;

/// Placeholder shown for undefined values.
pub const MISSING: &str = "–";

const COMPACT_SUFFIXES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Formats a value with a fixed number of decimals.
///
/// # Examples
///
/// ```
/// use vizcore_data::format::format_number;
///
/// assert_eq!(format_number(3.14159, 2), "3.14");
/// assert_eq!(format_number(f64::NAN, 2), "–");
/// ```
#[must_use]
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return MISSING.to_owned();
    }
    format!("{value:.decimals$}")
}

/// Formats a value with a magnitude suffix (`K`, `M`, `B`, `T`).
///
/// At most one decimal is shown and trailing zeros are dropped. The suffix
/// is picked after rounding, so `999_950` reads `1M` rather than `1000K`.
///
/// # Examples
///
/// ```
/// use vizcore_data::format::format_compact;
///
/// assert_eq!(format_compact(940.0), "940");
/// assert_eq!(format_compact(1_234.0), "1.2K");
/// assert_eq!(format_compact(-5_000_000.0), "-5M");
/// assert_eq!(format_compact(2.5e9), "2.5B");
/// ```
#[must_use]
pub fn format_compact(value: f64) -> String {
    if !value.is_finite() {
        return MISSING.to_owned();
    }
    for (scale, suffix) in COMPACT_SUFFIXES {
        let scaled = format!("{:.1}", value / scale);
        let shown = scaled.trim_start_matches('-').parse::<f64>();
        if shown.is_ok_and(|v| v >= 1.0) {
            return format!("{}{suffix}", trim_zeros(&scaled));
        }
    }
    trim_zeros(&format!("{value:.2}")).to_owned()
}

/// Formats a ratio as a percentage.
///
/// # Examples
///
/// ```
/// use vizcore_data::format::format_percent;
///
/// assert_eq!(format_percent(0.123, 1), "12.3%");
/// assert_eq!(format_percent(1.0, 0), "100%");
/// ```
#[must_use]
pub fn format_percent(ratio: f64, decimals: usize) -> String {
    if !ratio.is_finite() {
        return MISSING.to_owned();
    }
    format!("{:.decimals$}%", ratio * 100.0)
}

/// Legend labels, one per color class.
///
/// # Examples
///
/// ```
/// use vizcore_data::format::break_labels;
/// use vizcore_stats::breaks::calculate_breaks;
///
/// let labels = break_labels(&calculate_breaks(&[10.0, 50.0]), 0);
/// assert_eq!(labels, ["10 – 18", "18 – 26", "26 – 34", "34 – 42", "42 – 50"]);
/// ```
#[must_use]
pub fn break_labels(breaks: &BreakSet, decimals: usize) -> Vec<String> {
    let Some((min, max)) = breaks.bounds() else {
        return vec![];
    };
    if let BreakSet::Uniform { .. } = breaks {
        return vec![format_number(min, decimals)];
    }

    let edges = std::iter::once(min)
        .chain(breaks.breaks().iter().copied())
        .chain(std::iter::once(max))
        .collect::<Vec<_>>();
    edges
        .windows(2)
        .map(|w| {
            format!(
                "{} – {}",
                format_number(w[0], decimals),
                format_number(w[1], decimals)
            )
        })
        .collect()
}

fn trim_zeros(s: &str) -> &str {
    let trimmed = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    };
    if trimmed == "-0" { "0" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use vizcore_stats::breaks::calculate_breaks;

    use super::*;

    #[test]
    fn test_missing_values() {
        assert_eq!(format_number(f64::INFINITY, 1), MISSING);
        assert_eq!(format_compact(f64::NAN), MISSING);
        assert_eq!(format_percent(f64::NEG_INFINITY, 1), MISSING);
    }

    #[test]
    fn test_compact_small_values() {
        assert_eq!(format_compact(0.0), "0");
        assert_eq!(format_compact(12.5), "12.5");
        assert_eq!(format_compact(-0.126), "-0.13");
    }

    #[test]
    fn test_compact_suffixes() {
        assert_eq!(format_compact(1_000.0), "1K");
        assert_eq!(format_compact(45_600.0), "45.6K");
        assert_eq!(format_compact(7.26e6), "7.3M");
        assert_eq!(format_compact(3e12), "3T");
    }

    #[test]
    fn test_compact_rounds_up_to_next_suffix() {
        assert_eq!(format_compact(999_950.0), "1M");
        assert_eq!(format_compact(-999_960.0), "-1M");
        assert_eq!(format_compact(999.996), "1K");
        assert_eq!(format_compact(949_000.0), "949K");
    }

    #[test]
    fn test_compact_no_negative_zero() {
        assert_eq!(format_compact(-0.001), "0");
        assert_eq!(format_compact(-0.0), "0");
    }

    #[test]
    fn test_labels_for_degenerate_breaks() {
        assert!(break_labels(&BreakSet::NoData, 2).is_empty());
        assert_eq!(break_labels(&calculate_breaks(&[4.0, 4.0]), 1), ["4.0"]);
    }

    #[test]
    fn test_labels_cover_range() {
        let labels = break_labels(&calculate_breaks(&[0.0, 0.5]), 1);
        assert_eq!(labels.len(), 5);
        assert_eq!(labels[0], "0.0 – 0.1");
        assert_eq!(labels[4], "0.4 – 0.5");
    }
}
