/// Placeholder shown in a statistics slot when there is nothing to show.
pub const PLACEHOLDER: &str = "-";

/// Median, minimum and maximum of a column's valid values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSummary {
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

impl StatsSummary {
    /// Returns `None` for an empty slice. Input order does not matter.
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let mid = n / 2;
        let median = if n % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        Some(StatsSummary {
            median,
            min: sorted[0],
            max: sorted[n - 1],
        })
    }

    /// Two-decimal text for the display slots.
    pub fn display(&self) -> StatsDisplay {
        StatsDisplay {
            median: format_two_decimals(self.median),
            min: format_two_decimals(self.min),
            max: format_two_decimals(self.max),
        }
    }
}

/// Fixed two-decimal text. A value exactly halfway between two hundredths
/// rounds away from zero; negative zero prints as `0.00`.
pub fn format_two_decimals(v: f64) -> String {
    if v == 0.0 {
        return "0.00".to_string();
    }
    match exact_thousandths(v.abs()) {
        Some(m) if m % 10 == 5 => {
            let hundredths = (m + 5) / 10;
            let sign = if v < 0.0 { "-" } else { "" };
            format!("{sign}{}.{:02}", hundredths / 100, hundredths % 100)
        }
        _ => format!("{v:.2}"),
    }
}

/// `Some(m)` when `v` (finite, positive) is exactly `m / 1000`.
fn exact_thousandths(v: f64) -> Option<u128> {
    if !v.is_finite() {
        return None;
    }
    let bits = v.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exp) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };

    // v * 1000 = mantissa * 125 * 2^(exp + 3)
    let shift = exp + 3;
    if shift >= 0 {
        let scaled = (mantissa as u128) * 125;
        return u32::try_from(shift)
            .ok()
            .and_then(|s| scaled.checked_shl(s))
            .filter(|m| m >> shift == scaled);
    }
    let drop = shift.unsigned_abs();
    if drop > 63 || mantissa.trailing_zeros() < drop {
        return None;
    }
    Some(((mantissa >> drop) as u128) * 125)
}

/// The three text slots of the statistics panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsDisplay {
    pub median: String,
    pub min: String,
    pub max: String,
}

impl StatsDisplay {
    pub fn placeholder() -> Self {
        Self {
            median: PLACEHOLDER.to_string(),
            min: PLACEHOLDER.to_string(),
            max: PLACEHOLDER.to_string(),
        }
    }

    pub fn from_summary(summary: Option<&StatsSummary>) -> Self {
        summary.map_or_else(Self::placeholder, StatsSummary::display)
    }
}
