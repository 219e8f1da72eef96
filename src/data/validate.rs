use serde::{Deserialize, Serialize};

use super::model::SourceRow;
use crate::error::RowError;

// ---------------------------------------------------------------------------
// Validation modes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Row must have exactly this many fields.
    FixedSchema { expected_fields: usize },
    /// Row only needs to reach the selected column.
    Flexible,
}

/// How a field string becomes a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericParse {
    /// Longest numeric prefix wins: `"12.5abc"` is 12.5.
    Permissive,
    /// The whole trimmed token must be a number.
    Strict,
}

// ---------------------------------------------------------------------------
// Numeric parsing
// ---------------------------------------------------------------------------

pub fn parse_number(raw: &str, mode: NumericParse) -> Option<f64> {
    match mode {
        NumericParse::Permissive => parse_leading_number(raw),
        NumericParse::Strict => raw.trim().parse::<f64>().ok().filter(|v| !v.is_nan()),
    }
}

/// Parse the longest prefix of `raw` (after leading whitespace) that forms a
/// decimal number: optional sign, then `Infinity` or
/// `digits[.digits][(e|E)[sign]digits]` with at least one mantissa digit.
pub fn parse_leading_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        let inf = f64::INFINITY;
        return Some(if bytes[0] == b'-' { -inf } else { inf });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

// ---------------------------------------------------------------------------
// Row validation
// ---------------------------------------------------------------------------

/// Check a row's shape, then parse its target field.
pub fn validate_row(
    row: &SourceRow,
    column: usize,
    mode: ValidationMode,
    numeric: NumericParse,
) -> Result<f64, RowError> {
    let found = row.fields.len();
    if let ValidationMode::FixedSchema { expected_fields } = mode {
        if found != expected_fields {
            return Err(RowError::FieldCount {
                line: row.line,
                found,
                expected: expected_fields,
            });
        }
    }

    let raw = row.fields.get(column).ok_or(RowError::MissingField {
        line: row.line,
        found,
        needed: column + 1,
    })?;

    let value = raw.trim();
    if value.is_empty() {
        return Err(RowError::EmptyValue {
            line: row.line,
            column,
        });
    }

    parse_number(value, numeric).ok_or_else(|| RowError::NotNumeric {
        line: row.line,
        column,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(line: usize, fields: &[&str]) -> SourceRow {
        SourceRow {
            line,
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    fn fixed_row(n: usize, target: &str) -> SourceRow {
        let mut fields = vec!["0"; n];
        if n > 11 {
            fields[11] = target;
        }
        row(2, &fields)
    }

    const FIXED: ValidationMode = ValidationMode::FixedSchema {
        expected_fields: 24,
    };

    #[test]
    fn permissive_parse_takes_numeric_prefix() {
        let p = |s| parse_number(s, NumericParse::Permissive);
        assert_eq!(p("12.5abc"), Some(12.5));
        assert_eq!(p("  -3"), Some(-3.0));
        assert_eq!(p("+.5"), Some(0.5));
        assert_eq!(p("7."), Some(7.0));
        assert_eq!(p("1e3x"), Some(1000.0));
        assert_eq!(p("1e"), Some(1.0));
        assert_eq!(p("2E-2"), Some(0.02));
        assert_eq!(p("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(p("abc"), None);
        assert_eq!(p("."), None);
        assert_eq!(p("-"), None);
        assert_eq!(p("NaN"), None);
        assert_eq!(p("inf"), None);
    }

    #[test]
    fn strict_parse_rejects_trailing_text() {
        let s = |v| parse_number(v, NumericParse::Strict);
        assert_eq!(s("12.5abc"), None);
        assert_eq!(s(" 12.5 "), Some(12.5));
        assert_eq!(s("NaN"), None);
    }

    #[test]
    fn fixed_schema_rejects_wrong_field_counts() {
        for n in [23, 25] {
            let err = validate_row(&fixed_row(n, "1.0"), 11, FIXED, NumericParse::Permissive)
                .unwrap_err();
            assert_eq!(
                err,
                RowError::FieldCount {
                    line: 2,
                    found: n,
                    expected: 24
                }
            );
        }
        assert_eq!(
            validate_row(&fixed_row(24, " 4.25 "), 11, FIXED, NumericParse::Permissive),
            Ok(4.25)
        );
    }

    #[test]
    fn flexible_needs_enough_fields() {
        let r = row(7, &["1", "2"]);
        assert_eq!(
            validate_row(&r, 2, ValidationMode::Flexible, NumericParse::Permissive),
            Err(RowError::MissingField {
                line: 7,
                found: 2,
                needed: 3
            })
        );
        assert_eq!(
            validate_row(&r, 1, ValidationMode::Flexible, NumericParse::Permissive),
            Ok(2.0)
        );
    }

    #[test]
    fn empty_and_non_numeric_values() {
        let r = row(3, &["a", "  ", "x1"]);
        assert_eq!(
            validate_row(&r, 1, ValidationMode::Flexible, NumericParse::Permissive),
            Err(RowError::EmptyValue { line: 3, column: 1 })
        );
        assert_eq!(
            validate_row(&r, 2, ValidationMode::Flexible, NumericParse::Permissive),
            Err(RowError::NotNumeric {
                line: 3,
                column: 2,
                value: "x1".into()
            })
        );
    }
}
