use super::model::{DataPoint, ParsedTable};
use super::validate::{validate_row, NumericParse, ValidationMode};
use crate::error::{LoadError, RowError};

// ---------------------------------------------------------------------------
// Extraction result
// ---------------------------------------------------------------------------

/// Valid values of one column plus bookkeeping for the rows that were skipped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Extraction {
    /// One point per valid row, `x` = 1, 2, 3, ...
    pub points: Vec<DataPoint>,
    /// The `y` values of `points`, in the same order.
    pub values: Vec<f64>,
    pub valid_rows: usize,
    pub invalid_rows: usize,
    /// Why each invalid row was skipped, in file order.
    pub rejected: Vec<RowError>,
}

impl Extraction {
    pub fn total_rows(&self) -> usize {
        self.valid_rows + self.invalid_rows
    }

    /// Zero valid rows is a file-level failure.
    pub fn require_points(self) -> Result<Self, LoadError> {
        if self.points.is_empty() {
            Err(LoadError::EmptyResult {
                invalid_rows: self.invalid_rows,
            })
        } else {
            Ok(self)
        }
    }
}

// ---------------------------------------------------------------------------
// Column extraction
// ---------------------------------------------------------------------------

/// Validate every data row against `column` and collect the numeric values.
/// Invalid rows are logged and counted but never stop the scan.
pub fn extract_column(
    table: &ParsedTable,
    column: usize,
    mode: ValidationMode,
    numeric: NumericParse,
) -> Extraction {
    let mut out = Extraction::default();

    for row in &table.rows {
        match validate_row(row, column, mode, numeric) {
            Ok(y) => {
                out.valid_rows += 1;
                out.points.push(DataPoint {
                    x: out.valid_rows,
                    y,
                });
                out.values.push(y);
            }
            Err(e) => {
                log::warn!("Skipping row: {e}");
                out.invalid_rows += 1;
                out.rejected.push(e);
            }
        }
    }

    out
}

/// Labels for the column selector, one per header field.
pub fn column_labels(table: &ParsedTable) -> Vec<String> {
    table
        .header
        .iter()
        .enumerate()
        .map(|(i, name)| match name.trim() {
            "" => format!("Column {}", i + 1),
            name => format!("{}: {name}", i + 1),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{tokenize, Delimiting};
    use crate::error::RowErrorKind;

    fn table(text: &str) -> ParsedTable {
        tokenize(text, Delimiting::Naive).unwrap()
    }

    #[test]
    fn first_column_of_small_file() {
        let t = table("a,b,c\n1,2,3\n4,5,6\n7,8,9\n10,11,12\n");
        let ex = extract_column(&t, 0, ValidationMode::Flexible, NumericParse::Permissive);

        let xs: Vec<usize> = ex.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1, 2, 3, 4]);
        assert_eq!(ex.values, vec![1.0, 4.0, 7.0, 10.0]);
        assert_eq!(ex.invalid_rows, 0);
    }

    #[test]
    fn skipped_rows_leave_no_gaps() {
        let t = table("a,b\n1,10\nbad\n2,x\n3,30\n\n4,\n5,50\n");
        let ex = extract_column(&t, 1, ValidationMode::Flexible, NumericParse::Permissive);

        let xs: Vec<usize> = ex.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1, 2, 3]);
        assert_eq!(ex.values, vec![10.0, 30.0, 50.0]);
        assert_eq!(ex.invalid_rows, 3);
        assert_eq!(ex.total_rows(), t.len());

        let lines: Vec<usize> = ex.rejected.iter().map(|e| e.line()).collect();
        assert_eq!(lines, vec![3, 4, 7]);
        assert_eq!(ex.rejected[0].kind(), RowErrorKind::Schema);
        assert_eq!(ex.rejected[1].kind(), RowErrorKind::Value);
    }

    #[test]
    fn fixed_schema_counts_every_data_row() {
        let mut text = (0..24).map(|i| format!("h{i}")).collect::<Vec<_>>().join(",");
        text.push('\n');
        let good: Vec<String> = (0..24).map(|i| i.to_string()).collect();
        text.push_str(&good.join(","));
        text.push('\n');
        text.push_str(&good[..23].join(","));
        text.push('\n');
        text.push_str("   \n");
        text.push_str(&good.join(","));
        text.push_str(",extra\n");

        let t = table(&text);
        let ex = extract_column(
            &t,
            11,
            ValidationMode::FixedSchema {
                expected_fields: 24,
            },
            NumericParse::Permissive,
        );
        assert_eq!(ex.valid_rows, 1);
        assert_eq!(ex.invalid_rows, 2);
        assert_eq!(ex.values, vec![11.0]);
        assert_eq!(ex.total_rows(), 3);
    }

    #[test]
    fn same_column_twice_is_identical() {
        let t = table("a,b\n3,1\n1,2\n2,3\n");
        let first = extract_column(&t, 0, ValidationMode::Flexible, NumericParse::Strict);
        let second = extract_column(&t, 0, ValidationMode::Flexible, NumericParse::Strict);
        assert_eq!(first, second);
    }

    #[test]
    fn no_valid_rows_is_empty_result() {
        let t = table("a\nx\ny\n");
        let ex = extract_column(&t, 0, ValidationMode::Flexible, NumericParse::Permissive);
        match ex.require_points() {
            Err(LoadError::EmptyResult { invalid_rows }) => assert_eq!(invalid_rows, 2),
            other => panic!("expected empty result, got {other:?}"),
        }
    }

    #[test]
    fn labels_fall_back_for_blank_headers() {
        let t = table("time, height ,\n1,2,3\n");
        assert_eq!(
            column_labels(&t),
            vec!["1: time", "2: height", "Column 3"]
        );
    }
}
