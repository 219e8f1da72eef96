// ---------------------------------------------------------------------------
// SourceRow – one non-blank data line
// ---------------------------------------------------------------------------

/// A data row as split from the file, before any validation.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRow {
    /// 1-based line number in the source file (the header is line 1).
    pub line: usize,
    /// Raw field strings, untrimmed. Lengths vary from row to row.
    pub fields: Vec<String>,
}

// ---------------------------------------------------------------------------
// ParsedTable – header plus data rows
// ---------------------------------------------------------------------------

/// The tokenized file. Built once per file and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTable {
    pub header: Vec<String>,
    /// Data rows in file order; blank lines are not represented.
    pub rows: Vec<SourceRow>,
}

impl ParsedTable {
    /// Number of columns as given by the header row.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Header text of a column, trimmed.
    pub fn column_name(&self, column: usize) -> Option<&str> {
        self.header.get(column).map(|h| h.trim())
    }

    /// Number of data rows that take part in validation.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

// ---------------------------------------------------------------------------
// DataPoint – one plotted point
// ---------------------------------------------------------------------------

/// `x` is the 1-based index among valid rows, not the source line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub x: usize,
    pub y: f64,
}

impl DataPoint {
    pub fn as_plot_point(&self) -> [f64; 2] {
        [self.x as f64, self.y]
    }
}
