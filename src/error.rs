use thiserror::Error;

// ---------------------------------------------------------------------------
// File-level errors – surfaced to the user, stop the pipeline
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("'{name}' is not a CSV file")]
    FileType { name: String },

    #[error("failed to read '{name}'")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("file has no data rows")]
    Structure,

    #[error("no valid data points ({invalid_rows} invalid rows)")]
    EmptyResult { invalid_rows: usize },

    #[error(transparent)]
    Parse(#[from] anyhow::Error),
}

impl LoadError {
    /// Text shown in the status line.
    pub fn user_message(&self) -> String {
        match self {
            LoadError::FileType { .. } => "Error: please open a .csv file.".to_string(),
            LoadError::Read { .. } => "Error while reading the file.".to_string(),
            LoadError::Structure => {
                "Error: the CSV file has no data rows (a header and at least one data row are required)."
                    .to_string()
            }
            LoadError::EmptyResult { invalid_rows } => format!(
                "Finished, but no valid data points were found to plot. Found {invalid_rows} invalid rows."
            ),
            LoadError::Parse(e) => format!("Error while processing the file: {e:#}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Row-level errors – counted and logged, never fatal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowErrorKind {
    /// Wrong or insufficient field count.
    Schema,
    /// Target field empty or not numeric.
    Value,
}

/// Why a data row was skipped. `line` is the 1-based source line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("line {line}: {found} fields, expected exactly {expected}")]
    FieldCount {
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error("line {line}: {found} fields, column needs at least {needed}")]
    MissingField {
        line: usize,
        found: usize,
        needed: usize,
    },

    #[error("line {line}: column {} is empty", .column + 1)]
    EmptyValue { line: usize, column: usize },

    #[error("line {line}: column {} value \"{value}\" is not a number", .column + 1)]
    NotNumeric {
        line: usize,
        column: usize,
        value: String,
    },
}

impl RowError {
    pub fn kind(&self) -> RowErrorKind {
        match self {
            RowError::FieldCount { .. } | RowError::MissingField { .. } => RowErrorKind::Schema,
            RowError::EmptyValue { .. } | RowError::NotNumeric { .. } => RowErrorKind::Value,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            RowError::FieldCount { line, .. }
            | RowError::MissingField { line, .. }
            | RowError::EmptyValue { line, .. }
            | RowError::NotNumeric { line, .. } => *line,
        }
    }
}
