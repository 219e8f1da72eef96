use std::path::Path;

use crate::chart::{ChartBackend, ChartSlot, PlotSeries};
use crate::config::{Variant, ViewerConfig};
use crate::data::extract::{column_labels, extract_column, Extraction};
use crate::data::loader::{self, display_name};
use crate::data::model::ParsedTable;
use crate::data::stats::StatsSummary;
use crate::error::{LoadError, RowError};

// ---------------------------------------------------------------------------
// Status message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }

    fn empty() -> Self {
        Self::new("", Severity::Info)
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// The viewer state, independent of rendering. Every event goes through here.
pub struct Session<B: ChartBackend> {
    config: ViewerConfig,
    /// Retained for column switching; the fixed variant never keeps it.
    table: Option<ParsedTable>,
    column_labels: Vec<String>,
    selected_column: Option<usize>,
    chart: ChartSlot<B>,
    stats: Option<StatsSummary>,
    valid_rows: usize,
    rejected: Vec<RowError>,
    message: StatusMessage,
}

impl<B: ChartBackend> Session<B> {
    pub fn new(config: ViewerConfig, backend: B) -> Self {
        Self {
            config,
            table: None,
            column_labels: Vec::new(),
            selected_column: None,
            chart: ChartSlot::new(backend),
            stats: None,
            valid_rows: 0,
            rejected: Vec::new(),
            message: StatusMessage::empty(),
        }
    }

    // -- accessors -----------------------------------------------------------

    pub fn chart(&self) -> Option<&B::Handle> {
        self.chart.current()
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        self.chart.backend()
    }

    pub fn stats(&self) -> Option<&StatsSummary> {
        self.stats.as_ref()
    }

    pub fn message(&self) -> &StatusMessage {
        &self.message
    }

    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }

    pub fn selected_column(&self) -> Option<usize> {
        self.selected_column
    }

    pub fn valid_rows(&self) -> usize {
        self.valid_rows
    }

    pub fn rejected_rows(&self) -> &[RowError] {
        &self.rejected
    }

    pub fn has_table(&self) -> bool {
        self.table.is_some()
    }

    /// Whether the user may pick a column.
    pub fn column_selectable(&self) -> bool {
        self.config.variant == Variant::Selectable && self.table.is_some()
    }

    // -- events --------------------------------------------------------------

    /// "File selected" from a path (file dialog or dropped path).
    pub fn open_path(&mut self, path: &Path, media_type: Option<&str>) {
        let name = display_name(path);
        self.begin_file(&name);
        let loaded = match loader::check_file_type(&name, media_type) {
            Ok(()) => {
                self.message = StatusMessage::new("Reading file...", Severity::Info);
                loader::read_path(path)
            }
            Err(e) => Err(e),
        };
        self.finish_file(&name, loaded);
    }

    /// "File selected" from in-memory contents, e.g. a drop without a path.
    pub fn open_contents(&mut self, name: &str, media_type: Option<&str>, bytes: &[u8]) {
        self.begin_file(name);
        let loaded = loader::check_file_type(name, media_type)
            .map(|()| loader::decode_bytes(bytes));
        self.finish_file(name, loaded);
    }

    /// The file picker was dismissed without a file: drop the previous
    /// output, as a new selection would.
    pub fn cancel_file_selection(&mut self) {
        log::debug!("File selection cancelled");
        self.reset_output();
        self.table = None;
        self.column_labels.clear();
        self.selected_column = None;
        self.message = StatusMessage::empty();
    }

    /// "Column selection changed". Ignored without a retained table or when
    /// the column does not exist.
    pub fn select_column(&mut self, column: usize) {
        let Some(count) = self.table.as_ref().map(ParsedTable::column_count) else {
            return;
        };
        if self.config.variant != Variant::Selectable || column >= count {
            return;
        }
        self.selected_column = Some(column);
        if let Some(table) = self.table.take() {
            let result = self.render(&table, column);
            self.table = Some(table);
            self.report(result.map(Some));
        }
    }

    // -- pipeline ------------------------------------------------------------

    fn begin_file(&mut self, name: &str) {
        log::info!("Opening {name}");
        self.cancel_file_selection();
    }

    fn finish_file(&mut self, name: &str, loaded: Result<String, LoadError>) {
        let result = loaded
            .and_then(|text| loader::tokenize(&text, self.config.delimiting))
            .and_then(|table| self.adopt_table(table));
        if let Err(e) = &result {
            log::error!("Failed to load {name}: {e:#}");
        }
        self.report(result);
    }

    /// Set up column selection for a fresh table and render the initial column.
    fn adopt_table(&mut self, table: ParsedTable) -> Result<Option<Extraction>, LoadError> {
        log::info!(
            "Parsed {} columns, {} data rows",
            table.column_count(),
            table.len()
        );
        let column = self.config.initial_column(table.column_count());

        match self.config.variant {
            Variant::Fixed => {
                let column = column.unwrap_or(self.config.fixed_column);
                self.render(&table, column).map(Some)
            }
            Variant::Selectable => {
                self.column_labels = column_labels(&table);
                self.selected_column = column;
                let result = match column {
                    Some(column) => self.render(&table, column).map(Some),
                    None => Ok(None),
                };
                self.table = Some(table);
                result
            }
        }
    }

    /// Clear the previous output, then extract, summarise and chart `column`.
    fn render(&mut self, table: &ParsedTable, column: usize) -> Result<Extraction, LoadError> {
        self.reset_output();

        let extraction = extract_column(
            table,
            column,
            self.config.validation_mode(),
            self.config.numeric_parse,
        );
        self.rejected = extraction.rejected.clone();
        let extraction = extraction.require_points()?;

        self.stats = StatsSummary::compute(&extraction.values);
        let series = PlotSeries::assemble(
            self.series_label(table, column),
            &self.config.x_axis_title,
            &self.config.y_axis_title,
            &extraction.points,
        );
        self.chart.replace(&series);
        self.valid_rows = extraction.valid_rows;

        log::info!(
            "Plotted column {}: {} of {} rows valid",
            column + 1,
            extraction.valid_rows,
            extraction.total_rows()
        );
        Ok(extraction)
    }

    fn series_label(&self, table: &ParsedTable, column: usize) -> String {
        match self.config.variant {
            Variant::Fixed => self.config.fixed_caption.clone(),
            Variant::Selectable => match table.column_name(column) {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => format!("Column {}", column + 1),
            },
        }
    }

    fn reset_output(&mut self) {
        self.chart.clear();
        self.stats = None;
        self.valid_rows = 0;
        self.rejected.clear();
    }

    fn report(&mut self, result: Result<Option<Extraction>, LoadError>) {
        self.message = match result {
            Ok(Some(extraction)) => {
                let mut text = format!("Processed {} valid rows.", extraction.valid_rows);
                if extraction.invalid_rows > 0 {
                    text.push_str(&format!(
                        " Ignored {} invalid or malformed rows.",
                        extraction.invalid_rows
                    ));
                }
                StatusMessage::new(text, Severity::Success)
            }
            Ok(None) => StatusMessage::new("Select a column to plot.", Severity::Info),
            Err(e) => {
                // Rejected rows explain an empty result; keep them for the diagnostics view.
                let rejected = match e {
                    LoadError::EmptyResult { .. } => std::mem::take(&mut self.rejected),
                    _ => Vec::new(),
                };
                self.reset_output();
                self.rejected = rejected;
                StatusMessage::new(e.user_message(), Severity::Error)
            }
        };
    }
}
