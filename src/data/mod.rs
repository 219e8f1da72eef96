/// Data layer: tokenizing, validation, column extraction and statistics.
///
/// Architecture:
/// ```text
///   raw text (.csv)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  accept / read / tokenize → ParsedTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐      ┌──────────┐
///   │ extract   │ ───▶ │ validate  │  per row: field count + numeric value
///   └──────────┘      └──────────┘
///        │
///        ▼  Vec<DataPoint>, Vec<f64>
///   ┌──────────┐
///   │  stats    │  median / min / max
///   └──────────┘
/// ```

pub mod extract;
pub mod loader;
pub mod model;
pub mod stats;
pub mod validate;
