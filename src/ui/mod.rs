pub mod diagnostics;
pub mod panels;
pub mod plot;
