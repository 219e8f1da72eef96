use eframe::egui::{self, RichText, Ui};

use crate::app::ViewerSession;
use crate::color::severity_color;
use crate::data::stats::StatsDisplay;

// ---------------------------------------------------------------------------
// Left side panel – statistics
// ---------------------------------------------------------------------------

/// Render the statistics panel.
pub fn side_panel(ui: &mut Ui, session: &ViewerSession) {
    ui.heading("Statistics");
    ui.separator();

    let display = StatsDisplay::from_summary(session.stats());
    egui::Grid::new("stats_grid")
        .num_columns(2)
        .spacing([24.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            for (name, value) in [
                ("Median", &display.median),
                ("Min", &display.min),
                ("Max", &display.max),
            ] {
                ui.strong(name);
                ui.monospace(value);
                ui.end_row();
            }
        });

    ui.add_space(8.0);
    ui.separator();

    if session.chart().is_some() {
        ui.label(format!("{} valid rows", session.valid_rows()));
    }
    let rejected = session.rejected_rows().len();
    if rejected > 0 {
        ui.label(format!("{rejected} rows skipped"));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, session: &mut ViewerSession, show_rejected: &mut bool) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(session);
                ui.close_menu();
            }
        });

        if session.column_selectable() {
            ui.separator();
            column_selector(ui, session);
        }

        ui.separator();

        let rejected = session.rejected_rows().len();
        if ui
            .add_enabled(
                rejected > 0,
                egui::SelectableLabel::new(*show_rejected, format!("Rejected rows ({rejected})")),
            )
            .clicked()
        {
            *show_rejected = !*show_rejected;
        }

        let message = session.message();
        if !message.text.is_empty() {
            ui.separator();
            ui.label(RichText::new(&message.text).color(severity_color(message.severity)));
        }
    });
}

fn column_selector(ui: &mut Ui, session: &mut ViewerSession) {
    let selected = session.selected_column();
    let selected_text = selected
        .and_then(|i| session.column_labels().get(i).cloned())
        .unwrap_or_else(|| "Select a column…".to_string());

    let mut choice = None;
    ui.label("Column");
    egui::ComboBox::from_id_salt("column_select")
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            for (i, label) in session.column_labels().iter().enumerate() {
                if ui.selectable_label(selected == Some(i), label).clicked() {
                    choice = Some(i);
                }
            }
        });

    if let Some(column) = choice {
        session.select_column(column);
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(session: &mut ViewerSession) {
    let file = rfd::FileDialog::new()
        .set_title("Open CSV data")
        .add_filter("CSV", &["csv"])
        .add_filter("All files", &["*"])
        .pick_file();

    match file {
        Some(path) => session.open_path(&path, None),
        None => session.cancel_file_selection(),
    }
}
