use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::app::ViewerSession;
use crate::error::RowErrorKind;

/// Window listing every skipped row of the current extraction.
pub fn rejected_rows_window(ctx: &egui::Context, session: &ViewerSession, open: &mut bool) {
    let rows = session.rejected_rows();
    if rows.is_empty() {
        *open = false;
    }

    egui::Window::new(format!("Rejected rows ({})", rows.len()))
        .id(egui::Id::new("rejected_rows"))
        .open(open)
        .default_width(420.0)
        .show(ctx, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::auto().at_least(50.0))
                .column(Column::auto().at_least(60.0))
                .column(Column::remainder())
                .min_scrolled_height(200.0)
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("Line");
                    });
                    header.col(|ui| {
                        ui.strong("Problem");
                    });
                    header.col(|ui| {
                        ui.strong("Detail");
                    });
                })
                .body(|body| {
                    body.rows(18.0, rows.len(), |mut row| {
                        let err = &rows[row.index()];
                        row.col(|ui| {
                            ui.label(err.line().to_string());
                        });
                        row.col(|ui| {
                            ui.label(match err.kind() {
                                RowErrorKind::Schema => "shape",
                                RowErrorKind::Value => "value",
                            });
                        });
                        row.col(|ui| {
                            ui.label(err.to_string());
                        });
                    });
                });
        });
}
