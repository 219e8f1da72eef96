use eframe::egui;

use crate::chart::EguiCharts;
use crate::config::ViewerConfig;
use crate::state::Session;
use crate::ui::{diagnostics, panels, plot};

pub type ViewerSession = Session<EguiCharts>;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CsvScatterApp {
    pub session: ViewerSession,
    show_rejected: bool,
}

impl CsvScatterApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ViewerConfig) -> Self {
        Self {
            session: Session::new(config, EguiCharts::new(cc.egui_ctx.clone())),
            show_rejected: false,
        }
    }

    /// Files dropped onto the window go through the same path as File → Open.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            let media_type = Some(file.mime.as_str()).filter(|m| !m.is_empty());
            if let Some(path) = &file.path {
                self.session.open_path(path, media_type);
            } else if let Some(bytes) = &file.bytes {
                self.session.open_contents(&file.name, media_type, bytes);
            }
        }
    }
}

impl eframe::App for CsvScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        // ---- Top panel: menu bar, column selector, status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.session, &mut self.show_rejected);
        });

        // ---- Left side panel: statistics ----
        egui::SidePanel::left("stats_panel")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.session);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::column_plot(ui, &self.session);
        });

        if self.show_rejected {
            diagnostics::rejected_rows_window(ctx, &self.session, &mut self.show_rejected);
        }
    }
}
