use eframe::egui::Ui;
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::app::ViewerSession;
use crate::color::series_colors;

// ---------------------------------------------------------------------------
// Column scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render the current chart, or a hint when there is none.
pub fn column_plot(ui: &mut Ui, session: &ViewerSession) {
    let Some(chart) = session.chart() else {
        let hint = if session.has_table() {
            "Select a column to plot"
        } else {
            "Open a CSV file to plot a column  (File → Open…)"
        };
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(hint);
        });
        return;
    };

    let series = &chart.series;
    let colors = series_colors();

    let fill: PlotPoints = series.plot_points().into_iter().collect();
    let outline: PlotPoints = series.plot_points().into_iter().collect();

    Plot::new("column_plot")
        .id(chart.plot_id)
        .legend(Legend::default())
        .x_axis_label(series.x_title.as_str())
        .y_axis_label(series.y_title.as_str())
        .include_x(0.0)
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("Time: {} s, Value: {}", value.x, value.y)
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(fill)
                    .name(&series.label)
                    .color(colors.fill)
                    .filled(true)
                    .radius(5.0),
            );
            plot_ui.points(
                Points::new(outline)
                    .name(&series.label)
                    .color(colors.stroke)
                    .filled(false)
                    .radius(5.0),
            );
        });
}
