use eframe::egui;

use crate::data::model::DataPoint;

// ---------------------------------------------------------------------------
// PlotSeries – what the chart draws
// ---------------------------------------------------------------------------

/// One labelled scatter series with its axis titles.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub label: String,
    pub x_title: String,
    pub y_title: String,
    pub points: Vec<DataPoint>,
}

impl PlotSeries {
    pub fn assemble(
        label: impl Into<String>,
        x_title: impl Into<String>,
        y_title: impl Into<String>,
        points: &[DataPoint],
    ) -> Self {
        Self {
            label: label.into(),
            x_title: x_title.into(),
            y_title: y_title.into(),
            points: points.to_vec(),
        }
    }

    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(DataPoint::as_plot_point).collect()
    }
}

// ---------------------------------------------------------------------------
// Chart lifecycle
// ---------------------------------------------------------------------------

/// Creates and releases chart resources.
pub trait ChartBackend {
    type Handle;

    fn create(&mut self, series: &PlotSeries) -> Self::Handle;
    fn dispose(&mut self, handle: Self::Handle);
}

/// Owns at most one chart. The previous chart is always disposed before a new
/// one is created.
pub struct ChartSlot<B: ChartBackend> {
    backend: B,
    current: Option<B::Handle>,
}

impl<B: ChartBackend> ChartSlot<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            current: None,
        }
    }

    pub fn replace(&mut self, series: &PlotSeries) -> &B::Handle {
        self.clear();
        self.current.insert(self.backend.create(series))
    }

    pub fn clear(&mut self) {
        if let Some(handle) = self.current.take() {
            self.backend.dispose(handle);
        }
    }

    pub fn current(&self) -> Option<&B::Handle> {
        self.current.as_ref()
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: ChartBackend> Drop for ChartSlot<B> {
    fn drop(&mut self) {
        self.clear();
    }
}

// ---------------------------------------------------------------------------
// egui_plot backend
// ---------------------------------------------------------------------------

/// A live chart: the series plus the plot id its zoom/pan state is stored under.
#[derive(Debug, Clone)]
pub struct ChartHandle {
    pub plot_id: egui::Id,
    pub series: PlotSeries,
}

/// Every chart gets a fresh plot id; disposing drops the stored plot memory.
pub struct EguiCharts {
    ctx: egui::Context,
    generation: u64,
}

impl EguiCharts {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx, generation: 0 }
    }
}

impl ChartBackend for EguiCharts {
    type Handle = ChartHandle;

    fn create(&mut self, series: &PlotSeries) -> ChartHandle {
        self.generation += 1;
        let plot_id = egui::Id::new(("column_plot", self.generation));
        log::debug!(
            "Creating chart #{} '{}' with {} points",
            self.generation,
            series.label,
            series.points.len()
        );
        ChartHandle {
            plot_id,
            series: series.clone(),
        }
    }

    fn dispose(&mut self, handle: ChartHandle) {
        log::debug!("Disposing chart '{}'", handle.series.label);
        self.ctx
            .data_mut(|d| d.remove::<egui_plot::PlotMemory>(handle.plot_id));
    }
}


#[cfg(test)]
mod tests {
    use super::testing::CountingCharts;
    use super::*;

    fn series(n: usize) -> PlotSeries {
        let points: Vec<DataPoint> = (1..=n).map(|x| DataPoint { x, y: x as f64 }).collect();
        PlotSeries::assemble("height", "Time (s)", "Height (m)", &points)
    }

    #[test]
    fn replace_disposes_previous_chart_first() {
        let mut slot = ChartSlot::new(CountingCharts::default());
        for n in 1..=5 {
            slot.replace(&series(n));
            assert_eq!(slot.backend().live, 1);
        }
        assert_eq!(slot.backend().created, 5);
        assert_eq!(slot.backend().disposed, 4);
        assert_eq!(slot.backend().max_live, 1);
        assert_eq!(slot.current().map(|s| s.points.len()), Some(5));

        slot.clear();
        assert_eq!(slot.backend().live, 0);
        assert!(slot.current().is_none());
    }

    #[test]
    fn egui_handles_get_distinct_ids() {
        let mut charts = EguiCharts::new(egui::Context::default());
        let a = charts.create(&series(2));
        let b = charts.create(&series(2));
        assert_ne!(a.plot_id, b.plot_id);
        charts.dispose(a);
        charts.dispose(b);
    }

    #[test]
    fn plot_points_follow_series_order() {
        assert_eq!(series(3).plot_points(), vec![[1.0, 1.0], [2.0, 2.0], [3.0, 3.0]]);
    }
}
