use crate::fit::{AutoFitWindow, FitState, HorizontalExtent, Margins, VerticalExtent};
use crate::series::{LineIndex, Series, SeriesStore};
use crate::settings::PlotterSettings;
use log::{debug, info};

/// Per-line figures for legends and reports.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSummary {
    pub line: LineIndex,
    pub name: String,
    pub points: usize,
    pub start_x: i64,
    pub last_x: i64,
    pub last_value: Option<f64>,
    /// Min/max over the points currently in the window
    pub visible: Option<(f64, f64)>,
}

/// A scrolling multi-line chart: stores samples and keeps both axes framed
/// around the visible window.
///
/// Renderers only read from it; ingestion goes through [`plot_point`],
/// [`plot_frame`], [`clear`] and [`set_window_width`].
///
/// [`plot_point`]: PlotterView::plot_point
/// [`plot_frame`]: PlotterView::plot_frame
/// [`clear`]: PlotterView::clear
/// [`set_window_width`]: PlotterView::set_window_width
#[derive(Debug, Clone, PartialEq)]
pub struct PlotterView {
    store: SeriesStore,
    fit: AutoFitWindow,
    retain_ticks: Option<u64>,
    line_names: Vec<String>,
}

impl Default for PlotterView {
    fn default() -> Self {
        Self::new(&PlotterSettings::default())
    }
}

impl PlotterView {
    pub fn new(settings: &PlotterSettings) -> Self {
        let store = SeriesStore::new(settings.window_width);
        let mut fit = AutoFitWindow::new(settings.margins());
        fit.apply_horizontal(&store);
        Self {
            store,
            fit,
            retain_ticks: settings.retain_ticks,
            line_names: settings.line_names.clone(),
        }
    }

    /// Plots `value` on `line`. With `advance` the shared tick moves forward
    /// first; pass `false` for the other lines of the same time step.
    pub fn plot_point(&mut self, value: f64, line: LineIndex, advance: bool) {
        let appended = self.store.append_point(line, value, advance);
        self.fit.observe(&self.store, &appended);
        if advance {
            self.apply_retention();
        }
    }

    /// Plots one time step: `values[i]` on line `i`, advancing once.
    pub fn plot_frame(&mut self, values: &[f64]) {
        for (line, value) in values.iter().copied().enumerate() {
            self.plot_point(value, line, line == 0);
        }
    }

    pub fn clear(&mut self) {
        info!("clearing plotter view ({} points)", self.store.point_count());
        self.store.clear();
        self.fit.reset(&self.store);
    }

    /// Changes how many ticks are visible and refits. Widths below one are
    /// clamped.
    pub fn set_window_width(&mut self, width: i64) {
        let applied = self.store.set_window_width(width);
        debug!("window width set to {applied} (requested {width})");
        self.fit.best_fit(&self.store);
    }

    /// Applies new settings, keeping the stored samples.
    pub fn apply_settings(&mut self, settings: &PlotterSettings) {
        self.retain_ticks = settings.retain_ticks;
        self.line_names = settings.line_names.clone();
        self.fit.set_margins(settings.margins());
        self.set_window_width(settings.window_width);
    }

    fn apply_retention(&mut self) {
        let Some(retain) = self.retain_ticks else {
            return;
        };
        let keep = i64::try_from(retain)
            .unwrap_or(i64::MAX)
            .max(self.store.window_width());
        let evicted = self.store.evict_before(self.store.current_x().saturating_sub(keep));
        if evicted > 0 {
            debug!("evicted {evicted} points older than {keep} ticks");
        }
    }

    pub fn state(&self) -> FitState {
        self.fit.state()
    }

    pub fn current_x(&self) -> i64 {
        self.store.current_x()
    }

    pub fn window_width(&self) -> i64 {
        self.store.window_width()
    }

    pub fn margins(&self) -> Margins {
        self.fit.margins()
    }

    pub fn vertical_extent(&self) -> VerticalExtent {
        self.fit.vertical()
    }

    pub fn horizontal_extent(&self) -> HorizontalExtent {
        self.fit.horizontal()
    }

    pub fn line(&self, line: LineIndex) -> Option<&Series> {
        self.store.line(line)
    }

    pub fn lines(&self) -> impl Iterator<Item = (LineIndex, &Series)> + '_ {
        self.store.lines()
    }

    pub fn store(&self) -> &SeriesStore {
        &self.store
    }

    pub fn line_name(&self, line: LineIndex) -> String {
        self.line_names
            .get(line)
            .filter(|name| !name.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| format!("line {line}"))
    }

    pub fn line_summaries(&self) -> Vec<LineSummary> {
        let horizontal = self.horizontal_extent();
        self.store
            .lines()
            .map(|(line, series)| LineSummary {
                line,
                name: self.line_name(line),
                points: series.len(),
                start_x: series.start_x(),
                last_x: series.last_x(),
                last_value: series.last_point().map(|p| p.y),
                visible: series.visible_range(horizontal.min, horizontal.max),
            })
            .collect()
    }
}
