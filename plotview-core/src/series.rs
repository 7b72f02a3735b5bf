use log::trace;
use std::collections::VecDeque;

pub const DEFAULT_WINDOW_WIDTH: i64 = 100;

/// Index of a plotted line. Indices may be sparse; a series only exists for
/// indices that have been written to.
pub type LineIndex = usize;

/// A single sample placed on the shared tick axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    /// Tick the sample was plotted at
    pub x: i64,
    /// Sample value
    pub y: f64,
}

/// Result of appending one sample, fed to the auto-fit window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppendOutcome {
    pub line: LineIndex,
    pub point: PlotPoint,
    pub start_x: i64,
    pub last_x: i64,
    /// Whether this append moved the shared tick counter
    pub advanced: bool,
}

/// An append-only run of points belonging to one line.
///
/// Points are kept in tick order, so range queries over the visible window
/// use binary search on the front of the deque.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    start_x: i64,
    last_x: i64,
    points: VecDeque<PlotPoint>,
}

impl Series {
    fn new(start_x: i64) -> Self {
        Self {
            start_x,
            last_x: start_x - 1,
            points: VecDeque::new(),
        }
    }

    /// Tick the series was created at.
    pub fn start_x(&self) -> i64 {
        self.start_x
    }

    /// Tick of the most recent point, or `start_x - 1` when nothing was
    /// written yet.
    pub fn last_x(&self) -> i64 {
        self.last_x
    }

    pub fn points(&self) -> &VecDeque<PlotPoint> {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last_point(&self) -> Option<PlotPoint> {
        self.points.back().copied()
    }

    /// Points with `from_x <= x <= to_x`.
    pub fn visible(&self, from_x: i64, to_x: i64) -> impl Iterator<Item = &PlotPoint> + '_ {
        let start = self.points.partition_point(|p| p.x < from_x);
        self.points
            .range(start..)
            .take_while(move |p| p.x <= to_x)
    }

    /// Min/max value among the points with `from_x <= x <= to_x`.
    pub fn visible_range(&self, from_x: i64, to_x: i64) -> Option<(f64, f64)> {
        self.visible(from_x, to_x).fold(None, |acc, p| match acc {
            None => Some((p.y, p.y)),
            Some((lo, hi)) => Some((lo.min(p.y), hi.max(p.y))),
        })
    }

    fn has_point_at(&self, x: i64) -> bool {
        let idx = self.points.partition_point(|p| p.x < x);
        self.points.get(idx).is_some_and(|p| p.x == x)
    }

    fn push(&mut self, point: PlotPoint) {
        self.points.push_back(point);
        self.last_x = point.x;
    }

    fn evict_before(&mut self, x: i64) -> usize {
        let mut evicted = 0;
        while let Some(front) = self.points.front() {
            if front.x >= x {
                break;
            }
            self.points.pop_front();
            evicted += 1;
        }
        evicted
    }
}

/// Owns every line series and the shared tick counter.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStore {
    lines: Vec<Option<Series>>,
    current_x: i64,
    x_range: i64,
}

impl Default for SeriesStore {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_WIDTH)
    }
}

impl SeriesStore {
    pub fn new(x_range: i64) -> Self {
        Self {
            lines: Vec::new(),
            current_x: 0,
            x_range: x_range.max(1),
        }
    }

    pub fn current_x(&self) -> i64 {
        self.current_x
    }

    pub fn window_width(&self) -> i64 {
        self.x_range
    }

    /// First tick of the visible window (inclusive).
    pub fn window_start(&self) -> i64 {
        self.current_x - self.x_range
    }

    /// Returns the series for `line`, creating it at the current tick if it
    /// does not exist yet.
    pub fn ensure_line(&mut self, line: LineIndex) -> &Series {
        self.ensure_line_mut(line)
    }

    fn ensure_line_mut(&mut self, line: LineIndex) -> &mut Series {
        if line >= self.lines.len() {
            self.lines.resize_with(line + 1, || None);
        }
        let current_x = self.current_x;
        self.lines[line].get_or_insert_with(|| Series::new(current_x))
    }

    pub fn append_point(&mut self, line: LineIndex, y: f64, advance: bool) -> AppendOutcome {
        if advance {
            self.current_x += 1;
        }
        let point = PlotPoint {
            x: self.current_x,
            y,
        };
        let series = self.ensure_line_mut(line);
        series.push(point);
        trace!("line {line}: appended ({}, {y})", point.x);
        AppendOutcome {
            line,
            point,
            start_x: series.start_x,
            last_x: series.last_x,
            advanced: advance,
        }
    }

    /// Drops every series and rewinds the tick counter. The window width is
    /// configuration and is kept.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.current_x = 0;
    }

    /// Sets the window width, clamping to at least one tick. Returns the
    /// width actually applied.
    pub fn set_window_width(&mut self, x_range: i64) -> i64 {
        self.x_range = x_range.max(1);
        self.x_range
    }

    pub fn line(&self, line: LineIndex) -> Option<&Series> {
        self.lines.get(line).and_then(Option::as_ref)
    }

    pub fn lines(&self) -> impl Iterator<Item = (LineIndex, &Series)> + '_ {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(idx, series)| series.as_ref().map(|s| (idx, s)))
    }

    pub fn line_count(&self) -> usize {
        self.lines.iter().filter(|s| s.is_some()).count()
    }

    pub fn point_count(&self) -> usize {
        self.lines().map(|(_, s)| s.len()).sum()
    }

    /// Min/max value over all points inside the visible window, across
    /// every line.
    pub fn visible_range(&self) -> Option<(f64, f64)> {
        let (from_x, to_x) = (self.window_start(), self.current_x);
        self.lines()
            .filter_map(|(_, s)| s.visible_range(from_x, to_x))
            .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)))
    }

    /// True when a stored point sits on the tick that just left the window.
    pub fn scrolled_out(&self) -> bool {
        let left = self.window_start() - 1;
        self.lines().any(|(_, s)| s.has_point_at(left))
    }

    /// Removes points older than `x` from every line. Returns how many
    /// points were dropped.
    pub fn evict_before(&mut self, x: i64) -> usize {
        self.lines
            .iter_mut()
            .flatten()
            .map(|series| series.evict_before(x))
            .sum()
    }
}
