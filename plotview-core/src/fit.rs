use crate::series::{AppendOutcome, SeriesStore};
use log::{debug, warn};

pub const DEFAULT_MARGIN_FRACTION: f64 = 0.05;
pub const DEFAULT_FLOOR_MARGIN: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitState {
    /// Nothing plotted since construction or the last clear.
    Empty,
    Active,
}

/// Range applied to the shared y-axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalExtent {
    pub min: f64,
    pub max: f64,
}

impl Default for VerticalExtent {
    /// Placeholder shown while nothing has been plotted.
    fn default() -> Self {
        Self {
            min: -1.0,
            max: 1.0,
        }
    }
}

impl VerticalExtent {
    pub fn contains(&self, y: f64) -> bool {
        self.min <= y && y <= self.max
    }

}

/// Range applied to the x-axis: `[current_x - window_width, current_x]`.
/// Both ends are inclusive, so `window_width + 1` ticks are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizontalExtent {
    pub min: i64,
    pub max: i64,
}

impl HorizontalExtent {
    pub fn contains(&self, x: i64) -> bool {
        self.min <= x && x <= self.max
    }
}

/// Padding applied around the visible data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    /// Fraction of the visible span added above and below
    pub fraction: f64,
    /// Absolute padding used when every visible value is equal
    pub floor: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            fraction: DEFAULT_MARGIN_FRACTION,
            floor: DEFAULT_FLOOR_MARGIN,
        }
    }
}

impl Margins {
    /// Replaces a negative or non-finite fraction, and a floor that is not
    /// strictly positive, with the defaults.
    pub fn sanitized(self) -> Self {
        let fraction = if self.fraction.is_finite() && self.fraction >= 0.0 {
            self.fraction
        } else {
            DEFAULT_MARGIN_FRACTION
        };
        let floor = if self.floor.is_finite() && self.floor > 0.0 {
            self.floor
        } else {
            DEFAULT_FLOOR_MARGIN
        };
        if fraction != self.fraction || floor != self.floor {
            warn!(
                "invalid margins (fraction {}, floor {}), using defaults",
                self.fraction, self.floor
            );
        }
        Self { fraction, floor }
    }

    pub fn pad(&self, lo: f64, hi: f64) -> VerticalExtent {
        let span = hi - lo;
        let pad = if span > 0.0 {
            span * self.fraction
        } else {
            self.floor
        };
        VerticalExtent {
            min: lo - pad,
            max: hi + pad,
        }
    }
}

/// Keeps the axes framed around whatever is inside the visible window.
///
/// `data` holds the raw (unpadded) min/max the current vertical extent was
/// derived from; the narrow update paths extend it without rescanning.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoFitWindow {
    margins: Margins,
    state: FitState,
    data: Option<(f64, f64)>,
    vertical: VerticalExtent,
    horizontal: HorizontalExtent,
}

impl Default for AutoFitWindow {
    fn default() -> Self {
        Self::new(Margins::default())
    }
}

impl AutoFitWindow {
    pub fn new(margins: Margins) -> Self {
        Self {
            margins: margins.sanitized(),
            state: FitState::Empty,
            data: None,
            vertical: VerticalExtent::default(),
            horizontal: HorizontalExtent { min: 0, max: 0 },
        }
    }

    pub fn state(&self) -> FitState {
        self.state
    }

    pub fn vertical(&self) -> VerticalExtent {
        self.vertical
    }

    pub fn horizontal(&self) -> HorizontalExtent {
        self.horizontal
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn set_margins(&mut self, margins: Margins) {
        self.margins = margins.sanitized();
        if let Some((lo, hi)) = self.data {
            self.vertical = self.margins.pad(lo, hi);
        }
    }

    /// Raw min/max the current extent frames.
    pub fn data_range(&self) -> Option<(f64, f64)> {
        self.data
    }

    /// Updates both axes after `appended` was stored.
    ///
    /// A scroll that dropped a point out of view forces a full rescan, since
    /// only a rescan can shrink the range. Otherwise the visible set only
    /// grew and the new value can at most push one bound outwards.
    pub fn observe(&mut self, store: &SeriesStore, appended: &AppendOutcome) {
        let y = appended.point.y;
        if appended.advanced && store.scrolled_out() {
            self.best_fit(store);
            return;
        }
        match self.data {
            None => self.y_range_select(y, y),
            Some((lo, hi)) => {
                if y < lo {
                    self.y_min_select(y);
                }
                if y > hi {
                    self.y_max_select(y);
                }
            }
        }
        self.apply_horizontal(store);
    }

    /// Recomputes the vertical extent from every visible point. An empty
    /// visible set keeps the previous extent.
    pub fn best_fit(&mut self, store: &SeriesStore) {
        match store.visible_range() {
            Some((lo, hi)) => {
                debug!(
                    "best fit over [{}, {}]: data {lo}..{hi}",
                    store.window_start(),
                    store.current_x()
                );
                self.y_range_select(lo, hi);
            }
            None => debug!("best fit skipped: no visible points"),
        }
        self.apply_horizontal(store);
    }

    /// Lowers the bottom bound to frame `min`, keeping the current top.
    pub fn y_min_select(&mut self, min: f64) {
        let hi = self.data.map_or(min, |(_, hi)| hi);
        self.y_range_select(min, hi);
    }

    /// Raises the top bound to frame `max`, keeping the current bottom.
    pub fn y_max_select(&mut self, max: f64) {
        let lo = self.data.map_or(max, |(lo, _)| lo);
        self.y_range_select(lo, max);
    }

    fn y_range_select(&mut self, lo: f64, hi: f64) {
        self.state = FitState::Active;
        self.data = Some((lo, hi));
        self.vertical = self.margins.pad(lo, hi);
    }

    pub fn apply_horizontal(&mut self, store: &SeriesStore) {
        self.horizontal = HorizontalExtent {
            min: store.window_start(),
            max: store.current_x(),
        };
    }

    /// Back to `Empty` with placeholder extents.
    pub fn reset(&mut self, store: &SeriesStore) {
        self.state = FitState::Empty;
        self.data = None;
        self.vertical = VerticalExtent::default();
        self.apply_horizontal(store);
    }
}
