//! Windowing and auto-fit engine for scrolling multi-line charts.
//!
//! Samples arrive tagged with a line index and are placed on a shared tick
//! axis by [`SeriesStore`]. [`AutoFitWindow`] keeps the y-axis framed around
//! whatever is inside the last `window_width` ticks. [`PlotterView`] pairs
//! the two and is what hosts drive.

pub mod fit;
pub mod ingest;
pub mod series;
pub mod settings;
pub mod view;

pub use fit::{AutoFitWindow, FitState, HorizontalExtent, Margins, VerticalExtent};
pub use ingest::{parse_frame, FrameReader, ReaderError, SampleError};
pub use series::{AppendOutcome, LineIndex, PlotPoint, Series, SeriesStore};
pub use settings::{PlotterSettings, SettingsError};
pub use view::{LineSummary, PlotterView};
