use eframe::egui;
use plotview_core::{PlotterSettings, PlotterView};
use std::sync::mpsc::Receiver;

mod app;
pub mod plotter;

use app::ViewerApp;
pub use plotter::{export_png, render_view, ExportOptions};

#[derive(Debug, Clone)]
pub struct GuiConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            title: "PlotView".to_string(),
            width: 1280.0,
            height: 720.0,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GuiError {
    #[error("gui error: {0}")]
    Gui(String),
    #[error("export error: {0}")]
    Export(String),
}

/// Opens the viewer window and plots every frame received on `frames`.
///
/// Frames are drained on the UI thread, so any number of producers can feed
/// the channel while the view itself stays single-threaded. Returns when the
/// window is closed.
pub fn run_viewer(
    config: GuiConfig,
    settings: PlotterSettings,
    frames: Receiver<Vec<f64>>,
) -> Result<(), GuiError> {
    let mut options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([config.width, config.height]),
        ..Default::default()
    };
    // NOTE: Vsync generates hangs and lag on occluded windows.
    options.vsync = false;

    let view = PlotterView::new(&settings);
    let title = config.title.clone();
    eframe::run_native(
        &config.title,
        options,
        Box::new(move |_cc| Box::new(ViewerApp::new(title, view, frames))),
    )
    .map_err(|err| GuiError::Gui(err.to_string()))
}
