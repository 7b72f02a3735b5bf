use crate::plotter::render_view;
use eframe::egui;
use log::{debug, info};
use plotview_core::PlotterView;
use std::sync::mpsc::{Receiver, TryRecvError};

const MAX_FRAMES_PER_REPAINT: usize = 10_000;

pub(crate) struct ViewerApp {
    title: String,
    view: PlotterView,
    frames: Receiver<Vec<f64>>,
    paused: bool,
    source_closed: bool,
    width_draft: i64,
}

impl ViewerApp {
    pub(crate) fn new(title: String, view: PlotterView, frames: Receiver<Vec<f64>>) -> Self {
        let width_draft = view.window_width();
        Self {
            title,
            view,
            frames,
            paused: false,
            source_closed: false,
            width_draft,
        }
    }

    fn drain_frames(&mut self) {
        if self.paused || self.source_closed {
            return;
        }
        let mut drained = 0;
        while drained < MAX_FRAMES_PER_REPAINT {
            match self.frames.try_recv() {
                Ok(values) => {
                    self.view.plot_frame(&values);
                    drained += 1;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    info!("sample source closed after {} ticks", self.view.current_x());
                    self.source_closed = true;
                    break;
                }
            }
        }
        if drained > 0 {
            debug!("plotted {drained} frames");
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Window width:");
            let response = ui.add(
                egui::DragValue::new(&mut self.width_draft)
                    .clamp_range(1..=1_000_000)
                    .speed(1.0)
                    .suffix(" ticks"),
            );
            if response.changed() {
                self.view.set_window_width(self.width_draft);
            }
            ui.separator();
            let pause_label = if self.paused { "Resume" } else { "Pause" };
            if ui.button(pause_label).clicked() {
                self.paused = !self.paused;
            }
            if ui.button("Clear").clicked() {
                self.view.clear();
            }
            ui.separator();
            let vertical = self.view.vertical_extent();
            ui.label(format!(
                "tick {}  y [{:.3}, {:.3}]",
                self.view.current_x(),
                vertical.min,
                vertical.max
            ));
            if self.source_closed {
                ui.label("(source closed)");
            }
        });
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_frames();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.controls(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            render_view(ui, &self.title, &self.view);
        });

        if !self.source_closed {
            ctx.request_repaint();
        }
    }
}
