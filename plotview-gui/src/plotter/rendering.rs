use crate::plotter::palette_color;
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoints};
use plotview_core::{FitState, PlotterView};

/// Draws the visible part of every line and pins the plot bounds to the
/// view's extents.
pub fn render_view(ui: &mut egui::Ui, id: &str, view: &PlotterView) {
    let horizontal = view.horizontal_extent();
    let vertical = view.vertical_extent();

    if view.state() == FitState::Empty {
        ui.label("Waiting for samples");
    }

    let plot = Plot::new(id)
        .legend(Legend::default())
        .x_axis_label("tick")
        .y_axis_label("value")
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_double_click_reset(false);

    plot.show(ui, |plot_ui| {
        for (line, series) in view.lines() {
            let points: PlotPoints = series
                .visible(horizontal.min, horizontal.max)
                .map(|p| [p.x as f64, p.y])
                .collect();
            plot_ui.line(
                Line::new(points)
                    .color(palette_color(line))
                    .name(view.line_name(line)),
            );
        }
        plot_ui.set_plot_bounds(PlotBounds::from_min_max(
            [horizontal.min as f64, vertical.min],
            [horizontal.max as f64, vertical.max],
        ));
    });
}
