use crate::plotter::palette_color;
use crate::GuiError;
use plotters::prelude::*;
use plotview_core::{FitState, PlotterView};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub dark_theme: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 700,
            title: String::new(),
            dark_theme: false,
        }
    }
}

fn export_err<E: std::fmt::Display>(err: E) -> GuiError {
    GuiError::Export(err.to_string())
}

/// Renders the visible window of `view` to a PNG file.
pub fn export_png(view: &PlotterView, path: &Path, options: &ExportOptions) -> Result<(), GuiError> {
    if view.state() == FitState::Empty {
        return Err(GuiError::Export("No samples to export.".to_string()));
    }
    let horizontal = view.horizontal_extent();
    let vertical = view.vertical_extent();
    let (min_x, max_x) = (horizontal.min as f64, horizontal.max as f64);

    let (bg_color, text_color, axis_color) = if options.dark_theme {
        (RGBColor(24, 24, 24), RGBColor(220, 220, 220), RGBColor(80, 80, 80))
    } else {
        (RGBColor(255, 255, 255), RGBColor(40, 40, 40), RGBColor(120, 120, 120))
    };

    let root = BitMapBackend::new(path, (options.width, options.height)).into_drawing_area();
    root.fill(&bg_color).map_err(export_err)?;

    let mut builder = ChartBuilder::on(&root);
    builder
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 50)
        .set_label_area_size(LabelAreaPosition::Bottom, 40);
    if !options.title.is_empty() {
        builder.caption(
            &options.title,
            ("sans-serif", 24).into_font().color(&text_color),
        );
    }
    let mut chart = builder
        .build_cartesian_2d(min_x..max_x, vertical.min..vertical.max)
        .map_err(export_err)?;

    chart
        .configure_mesh()
        .x_desc("tick")
        .y_desc("value")
        .axis_desc_style(("sans-serif", 16).into_font().color(&text_color))
        .label_style(("sans-serif", 14).into_font().color(&text_color))
        .axis_style(axis_color)
        .light_line_style(axis_color.mix(0.3))
        .bold_line_style(axis_color.mix(0.6))
        .draw()
        .map_err(export_err)?;

    for (line, series) in view.lines() {
        let c = palette_color(line);
        let color = RGBColor(c.r(), c.g(), c.b());
        let data: Vec<(f64, f64)> = series
            .visible(horizontal.min, horizontal.max)
            .map(|p| (p.x as f64, p.y))
            .collect();
        if data.is_empty() {
            continue;
        }
        chart
            .draw_series(LineSeries::new(data, color.stroke_width(1)))
            .map_err(export_err)?
            .label(view.line_name(line))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(bg_color.mix(0.8))
        .border_style(axis_color)
        .label_font(("sans-serif", 16).into_font().color(&text_color))
        .position(SeriesLabelPosition::UpperRight)
        .draw()
        .map_err(export_err)?;

    root.present().map_err(export_err)?;
    log::info!("exported plot to {}", path.display());
    Ok(())
}
