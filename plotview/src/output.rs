use plotview_core::{FitState, PlotterView};
use serde::Serialize;

pub fn print_info(message: &str) {
    println!("[PlotView][INFO] {message}");
}

pub fn print_error(message: &str) {
    eprintln!("[PlotView][ERROR]: {message}");
}

#[derive(Debug, Serialize)]
pub struct LineReport {
    pub line: usize,
    pub name: String,
    pub points: usize,
    pub start_x: i64,
    pub last_x: i64,
    pub last_value: Option<f64>,
    pub visible: Option<[f64; 2]>,
}

#[derive(Debug, Serialize)]
pub struct FitReport {
    pub state: &'static str,
    pub current_x: i64,
    pub window_width: i64,
    pub horizontal: [i64; 2],
    pub vertical: [f64; 2],
    pub skipped_lines: usize,
    pub lines: Vec<LineReport>,
}

impl FitReport {
    pub fn from_view(view: &PlotterView, skipped_lines: usize) -> Self {
        let horizontal = view.horizontal_extent();
        let vertical = view.vertical_extent();
        Self {
            state: match view.state() {
                FitState::Empty => "empty",
                FitState::Active => "active",
            },
            current_x: view.current_x(),
            window_width: view.window_width(),
            horizontal: [horizontal.min, horizontal.max],
            vertical: [vertical.min, vertical.max],
            skipped_lines,
            lines: view
                .line_summaries()
                .into_iter()
                .map(|summary| LineReport {
                    line: summary.line,
                    name: summary.name,
                    points: summary.points,
                    start_x: summary.start_x,
                    last_x: summary.last_x,
                    last_value: summary.last_value,
                    visible: summary.visible.map(|(lo, hi)| [lo, hi]),
                })
                .collect(),
        }
    }
}

pub fn print_fit_report(report: &FitReport) {
    print_info(&format!(
        "Fit after {} ticks (window {}, {})",
        report.current_x, report.window_width, report.state
    ));
    println!("x: [{}, {}]", report.horizontal[0], report.horizontal[1]);
    println!("y: [{:.6}, {:.6}]", report.vertical[0], report.vertical[1]);
    if report.skipped_lines > 0 {
        println!("skipped input lines: {}", report.skipped_lines);
    }
    if report.lines.is_empty() {
        print_info("No lines plotted");
        return;
    }
    for line in &report.lines {
        let last = line
            .last_value
            .map(|v| format!("{v}"))
            .unwrap_or_else(|| "-".to_string());
        let visible = line
            .visible
            .map(|[lo, hi]| format!("[{lo}, {hi}]"))
            .unwrap_or_else(|| "(none)".to_string());
        println!(
            "[{}] {}: points={} start_x={} last_x={} last={} visible={}",
            line.line, line.name, line.points, line.start_x, line.last_x, last, visible
        );
    }
}
