use crate::commands::{Commands, PlotArgs};
use crate::output::{print_fit_report, print_info, FitReport};
use log::{info, warn};
use plotview_core::{FrameReader, PlotterSettings, PlotterView, ReaderError};
use plotview_gui::{export_png, run_viewer, ExportOptions, GuiConfig};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

type CommandResult = Result<(), Box<dyn Error>>;

pub fn handle_command(command: Option<Commands>) -> CommandResult {
    match command {
        None => run_view(None, 0, &PlotArgs::default()),
        Some(Commands::View { input, rate, plot }) => run_view(input.as_deref(), rate, &plot),
        Some(Commands::Fit { input, json, plot }) => {
            let (view, skipped) = load_view(&input, &plot)?;
            let report = FitReport::from_view(&view, skipped);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_fit_report(&report);
            }
            Ok(())
        }
        Some(Commands::Export {
            input,
            output,
            width,
            height,
            title,
            dark,
            plot,
        }) => {
            let (view, _) = load_view(&input, &plot)?;
            let options = ExportOptions {
                width,
                height,
                title: title.unwrap_or_default(),
                dark_theme: dark,
            };
            export_png(&view, &output, &options)?;
            print_info(&format!("Exported {}", output.display()));
            Ok(())
        }
        Some(Commands::Settings { output }) => {
            PlotterSettings::default().save_to_file(&output)?;
            print_info(&format!("Wrote default settings to {}", output.display()));
            Ok(())
        }
    }
}

fn resolve_settings(plot: &PlotArgs) -> Result<PlotterSettings, Box<dyn Error>> {
    let mut settings = match &plot.settings {
        Some(path) => PlotterSettings::load_from_file(path)?,
        None => PlotterSettings::default(),
    };
    if let Some(window) = plot.window {
        settings.window_width = window;
    }
    Ok(settings.normalize()?)
}

/// Plots every frame of `input`. Malformed lines are skipped with a warning;
/// returns the view and how many lines were skipped.
fn load_view(input: &Path, plot: &PlotArgs) -> Result<(PlotterView, usize), Box<dyn Error>> {
    let settings = resolve_settings(plot)?;
    let file = File::open(input)
        .map_err(|err| format!("Failed to open input '{}': {err}", input.display()))?;
    let mut view = PlotterView::new(&settings);
    let mut skipped = 0;
    for frame in FrameReader::new(BufReader::new(file)) {
        match frame {
            Ok(values) => view.plot_frame(&values),
            Err(err @ ReaderError::Sample { .. }) => {
                warn!("skipping {err}");
                skipped += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }
    info!(
        "loaded {} ticks from {} ({skipped} lines skipped)",
        view.current_x(),
        input.display()
    );
    Ok((view, skipped))
}

fn spawn_reader<R>(reader: R, rate: u32, tx: mpsc::Sender<Vec<f64>>)
where
    R: BufRead + Send + 'static,
{
    let pause = (rate > 0).then(|| Duration::from_secs_f64(1.0 / f64::from(rate)));
    thread::spawn(move || {
        for frame in FrameReader::new(reader) {
            match frame {
                Ok(values) => {
                    if tx.send(values).is_err() {
                        break;
                    }
                    if let Some(pause) = pause {
                        thread::sleep(pause);
                    }
                }
                Err(err @ ReaderError::Sample { .. }) => warn!("skipping {err}"),
                Err(err) => {
                    warn!("sample source failed: {err}");
                    break;
                }
            }
        }
    });
}

fn run_view(input: Option<&Path>, rate: u32, plot: &PlotArgs) -> CommandResult {
    let settings = resolve_settings(plot)?;
    let (tx, rx) = mpsc::channel();
    let title = match input {
        Some(path) => {
            let file = File::open(path)
                .map_err(|err| format!("Failed to open input '{}': {err}", path.display()))?;
            spawn_reader(BufReader::new(file), rate, tx);
            format!("PlotView - {}", path.display())
        }
        None => {
            spawn_reader(BufReader::new(io::stdin()), rate, tx);
            "PlotView - stdin".to_string()
        }
    };
    run_viewer(
        GuiConfig {
            title,
            ..GuiConfig::default()
        },
        settings,
        rx,
    )?;
    Ok(())
}
