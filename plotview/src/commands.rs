use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plotview", version, about = "Scrolling auto-fit line plotter")]
pub struct Cli {
    /// Viewer over stdin when no subcommand is given
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PlotArgs {
    /// Plotter settings file (.json or .toml)
    #[arg(long)]
    pub settings: Option<PathBuf>,
    /// Visible window width in ticks, overrides the settings file
    #[arg(long)]
    pub window: Option<i64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the viewer window fed from a file or stdin
    View {
        #[arg(long)]
        input: Option<PathBuf>,
        /// Frames per second when replaying a file (0 = as fast as possible)
        #[arg(long, default_value_t = 0)]
        rate: u32,
        #[command(flatten)]
        plot: PlotArgs,
    },
    /// Feed a sample file and report the fitted extents
    Fit {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, alias = "jq")]
        json: bool,
        #[command(flatten)]
        plot: PlotArgs,
    },
    /// Feed a sample file and write the final view as PNG
    Export {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
        #[arg(long, default_value_t = 1200)]
        width: u32,
        #[arg(long, default_value_t = 700)]
        height: u32,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        dark: bool,
        #[command(flatten)]
        plot: PlotArgs,
    },
    /// Write the default settings to a file
    Settings {
        #[arg(long)]
        output: PathBuf,
    },
}
