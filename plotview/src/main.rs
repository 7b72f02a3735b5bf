use clap::Parser;

mod commands;
mod handlers;
mod output;

use commands::Cli;
use handlers::handle_command;
use output::print_error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    if let Err(err) = handle_command(cli.command) {
        print_error(&err.to_string());
        std::process::exit(1);
    }
}
