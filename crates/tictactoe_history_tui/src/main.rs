//! Tic-tac-toe with move history - terminal front end.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod replay;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, SortFlags};
use config::TuiConfig;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play {
        sort: SortFlags::default(),
    }) {
        Command::Play { sort } => {
            logging::init_file(config.log_file(), config.log_filter())?;
            tui::run(sort.resolve(*config.descending()))
        }
        Command::Replay {
            moves,
            jump,
            sort,
            json,
        } => {
            logging::init_stderr(config.log_filter());
            let output = replay::run(&moves, jump, sort.resolve(*config.descending()), json)?;
            println!("{output}");
            Ok(())
        }
    }
}
