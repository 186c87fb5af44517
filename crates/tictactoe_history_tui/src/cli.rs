//! Command-line interface for tictactoe-history.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_history::SortOrder;

/// Tic-tac-toe with move history - play, rewind and branch
#[derive(Parser, Debug)]
#[command(name = "tictactoe-history")]
#[command(about = "Tic-tac-toe with time-travel through the move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        #[command(flatten)]
        sort: SortFlags,
    },

    /// Apply a sequence of plays and print the resulting view
    Replay {
        /// Cells to play, 0-8, comma separated (e.g. 0,4,1,5,2)
        #[arg(short, long, value_delimiter = ',', num_args = 1..)]
        moves: Vec<usize>,

        /// History index to jump to after the plays
        #[arg(short, long)]
        jump: Option<usize>,

        #[command(flatten)]
        sort: SortFlags,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Move list order flags; either one overrides the config file.
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortFlags {
    /// List moves latest-first
    #[arg(long, conflicts_with = "ascending")]
    pub descending: bool,

    /// List moves game-start-first
    #[arg(long)]
    pub ascending: bool,
}

impl SortFlags {
    /// Picks the initial order: an explicit flag wins, else the config value.
    pub fn resolve(self, config_descending: bool) -> SortOrder {
        if self.ascending {
            SortOrder::Ascending
        } else if self.descending || config_descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::try_parse_from(["tictactoe-history"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_replay_parses_comma_list() {
        let cli = Cli::try_parse_from([
            "tictactoe-history",
            "replay",
            "--moves",
            "0,4,1",
            "--jump",
            "1",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Replay {
                moves, jump, json, sort,
            }) => {
                assert_eq!(moves, vec![0, 4, 1]);
                assert_eq!(jump, Some(1));
                assert!(json);
                assert_eq!(sort, SortFlags::default());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_config_is_global() {
        let cli =
            Cli::try_parse_from(["tictactoe-history", "play", "--config", "alt.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
    }

    #[test]
    fn test_ascending_flag_parses() {
        let cli = Cli::try_parse_from(["tictactoe-history", "play", "--ascending"]).unwrap();
        match cli.command {
            Some(Command::Play { sort }) => {
                assert!(sort.ascending);
                assert!(!sort.descending);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_sort_flags_conflict() {
        let result = Cli::try_parse_from([
            "tictactoe-history",
            "replay",
            "--moves",
            "0",
            "--ascending",
            "--descending",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_override_config_both_ways() {
        let ascending = SortFlags {
            ascending: true,
            descending: false,
        };
        let descending = SortFlags {
            ascending: false,
            descending: true,
        };
        assert_eq!(ascending.resolve(true), SortOrder::Ascending);
        assert_eq!(descending.resolve(false), SortOrder::Descending);
    }

    #[test]
    fn test_no_flag_follows_config() {
        assert_eq!(SortFlags::default().resolve(true), SortOrder::Descending);
        assert_eq!(SortFlags::default().resolve(false), SortOrder::Ascending);
    }
}
