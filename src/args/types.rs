use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde_json::Value;

pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The sqlite filename. Use :memory: for a throwaway database.
    #[arg(short = 'n', long, value_name = "DATABASE_NAME", default_value = "discs.db")]
    pub db_name: String,

    /// If specified, this sql is run on program startup. Be careful with
    /// the SQL you run here, don't mess up your own database.
    #[arg(
        long,
        value_name = "DATABASE_STARTUP_SCRIPT",
        value_parser = crate::args::validation::check_readable_file
    )]
    pub db_startup_script: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Record a completed round for a player
    Record {
        #[arg(long)]
        player: String,
        #[arg(long)]
        course: String,
        /// Total strokes for the round
        #[arg(long)]
        score: i64,
        /// Total par for the round
        #[arg(long)]
        par: i64,
        /// Defaults to today
        #[arg(long, value_parser = crate::args::validation::check_date)]
        date: Option<NaiveDate>,
    },
    /// Show a player's handicap, stats, and trend
    Report {
        #[arg(long)]
        player: String,
    },
    /// Recommend a stroke allowance between two players
    Matchup {
        #[arg(long)]
        player_a: String,
        #[arg(long)]
        player_b: String,
    },
    /// Bulk-load rounds from a json file, oldest round first
    Import {
        #[arg(
            long,
            value_name = "ROUNDS_JSON",
            value_parser = crate::args::validation::check_readable_file_and_json
        )]
        file: Value,
    },
    /// Wipe a player's round history and cached stats
    Reset {
        #[arg(long)]
        player: String,
    },
    /// List all recorded players
    Players,
}
