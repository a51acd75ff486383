use std::path::PathBuf;

use armory::{ArmorPiece, Translation};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "armory")]
#[command(version, about = "Memorize scripture, earn gems, put on the armor of God")]
pub struct Cli {
    /// Directory used instead of the platform application support directory
    #[arg(long, env = "ARMORY_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Keep all progress in memory only
    #[arg(long, global = true, conflicts_with = "data_dir")]
    pub ephemeral: bool,

    /// Directory holding translation files (kjv.json, web.json, ...)
    #[arg(long, env = "ARMORY_TEXT_DIR", global = true)]
    pub text_dir: Option<PathBuf>,

    #[arg(long, default_value = "KJV", value_parser = parse_translation, global = true)]
    pub translation: Translation,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show gems, armor and today's progress
    Status,
    /// List memory passages with their offsets
    Passages,
    /// Add a passage, e.g. `armory add John 3:16-18`
    Add {
        #[arg(required = true)]
        reference: Vec<String>,
    },
    /// Remove passages by offset (see `passages`)
    Remove {
        #[arg(required = true)]
        offsets: Vec<usize>,
    },
    /// Record a review of a passage
    Review {
        #[arg(required = true)]
        reference: Vec<String>,
    },
    /// Print passage text
    Read {
        #[arg(required = true)]
        reference: Vec<String>,
        /// Seconds to wait for the translation to load
        #[arg(long, default_value_t = 5)]
        wait_secs: u64,
    },
    /// Claim the reward for a completed task (difficulty 1-5)
    Task {
        #[arg(allow_negative_numbers = true)]
        difficulty: i32,
    },
    /// Show armor levels
    Armor,
    /// Spend gems to level up an armor piece
    Upgrade { piece: ArmorPiece },
    /// Record a score for an app
    Score {
        app: String,
        #[arg(allow_negative_numbers = true)]
        score: i64,
    },
    /// Show the leaderboard
    Leaderboard,
}

fn parse_translation(value: &str) -> Result<Translation, String> {
    Translation::from_name(value).map_err(|e| e.to_string())
}
