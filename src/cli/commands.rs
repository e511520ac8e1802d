//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trainplan")]
#[command(about = "Training calendar planner", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Date arguments accept today, tomorrow, yesterday, weekday names,
/// "next <weekday>", "last <weekday>", YYYY-MM-DD and DD-MM-YYYY.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new plan directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Training weekdays, comma separated (e.g. mon,wed,fri)
        #[arg(short, long, default_value = "")]
        availability: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Set the plan's date range
    Range {
        start: String,
        end: String,

        /// What to do with existing days (discard, preserve-overlap)
        #[arg(long, value_name = "POLICY")]
        reset: Option<String>,
    },

    /// Fill the plan from a series template using the weekly availability
    Assign {
        /// Series id
        series: String,

        /// Show the weekly pattern without changing the plan
        #[arg(long)]
        preview: bool,
    },

    /// Append a day's exercises to other days
    Replicate {
        /// Day to copy from
        source: String,

        /// Target days, comma separated
        #[arg(long = "to", value_delimiter = ',', value_name = "DATES")]
        dates: Vec<String>,

        /// Repeat every N days after the source
        #[arg(long, value_name = "DAYS")]
        every: Option<u32>,

        /// Append at most once per day even when both rules match
        #[arg(long)]
        dedupe: bool,
    },

    /// Copy a 7-day window onto the following week(s)
    ReplicateWeek {
        /// First day of the source week
        start: String,

        /// Continue to the end of the range instead of one week
        #[arg(long)]
        to_end: bool,
    },

    /// Move a day's exercises to another day, replacing its content
    Move { source: String, target: String },

    /// Remove all exercises from a day
    Clear { date: String },

    /// Replace a day's exercises with a flat model
    ApplyModel { date: String, model: String },

    /// Add one exercise, e.g. "Back squat 4x8 rest 120s @pause"
    Add {
        date: String,
        exercise: String,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Show the plan
    Show {
        #[arg(long)]
        from: Option<String>,

        #[arg(long)]
        to: Option<String>,
    },

    /// List series templates
    Series,

    /// List flat exercise models
    Models,

    /// Save the plan as a draft
    Save,

    /// Publish the plan
    Publish,
}
