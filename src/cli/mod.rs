//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_assignment, format_model_list, format_outcome, format_plan, format_series_list,
};
