use chrono::{Local, NaiveDate};
use clap::Parser;
use trainplan::application::{
    init::init, manage_config::range_reset_name, manage_config::ConfigService, show_plan,
    AssignSeriesService, EditDayService, PublishService, SetRangeService,
};
use trainplan::cli::{
    format_assignment, format_model_list, format_outcome, format_plan, format_series_list, Cli,
    Commands,
};
use trainplan::domain::{resolve_date, AvailabilitySet, Exercise, RangeResetPolicy, ReplicationRule};
use trainplan::error::{PlanError, Result};
use trainplan::infrastructure::{FileSystemRepository, PlanRepository};
use trainplan::logging::{init_logging, LogLevel};
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(startup_log_level()) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Level from the discovered plan's config, or TRAINPLAN_LOG outside a plan directory
fn startup_log_level() -> LogLevel {
    FileSystemRepository::discover()
        .and_then(|repo| repo.load_config())
        .map(|config| config.get_log_level())
        .unwrap_or_else(|_| {
            std::env::var("TRAINPLAN_LOG")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default()
        })
}

fn date_arg(input: &str) -> Result<NaiveDate> {
    resolve_date(input, Local::now().date_naive())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path, availability } => {
            let availability = AvailabilitySet::from_str(&availability)?;
            init(&path, availability.clone())?;

            println!("Initialized trainplan at {}", path.display());
            if availability.is_empty() {
                println!("Availability: none (set with 'trainplan config availability mon,wed,fri')");
            } else {
                println!("Availability: {}", availability);
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("availability = {}", config.availability);
                println!(
                    "deduplicate_replication = {}",
                    config.deduplicate_replication
                );
                println!("range_reset = {}", range_reset_name(config.range_reset));
                println!("log_level = {}", config.log_level.to_filter());
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: trainplan config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: availability, deduplicate_replication, range_reset, log_level, created"
                );
                Ok(())
            }
        }
        Commands::Range { start, end, reset } => {
            let repo = FileSystemRepository::discover()?;
            let policy = reset
                .map(|p| RangeResetPolicy::from_str(&p).map_err(PlanError::Config))
                .transpose()?;

            let plan = SetRangeService::new(repo).execute(date_arg(&start)?, date_arg(&end)?, policy)?;
            println!(
                "Plan range set: {} to {} ({} days)",
                plan.range.start_date().format("%Y-%m-%d"),
                plan.range.end_date().format("%Y-%m-%d"),
                plan.range.len()
            );
            Ok(())
        }
        Commands::Assign { series, preview } => {
            let repo = FileSystemRepository::discover()?;
            let report = AssignSeriesService::new(repo).execute(&series, preview)?;
            print!("{}", format_assignment(&report));
            Ok(())
        }
        Commands::Replicate {
            source,
            dates,
            every,
            dedupe,
        } => {
            let repo = FileSystemRepository::discover()?;
            let rule = ReplicationRule {
                explicit_dates: dates
                    .iter()
                    .map(|d| date_arg(d))
                    .collect::<Result<_>>()?,
                interval_days: every,
            };
            let outcome = EditDayService::new(repo).replicate(
                date_arg(&source)?,
                &rule,
                dedupe.then_some(true),
            )?;
            println!("{}", format_outcome("Replicated", &outcome));
            Ok(())
        }
        Commands::ReplicateWeek { start, to_end } => {
            let repo = FileSystemRepository::discover()?;
            let outcome = EditDayService::new(repo).replicate_week(date_arg(&start)?, to_end)?;
            println!("{}", format_outcome("Replicated week", &outcome));
            Ok(())
        }
        Commands::Move { source, target } => {
            let repo = FileSystemRepository::discover()?;
            let outcome =
                EditDayService::new(repo).move_day(date_arg(&source)?, date_arg(&target)?)?;
            println!("{}", format_outcome("Moved", &outcome));
            Ok(())
        }
        Commands::Clear { date } => {
            let repo = FileSystemRepository::discover()?;
            let outcome = EditDayService::new(repo).clear_day(date_arg(&date)?)?;
            println!("{}", format_outcome("Cleared", &outcome));
            Ok(())
        }
        Commands::ApplyModel { date, model } => {
            let repo = FileSystemRepository::discover()?;
            let outcome = EditDayService::new(repo).apply_model(date_arg(&date)?, &model)?;
            println!("{}", format_outcome("Applied model", &outcome));
            Ok(())
        }
        Commands::Add {
            date,
            exercise,
            notes,
        } => {
            let repo = FileSystemRepository::discover()?;
            let mut exercise = Exercise::parse_shorthand(&exercise)?;
            if let Some(notes) = notes {
                exercise = exercise.with_notes(notes);
            }
            let outcome = EditDayService::new(repo).add_exercise(date_arg(&date)?, exercise)?;
            println!("{}", format_outcome("Added", &outcome));
            Ok(())
        }
        Commands::Show { from, to } => {
            let repo = FileSystemRepository::discover()?;
            let from = from.as_deref().map(date_arg).transpose()?;
            let to = to.as_deref().map(date_arg).transpose()?;
            let view = show_plan(&repo, from, to)?;
            print!("{}", format_plan(&view));
            Ok(())
        }
        Commands::Series => {
            let repo = FileSystemRepository::discover()?;
            println!("{}", format_series_list(&repo.list_series()?).trim_end());
            Ok(())
        }
        Commands::Models => {
            let repo = FileSystemRepository::discover()?;
            println!("{}", format_model_list(&repo.list_models()?).trim_end());
            Ok(())
        }
        Commands::Save => {
            let repo = FileSystemRepository::discover()?;
            let plan = PublishService::new(repo).save_draft()?;
            println!("Saved draft ({} training days)", plan.range.training_days());
            Ok(())
        }
        Commands::Publish => {
            let repo = FileSystemRepository::discover()?;
            let plan = PublishService::new(repo).publish()?;
            println!(
                "Published plan {} to {}",
                plan.range.start_date().format("%Y-%m-%d"),
                plan.range.end_date().format("%Y-%m-%d")
            );
            Ok(())
        }
    }
}
