//! Quiz admin table tool
//!
//! Loads a dump of the admin tests table, applies the default newest-first
//! order and any requested column sorts, marks expired tests and prints the
//! result as text or JSON.

mod args;
mod config;
mod error;
mod input;
mod render;

use args::Args;
use config::Config;
use error::CliError;
use quiz_admin_core::{parse_date, TableError, TableSorter};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "quiz_admin_table=info,quiz_admin_core=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match Args::parse(std::env::args().skip(1)).and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = match &args.config_path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    let table = input::load_table(&args.table_path)?;
    tracing::info!("Loaded {} rows from {}", table.rows.len(), args.table_path.display());

    let mut sorter = TableSorter::new(table, config.table.clone())?;
    let mut warnings: Vec<TableError> = Vec::new();

    if let Some(column) = &config.default_sort_column {
        if sorter.table().column_index(column).is_some() {
            let outcome = sorter.initial_sort(column, config.default_sort_order)?;
            collect(&mut warnings, outcome.warnings);
        } else {
            tracing::debug!("Default sort column {} not in table, keeping file order", column);
        }
    }

    // Unknown columns behave like a click on nothing: reported, not fatal
    for column in &args.sorts {
        match sorter.sort_by(column) {
            Ok(outcome) => collect(&mut warnings, outcome.warnings),
            Err(e) => collect(&mut warnings, vec![e]),
        }
    }

    let now = match &args.now {
        Some(text) => parse_date(text, sorter.config()).ok_or_else(|| CliError::InvalidNow(text.clone()))?,
        None => chrono::Local::now().naive_local(),
    };

    if sorter.table().column_index(&config.expiry_column).is_some() {
        let report = sorter.highlight_expired(&config.expiry_column, now)?;
        tracing::info!("{} of {} tests expired as of {}", report.expired_count(), report.flags.len(), now);
        collect(&mut warnings, report.warnings);
    }

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let output = if args.json {
        render::json(&sorter, &warnings)?
    } else {
        render::text(&sorter, &config.expired_marker)
    };
    println!("{}", output);
    Ok(())
}

/// Append warnings, skipping ones already reported by an earlier pass
fn collect(warnings: &mut Vec<TableError>, new: Vec<TableError>) {
    for warning in new {
        if !warnings.contains(&warning) {
            warnings.push(warning);
        }
    }
}
