use std::{
    env,
    path::{Path, PathBuf},
    process,
};

use chrono::NaiveDate;
use finance_core::{
    config::{ConfigManager, EngineConfig},
    core::services::{ActiveFilter, RecurringService, RecurringSort, ValidationService},
    init,
    storage::load_snapshot_from_path,
    Clock, Dashboard, FinanceError, SystemClock,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

struct Options {
    snapshot: PathBuf,
    as_of: Option<NaiveDate>,
    config: Option<PathBuf>,
    status: ActiveFilter,
}

fn run() -> Result<(), FinanceError> {
    let mut args = env::args().skip(1);
    let Some(command) = args.next() else {
        print_usage();
        process::exit(1);
    };
    let options = parse_options(args.collect())?;
    let snapshot = load_snapshot_from_path(&options.snapshot)?;

    match command.as_str() {
        "dashboard" => {
            let config = load_config(options.config.as_deref())?;
            let as_of = options.as_of.unwrap_or_else(|| SystemClock.today());
            let view = Dashboard::build_as_of(&snapshot, &config, as_of)?;
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        "validate" => {
            ValidationService::validate_snapshot(&snapshot)?;
            println!("Snapshot {} is valid", options.snapshot.display());
        }
        "recurring" => {
            ValidationService::validate_snapshot(&snapshot)?;
            let listed = RecurringService::list(
                &snapshot.recurring_expenses,
                options.status,
                RecurringSort::default(),
            );
            println!("{}", serde_json::to_string_pretty(&listed)?);
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn parse_options(raw: Vec<String>) -> Result<Options, FinanceError> {
    let mut iter = raw.into_iter();
    let mut snapshot = None;
    let mut as_of = None;
    let mut config = None;
    let mut status = ActiveFilter::default();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--as-of" => {
                let value = expect_value(&mut iter, "--as-of")?;
                let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|err| {
                    FinanceError::InvalidInput(format!("--as-of `{value}`: {err}"))
                })?;
                as_of = Some(date);
            }
            "--config" => config = Some(PathBuf::from(expect_value(&mut iter, "--config")?)),
            "--status" => {
                status = match expect_value(&mut iter, "--status")?.as_str() {
                    "all" => ActiveFilter::All,
                    "active" => ActiveFilter::Active,
                    "inactive" => ActiveFilter::Inactive,
                    other => {
                        return Err(FinanceError::InvalidInput(format!(
                            "--status expects all, active or inactive, got `{other}`"
                        )))
                    }
                }
            }
            flag if flag.starts_with("--") => {
                return Err(FinanceError::InvalidInput(format!("unknown option {flag}")));
            }
            path if snapshot.is_none() => snapshot = Some(PathBuf::from(path)),
            extra => {
                return Err(FinanceError::InvalidInput(format!(
                    "unexpected argument `{extra}`"
                )))
            }
        }
    }

    let snapshot = snapshot
        .ok_or_else(|| FinanceError::InvalidInput("missing snapshot file".into()))?;
    Ok(Options {
        snapshot,
        as_of,
        config,
        status,
    })
}

fn expect_value(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, FinanceError> {
    iter.next()
        .ok_or_else(|| FinanceError::InvalidInput(format!("{flag} requires a value")))
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig, FinanceError> {
    let manager = match path {
        Some(path) => ConfigManager::new(path.to_path_buf()),
        None => ConfigManager::from_default_location()?,
    };
    Ok(manager.load()?)
}

fn print_usage() {
    eprintln!(
        "Usage: finance_core_cli <command> <snapshot.json> [options]\n\
         Commands:\n  \
         dashboard [--as-of YYYY-MM-DD] [--config config.json]\n  \
         validate\n  \
         recurring [--status all|active|inactive]"
    );
}
