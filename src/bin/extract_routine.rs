//! Extract a timetable PDF into schedule entries.
//!
//! Usage:
//!   cargo run --release --bin extract_routine -- routine.pdf
//!   cargo run --release --bin extract_routine -- routine.pdf --day MON --block A
//!   cargo run --release --bin extract_routine -- routine.pdf --class-type Lecture --json

use std::path::PathBuf;
use std::process::ExitCode;

use routine_extract::schedule::{ScheduleEntry, ScheduleFilter, UNKNOWN_DAY};
use routine_extract::{FieldKey, RoutinePipeline};

struct CliConfig {
    input: Option<PathBuf>,
    filter: ScheduleFilter,
    json: bool,
    verbose: bool,
}

impl CliConfig {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let mut input = None;
        let mut filter = ScheduleFilter::new();
        let mut json = false;
        let mut verbose = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--day" => {
                    i += 1;
                    if i < args.len() {
                        filter = filter.with_day(&args[i]);
                    }
                },
                "--block" => {
                    i += 1;
                    if i < args.len() {
                        filter = filter.with_block(&args[i]);
                    }
                },
                "--class-type" => {
                    i += 1;
                    if i < args.len() {
                        filter = filter.with_class_type(&args[i]);
                    }
                },
                "--json" => {
                    json = true;
                },
                "--verbose" | "-v" => {
                    verbose = true;
                },
                other => {
                    if input.is_none() && !other.starts_with('-') {
                        input = Some(PathBuf::from(other));
                    }
                },
            }
            i += 1;
        }

        Self {
            input,
            filter,
            json,
            verbose,
        }
    }
}

fn print_table(entries: &[&ScheduleEntry], total: usize) {
    println!("Showing {} of {} classes", entries.len(), total);

    let mut current_day: Option<&str> = None;
    for entry in entries {
        let day = if entry.day().is_empty() {
            UNKNOWN_DAY
        } else {
            entry.day()
        };
        if current_day != Some(day) {
            println!();
            println!("== {} ==", day);
            current_day = Some(day);
        }

        let details: Vec<String> = entry
            .iter()
            .filter(|(field, _)| !matches!(field, FieldKey::Day | FieldKey::Time))
            .map(|(field, value)| format!("{}: {}", field.label(), value))
            .collect();
        let time = if entry.time().is_empty() { "--" } else { entry.time() };
        println!("  {:<15} {}", time, details.join(" | "));
    }
}

fn main() -> ExitCode {
    let config = CliConfig::from_args();

    let default_filter = if config.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let Some(input) = config.input else {
        eprintln!("Usage: extract_routine <file.pdf> [--day D] [--block B] [--class-type T] [--json] [--verbose]");
        return ExitCode::from(2);
    };

    let entries = match RoutinePipeline::new().extract_from_path(&input) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error: {}: {}", input.display(), e);
            return ExitCode::FAILURE;
        },
    };

    let filtered = config.filter.apply(&entries);

    if config.json {
        match serde_json::to_string_pretty(&filtered) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", routine_extract::Error::from(e));
                return ExitCode::FAILURE;
            },
        }
    } else {
        print_table(&filtered, entries.len());
    }

    ExitCode::SUCCESS
}
