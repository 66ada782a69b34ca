use std::{env, fs};

use anyhow::{Context, Result};
use log::{debug, info};
use schedule_parser::{decode, parse_calendar, Statistics, Summary};

mod cli;
mod report;

fn setup_logging(verbose: bool) {
    if verbose {
        env::set_var("LOG", "schedule_stats=debug,schedule_parser=debug");
    } else if env::var("LOG").is_err() {
        env::set_var("LOG", "schedule_stats=info,schedule_parser=warn");
    }

    pretty_env_logger::init_custom_env("LOG");
}

fn main() -> Result<()> {
    let args = cli::parse(env::args().skip(1).collect());

    setup_logging(args.verbose);

    info!("Analyzing {}", args.file.display());

    let bytes = fs::read(&args.file)
        .with_context(|| format!("Failed to read calendar {}", args.file.display()))?;

    let events = parse_calendar(decode(&bytes))
        .with_context(|| format!("Failed to parse calendar {}", args.file.display()))?;
    debug!("Found {} events", events.len());

    let statistics = Statistics::from_events(events);
    let summary = Summary::new(&statistics, args.config);

    if let Some(path) = &args.export {
        let name = args
            .file
            .file_stem()
            .map_or_else(|| "schedule".into(), |stem| stem.to_string_lossy());

        fs::write(path, summary.itinerary.to_ics(&name).to_string())
            .with_context(|| format!("Failed to write itinerary to {}", path.display()))?;

        info!(
            "Wrote {} on-campus classes to {}",
            summary.itinerary.class_count(),
            path.display()
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", report::render(&summary)?);
    }

    Ok(())
}
