use std::env;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use getopts::{Matches, Options};
use schedule_parser::Config;

pub struct Args {
    pub file: PathBuf,
    pub json: bool,
    pub verbose: bool,
    pub export: Option<PathBuf>,
    pub config: Config,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optflag("j", "json", "Print the statistics as JSON");
    opts.optflag("v", "verbose", "Enable debug logging");
    opts.optopt(
        "w",
        "weeks",
        "Semester length used for weekly averages [Default: 15]",
        "WEEKS",
    );
    opts.optopt(
        "t",
        "travel-hours",
        "One-way travel time to campus [Default: 1]",
        "HOURS",
    );
    opts.optopt(
        "e",
        "export",
        "Write the on-campus itinerary to an .ics file",
        "FILE",
    );
    opts
}

fn usage(opts: &Options) -> String {
    let brief = format!("{} [OPTIONS] FILE", env!("CARGO_PKG_NAME"));
    opts.usage(&brief)
}

fn number<T: FromStr>(matches: &Matches, name: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match matches.opt_get_default(name, default) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Provided value for option '{name}' is invalid: {err}");
            process::exit(1);
        }
    }
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        println!("{}", usage(&opts));
        process::exit(0);
    }

    let file = match matches.free.as_slice() {
        [file] => PathBuf::from(file),
        [] => {
            eprintln!("Missing calendar file\n\n{}", usage(&opts));
            process::exit(1);
        }
        _ => {
            eprintln!("Expected exactly one calendar file");
            process::exit(1);
        }
    };

    let defaults = Config::default();

    Args {
        file,
        json: matches.opt_present("json"),
        verbose: matches.opt_present("verbose"),
        export: matches.opt_str("export").map(PathBuf::from),
        config: Config {
            semester_weeks: number(&matches, "weeks", defaults.semester_weeks),
            travel_hours_one_way: number(&matches, "travel-hours", defaults.travel_hours_one_way),
        },
    }
}
