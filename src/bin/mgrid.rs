extern crate monthgrid as lib;

use flexi_logger::{FileSpec, Logger};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "mgrid",
    about = "Generates a monthly calendar grid as insertable shape and text primitives."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "m",
        long = "month",
        help = "month to lay out, 0-based (0 = January)"
    )]
    pub month: Option<u32>,

    #[structopt(short = "y", long = "year", help = "year to lay out")]
    pub year: Option<i32>,

    #[structopt(
        short = "o",
        long = "output",
        help = "write primitives to this file instead of stdout",
        parse(from_os_str)
    )]
    pub output: Option<PathBuf>,

    #[structopt(long = "pretty", help = "pretty-print the emitted JSON")]
    pub pretty: bool,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    let mut config = lib::config::load_suitable_config(args.configfile.as_deref())?;

    if let Some(month) = args.month {
        config.month = month;
    }
    if let Some(year) = args.year {
        config.year = year;
    }

    config.validate()?;

    let grid = lib::MonthGrid::new(&config);
    let primitives = grid.primitives();

    log::info!(
        "Laid out {}/{} as {} primitives ({}x{} units)",
        config.month + 1,
        config.year,
        primitives.len(),
        grid.width(),
        grid.height()
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&primitives)?
    } else {
        serde_json::to_string(&primitives)?
    };

    match args.output {
        Some(path) => fs::write(path, json)?,
        None => writeln!(io::stdout(), "{}", json)?,
    }

    Ok(())
}
