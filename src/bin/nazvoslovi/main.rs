use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use env_logger::Env;
use nazvoslovi::{recognize, tables, Report, Tables};

mod cli;
mod display;

fn main() -> ExitCode {
    let cli = cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            display::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &cli::Cli) -> Result<bool> {
    if let Some(dir) = &cli.tables {
        let custom = Tables::load_dir(dir)
            .with_context(|| format!("tabulky z {}", dir.display()))?;
        log::debug!("loaded {} elements from {}", custom.element_count(), dir.display());
        tables::install(custom).map_err(|_| anyhow!("tabulky už byly načteny"))?;
    }

    if cli.kinds {
        display::print_kinds();
        return Ok(true);
    }

    let entry = match cli.entry() {
        Some(entry) => entry,
        None => display::prompt()?,
    };
    let report = recognize(&entry).map(|found| found.map(|c| Report::new(entry.as_str(), c)));

    if cli.json {
        display::print_json(report)
    } else {
        Ok(display::print_report(report, &entry))
    }
}
