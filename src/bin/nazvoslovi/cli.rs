use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(
    name = "nazvoslovi",
    about = "Převod mezi vzorci a českými názvy anorganických sloučenin",
    version
)]
pub struct Cli {
    /// Formula or name, e.g. `Ca3(PO4)2` or `fosforečnan vápenatý` (prompted if omitted)
    #[arg(value_name = "SLOUČENINA")]
    pub input: Vec<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Directory with custom table.json, oxidation.json and amount.json
    #[arg(long, value_name = "DIR", env = "NAZVOSLOVI_TABLES")]
    pub tables: Option<PathBuf>,

    /// List the known compound kinds and exit
    #[arg(long)]
    pub kinds: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The input words joined back together, so unquoted names work too.
    pub fn entry(&self) -> Option<String> {
        if self.input.is_empty() {
            None
        } else {
            Some(self.input.join(" "))
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
