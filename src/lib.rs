//! regex-trainer - learn regular expressions in the terminal
//!
//! Lessons, practice challenges and a playground that evaluates a pattern
//! live as it is typed. The evaluation pipeline lives in [`engine`]; the
//! binary entrypoint only calls [`run`].

mod app;
mod config;
pub mod content;
mod display;
pub mod engine;
pub mod error;
mod field;
mod input;
mod report;
mod style;
mod telemetry;
mod terminal;

use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use app::{App, Tab};
use config::Config;
use content::Catalog;
use engine::{Controller, FlagSet};
use error::Result;
use terminal::Terminal;

#[derive(Parser, Debug)]
#[command(name = "regex-trainer", version, about = "Learn, practice, and master regular expressions")]
struct Cli {
    /// Config file to use instead of ~/.regex-trainer.toml
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Tab to open on startup
    #[arg(long, value_enum)]
    tab: Option<Tab>,

    /// Starting flags, e.g. "gi"
    #[arg(long, value_name = "FLAGS")]
    flags: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one pattern and print the matches
    Eval {
        /// Pattern source, without delimiters
        pattern: String,

        /// Flags such as "g" or "gim"
        #[arg(short, long, default_value = "g")]
        flags: String,

        /// Subject text; read from stdin when omitted
        text: Option<String>,
    },
}

/// Parse the command line and run the trainer.
///
/// Returns the process exit code: 0 once the TUI exits or `eval` found a
/// match, 1 when `eval` found none and 2 when its pattern was rejected.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(tab) = cli.tab {
        config.start_tab = tab;
    }
    if let Some(flags) = &cli.flags {
        config.default_flags = flags.clone();
    }

    if let Some(log_path) = telemetry::initialise(&config)? {
        info!(path = %log_path.display(), "logging enabled");
    }

    match cli.command {
        Some(Command::Eval {
            pattern,
            flags,
            text,
        }) => eval(&pattern, &flags, text),
        None => {
            let flags = FlagSet::parse(&config.default_flags)?;
            interactive(&config, flags).map(|_| 0)
        }
    }
}

/// Non-interactive evaluation; the exit code reflects the outcome
fn eval(pattern: &str, flags: &str, text: Option<String>) -> Result<i32> {
    let subject = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let flags = match FlagSet::parse(flags) {
        Ok(flags) => flags,
        Err(err) => {
            println!("/{}/{}: error: {}", pattern, flags, err);
            return Ok(report::Outcome::Failed.exit_code());
        }
    };

    let mut controller = Controller::new(flags);
    controller.load_example(pattern, subject);
    let (out, outcome) = report::write_report(&controller);
    print!("{}", out);
    Ok(outcome.exit_code())
}

fn interactive(config: &Config, flags: FlagSet) -> Result<()> {
    let mut terminal = Terminal::new()?;
    let mut app = App::new(Catalog::builtin(), flags, config);
    app.run(&mut terminal)
}
