mod app;
mod command;
mod config;
mod consts;
mod engine;
mod help;
mod logging;
mod scheduler;
mod util;
mod view;
use crate::app::App;
use crate::config::Config;
use crate::engine::Engine;
use crate::scheduler::{SystemClock, Timers};
use anyhow::Context;
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Arguments {
    Run {
        config: Option<PathBuf>,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Arguments {
    fn from_parser(mut parser: Parser) -> Result<Arguments, lexopt::Error> {
        let mut config = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Arguments::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Arguments::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Arguments::Run { config, log_file })
    }

    fn run(self) -> ExitCode {
        match self {
            Arguments::Run { config, log_file } => match run(config, log_file) {
                Ok(r) => io_exit(r),
                Err(e) => {
                    eprintln!("cubesnake: {e:?}");
                    ExitCode::from(2)
                }
            },
            Arguments::Help => {
                print!("{USAGE}");
                ExitCode::SUCCESS
            }
            Arguments::Version => {
                println!("cubesnake {}", env!("CARGO_PKG_VERSION"));
                ExitCode::SUCCESS
            }
        }
    }
}

const USAGE: &str = "\
Usage: cubesnake [options]

Play snake in the terminal

Options:
  -c, --config <FILE>   Read configuration from the given file
      --log-file <FILE> Write log messages to the given file
  -h, --help            Display this help message and exit
  -V, --version         Show the program version and exit
";

/// Set everything up from the configuration file and command-line options,
/// then play.  Errors during setup are returned in the outer `Result`; errors
/// while the terminal is in use are returned in the inner one.
fn run(config: Option<PathBuf>, log_file: Option<PathBuf>) -> anyhow::Result<io::Result<()>> {
    let config = match config {
        Some(path) => Config::load(&path, false)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => match Config::default_path() {
            Ok(path) => Config::load(&path, true).with_context(|| {
                format!("failed to load configuration from {}", path.display())
            })?,
            Err(_) => Config::default(),
        },
    };
    if let Some(path) = log_file.or(config.log.file) {
        logging::init(&path, &config.log.level)
            .with_context(|| format!("failed to set up logging to {}", path.display()))?;
    }
    tracing::info!(settings = ?config.game, "starting up");
    let engine = Engine::new(config.game, Timers::new(SystemClock));
    let terminal = ratatui::init();
    let r = App::new(engine).run(terminal);
    ratatui::restore();
    Ok(r)
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "terminal I/O failed");
            eprintln!("cubesnake: {e}");
            ExitCode::from(2)
        }
    }
}

fn main() -> ExitCode {
    match Arguments::from_parser(Parser::from_env()) {
        Ok(args) => args.run(),
        Err(e) => {
            eprintln!("cubesnake: {e}");
            eprint!("{USAGE}");
            ExitCode::from(2)
        }
    }
}
