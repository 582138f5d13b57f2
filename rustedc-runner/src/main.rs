mod repl;
mod runner;
mod stats;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use console::style;

use stats::{ConsoleSink, NullSink, ReportSink};

/// RustedC: run a `.rc` source file, or start the REPL when no path is
/// given.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Source file to execute; omit to start the REPL
    path: Option<PathBuf>,
    /// Echo a run record after every executed unit
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut sink: Box<dyn ReportSink> = if cli.stats {
        Box::new(ConsoleSink)
    } else {
        Box::new(NullSink)
    };

    match cli.path {
        None => {
            if let Err(err) = repl::start(sink.as_mut()) {
                eprintln!("{} {}", style("error:").red().bold(), err);
                return ExitCode::FAILURE;
            }
        }
        Some(path) => {
            if path.extension().and_then(|ext| ext.to_str()) != Some("rc") {
                eprintln!(
                    "{} incorrect file extension, expected .rc",
                    style("error:").red().bold()
                );
                return ExitCode::FAILURE;
            }
            let source = match std::fs::read_to_string(&path) {
                Ok(source) => source,
                Err(err) => {
                    eprintln!(
                        "{} cannot read {}: {}",
                        style("error:").red().bold(),
                        path.display(),
                        err
                    );
                    return ExitCode::FAILURE;
                }
            };
            if !runner::execute(&source, sink.as_mut()) {
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
