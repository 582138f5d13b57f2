use console::style;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use rustedc_interpreter::environment::Environment;

use crate::runner::run_unit;
use crate::stats::{ReportSink, SourceKind};

const PROMPT: &str = ">>> ";

/// Interactive loop. Each line is one unit of work; the environment
/// persists across lines, so declarations stay visible.
pub fn start(sink: &mut dyn ReportSink) -> Result<(), ReadlineError> {
    let env = Environment::global();
    let mut rl = DefaultEditor::new()?;

    println!("RustedC v0.1");

    loop {
        let line = match rl.readline(PROMPT) {
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
            Ok(line) => line,
        };

        if line.trim().is_empty() {
            continue;
        }
        if line.trim() == "exit" {
            break;
        }
        rl.add_history_entry(line.as_str())?;

        let (result, record) = run_unit(SourceKind::Repl, &line, &env);
        match result {
            Ok(value) => println!("{}", value),
            Err(err) => {
                eprintln!("{} {}", style(format!("[{}]", err.kind())).red().bold(), err)
            }
        }
        sink.record(&record);
    }

    Ok(())
}
