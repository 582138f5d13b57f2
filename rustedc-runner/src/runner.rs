use std::time::Instant;

use console::style;
use thiserror::Error;

use rustedc_core::lexer::{LexError, Lexer};
use rustedc_core::parser::{ParseError, Parser};
use rustedc_interpreter::environment::Environment;
use rustedc_interpreter::evaluator;
use rustedc_interpreter::value::{RuntimeError, Value};

use crate::stats::{process_memory_kb, ErrorKind, ReportSink, RunRecord, SourceKind};

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("runtime error: {0}")]
    Eval(#[from] RuntimeError),
}

impl ExecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExecError::Lex(_) => ErrorKind::Lexer,
            ExecError::Parse(_) => ErrorKind::Parser,
            ExecError::Eval(_) => ErrorKind::Interpreter,
        }
    }
}

/// One unit of work: lex, parse, evaluate. The first error at any stage
/// aborts the unit; the caller reports it and may move on to the next unit.
pub fn run_source(source: &str, env: &Environment) -> Result<Value, ExecError> {
    let tokens = Lexer::new(source).tokenize()?;
    let program = Parser::new(tokens).parse_program()?;
    Ok(evaluator::run_program(&program, env)?)
}

/// Runs one unit and measures it into a [`RunRecord`] for the report sink.
pub fn run_unit(
    kind: SourceKind,
    source: &str,
    env: &Environment,
) -> (Result<Value, ExecError>, RunRecord) {
    let memory_before = process_memory_kb();
    let start = Instant::now();

    let result = run_source(source, env);

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    let memory_after = process_memory_kb();

    let record = RunRecord {
        source_kind: kind,
        source_text: source.to_owned(),
        elapsed_ms,
        memory_delta_kb: memory_after - memory_before,
        final_value: result.as_ref().ok().map(Value::to_string),
        error_kind: result.as_ref().err().map(ExecError::kind),
        error_message: result.as_ref().err().map(ExecError::to_string),
    };

    (result, record)
}

/// Whole-file execution against a fresh global environment. Returns false
/// when the run failed.
pub fn execute(source: &str, sink: &mut dyn ReportSink) -> bool {
    let env = Environment::global();
    let (result, record) = run_unit(SourceKind::File, source, &env);

    if let Err(err) = &result {
        eprintln!("{} {}", style(format!("[{}]", err.kind())).red().bold(), err);
    }
    sink.record(&record);

    result.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::NullSink;

    #[test]
    fn run_source_evaluates_a_program() {
        let env = Environment::global();
        let result = run_source("func add(a, b) { return a + b; } add(2, 3)", &env).unwrap();
        assert_eq!(result, Value::Number(5.0));
    }

    #[test]
    fn errors_map_to_their_reporting_kind() {
        let env = Environment::global();
        assert_eq!(
            run_source("\"unterminated", &env).unwrap_err().kind(),
            ErrorKind::Lexer
        );
        assert_eq!(
            run_source("let = 5;", &env).unwrap_err().kind(),
            ErrorKind::Parser
        );
        assert_eq!(
            run_source("missing", &env).unwrap_err().kind(),
            ErrorKind::Interpreter
        );
    }

    #[test]
    fn run_unit_fills_the_record() {
        let env = Environment::global();
        let (result, record) = run_unit(SourceKind::Repl, "1 + 2", &env);
        assert!(result.is_ok());
        assert_eq!(record.source_kind, SourceKind::Repl);
        assert_eq!(record.source_text, "1 + 2");
        assert_eq!(record.final_value.as_deref(), Some("3"));
        assert_eq!(record.error_kind, None);
        assert_eq!(record.error_message, None);

        let (_, record) = run_unit(SourceKind::Repl, "let x = 1 / 0;", &env);
        assert_eq!(record.final_value, None);
        assert_eq!(record.error_kind, Some(ErrorKind::Interpreter));
        assert!(record
            .error_message
            .as_deref()
            .unwrap()
            .contains("division by zero"));
    }

    #[test]
    fn repl_environment_persists_across_units() {
        let env = Environment::global();
        run_source("let counter = 1;", &env).unwrap();
        let result = run_source("counter + 1", &env).unwrap();
        assert_eq!(result, Value::Number(2.0));
    }

    #[test]
    fn execute_reports_success() {
        assert!(execute("1 + 1", &mut NullSink));
        assert!(!execute("oops", &mut NullSink));
    }
}
