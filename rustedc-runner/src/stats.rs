use std::fmt::Display;

use console::style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    File,
    Repl,
}

impl Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::File => write!(f, "FILE"),
            SourceKind::Repl => write!(f, "REPL"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexer,
    Parser,
    Interpreter,
    Unknown,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Lexer => write!(f, "LEXER"),
            ErrorKind::Parser => write!(f, "PARSER"),
            ErrorKind::Interpreter => write!(f, "INTERPRETER"),
            ErrorKind::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Outcome of one executed unit of work (a file or one REPL line). This is
/// everything the execution-statistics collaborator receives; persistence
/// itself lives outside this repo.
#[derive(Debug)]
pub struct RunRecord {
    pub source_kind: SourceKind,
    pub source_text: String,
    pub elapsed_ms: f64,
    pub memory_delta_kb: f64,
    pub final_value: Option<String>,
    pub error_kind: Option<ErrorKind>,
    pub error_message: Option<String>,
}

pub trait ReportSink {
    fn record(&mut self, record: &RunRecord);
}

/// Discards records; the default when `--stats` is off.
pub struct NullSink;

impl ReportSink for NullSink {
    fn record(&mut self, _record: &RunRecord) {}
}

/// Prints one styled summary line per executed unit.
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn record(&mut self, record: &RunRecord) {
        let status = match record.error_kind {
            Some(kind) => style(kind.to_string()).red(),
            None => style("OK".to_owned()).green(),
        };
        eprintln!(
            "[{}] {} in {:.3} ms, mem {:+.1} KiB",
            record.source_kind, status, record.elapsed_ms, record.memory_delta_kb
        );
    }
}

/// Virtual memory of this process in KiB, from `/proc/self/stat`.
#[cfg(target_os = "linux")]
pub fn process_memory_kb() -> f64 {
    let Ok(stat) = std::fs::read_to_string("/proc/self/stat") else {
        return 0.0;
    };
    // Skip past the parenthesized command name; vsize is the 20th field
    // after the process state.
    let Some((_, rest)) = stat.rsplit_once(')') else {
        return 0.0;
    };
    rest.split_whitespace()
        .nth(20)
        .and_then(|vsize| vsize.parse::<f64>().ok())
        .map(|vsize| vsize / 1024.0)
        .unwrap_or(0.0)
}

#[cfg(not(target_os = "linux"))]
pub fn process_memory_kb() -> f64 {
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_kinds_use_the_wire_spelling() {
        assert_eq!(SourceKind::File.to_string(), "FILE");
        assert_eq!(SourceKind::Repl.to_string(), "REPL");
        assert_eq!(ErrorKind::Lexer.to_string(), "LEXER");
        assert_eq!(ErrorKind::Parser.to_string(), "PARSER");
        assert_eq!(ErrorKind::Interpreter.to_string(), "INTERPRETER");
        assert_eq!(ErrorKind::Unknown.to_string(), "UNKNOWN");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn memory_probe_reads_something() {
        assert!(process_memory_kb() > 0.0);
    }
}
