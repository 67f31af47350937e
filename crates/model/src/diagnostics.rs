//! Warnings and errors produced while reading an OBJ file.
//!
//! The loader never prints anything itself, every message goes through a [`Diagnostics`]
//! sink chosen by the caller.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// File the message is about, `None` when reading from memory.
    pub source: Option<PathBuf>,
    /// 1-based line number.
    pub line: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(source: Option<&Path>, line: usize, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            source: source.map(Path::to_path_buf),
            line,
            message: message.into(),
        }
    }

    pub fn error(source: Option<&Path>, line: usize, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            source: source.map(Path::to_path_buf),
            line,
            message: message.into(),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let severity = match self.severity {
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        };
        match &self.source {
            Some(source) => write!(
                f,
                "{severity} in {}:{}: {}",
                source.display(),
                self.line,
                self.message
            ),
            None => write!(f, "{severity} at line {}: {}", self.line, self.message),
        }
    }
}

pub trait Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Forwards every diagnostic to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => log::warn!("{diagnostic}"),
            Severity::Error => log::error!("{diagnostic}"),
        }
    }
}

impl Diagnostics for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_with_source() {
        let diagnostic =
            Diagnostic::warning(Some(Path::new("quad.obj")), 4, "Groups are not supported");
        assert_eq!(
            diagnostic.to_string(),
            "Warning in quad.obj:4: Groups are not supported"
        );
    }

    #[test]
    fn display_without_source() {
        let diagnostic = Diagnostic::error(None, 12, "Vertex index must be specified");
        assert_eq!(
            diagnostic.to_string(),
            "Error at line 12: Vertex index must be specified"
        );
    }

    #[test]
    fn vec_collects_reports() {
        let mut collected = Vec::new();
        collected.report(Diagnostic::warning(None, 1, "a"));
        collected.report(Diagnostic::error(None, 2, "b"));
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[1].severity, Severity::Error);
    }
}
