//! Per-item diagnostics collected during conversion.
//!
//! Problems confined to one compendium entry (a tag that could not be
//! derived, a missing name) never abort a run. They are gathered here and
//! reported once the conversion finishes.

use std::fmt;

use crate::output::Printer;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The card was still produced, possibly with partial data.
    Warning,
    /// The entry was skipped.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single per-item diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Machine-readable code (e.g. "cards::tag::source").
    pub code: String,
    /// Name of the entry the diagnostic refers to, when known.
    pub item: Option<String>,
    pub message: String,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: code.into(),
            item: None,
            message: message.into(),
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.into(),
            item: None,
            message: message.into(),
        }
    }

    /// Attach the entry name.
    pub fn for_item(mut self, item: impl Into<String>) -> Self {
        self.item = Some(item.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.item {
            Some(item) => write!(f, "[{}] {}: {}", self.code, item, self.message),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

/// Collects diagnostics across a conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticReport {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Check if there are no diagnostics at all.
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Print every diagnostic through the status printer.
    pub fn print(&self, printer: &Printer) {
        for d in self.iter() {
            match d.severity {
                Severity::Error => printer.error("error", &d.to_string()),
                Severity::Warning => printer.warning("warning", &d.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = DiagnosticReport::new();
        assert!(report.is_ok());
        assert!(!report.has_errors());
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.warning_count(), 0);
    }

    #[test]
    fn test_counts() {
        let mut report = DiagnosticReport::new();
        report.push(Diagnostic::error("cards::item::name", "missing name"));
        report.push(Diagnostic::warning("cards::tag::type", "bad value").for_item("Club"));

        assert!(report.has_errors());
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert_eq!(report.iter().count(), 2);
    }

    #[test]
    fn test_display_includes_item_name() {
        let d = Diagnostic::warning("cards::tag::property", "expected a list").for_item("Club");
        assert_eq!(d.to_string(), "[cards::tag::property] Club: expected a list");
    }
}
