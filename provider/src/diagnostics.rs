//! Diagnostics reported back to the orchestrator.
//!
//! A diagnostic carries a short summary and a detail message. Client error
//! text is always embedded verbatim in the detail.

use serde::Serialize;

/// A single error-severity diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{summary}: {detail}")]
pub struct Diagnostic {
    pub summary: String,
    pub detail: String,
    /// Attribute path the diagnostic refers to, e.g. `display_name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        }
    }

    pub fn attribute_error(
        attribute: &str,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            attribute: Some(attribute.to_string()),
            ..Self::error(summary, detail)
        }
    }
}

/// Ordered collection of diagnostics returned by a failed operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("{}", join_lines(.0))]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn has_error(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    /// `Err(self)` when any error was collected, otherwise `Ok(value)`.
    pub fn into_result<T>(self, value: T) -> Result<T, Diagnostics> {
        if self.has_error() {
            Err(self)
        } else {
            Ok(value)
        }
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        Self(vec![diagnostic])
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn join_lines(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(Diagnostic::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_result_passes_through_when_clean() {
        assert_eq!(Diagnostics::new().into_result(5).unwrap(), 5);
    }

    #[test]
    fn into_result_fails_on_any_error() {
        let mut diags = Diagnostics::new();
        diags.push(Diagnostic::attribute_error("name", "Bad", "worse"));
        let err = diags.into_result(()).unwrap_err();
        assert_eq!(err.iter().count(), 1);
        assert_eq!(err.iter().next().unwrap().attribute.as_deref(), Some("name"));
    }

    #[test]
    fn display_joins_summary_and_detail() {
        let diag = Diagnostic::error("Error creating exercise", "status: 500, body: boom");
        assert_eq!(diag.to_string(), "Error creating exercise: status: 500, body: boom");
    }

    #[test]
    fn collection_display_puts_each_diagnostic_on_its_own_line() {
        let mut diags = Diagnostics::new();
        diags.push(Diagnostic::error("First", "one"));
        diags.push(Diagnostic::attribute_error("name", "Second", "two"));
        assert_eq!(diags.to_string(), "First: one\nSecond: two");

        let err: &dyn std::error::Error = &diags;
        assert_eq!(err.to_string(), diags.to_string());
    }
}
