//! Builder API for diagnostic messages.

use crate::diagnostic::{DetailItem, DetailKind, DiagnosticKind, DiagnosticMessage};
use crate::source::SourceSpan;

/// Builder for [`DiagnosticMessage`].
///
/// ```
/// use mdx_error_reporting::DiagnosticMessageBuilder;
///
/// let msg = DiagnosticMessageBuilder::error("Invalid tagName Option")
///     .with_code("M-1-1")
///     .problem("Expected tagName to be 'code' or 'pre', got: div")
///     .add_hint("Did you mean `pre`?")
///     .build();
///
/// assert_eq!(msg.code.as_deref(), Some("M-1-1"));
/// assert_eq!(msg.hints.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct DiagnosticMessageBuilder {
    kind: DiagnosticKind,
    title: String,
    code: Option<String>,
    problem: Option<String>,
    details: Vec<DetailItem>,
    hints: Vec<String>,
    location: Option<SourceSpan>,
}

impl DiagnosticMessageBuilder {
    pub fn new(kind: DiagnosticKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            code: None,
            problem: None,
            details: Vec::new(),
            hints: Vec::new(),
            location: None,
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Error, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Warning, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Info, title)
    }

    /// Attach a catalog code such as `M-2-1`.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the problem statement. Calling it again replaces the previous one.
    pub fn problem(mut self, problem: impl Into<String>) -> Self {
        self.problem = Some(problem.into());
        self
    }

    /// Add an error detail (✖ bullet).
    pub fn add_detail(self, detail: impl Into<String>) -> Self {
        self.push_detail(DetailKind::Error, detail.into(), None)
    }

    /// Add an error detail pointing at a span of the snippet.
    pub fn add_detail_at(self, detail: impl Into<String>, location: SourceSpan) -> Self {
        self.push_detail(DetailKind::Error, detail.into(), Some(location))
    }

    /// Add an info detail (ℹ bullet).
    pub fn add_info(self, info: impl Into<String>) -> Self {
        self.push_detail(DetailKind::Info, info.into(), None)
    }

    /// Add a note detail (• bullet).
    pub fn add_note(self, note: impl Into<String>) -> Self {
        self.push_detail(DetailKind::Note, note.into(), None)
    }

    pub fn add_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    pub fn with_location(mut self, location: SourceSpan) -> Self {
        self.location = Some(location);
        self
    }

    fn push_detail(
        mut self,
        kind: DetailKind,
        content: String,
        location: Option<SourceSpan>,
    ) -> Self {
        self.details.push(DetailItem {
            kind,
            content,
            location,
        });
        self
    }

    pub fn build(self) -> DiagnosticMessage {
        DiagnosticMessage {
            code: self.code,
            title: self.title,
            kind: self.kind,
            problem: self.problem,
            details: self.details,
            hints: self.hints,
            location: self.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_parts_in_order() {
        let msg = DiagnosticMessageBuilder::warning("Heads up")
            .add_detail("one")
            .add_note("two")
            .add_hint("three?")
            .build();

        assert_eq!(msg.kind, DiagnosticKind::Warning);
        assert_eq!(msg.details.len(), 2);
        assert_eq!(msg.details[0].kind, DetailKind::Error);
        assert_eq!(msg.details[1].kind, DetailKind::Note);
        assert_eq!(msg.hints[0], "three?");
        assert!(msg.code.is_none());
    }

    #[test]
    fn test_problem_replaces_previous() {
        let msg = DiagnosticMessageBuilder::error("t")
            .problem("first")
            .problem("second")
            .build();
        assert_eq!(msg.problem.as_deref(), Some("second"));
    }

    #[test]
    fn test_detail_location() {
        let msg = DiagnosticMessageBuilder::error("t")
            .add_detail_at("here", SourceSpan::new(1, 2))
            .build();
        assert_eq!(msg.details[0].location, Some(SourceSpan::new(1, 2)));
    }
}
