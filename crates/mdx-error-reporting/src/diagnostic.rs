//! Diagnostic messages and their text/JSON renderings.

use crate::source::{SourceSnippet, SourceSpan};
use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use serde::{Deserialize, Serialize};

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticKind {
    Error,
    Warning,
    Info,
}

impl DiagnosticKind {
    pub fn label(self) -> &'static str {
        match self {
            DiagnosticKind::Error => "Error",
            DiagnosticKind::Warning => "Warning",
            DiagnosticKind::Info => "Info",
        }
    }

    fn report_style(self) -> (ReportKind<'static>, Color) {
        match self {
            DiagnosticKind::Error => (ReportKind::Error, Color::Red),
            DiagnosticKind::Warning => (ReportKind::Warning, Color::Yellow),
            DiagnosticKind::Info => (ReportKind::Advice, Color::Cyan),
        }
    }
}

/// Bullet style of a detail line: ✖ error, ℹ info, • note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailKind {
    Error,
    Info,
    Note,
}

impl DetailKind {
    pub fn bullet(self) -> &'static str {
        match self {
            DetailKind::Error => "✖",
            DetailKind::Info => "ℹ",
            DetailKind::Note => "•",
        }
    }

    fn color(self) -> Color {
        match self {
            DetailKind::Error => Color::Red,
            DetailKind::Info => Color::Cyan,
            DetailKind::Note => Color::Blue,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailItem {
    pub kind: DetailKind,
    pub content: String,
    /// Span this detail points at, rendered as a secondary label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceSpan>,
}

impl DetailItem {
    fn line(&self) -> String {
        format!("{} {}", self.kind.bullet(), self.content)
    }
}

/// A tidyverse-style diagnostic: title, problem, bulleted details, hints.
///
/// Build one with [`DiagnosticMessageBuilder`](crate::DiagnosticMessageBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticMessage {
    pub kind: DiagnosticKind,
    pub title: String,
    /// Catalog code, e.g. `M-2-1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<DetailItem>,
    /// Suggestions, phrased as questions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
    /// Byte span in the source snippet passed to [`DiagnosticMessage::to_text`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceSpan>,
}

impl DiagnosticMessage {
    fn header(&self) -> String {
        match &self.code {
            Some(code) => format!("{} [{}]: {}", self.kind.label(), code, self.title),
            None => format!("{}: {}", self.kind.label(), self.title),
        }
    }

    /// Render as text.
    ///
    /// When the message has a location and a snippet is given, the header
    /// and problem are drawn by ariadne over the snippet, and located
    /// details become labels. Otherwise everything is plain lines:
    ///
    /// ```text
    /// Error [M-1-1]: Invalid tagName Option
    /// Expected tagName to be 'code' or 'pre', got: div
    /// ✖ Got: `div`
    /// ? Use `code` or `pre`?
    /// ```
    pub fn to_text(&self, snippet: Option<&SourceSnippet>) -> String {
        let mut lines = Vec::new();

        let report = self
            .location
            .zip(snippet)
            .and_then(|(location, snippet)| self.render_report(location, snippet));

        match report {
            Some(report) => {
                lines.push(report.trim_end().to_string());
                lines.extend(
                    self.details
                        .iter()
                        .filter(|detail| detail.location.is_none())
                        .map(DetailItem::line),
                );
            }
            None => {
                lines.push(self.header());
                lines.extend(self.problem.clone());
                lines.extend(self.details.iter().map(DetailItem::line));
            }
        }

        lines.extend(self.hints.iter().map(|hint| format!("? {}", hint)));

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    fn render_report(&self, location: SourceSpan, snippet: &SourceSnippet) -> Option<String> {
        let name = snippet.name.clone();
        let span = snippet.char_range(location);
        let (report_kind, color) = self.kind.report_style();

        let title = match &self.code {
            Some(code) => format!("[{}] {}", code, self.title),
            None => self.title.clone(),
        };
        let message = self.problem.as_deref().unwrap_or(&self.title);

        let mut report = Report::build(report_kind, name.clone(), span.start)
            .with_config(Config::default().with_color(false))
            .with_message(title)
            .with_label(
                Label::new((name.clone(), span))
                    .with_message(message)
                    .with_color(color),
            );

        for detail in &self.details {
            let Some(detail_location) = detail.location else {
                continue;
            };
            report = report.with_label(
                Label::new((name.clone(), snippet.char_range(detail_location)))
                    .with_message(&detail.content)
                    .with_color(detail.kind.color()),
            );
        }

        let mut buffer = Vec::new();
        report
            .finish()
            .write((name, Source::from(snippet.content.as_str())), &mut buffer)
            .ok()?;
        String::from_utf8(buffer).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DiagnosticMessageBuilder;

    #[test]
    fn test_plain_text_rendering() {
        let msg = DiagnosticMessageBuilder::error("Invalid tagName Option")
            .with_code("M-1-1")
            .problem("Expected tagName to be 'code' or 'pre', got: div")
            .add_hint("Use `tagName: pre` to attach attributes to the enclosing block?")
            .build();

        insta::assert_snapshot!(msg.to_text(None), @r"
        Error [M-1-1]: Invalid tagName Option
        Expected tagName to be 'code' or 'pre', got: div
        ? Use `tagName: pre` to attach attributes to the enclosing block?
        ");
    }

    #[test]
    fn test_detail_bullets() {
        let msg = DiagnosticMessageBuilder::warning("Heads up")
            .add_detail("first")
            .add_info("second")
            .add_note("third")
            .build();
        assert_eq!(
            msg.to_text(None),
            "Warning: Heads up\n✖ first\nℹ second\n• third\n"
        );
    }

    #[test]
    fn test_location_without_snippet_is_plain() {
        let msg = DiagnosticMessageBuilder::error("Invalid Code Meta")
            .with_location(SourceSpan::new(0, 1))
            .build();
        assert_eq!(msg.to_text(None), "Error: Invalid Code Meta\n");
    }

    #[test]
    fn test_report_shows_snippet() {
        let msg = DiagnosticMessageBuilder::error("Invalid Code Meta")
            .with_code("M-2-1")
            .problem("Unexpected token")
            .with_location(SourceSpan::point(4))
            .add_note("In code meta `a b=c`")
            .add_hint("Quote attribute values or wrap them in braces?")
            .build();
        let snippet = SourceSnippet::new("code meta", "a b=c");
        let text = msg.to_text(Some(&snippet));

        assert!(text.contains("[M-2-1] Invalid Code Meta"));
        assert!(text.contains("a b=c"));
        assert!(text.contains("Unexpected token"));
        assert!(text.contains("• In code meta `a b=c`\n"));
        assert!(text.ends_with("? Quote attribute values or wrap them in braces?\n"));
    }

    #[test]
    fn test_json_shape() {
        let msg = DiagnosticMessageBuilder::error("Invalid Code Meta")
            .with_code("M-2-1")
            .problem("Unexpected token")
            .with_location(SourceSpan::new(2, 3))
            .build();
        let json = msg.to_json();
        assert_eq!(json["kind"], "error");
        assert_eq!(json["code"], "M-2-1");
        assert_eq!(json["problem"], "Unexpected token");
        assert_eq!(json["location"]["start"], 2);
        assert!(json.get("details").is_none());

        let back: DiagnosticMessage = serde_json::from_value(json).unwrap();
        assert_eq!(back, msg);
    }
}
