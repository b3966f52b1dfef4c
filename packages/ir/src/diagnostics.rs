//! User-facing diagnostics
//!
//! Diagnostics are recoverable findings reported to the template author;
//! compilation continues with best-effort output after one is raised. They
//! are plain data so the surrounding driver can format, serialize or map
//! them back to source as it sees fit.

use crate::ast::Span;
use serde::{Deserialize, Serialize};

/// Stable diagnostic categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// Explicit type-argument list supplied but incomplete
    MissingTypeArgument,
    /// No explicit arguments and the supplied values cannot cover every
    /// declared type parameter
    GenericInferenceUnderspecified,
    /// Embedded procedural code used as an attribute value
    CodeBlockInAttributeValue,
}

impl DiagnosticKind {
    /// Stable code for tooling
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::MissingTypeArgument => "QUILL001",
            DiagnosticKind::GenericInferenceUnderspecified => "QUILL002",
            DiagnosticKind::CodeBlockInAttributeValue => "QUILL003",
        }
    }
}

/// A single diagnostic with location and the names needed for messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub span: Option<Span>,
    /// Tag name of the offending component usage, when there is one
    pub component: Option<String>,
    /// Offending parameter names, in declared order
    pub names: Vec<String>,
    /// Extra content for the message (e.g. the rejected code block)
    pub detail: Option<String>,
}

impl Diagnostic {
    pub fn message(&self) -> String {
        let component = self.component.as_deref().unwrap_or("(unknown)");
        match self.kind {
            DiagnosticKind::MissingTypeArgument => format!(
                "The component '{}' is missing required type arguments: {}. \
                 Specify each type argument explicitly.",
                component,
                self.names.join(", ")
            ),
            DiagnosticKind::GenericInferenceUnderspecified => format!(
                "The type of component '{}' cannot be inferred based on the values provided. \
                 Consider specifying the type arguments directly: {}.",
                component,
                self.names.join(", ")
            ),
            DiagnosticKind::CodeBlockInAttributeValue => format!(
                "Code blocks are not supported as attribute values: '{}'. \
                 Use an expression instead.",
                self.detail.as_deref().unwrap_or("")
            ),
        }
    }
}

/// Explicit type-argument list supplied but incomplete; `missing` names every
/// absent parameter
pub fn missing_type_argument(
    span: Option<Span>,
    component: &str,
    missing: &[String],
) -> Diagnostic {
    Diagnostic {
        kind: DiagnosticKind::MissingTypeArgument,
        span,
        component: Some(component.to_string()),
        names: missing.to_vec(),
        detail: None,
    }
}

/// Inference could not cover every type parameter; `unbound` names the
/// parameters that remain unresolved
pub fn inference_underspecified(
    span: Option<Span>,
    component: &str,
    unbound: &[String],
) -> Diagnostic {
    Diagnostic {
        kind: DiagnosticKind::GenericInferenceUnderspecified,
        span,
        component: Some(component.to_string()),
        names: unbound.to_vec(),
        detail: None,
    }
}

/// A code block was used as an attribute value; emission for that attribute
/// is skipped
pub fn code_block_in_attribute(span: Option<Span>, content: &str) -> Diagnostic {
    Diagnostic {
        kind: DiagnosticKind::CodeBlockInAttributeValue,
        span,
        component: None,
        names: Vec::new(),
        detail: Some(content.to_string()),
    }
}

/// Pretty-print diagnostics with source context using ariadne
pub fn format_diagnostics(source: &str, filename: &str, diagnostics: &[Diagnostic]) -> String {
    use ariadne::{Color, Label, Report, ReportKind, Source};

    let mut output = Vec::new();

    for diagnostic in diagnostics {
        let span = diagnostic.span.unwrap_or(Span {
            start: source.len().saturating_sub(1),
            end: source.len(),
        });

        let report = Report::build(ReportKind::Error, filename, span.start)
            .with_code(diagnostic.kind.code())
            .with_message(diagnostic.message())
            .with_label(
                Label::new((filename, span.start..span.end))
                    .with_color(Color::Red)
                    .with_message(diagnostic.message()),
            )
            .finish();

        report
            .write((filename, Source::from(source)), &mut output)
            .unwrap();
    }

    String::from_utf8(output).unwrap_or_else(|_| "Error formatting failed".to_string())
}
