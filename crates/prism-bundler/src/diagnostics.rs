//! Classification of Rolldown failures into build and render errors.
//!
//! Rolldown reports every failure of a `generate()` call as one batch, so the
//! phase a failure belongs to is recovered from the diagnostic kinds in it.
//! Rolldown's error types are matched on their debug rendering, which keeps
//! this module independent of upstream type changes.
//!
//! Parse diagnostics embed the whole module text in a `source` field. That
//! text is never reported; it is only used to turn label offsets into
//! `line:column` positions.

use std::fmt;

use crate::Error;

/// Kind of a Rolldown diagnostic, as far as emission cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    UnresolvedEntry,
    UnresolvedImport,
    ParseError,
    MissingExport,
    Transform,
    InvalidOption,
    Other,
}

impl DiagnosticKind {
    /// Whether the failure happened while building the module graph.
    pub fn is_build_phase(self) -> bool {
        matches!(
            self,
            DiagnosticKind::UnresolvedEntry
                | DiagnosticKind::UnresolvedImport
                | DiagnosticKind::ParseError
                | DiagnosticKind::MissingExport
                | DiagnosticKind::Transform
        )
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DiagnosticKind::UnresolvedEntry => "UnresolvedEntry",
            DiagnosticKind::UnresolvedImport => "UnresolvedImport",
            DiagnosticKind::ParseError => "ParseError",
            DiagnosticKind::MissingExport => "MissingExport",
            DiagnosticKind::Transform => "Transform",
            DiagnosticKind::InvalidOption => "InvalidOption",
            DiagnosticKind::Other => "Other",
        })
    }
}

/// One diagnostic pulled out of a Rolldown error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDiagnostic {
    pub message: String,
    pub file: Option<String>,
    /// 1-based line and column of the first label.
    pub position: Option<(usize, usize)>,
    pub labels: Vec<String>,
}

impl fmt::Display for ExtractedDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        match (&self.file, self.position) {
            (Some(file), Some((line, column))) => write!(f, "\n  --> {file}:{line}:{column}")?,
            (Some(file), None) => write!(f, "\n  --> {file}")?,
            (None, Some((line, column))) => write!(f, "\n  --> {line}:{column}")?,
            (None, None) => {}
        }
        for label in &self.labels {
            write!(f, "\n  = {label}")?;
        }
        Ok(())
    }
}

/// Classify a debug-rendered Rolldown error.
pub fn classify(rendered: &str) -> DiagnosticKind {
    if rendered.contains("UnresolvedEntry") {
        DiagnosticKind::UnresolvedEntry
    } else if rendered.contains("UnresolvedImport") || rendered.contains("Could not resolve") {
        DiagnosticKind::UnresolvedImport
    } else if rendered.contains("MissingExport") {
        DiagnosticKind::MissingExport
    } else if rendered.contains("ParseError")
        || rendered.contains("Parse error")
        || rendered.contains("Unexpected token")
    {
        DiagnosticKind::ParseError
    } else if rendered.contains("Transform") {
        DiagnosticKind::Transform
    } else if rendered.contains("InvalidOption") {
        DiagnosticKind::InvalidOption
    } else {
        DiagnosticKind::Other
    }
}

/// Map a Rolldown failure to [`Error::Build`] or [`Error::Render`].
pub fn from_rolldown(error: &dyn fmt::Debug) -> Error {
    let rendered = format!("{error:?}");
    let kind = classify(&strip_sources(&rendered));
    tracing::debug!(%kind, "Rolldown reported a failure");

    let details: Vec<String> = extract(&rendered).iter().map(ToString::to_string).collect();
    let message = format!("{kind}: {}", details.join("\n"));
    if kind.is_build_phase() {
        Error::Build(message)
    } else {
        Error::Render(message)
    }
}

/// Pull message, file and position out of each diagnostic in a batch.
pub fn extract(rendered: &str) -> Vec<ExtractedDiagnostic> {
    let parts: Vec<&str> = rendered.split("BuildDiagnostic { inner:").skip(1).collect();
    if parts.is_empty() {
        vec![extract_single(rendered)]
    } else {
        parts.into_iter().map(extract_single).collect()
    }
}

fn extract_single(rendered: &str) -> ExtractedDiagnostic {
    let message = ["error_message", "message", "reason"]
        .iter()
        .find_map(|key| string_fields(rendered, key).into_iter().find(|m| !m.is_empty()))
        .unwrap_or_else(|| strip_sources(rendered).trim().to_string());

    let file = ["filename", "importer", "id"]
        .iter()
        .find_map(|key| string_fields(rendered, key).into_iter().next());

    let position = first_offset(rendered).and_then(|offset| {
        let source = string_fields(rendered, "source").into_iter().next()?;
        Some(line_column(&source, offset))
    });

    let labels = quoted_after(rendered, "label: Some(\"")
        .into_iter()
        .filter(|label| !label.is_empty())
        .collect();

    ExtractedDiagnostic {
        message,
        file,
        position,
        labels,
    }
}

/// Values of every `key: "..."` field, unescaped.
fn string_fields(rendered: &str, key: &str) -> Vec<String> {
    let pattern = format!("{key}: \"");
    let mut values = Vec::new();
    let mut rest = rendered;
    while let Some(pos) = rest.find(&pattern) {
        let after = &rest[pos + pattern.len()..];
        let (value, consumed) = read_debug_str(after);
        let standalone = rest[..pos]
            .chars()
            .next_back()
            .is_none_or(|c| !(c.is_alphanumeric() || c == '_'));
        if standalone {
            values.push(value);
        }
        rest = &after[consumed..];
    }
    values
}

/// Strings opened by `prefix`, which must end with a double quote.
fn quoted_after(rendered: &str, prefix: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut rest = rendered;
    while let Some(pos) = rest.find(prefix) {
        let after = &rest[pos + prefix.len()..];
        let (value, consumed) = read_debug_str(after);
        values.push(value);
        rest = &after[consumed..];
    }
    values
}

/// Read a debug-escaped string body up to its closing quote.
///
/// Returns the unescaped value and the number of bytes consumed, quote included.
fn read_debug_str(s: &str) -> (String, usize) {
    let mut value = String::new();
    let mut chars = s.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return (value, i + 1),
            '\\' => match chars.next() {
                Some((_, 'n')) => value.push('\n'),
                Some((_, 't')) => value.push('\t'),
                Some((_, 'r')) => value.push('\r'),
                Some((_, '0')) => value.push('\0'),
                Some((_, 'u')) => {
                    let mut hex = String::new();
                    for (_, h) in chars.by_ref() {
                        match h {
                            '{' => {}
                            '}' => break,
                            _ => hex.push(h),
                        }
                    }
                    if let Some(decoded) =
                        u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32)
                    {
                        value.push(decoded);
                    }
                }
                Some((_, other)) => value.push(other),
                None => break,
            },
            _ => value.push(c),
        }
    }
    (value, s.len())
}

/// The rendering with every `source: "..."` body elided.
fn strip_sources(rendered: &str) -> String {
    const PATTERN: &str = "source: \"";
    let mut out = String::with_capacity(rendered.len().min(1024));
    let mut rest = rendered;
    while let Some(pos) = rest.find(PATTERN) {
        out.push_str(&rest[..pos]);
        out.push_str("source: ..");
        let after = &rest[pos + PATTERN.len()..];
        let (_, consumed) = read_debug_str(after);
        rest = &after[consumed..];
    }
    out.push_str(rest);
    out
}

fn first_offset(rendered: &str) -> Option<usize> {
    const PATTERN: &str = "SourceOffset(";
    let stripped = strip_sources(rendered);
    let pos = stripped.find(PATTERN)? + PATTERN.len();
    let digits: String = stripped[pos..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// 1-based line and column of a byte offset.
fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let mut end = offset.min(source.len());
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    let before = &source[..end];
    let line = before.matches('\n').count() + 1;
    let column = match before.rfind('\n') {
        Some(newline) => before[newline + 1..].chars().count() + 1,
        None => before.chars().count() + 1,
    };
    (line, column)
}
