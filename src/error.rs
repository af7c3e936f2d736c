//! Error types for reading and writing scene documents

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Character range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Invalid document at line {line}, column {column}: {message}")]
    Syntax {
        span: Span,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),
}

impl DocumentError {
    /// Build a syntax error from a JSON decoding failure in `source`
    pub fn from_json(err: serde_json::Error, source: &str) -> Self {
        let line = err.line();
        let column = err.column();
        let offset = char_offset(source, line, column);
        let mut message = err.to_string();
        // serde_json appends its own position; ours is on the label
        if let Some(idx) = message.rfind(" at line ") {
            message.truncate(idx);
        }
        let end = (offset + 1).min(source.chars().count());
        DocumentError::Syntax {
            span: offset..end,
            line,
            column,
            message,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let DocumentError::Syntax { span, message, .. } = self else {
            return self.to_string();
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid scene document")
            .with_label(
                Label::new((filename, span.clone()))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// Convert serde_json's one-based line/column into a character offset
fn char_offset(source: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return source.chars().count();
    }
    let before: usize = source
        .split_inclusive('\n')
        .take(line - 1)
        .map(|l| l.chars().count())
        .sum();
    let within = source
        .split_inclusive('\n')
        .nth(line - 1)
        .map(|l| l.chars().count())
        .unwrap_or(0);
    before + column.saturating_sub(1).min(within)
}
