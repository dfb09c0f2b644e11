use std::ops::Range;

use codespan_reporting::diagnostic::{Diagnostic, Label, Severity};

/// A non-fatal problem found while tokenizing a shell block.
///
/// Warnings never change the highlighted output; they point at input the
/// tokenizer had to treat as plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
    /// Byte span in the whole document, not in the block.
    pub span: Range<usize>,
    pub file_id: usize,
    pub notes: Vec<String>,
}

impl Warning {
    pub fn new(message: impl Into<String>, span: Range<usize>, file_id: usize) -> Self {
        Warning {
            message: message.into(),
            span,
            file_id,
            notes: Vec::new(),
        }
    }

    /// A quote character with no closing partner on the same line.
    pub fn unterminated_string(quote: char, offset: usize, file_id: usize) -> Self {
        let kind = if quote == '\'' { "single" } else { "double" };
        Warning::new(
            format!("unterminated {}-quoted string", kind),
            offset..offset + quote.len_utf8(),
            file_id,
        )
        .with_note("the quote was left unhighlighted")
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Convert to a codespan-reporting Diagnostic for display.
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        Diagnostic::new(Severity::Warning)
            .with_message(&self.message)
            .with_labels(vec![Label::primary(self.file_id, self.span.clone())])
            .with_notes(self.notes.clone())
    }
}
