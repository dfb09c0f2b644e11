use std::fmt;
use std::ops::Range;

use tracing::{debug, trace};

use crate::block::{BlockScanner, CodeBlock};
use crate::markup;
use crate::parser::{Lexer, Warning};

/// An HTML document together with the shell blocks found in it.
///
/// The document itself is never edited; `annotate` and `unmark` build a new
/// text that the caller writes back as a whole.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    source: &'a str,
    blocks: Vec<CodeBlock>,
}

impl<'a> Document<'a> {
    pub fn scan(source: &'a str, scanner: &BlockScanner) -> Self {
        let blocks = scanner.scan(source);
        debug!(blocks = blocks.len(), "scanned document");
        Document { source, blocks }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn blocks(&self) -> &[CodeBlock] {
        &self.blocks
    }

    /// Highlight every block that carries no markup yet.
    pub fn annotate(&self, lexer: &Lexer<'_>, preview_len: usize) -> (String, AnnotateReport) {
        let mut report = AnnotateReport {
            found: self.blocks.len(),
            ..AnnotateReport::default()
        };

        let text = self.rewrite(|ordinal, block, content| {
            if block.marked {
                debug!(ordinal, "skipping already highlighted block");
                report.skipped.push(ordinal);
                return None;
            }
            let lines = lexer.tokenize_block(content, block.content.start, &mut report.warnings);
            trace!(ordinal, lines = lines.len(), "tokenized block");
            report.processed.push(ProcessedBlock {
                ordinal,
                span: block.span.clone(),
                preview: content.chars().take(preview_len).collect(),
            });
            Some(markup::render_lines(&lines))
        });

        (text, report)
    }

    /// Strip all markup from every block.
    pub fn unmark(&self) -> (String, UnmarkReport) {
        let mut report = UnmarkReport {
            found: self.blocks.len(),
            ..UnmarkReport::default()
        };

        let text = self.rewrite(|ordinal, _block, content| {
            let (stripped, removed) = markup::strip(content);
            if removed == 0 {
                return None;
            }
            debug!(ordinal, removed, "stripped block");
            report.cleaned += 1;
            report.tags_removed += removed;
            Some(stripped)
        });

        (text, report)
    }

    /// Copy the source, replacing the content of each block for which `f`
    /// returns a new one. `f` receives the 1-based block ordinal.
    fn rewrite(&self, mut f: impl FnMut(usize, &CodeBlock, &'a str) -> Option<String>) -> String {
        let mut out = String::with_capacity(self.source.len());
        let mut last = 0;

        for (index, block) in self.blocks.iter().enumerate() {
            let content = block.content(self.source);
            out.push_str(&self.source[last..block.content.start]);
            match f(index + 1, block, content) {
                Some(replacement) => out.push_str(&replacement),
                None => out.push_str(content),
            }
            last = block.content.end;
        }

        out.push_str(&self.source[last..]);
        out
    }
}

/// A block that was highlighted during `annotate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedBlock {
    /// 1-based position among all blocks of the document.
    pub ordinal: usize,
    /// Byte span of the fence in the original document.
    pub span: Range<usize>,
    /// Leading characters of the original content.
    pub preview: String,
}

impl fmt::Display for ProcessedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "processed block {}: {}...", self.ordinal, self.preview)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotateReport {
    pub found: usize,
    pub processed: Vec<ProcessedBlock>,
    /// Ordinals of blocks left alone because they were already highlighted.
    pub skipped: Vec<usize>,
    pub warnings: Vec<Warning>,
}

impl AnnotateReport {
    pub fn changed(&self) -> bool {
        !self.processed.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnmarkReport {
    pub found: usize,
    /// Blocks that had at least one tag removed.
    pub cleaned: usize,
    pub tags_removed: usize,
}
