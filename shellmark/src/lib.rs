pub mod block;
pub mod config;
pub mod document;
pub mod markup;
pub mod parser;
pub mod vocabulary;

pub use config::Config;
pub use document::{AnnotateReport, Document, ProcessedBlock, UnmarkReport};
pub use parser::{Token, TokenClass, Warning};
pub use vocabulary::Vocabulary;

use crate::block::BlockScanner;
use crate::parser::Lexer;

/// Highlights shell code blocks in HTML documents.
#[derive(Debug, Clone)]
pub struct Highlighter {
    scanner: BlockScanner,
    vocabulary: Vocabulary,
    preview_len: usize,
}

impl Highlighter {
    pub fn new(config: &Config) -> Self {
        Highlighter {
            scanner: BlockScanner::new(&config.language),
            vocabulary: config.vocabulary(),
            preview_len: config.preview_len,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Highlight the raw content of a single block.
    pub fn highlight(&self, code: &str) -> String {
        let lexer = Lexer::new(&self.vocabulary, 0);
        let mut warnings = Vec::new();
        markup::render_lines(&lexer.tokenize_block(code, 0, &mut warnings))
    }

    /// Highlight every unmarked shell block of `source`.
    /// `file_id` is attached to warnings for diagnostic rendering.
    pub fn annotate(&self, source: &str, file_id: usize) -> (String, AnnotateReport) {
        let lexer = Lexer::new(&self.vocabulary, file_id);
        Document::scan(source, &self.scanner).annotate(&lexer, self.preview_len)
    }

    /// Remove all markup from the shell blocks of `source`.
    pub fn unmark(&self, source: &str) -> (String, UnmarkReport) {
        Document::scan(source, &self.scanner).unmark()
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Highlighter::new(&Config::default())
    }
}
