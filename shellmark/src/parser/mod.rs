mod line;
pub mod token;
pub mod warning;

pub use token::{Token, TokenClass};
pub use warning::Warning;

use crate::vocabulary::Vocabulary;

/// Tokenizer entry point for the contents of shell code blocks.
pub struct Lexer<'v> {
    vocabulary: &'v Vocabulary,
    file_id: usize,
}

impl<'v> Lexer<'v> {
    pub fn new(vocabulary: &'v Vocabulary, file_id: usize) -> Self {
        Lexer {
            vocabulary,
            file_id,
        }
    }

    /// Tokenize a single line. `offset` is the line's byte position in the
    /// document and only affects warning spans.
    pub fn tokenize_line<'a>(
        &self,
        line: &'a str,
        offset: usize,
        warnings: &mut Vec<Warning>,
    ) -> Vec<Token<'a>> {
        line::tokenize(line, offset, self.file_id, self.vocabulary, warnings)
    }

    /// Tokenize block content, one token list per `\n`-separated line.
    pub fn tokenize_block<'a>(
        &self,
        content: &'a str,
        offset: usize,
        warnings: &mut Vec<Warning>,
    ) -> Vec<Vec<Token<'a>>> {
        let mut line_start = offset;
        content
            .split('\n')
            .map(|line| {
                let tokens = self.tokenize_line(line, line_start, warnings);
                line_start += line.len() + 1;
                tokens
            })
            .collect()
    }
}
