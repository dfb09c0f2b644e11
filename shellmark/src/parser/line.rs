use crate::parser::token::{Token, TokenClass};
use crate::parser::warning::Warning;
use crate::vocabulary::Vocabulary;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Split one line of shell text into plain and classified tokens.
///
/// The line is scanned once, left to right, over the original text. At each
/// position the first rule that matches wins: comment, string, number,
/// command, variable. Concatenating the token texts gives back `line`.
pub fn tokenize<'a>(
    line: &'a str,
    offset: usize,
    file_id: usize,
    vocabulary: &Vocabulary,
    warnings: &mut Vec<Warning>,
) -> Vec<Token<'a>> {
    let mut state = LineState {
        line,
        offset,
        file_id,
        vocabulary,
        pos: 0,
        plain_start: 0,
        reference_end: None,
        tokens: Vec::new(),
    };
    state.scan(warnings);
    state.tokens
}

// ---------------------------------------------------------------------------
// Scan state
// ---------------------------------------------------------------------------

struct LineState<'a, 'v> {
    line: &'a str,
    /// Byte position of the line in the document, for warning spans.
    offset: usize,
    file_id: usize,
    vocabulary: &'v Vocabulary,
    pos: usize,
    /// Start of the pending run of plain text.
    plain_start: usize,
    /// End of the most recent HTML character reference.
    reference_end: Option<usize>,
    tokens: Vec<Token<'a>>,
}

impl<'a> LineState<'a, '_> {
    fn scan(&mut self, warnings: &mut Vec<Warning>) {
        let line = self.line;
        while self.pos < line.len() {
            let rest = &line[self.pos..];

            if let Some(len) = char_reference_len(rest) {
                self.pos += len;
                self.reference_end = Some(self.pos);
                continue;
            }

            let matched = self
                .comment(rest)
                .or_else(|| self.string(rest, warnings))
                .or_else(|| self.number(rest))
                .or_else(|| self.command(rest))
                .or_else(|| self.variable(rest));

            match matched {
                Some((class, len)) => {
                    self.flush_plain();
                    let span = self.pos..self.pos + len;
                    self.tokens.push(Token::classified(class, self.line, span));
                    self.pos += len;
                    self.plain_start = self.pos;
                }
                None => {
                    // Advance over one whole char; only ASCII is ever matched.
                    self.pos += rest.chars().next().map_or(1, char::len_utf8);
                }
            }
        }
        self.flush_plain();
    }

    fn flush_plain(&mut self) {
        if self.plain_start < self.pos {
            let span = self.plain_start..self.pos;
            self.tokens.push(Token::plain(self.line, span));
        }
        self.plain_start = self.pos;
    }

    fn prev_char(&self) -> Option<char> {
        self.line[..self.pos].chars().next_back()
    }

    /// `#` up to end of line, unless escaped with a backslash.
    fn comment(&self, rest: &str) -> Option<(TokenClass, usize)> {
        if rest.starts_with('#') && self.prev_char() != Some('\\') {
            Some((TokenClass::Comment, rest.len()))
        } else {
            None
        }
    }

    /// A quote up to the next identical quote on the line, quotes included.
    fn string(&self, rest: &str, warnings: &mut Vec<Warning>) -> Option<(TokenClass, usize)> {
        let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
        match rest[1..].find(quote) {
            Some(close) => Some((TokenClass::String, close + 2)),
            None => {
                warnings.push(Warning::unterminated_string(
                    quote,
                    self.offset + self.pos,
                    self.file_id,
                ));
                None
            }
        }
    }

    /// A run of digits with no word character on either side.
    fn number(&self, rest: &str) -> Option<(TokenClass, usize)> {
        if self.prev_char().is_some_and(is_word_char) {
            return None;
        }
        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if len == 0 || rest[len..].chars().next().is_some_and(is_word_char) {
            return None;
        }
        Some((TokenClass::Number, len))
    }

    fn command(&self, rest: &str) -> Option<(TokenClass, usize)> {
        if !self.at_command_position() {
            return None;
        }
        let name = self.vocabulary.match_prefix(rest)?;
        // `.`, `[` and `]` are common arguments; they only count as commands
        // where a statement starts.
        if !name.starts_with(is_word_char) && !self.at_statement_start() {
            return None;
        }
        Some((TokenClass::Command, name.len()))
    }

    /// Line start, whitespace, or one of `|`, `;`, `&&`, `||` before `pos`.
    fn at_command_position(&self) -> bool {
        let before = &self.line[..self.pos];
        if before.is_empty() || before.ends_with("&&") || before.ends_with("&amp;&amp;") {
            return true;
        }
        // The `;` closing `&gt;` and friends is not a separator.
        if self.reference_end == Some(self.pos) {
            return false;
        }
        before.ends_with(|c: char| c.is_whitespace() || c == '|' || c == ';')
    }

    /// Line start or a control operator before `pos`, ignoring whitespace.
    fn at_statement_start(&self) -> bool {
        let before = self.line[..self.pos].trim_end();
        if before.is_empty() || before.ends_with("&&") || before.ends_with("&amp;&amp;") {
            return true;
        }
        if self.reference_end == Some(before.len()) {
            return false;
        }
        before.ends_with(['|', ';'])
    }

    /// `$NAME`, `${NAME}`, or an unclosed `${NAME`.
    fn variable(&self, rest: &str) -> Option<(TokenClass, usize)> {
        let after = rest.strip_prefix('$')?;
        let (braced, body) = match after.strip_prefix('{') {
            Some(body) => (true, body),
            None => (false, after),
        };
        let name_len: usize = body
            .chars()
            .take_while(|c| is_word_char(*c))
            .map(char::len_utf8)
            .sum();
        if name_len == 0 {
            return None;
        }
        let mut len = 1 + usize::from(braced) + name_len;
        if braced && body[name_len..].starts_with('}') {
            len += 1;
        }
        Some((TokenClass::Variable, len))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Length of an HTML character reference at the start of `text`, such as
/// `&amp;`, `&#39;` or `&#x27;`.
fn char_reference_len(text: &str) -> Option<usize> {
    const MAX_NAME: usize = 32;

    let body = text.strip_prefix('&')?;
    let name_len = if let Some(numeric) = body.strip_prefix('#') {
        let (marker, digits) = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => (2, hex.bytes().take_while(u8::is_ascii_hexdigit).count()),
            None => (1, numeric.bytes().take_while(u8::is_ascii_digit).count()),
        };
        if digits == 0 {
            return None;
        }
        marker + digits
    } else {
        body.bytes().take_while(u8::is_ascii_alphanumeric).count()
    };

    if name_len == 0 || name_len > MAX_NAME || !body[name_len..].starts_with(';') {
        return None;
    }
    Some(1 + name_len + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_references() {
        assert_eq!(char_reference_len("&amp;&amp;"), Some(5));
        assert_eq!(char_reference_len("&#39;s"), Some(5));
        assert_eq!(char_reference_len("&#x27;"), Some(6));
        assert_eq!(char_reference_len("&#;"), None);
        assert_eq!(char_reference_len("&#x;"), None);
        assert_eq!(char_reference_len("& echo"), None);
        assert_eq!(char_reference_len("&&"), None);
    }

    #[test]
    fn punctuation_commands_only_start_statements() {
        let vocabulary = Vocabulary::builtin();
        let classes = |line: &str| -> Vec<String> {
            tokenize(line, 0, 0, &vocabulary, &mut Vec::new())
                .iter()
                .filter(|t| !t.is_plain())
                .map(|t| t.text.to_string())
                .collect()
        };
        assert_eq!(classes("git add ."), vec!["git"]);
        assert_eq!(classes(". ./env.sh"), vec!["."]);
        assert_eq!(classes("cd /srv &amp;&amp; . venv/bin/activate"), vec!["cd", "."]);
        assert_eq!(classes("[ -f x ] || echo no"), vec!["[", "echo"]);
        assert_eq!(classes("echo &gt; ."), vec!["echo"]);
    }

    #[test]
    fn word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('_'));
        assert!(is_word_char('7'));
        assert!(!is_word_char('-'));
        assert!(!is_word_char('$'));
    }
}
