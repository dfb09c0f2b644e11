use std::sync::LazyLock;

use regex::Regex;

use crate::parser::{Token, TokenClass};

/// Prefix shared by every opening tag. Block content containing it counts as
/// already highlighted.
pub const OPEN_TAG_PREFIX: &str = "<span";
pub const CLOSE_TAG: &str = "</span>";

static ANY_OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<span[^>]*>").expect("open tag pattern is valid"));
static ANY_CLOSE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</span>").expect("close tag pattern is valid"));

pub fn open_tag(class: TokenClass) -> String {
    format!("<span class=\"{}\">", class.css_class())
}

pub fn contains_markup(content: &str) -> bool {
    content.contains(OPEN_TAG_PREFIX)
}

/// Append the tokens of one line to `out`, wrapping classified tokens.
pub fn render_line(tokens: &[Token<'_>], out: &mut String) {
    for token in tokens {
        match token.class {
            Some(class) => {
                out.push_str(&open_tag(class));
                out.push_str(token.text);
                out.push_str(CLOSE_TAG);
            }
            None => out.push_str(token.text),
        }
    }
}

/// Render tokenized lines, joined with `\n`.
pub fn render_lines(lines: &[Vec<Token<'_>>]) -> String {
    let mut out = String::new();
    for (i, tokens) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_line(tokens, &mut out);
    }
    out
}

/// Remove every opening and closing span tag, whatever its class.
/// Returns the stripped text and the number of tags removed.
pub fn strip(content: &str) -> (String, usize) {
    let opened = ANY_OPEN_TAG.find_iter(content).count();
    let without_open = ANY_OPEN_TAG.replace_all(content, "");
    let closed = ANY_CLOSE_TAG.find_iter(&without_open).count();
    let stripped = ANY_CLOSE_TAG.replace_all(&without_open, "").into_owned();
    (stripped, opened + closed)
}
