use std::fmt;
use std::ops::Range;

/// The class a highlighted span belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Comment,
    String,
    Number,
    Command,
    Variable,
}

impl TokenClass {
    pub const ALL: [TokenClass; 5] = [
        TokenClass::Comment,
        TokenClass::String,
        TokenClass::Number,
        TokenClass::Command,
        TokenClass::Variable,
    ];

    /// The value of the `class` attribute on the wrapping span.
    pub fn css_class(self) -> &'static str {
        match self {
            TokenClass::Comment => "com",
            TokenClass::String => "str",
            TokenClass::Number => "num",
            TokenClass::Command => "cmd",
            TokenClass::Variable => "var",
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenClass::Comment => "comment",
            TokenClass::String => "string",
            TokenClass::Number => "number",
            TokenClass::Command => "command",
            TokenClass::Variable => "variable",
        };
        f.write_str(name)
    }
}

/// A slice of one line. `class` is `None` for plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub class: Option<TokenClass>,
    pub text: &'a str,
    /// Byte span within the line.
    pub span: Range<usize>,
}

impl<'a> Token<'a> {
    pub fn plain(line: &'a str, span: Range<usize>) -> Self {
        Token {
            class: None,
            text: &line[span.clone()],
            span,
        }
    }

    pub fn classified(class: TokenClass, line: &'a str, span: Range<usize>) -> Self {
        Token {
            class: Some(class),
            text: &line[span.clone()],
            span,
        }
    }

    pub fn is_plain(&self) -> bool {
        self.class.is_none()
    }
}
