use std::ops::Range;

use crate::markup;

/// Closing marker shared by every fence.
pub const CLOSE_FENCE: &str = "</code></pre>";

/// One fenced code block found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Byte span of the whole fence, markers included.
    pub span: Range<usize>,
    /// Byte span of the content between the markers.
    pub content: Range<usize>,
    /// Whether the content already carries markup.
    pub marked: bool,
}

impl CodeBlock {
    pub fn content<'a>(&self, source: &'a str) -> &'a str {
        &source[self.content.clone()]
    }
}

/// Finds `<pre><code class="LANG">…</code></pre>` fences for one language.
#[derive(Debug, Clone)]
pub struct BlockScanner {
    open: String,
}

impl BlockScanner {
    pub fn new(language: &str) -> Self {
        BlockScanner {
            open: format!("<pre><code class=\"{}\">", language),
        }
    }

    pub fn open_fence(&self) -> &str {
        &self.open
    }

    /// All fences in document order. Each content runs to the first closing
    /// marker after its opening marker; an opening marker with no closing
    /// marker ends the scan.
    pub fn scan(&self, source: &str) -> Vec<CodeBlock> {
        let mut blocks = Vec::new();
        let mut cursor = 0;

        while let Some(found) = source[cursor..].find(&self.open) {
            let start = cursor + found;
            let content_start = start + self.open.len();
            let Some(len) = source[content_start..].find(CLOSE_FENCE) else {
                break;
            };
            let content_end = content_start + len;
            let end = content_end + CLOSE_FENCE.len();

            blocks.push(CodeBlock {
                span: start..end,
                content: content_start..content_end,
                marked: markup::contains_markup(&source[content_start..content_end]),
            });
            cursor = end;
        }

        blocks
    }
}

impl Default for BlockScanner {
    fn default() -> Self {
        BlockScanner::new("sh")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_blocks_in_order() {
        let source = "<pre><code class=\"sh\">ls</code></pre>\n<p>x</p>\n<pre><code class=\"sh\">pwd\ncd /</code></pre>";
        let blocks = BlockScanner::default().scan(source);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].content(source), "ls");
        assert_eq!(blocks[1].content(source), "pwd\ncd /");
        assert_eq!(&source[blocks[0].span.clone()], "<pre><code class=\"sh\">ls</code></pre>");
    }

    #[test]
    fn other_languages_are_ignored() {
        let source = "<pre><code class=\"python\">ls</code></pre>";
        assert!(BlockScanner::default().scan(source).is_empty());
    }

    #[test]
    fn unclosed_fence_is_not_a_block() {
        let source = "<pre><code class=\"sh\">ls -la";
        assert!(BlockScanner::default().scan(source).is_empty());
    }

    #[test]
    fn marked_blocks_are_flagged() {
        let source = "<pre><code class=\"sh\"><span class=\"cmd\">ls</span></code></pre>";
        let blocks = BlockScanner::default().scan(source);
        assert!(blocks[0].marked);
    }

    #[test]
    fn empty_block() {
        let source = "<pre><code class=\"sh\"></code></pre>";
        let blocks = BlockScanner::default().scan(source);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content(source), "");
        assert!(!blocks[0].marked);
    }
}
