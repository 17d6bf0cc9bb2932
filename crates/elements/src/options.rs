// ABOUTME: Configuration for turning HTML text into a Document, including ParseMode and ParseOptions.
// ABOUTME: ParseOptionsBuilder provides a fluent API for constructing ParseOptions.

use std::fmt;

/// Whether input is a whole document or a body fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    #[default]
    Document,
    Fragment,
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParseMode::Document => "document",
            ParseMode::Fragment => "fragment",
        };
        write!(f, "{}", s)
    }
}

/// Options applied while copying the parser's tree into a Document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub mode: ParseMode,
    pub keep_comments: bool,
    /// Skip text nodes made only of whitespace.
    pub drop_whitespace_text: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            mode: ParseMode::Document,
            keep_comments: true,
            drop_whitespace_text: false,
        }
    }
}

impl ParseOptions {
    /// Create a builder starting from the default options.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for ParseOptions.
#[derive(Debug, Clone, Default)]
pub struct ParseOptionsBuilder {
    opts: ParseOptions,
}

impl ParseOptionsBuilder {
    pub fn new() -> Self {
        Self {
            opts: ParseOptions::default(),
        }
    }

    /// Set the parse mode.
    pub fn mode(mut self, mode: ParseMode) -> Self {
        self.opts.mode = mode;
        self
    }

    /// Shorthand for `mode(ParseMode::Fragment)`.
    pub fn fragment(self) -> Self {
        self.mode(ParseMode::Fragment)
    }

    /// Keep or drop comment nodes.
    pub fn keep_comments(mut self, keep: bool) -> Self {
        self.opts.keep_comments = keep;
        self
    }

    /// Keep or drop whitespace-only text nodes.
    pub fn drop_whitespace_text(mut self, drop: bool) -> Self {
        self.opts.drop_whitespace_text = drop;
        self
    }

    pub fn build(self) -> ParseOptions {
        self.opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ParseOptions::default();
        assert_eq!(opts.mode, ParseMode::Document);
        assert!(opts.keep_comments);
        assert!(!opts.drop_whitespace_text);
        assert_eq!(ParseOptions::builder().build(), opts);
    }

    #[test]
    fn test_builder_overrides() {
        let opts = ParseOptions::builder()
            .fragment()
            .keep_comments(false)
            .drop_whitespace_text(true)
            .build();
        assert_eq!(opts.mode, ParseMode::Fragment);
        assert!(!opts.keep_comments);
        assert!(opts.drop_whitespace_text);
    }

    #[test]
    fn test_parse_mode_display() {
        assert_eq!(ParseMode::Fragment.to_string(), "fragment");
        assert_eq!(ParseMode::Document.to_string(), "document");
    }
}
