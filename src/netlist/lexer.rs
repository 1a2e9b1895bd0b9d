//! Line lexer for netlists.
//!
//! Netlists are line-oriented: every line is either blank, a comment, a
//! control directive, or a whitespace-separated component record.

/// Classification of a source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only
    Blank,
    /// Starts with '*'
    Comment,
    /// Starts with '.' (SPICE control card)
    Directive,
    /// Anything else; candidate component record
    Record,
}

/// A lexed source line.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceLine<'a> {
    /// The kind of line
    pub kind: LineKind,
    /// Whitespace-separated tokens (empty unless `kind` is `Record`)
    pub tokens: Vec<&'a str>,
    /// Line number (1-indexed)
    pub line: usize,
}

/// Lexer yielding one [`SourceLine`] per input line.
pub struct Lexer<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate(),
        }
    }

    fn classify(idx: usize, raw: &'a str) -> SourceLine<'a> {
        let text = raw.trim();
        let kind = if text.is_empty() {
            LineKind::Blank
        } else if text.starts_with('*') {
            LineKind::Comment
        } else if text.starts_with('.') {
            LineKind::Directive
        } else {
            LineKind::Record
        };

        let tokens = if kind == LineKind::Record {
            text.split_whitespace().collect()
        } else {
            Vec::new()
        };

        SourceLine {
            kind,
            tokens,
            line: idx + 1,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = SourceLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines
            .next()
            .map(|(idx, raw)| Self::classify(idx, raw))
    }
}
