// Source positions for AST nodes
//
// Lines and columns are 1-based; columns count bytes. Line 0 marks a position
// the front end could not supply, and such endpoints are never serialized.

use std::fmt;

/// A single source location
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pos {
    pub line: u32,
    pub column: u32,
}

impl Pos {
    /// The invalid position
    pub const NONE: Pos = Pos { line: 0, column: 0 };

    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// A position is valid only when the front end supplied a line
    pub const fn is_valid(&self) -> bool {
        self.line > 0
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Start and end of a node; `end` is the position immediately after the node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const NONE: Span = Span {
        start: Pos::NONE,
        end: Pos::NONE,
    };

    pub const fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    /// Smallest span covering both `self` and `other`, ignoring invalid endpoints
    pub fn to(self, other: Span) -> Span {
        let start = if self.start.is_valid() {
            self.start
        } else {
            other.start
        };
        let end = if other.end.is_valid() {
            other.end
        } else {
            self.end
        };
        Span { start, end }
    }
}
