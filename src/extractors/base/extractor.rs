// BaseExtractor - per-file state shared by the language lowering passes
//
// Holds the source text and path of one compilation unit and converts
// tree-sitter nodes into positions, text and typed errors.

use std::path::{Path, PathBuf};

use tree_sitter::{Node, Point};

use crate::ast::{Pos, Span};
use crate::error::ExtractError;

pub struct BaseExtractor<'a> {
    pub file_path: PathBuf,
    pub content: &'a str,
}

impl<'a> BaseExtractor<'a> {
    pub fn new(file_path: PathBuf, content: &'a str) -> Self {
        Self { file_path, content }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> String {
        let start_byte = node.start_byte();
        let end_byte = node.end_byte();

        // Use byte slice but handle UTF-8 boundaries properly
        let content_bytes = self.content.as_bytes();
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// tree-sitter rows and columns are 0-based; positions are 1-based
    pub fn pos(point: Point) -> Pos {
        Pos::new(point.row as u32 + 1, point.column as u32 + 1)
    }

    pub fn span(node: &Node) -> Span {
        Span::new(
            Self::pos(node.start_position()),
            Self::pos(node.end_position()),
        )
    }

    /// Span from the start of `first` to the end of `last`
    pub fn span_between(first: &Node, last: &Node) -> Span {
        Span::new(
            Self::pos(first.start_position()),
            Self::pos(last.end_position()),
        )
    }

    /// Whether only whitespace precedes `node` on its first line
    pub fn starts_line(&self, node: &Node) -> bool {
        let start = node.start_byte().min(self.content.len());
        let line_start = self.content.as_bytes()[..start]
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        self.content.as_bytes()[line_start..start]
            .iter()
            .all(|b| b.is_ascii_whitespace())
    }

    pub fn unsupported(&self, node: &Node) -> ExtractError {
        ExtractError::UnsupportedConstruct {
            kind: node.kind().to_string(),
            file: self.file_path.clone(),
            pos: Self::pos(node.start_position()),
        }
    }

    pub fn missing(&self, node: &Node, field: &str) -> ExtractError {
        ExtractError::MissingChild {
            parent: node.kind().to_string(),
            field: field.to_string(),
            file: self.file_path.clone(),
            pos: Self::pos(node.start_position()),
        }
    }

    /// Required field child, or a `MissingChild` error naming the field
    pub fn required<'t>(&self, node: &Node<'t>, field: &str) -> Result<Node<'t>, ExtractError> {
        node.child_by_field_name(field)
            .ok_or_else(|| self.missing(node, field))
    }
}
