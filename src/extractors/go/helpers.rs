use tree_sitter::Node;

use crate::ast::{BasicLit, Block, Expr, ExprKind, LitKind, Span};
use crate::error::ExtractError;
use crate::extractors::base::BaseExtractor;

/// Helper methods for literals, lists and token lookups
impl super::GoExtractor<'_> {
    pub(super) fn literal_kind(kind: &str) -> Option<LitKind> {
        match kind {
            "int_literal" => Some(LitKind::Int),
            "float_literal" => Some(LitKind::Float),
            "imaginary_literal" => Some(LitKind::Imag),
            "rune_literal" => Some(LitKind::Char),
            "interpreted_string_literal" | "raw_string_literal" => Some(LitKind::String),
            _ => None,
        }
    }

    pub(super) fn basic_lit(&self, node: &Node) -> Result<BasicLit, ExtractError> {
        let kind = Self::literal_kind(node.kind()).ok_or_else(|| self.base.unsupported(node))?;
        Ok(BasicLit {
            kind,
            value: self.base.get_node_text(node),
            span: BaseExtractor::span(node),
        })
    }

    /// Lower every expression in an `expression_list` (or a single expression)
    pub(super) fn extract_expr_list(&mut self, node: Node) -> Result<Vec<Expr>, ExtractError> {
        if node.kind() != "expression_list" {
            return Ok(vec![self.extract_expr(node)?]);
        }
        self.base
            .named_children(&node)
            .into_iter()
            .map(|child| self.extract_expr(child))
            .collect()
    }

    pub(super) fn opt_expr_list(&mut self, node: Option<Node>) -> Result<Vec<Expr>, ExtractError> {
        match node {
            Some(node) => self.extract_expr_list(node),
            None => Ok(Vec::new()),
        }
    }

    /// Text of the anonymous operator token stored under `operator`
    pub(super) fn operator_text(&self, node: &Node) -> Result<String, ExtractError> {
        let op = self.base.required(node, "operator")?;
        Ok(self.base.get_node_text(&op))
    }

    /// Span between the first `open` and the last `close` token of `node`
    pub(super) fn delimited_span(&self, node: &Node, open: &str, close: &str) -> Span {
        match (
            self.base.find_child_by_type(node, open),
            self.base.find_last_child_by_type(node, close),
        ) {
            (Some(open), Some(close)) => BaseExtractor::span_between(&open, &close),
            _ => BaseExtractor::span(node),
        }
    }

    /// Wrap an identifier-like node as an expression
    pub(super) fn ident_expr(&mut self, node: &Node) -> Expr {
        let ident = self.ident(node);
        self.make_expr(ident.span, ExprKind::Ident(ident))
    }

    /// A braced block
    pub(super) fn extract_block(&mut self, node: Node) -> Result<Block, ExtractError> {
        if node.kind() != "block" {
            return Err(self.base.unsupported(&node));
        }
        let children = self.base.named_children(&node);
        let stmts = self.extract_stmt_sequence(&children)?;
        Ok(Block {
            stmts,
            span: BaseExtractor::span(&node),
        })
    }
}
