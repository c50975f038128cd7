use tree_sitter::Node;

use crate::ast::{BinaryOp, Expr, ExprKind, UnaryOp};
use crate::error::ExtractError;
use crate::extractors::base::BaseExtractor;

/// Expression lowering
///
/// Types are expressions in the Go syntax tree, so `extract_expr` accepts type
/// nodes as well and hands them to the type lowering.
impl super::GoExtractor<'_> {
    pub(super) fn extract_expr(&mut self, node: Node) -> Result<Expr, ExtractError> {
        let span = BaseExtractor::span(&node);

        let kind = match node.kind() {
            "identifier" | "field_identifier" | "type_identifier" | "package_identifier"
            | "label_name" | "blank_identifier" | "nil" | "true" | "false" | "iota" => {
                return Ok(self.ident_expr(&node));
            }
            "int_literal"
            | "float_literal"
            | "imaginary_literal"
            | "rune_literal"
            | "interpreted_string_literal"
            | "raw_string_literal" => ExprKind::BasicLit(self.basic_lit(&node)?),

            "parenthesized_expression" | "parenthesized_type" => {
                let inner = self.single_named_child(&node)?;
                ExprKind::Paren(Box::new(self.extract_expr(inner)?))
            }
            "unary_expression" => self.extract_unary(node)?,
            "binary_expression" => {
                let token = self.operator_text(&node)?;
                let op = BinaryOp::from_token(&token).ok_or_else(|| self.base.unsupported(&node))?;
                let x = self.base.required(&node, "left")?;
                let y = self.base.required(&node, "right")?;
                ExprKind::Binary {
                    op,
                    x: Box::new(self.extract_expr(x)?),
                    y: Box::new(self.extract_expr(y)?),
                }
            }
            "selector_expression" => {
                let operand = self.base.required(&node, "operand")?;
                let field = self.base.required(&node, "field")?;
                ExprKind::Selector {
                    x: Box::new(self.extract_expr(operand)?),
                    sel: self.ident(&field),
                }
            }
            "index_expression" => {
                let operand = self.base.required(&node, "operand")?;
                let index = self.base.required(&node, "index")?;
                ExprKind::Index {
                    x: Box::new(self.extract_expr(operand)?),
                    index: Box::new(self.extract_expr(index)?),
                }
            }
            "slice_expression" => self.extract_slice(node)?,
            "call_expression" => self.extract_call(node)?,
            "type_assertion_expression" => {
                let operand = self.base.required(&node, "operand")?;
                let ty = self.base.required(&node, "type")?;
                ExprKind::TypeAssert {
                    x: Box::new(self.extract_expr(operand)?),
                    ty: Some(Box::new(self.extract_expr(ty)?)),
                }
            }
            // T(x) is a call in the Go syntax tree
            "type_conversion_expression" => {
                let ty = self.base.required(&node, "type")?;
                let operand = self.base.required(&node, "operand")?;
                ExprKind::Call {
                    fun: Box::new(self.extract_expr(ty)?),
                    args: vec![self.extract_expr(operand)?],
                    ellipsis: false,
                }
            }
            "composite_literal" => {
                let ty = self.base.required(&node, "type")?;
                let body = self.base.required(&node, "body")?;
                ExprKind::CompositeLit {
                    ty: Some(Box::new(self.extract_expr(ty)?)),
                    elts: self.extract_literal_elements(body)?,
                    incomplete: false,
                }
            }
            // Elided type: `{1, 2}` inside an outer literal
            "literal_value" => ExprKind::CompositeLit {
                ty: None,
                elts: self.extract_literal_elements(node)?,
                incomplete: false,
            },
            "literal_element" => {
                let inner = self.single_named_child(&node)?;
                return self.extract_expr(inner);
            }
            "keyed_element" => {
                let (key, value) = self.key_value_nodes(&node)?;
                ExprKind::KeyValue {
                    key: Box::new(self.extract_expr(key)?),
                    value: Box::new(self.extract_expr(value)?),
                }
            }
            "func_literal" => {
                let ty = self.extract_func_signature(&node)?;
                let body = self.base.required(&node, "body")?;
                ExprKind::FuncLit {
                    ty,
                    body: self.extract_block(body)?,
                }
            }
            _ => return self.extract_type(node),
        };

        Ok(self.make_expr(span, kind))
    }

    fn extract_unary(&mut self, node: Node) -> Result<ExprKind, ExtractError> {
        let token = self.operator_text(&node)?;
        let operand = self.base.required(&node, "operand")?;
        let x = Box::new(self.extract_expr(operand)?);

        // `*x` is a dereference, which shares its node with pointer types
        if token == "*" {
            return Ok(ExprKind::Star(x));
        }
        let op = UnaryOp::from_token(&token).ok_or_else(|| self.base.unsupported(&node))?;
        Ok(ExprKind::Unary { op, x })
    }

    fn extract_slice(&mut self, node: Node) -> Result<ExprKind, ExtractError> {
        let operand = self.base.required(&node, "operand")?;
        let x = Box::new(self.extract_expr(operand)?);
        let low = self.opt_field_expr(&node, "start")?;
        let high = self.opt_field_expr(&node, "end")?;
        let max = self.opt_field_expr(&node, "capacity")?;
        let slice3 = self.base.count_children_of_type(&node, ":") == 2;
        Ok(ExprKind::Slice {
            x,
            low,
            high,
            max,
            slice3,
        })
    }

    fn extract_call(&mut self, node: Node) -> Result<ExprKind, ExtractError> {
        if let Some(type_args) = node.child_by_field_name("type_arguments") {
            return Err(self.base.unsupported(&type_args));
        }
        let function = self.base.required(&node, "function")?;
        let arguments = self.base.required(&node, "arguments")?;

        let fun = Box::new(self.extract_expr(function)?);
        let mut args = Vec::new();
        let mut ellipsis = false;
        for arg in self.base.named_children(&arguments) {
            if arg.kind() == "variadic_argument" {
                ellipsis = true;
                let inner = self.single_named_child(&arg)?;
                args.push(self.extract_expr(inner)?);
            } else {
                args.push(self.extract_expr(arg)?);
            }
        }
        Ok(ExprKind::Call {
            fun,
            args,
            ellipsis,
        })
    }

    fn extract_literal_elements(&mut self, body: Node) -> Result<Vec<Expr>, ExtractError> {
        self.base
            .named_children(&body)
            .into_iter()
            .map(|element| self.extract_expr(element))
            .collect()
    }

    fn key_value_nodes<'t>(&self, node: &Node<'t>) -> Result<(Node<'t>, Node<'t>), ExtractError> {
        if let (Some(key), Some(value)) = (
            node.child_by_field_name("key"),
            node.child_by_field_name("value"),
        ) {
            return Ok((key, value));
        }
        match self.base.named_children(node).as_slice() {
            [key, value] => Ok((*key, *value)),
            _ => Err(self.base.missing(node, "value")),
        }
    }

    pub(super) fn opt_field_expr(
        &mut self,
        node: &Node,
        field: &str,
    ) -> Result<Option<Box<Expr>>, ExtractError> {
        match node.child_by_field_name(field) {
            Some(child) => Ok(Some(Box::new(self.extract_expr(child)?))),
            None => Ok(None),
        }
    }

    /// The only named, non-comment child of a wrapper node
    pub(super) fn single_named_child<'t>(&self, node: &Node<'t>) -> Result<Node<'t>, ExtractError> {
        self.base
            .named_children(node)
            .into_iter()
            .next()
            .ok_or_else(|| self.base.missing(node, "expression"))
    }
}
