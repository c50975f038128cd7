use tree_sitter::Node;

use crate::ast::{Expr, ExprKind, Field, FieldList, FuncDecl, FuncType, Pos, Span};
use crate::error::ExtractError;
use crate::extractors::base::BaseExtractor;

/// Function declarations, signatures and parameter lists
impl super::GoExtractor<'_> {
    pub(super) fn extract_func_decl(&mut self, node: Node) -> Result<FuncDecl, ExtractError> {
        if let Some(type_params) = node.child_by_field_name("type_parameters") {
            return Err(self.base.unsupported(&type_params));
        }
        let span = BaseExtractor::span(&node);
        let name = self.base.required(&node, "name")?;

        let recv = match node.child_by_field_name("receiver") {
            Some(receiver) => Some(self.extract_parameter_list(receiver)?),
            None => None,
        };
        let ty = self.extract_func_signature(&node)?;
        let body = match node.child_by_field_name("body") {
            Some(body) => Some(self.extract_block(body)?),
            None => None,
        };

        Ok(FuncDecl {
            doc: self.comments.doc_for(span.start),
            recv,
            name: self.ident(&name),
            ty,
            body,
            span,
        })
    }

    /// Signature of a node that starts with the `func` keyword
    pub(super) fn extract_func_signature(&mut self, node: &Node) -> Result<FuncType, ExtractError> {
        let start = BaseExtractor::span(node).start;
        self.extract_signature(node, start)
    }

    /// Interface methods have no `func` keyword; the signature starts at `(`
    pub(super) fn extract_method_signature(&mut self, node: &Node) -> Result<Expr, ExtractError> {
        let params = self.base.required(node, "parameters")?;
        let ty = self.extract_signature(node, BaseExtractor::span(&params).start)?;
        Ok(self.make_expr(ty.span, ExprKind::FuncType(ty)))
    }

    fn extract_signature(&mut self, node: &Node, start: Pos) -> Result<FuncType, ExtractError> {
        let params_node = self.base.required(node, "parameters")?;
        let params = self.extract_parameter_list(params_node)?;

        let mut end = params.span.end;
        let results = match node.child_by_field_name("result") {
            Some(result) => {
                end = BaseExtractor::span(&result).end;
                Some(self.extract_results(result)?)
            }
            None => None,
        };

        Ok(FuncType {
            params: Some(params),
            results,
            span: Span::new(start, end),
        })
    }

    /// A parenthesized result list, or a single unnamed result type
    fn extract_results(&mut self, node: Node) -> Result<FieldList, ExtractError> {
        if node.kind() == "parameter_list" {
            return self.extract_parameter_list(node);
        }
        let ty = self.extract_expr(node)?;
        let span = ty.span;
        Ok(FieldList {
            fields: vec![Field {
                doc: None,
                names: Vec::new(),
                ty,
                tag: None,
                comment: None,
                span,
            }],
            span,
        })
    }

    pub(super) fn extract_parameter_list(&mut self, node: Node) -> Result<FieldList, ExtractError> {
        let mut fields = Vec::new();

        for param in self.base.named_children(&node) {
            let span = BaseExtractor::span(&param);
            let names = self
                .base
                .children_by_field(&param, "name")
                .iter()
                .map(|name| self.ident(name))
                .collect::<Vec<_>>();
            let ty_node = self.base.required(&param, "type")?;

            let ty = match param.kind() {
                "parameter_declaration" => self.extract_expr(ty_node)?,
                // ...T
                "variadic_parameter_declaration" => {
                    let elt = self.extract_expr(ty_node)?;
                    let dots = self
                        .base
                        .find_child_by_type(&param, "...")
                        .ok_or_else(|| self.base.missing(&param, "..."))?;
                    let ellipsis_span = Span::new(BaseExtractor::span(&dots).start, elt.span.end);
                    self.make_expr(ellipsis_span, ExprKind::Ellipsis(Some(Box::new(elt))))
                }
                _ => return Err(self.base.unsupported(&param)),
            };

            fields.push(Field {
                doc: None,
                names,
                ty,
                tag: None,
                comment: None,
                span,
            });
        }

        Ok(FieldList {
            fields,
            span: BaseExtractor::span(&node),
        })
    }
}
