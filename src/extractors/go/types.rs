use tree_sitter::Node;

use crate::ast::{ChanDir, Expr, ExprKind, Field, FieldList, Span};
use crate::error::ExtractError;
use crate::extractors::base::BaseExtractor;

/// Type lowering: pointer, array, slice, map, channel, struct, interface,
/// function and qualified types
impl super::GoExtractor<'_> {
    pub(super) fn extract_type(&mut self, node: Node) -> Result<Expr, ExtractError> {
        let span = BaseExtractor::span(&node);

        let kind = match node.kind() {
            "pointer_type" => {
                let inner = self.single_named_child(&node)?;
                ExprKind::Star(Box::new(self.extract_expr(inner)?))
            }
            "array_type" => {
                let length = self.base.required(&node, "length")?;
                let element = self.base.required(&node, "element")?;
                ExprKind::ArrayType {
                    len: Some(Box::new(self.extract_expr(length)?)),
                    elt: Box::new(self.extract_expr(element)?),
                }
            }
            // [...]T
            "implicit_length_array_type" => {
                let dots = self
                    .base
                    .find_child_by_type(&node, "...")
                    .ok_or_else(|| self.base.missing(&node, "..."))?;
                let len = self.make_expr(BaseExtractor::span(&dots), ExprKind::Ellipsis(None));
                let element = self.base.required(&node, "element")?;
                ExprKind::ArrayType {
                    len: Some(Box::new(len)),
                    elt: Box::new(self.extract_expr(element)?),
                }
            }
            "slice_type" => {
                let element = self.base.required(&node, "element")?;
                ExprKind::ArrayType {
                    len: None,
                    elt: Box::new(self.extract_expr(element)?),
                }
            }
            "map_type" => {
                let key = self.base.required(&node, "key")?;
                let value = self.base.required(&node, "value")?;
                ExprKind::MapType {
                    key: Box::new(self.extract_expr(key)?),
                    value: Box::new(self.extract_expr(value)?),
                }
            }
            "channel_type" => {
                let value = self.base.required(&node, "value")?;
                ExprKind::ChanType {
                    dir: self.channel_direction(&node),
                    value: Box::new(self.extract_expr(value)?),
                }
            }
            "struct_type" => {
                let list = self
                    .base
                    .find_child_by_type(&node, "field_declaration_list")
                    .ok_or_else(|| self.base.missing(&node, "field_declaration_list"))?;
                ExprKind::StructType {
                    fields: self.extract_struct_fields(list)?,
                    incomplete: false,
                }
            }
            "interface_type" => ExprKind::InterfaceType {
                methods: self.extract_interface_elems(node)?,
                incomplete: false,
            },
            "function_type" => ExprKind::FuncType(self.extract_func_signature(&node)?),
            // pkg.T is a selector in the Go syntax tree
            "qualified_type" => {
                let package = self.base.required(&node, "package")?;
                let name = self.base.required(&node, "name")?;
                ExprKind::Selector {
                    x: Box::new(self.ident_expr(&package)),
                    sel: self.ident(&name),
                }
            }
            // generic_type, negated_type, type_instantiation_expression, ERROR, ...
            _ => return Err(self.base.unsupported(&node)),
        };

        Ok(self.make_expr(span, kind))
    }

    /// `chan T`, `chan<- T` or `<-chan T`, read from the token order
    fn channel_direction(&self, node: &Node) -> ChanDir {
        let mut cursor = node.walk();
        let tokens: Vec<&str> = node
            .children(&mut cursor)
            .filter(|c| !c.is_named())
            .map(|c| c.kind())
            .take(2)
            .collect();
        match tokens.as_slice() {
            ["<-", ..] => ChanDir::Recv,
            ["chan", "<-"] => ChanDir::Send,
            _ => ChanDir::Both,
        }
    }

    fn extract_struct_fields(&mut self, list: Node) -> Result<FieldList, ExtractError> {
        let mut fields = Vec::new();
        for decl in self.base.named_children(&list) {
            if decl.kind() != "field_declaration" {
                return Err(self.base.unsupported(&decl));
            }
            fields.push(self.extract_struct_field(decl)?);
        }
        Ok(FieldList {
            fields,
            span: BaseExtractor::span(&list),
        })
    }

    fn extract_struct_field(&mut self, node: Node) -> Result<Field, ExtractError> {
        let span = BaseExtractor::span(&node);
        let names = self
            .base
            .children_by_field(&node, "name")
            .iter()
            .map(|name| self.ident(name))
            .collect::<Vec<_>>();

        let ty_node = self.base.required(&node, "type")?;
        let mut ty = self.extract_expr(ty_node)?;
        // embedded `*T`: the star is an anonymous token of the field itself
        if names.is_empty() {
            if let Some(star) = self.base.find_child_by_type(&node, "*") {
                let star_span = Span::new(BaseExtractor::span(&star).start, ty.span.end);
                ty = self.make_expr(star_span, ExprKind::Star(Box::new(ty)));
            }
        }

        let tag = match node.child_by_field_name("tag") {
            Some(tag) => Some(self.basic_lit(&tag)?),
            None => None,
        };

        Ok(Field {
            doc: self.comments.doc_for(span.start),
            names,
            ty,
            tag,
            comment: self.comments.trailing_for(span.end),
            span,
        })
    }

    fn extract_interface_elems(&mut self, node: Node) -> Result<FieldList, ExtractError> {
        let mut fields = Vec::new();
        for elem in self.base.named_children(&node) {
            let span = BaseExtractor::span(&elem);
            let (names, ty) = match elem.kind() {
                "method_elem" | "method_spec" => {
                    let name = self.base.required(&elem, "name")?;
                    (vec![self.ident(&name)], self.extract_method_signature(&elem)?)
                }
                // an embedded interface; unions and approximations have no counterpart
                "type_elem" => match self.base.named_children(&elem).as_slice() {
                    [single] => (Vec::new(), self.extract_expr(*single)?),
                    _ => return Err(self.base.unsupported(&elem)),
                },
                "type_identifier" | "qualified_type" => (Vec::new(), self.extract_expr(elem)?),
                _ => return Err(self.base.unsupported(&elem)),
            };
            fields.push(Field {
                doc: self.comments.doc_for(span.start),
                names,
                ty,
                tag: None,
                comment: self.comments.trailing_for(span.end),
                span,
            });
        }

        Ok(FieldList {
            fields,
            span: self.delimited_span(&node, "{", "}"),
        })
    }
}
