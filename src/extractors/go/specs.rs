use tree_sitter::Node;

use crate::ast::{DeclKeyword, GenDecl, Ident, ImportSpec, Spec, TypeSpec, ValueSpec};
use crate::error::ExtractError;
use crate::extractors::base::BaseExtractor;

/// Import, constant, type and variable declarations
impl super::GoExtractor<'_> {
    pub(super) fn extract_gen_decl(&mut self, node: Node) -> Result<GenDecl, ExtractError> {
        let keyword = match node.kind() {
            "import_declaration" => DeclKeyword::Import,
            "const_declaration" => DeclKeyword::Const,
            "var_declaration" => DeclKeyword::Var,
            "type_declaration" => DeclKeyword::Type,
            _ => return Err(self.base.unsupported(&node)),
        };
        let span = BaseExtractor::span(&node);

        // Spec nodes sit directly under the declaration or inside a *_list node
        let mut spec_nodes = Vec::new();
        for child in self.base.named_children(&node) {
            match child.kind() {
                "import_spec_list" | "var_spec_list" | "const_spec_list" | "type_spec_list" => {
                    spec_nodes.extend(self.base.named_children(&child));
                }
                _ => spec_nodes.push(child),
            }
        }
        let grouped = spec_nodes.len() != 1 || self.is_parenthesized(&node);

        let mut specs = Vec::with_capacity(spec_nodes.len());
        for spec in spec_nodes {
            specs.push(self.extract_spec(spec, grouped)?);
        }

        // An ungrouped declaration keeps the doc; its spec keeps the trailing comment
        if !grouped {
            if let Some(spec) = specs.first_mut() {
                let comment = self.comments.trailing_for(span.end);
                match spec {
                    Spec::Import(s) => s.comment = comment,
                    Spec::Value(s) => s.comment = comment,
                    Spec::Type(s) => s.comment = comment,
                }
            }
        }

        Ok(GenDecl {
            doc: self.comments.doc_for(span.start),
            keyword,
            specs,
            span,
        })
    }

    fn is_parenthesized(&self, node: &Node) -> bool {
        let list = self.base.named_children(node).into_iter().find(|c| {
            matches!(
                c.kind(),
                "import_spec_list" | "var_spec_list" | "const_spec_list" | "type_spec_list"
            )
        });
        self.base.find_child_by_type(node, "(").is_some() || list.is_some()
    }

    fn extract_spec(&mut self, node: Node, grouped: bool) -> Result<Spec, ExtractError> {
        let span = BaseExtractor::span(&node);
        let (doc, comment) = if grouped {
            (
                self.comments.doc_for(span.start),
                self.comments.trailing_for(span.end),
            )
        } else {
            (None, None)
        };

        let spec = match node.kind() {
            "import_spec" => {
                let name = match node.child_by_field_name("name") {
                    Some(name) => Some(self.ident(&name)),
                    None => None,
                };
                let path = self.base.required(&node, "path")?;
                Spec::Import(ImportSpec {
                    doc,
                    name,
                    path: self.basic_lit(&path)?,
                    comment,
                    span,
                })
            }
            "const_spec" | "var_spec" => {
                let names: Vec<Ident> = self
                    .base
                    .children_by_field(&node, "name")
                    .iter()
                    .map(|name| self.ident(name))
                    .collect();
                let ty = match node.child_by_field_name("type") {
                    Some(ty) => Some(self.extract_expr(ty)?),
                    None => None,
                };
                let values = self.opt_expr_list(node.child_by_field_name("value"))?;
                Spec::Value(ValueSpec {
                    doc,
                    names,
                    ty,
                    values,
                    comment,
                    span,
                })
            }
            "type_spec" | "type_alias" => {
                if let Some(type_params) = node.child_by_field_name("type_parameters") {
                    return Err(self.base.unsupported(&type_params));
                }
                let name = self.base.required(&node, "name")?;
                let ty = self.base.required(&node, "type")?;
                Spec::Type(TypeSpec {
                    doc,
                    name: self.ident(&name),
                    alias: node.kind() == "type_alias",
                    ty: self.extract_expr(ty)?,
                    comment,
                    span,
                })
            }
            _ => return Err(self.base.unsupported(&node)),
        };
        Ok(spec)
    }
}
