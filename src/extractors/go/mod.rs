mod comments;
mod expressions;
mod functions;
mod helpers;
mod specs;
mod statements;
mod types;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use tree_sitter::{Node, Tree};

use self::comments::CommentIndex;
use crate::ast::{Decl, Expr, ExprId, ExprKind, File, Ident, Span};
use crate::error::ExtractError;
use crate::extractors::base::BaseExtractor;

/// Lowers one tree-sitter-go tree into the closed Go syntax tree:
/// - every expression gets a package-unique `ExprId`
/// - comment groups are attached as docs and trailing comments
/// - constructs outside the node model (generics, unions) are rejected
///   with `UnsupportedConstruct`
pub struct GoExtractor<'a> {
    base: BaseExtractor<'a>,
    comments: CommentIndex,
    next_id: u32,
}

impl<'a> GoExtractor<'a> {
    /// `first_id` continues the numbering of earlier files of the same package
    pub fn new(file_path: PathBuf, content: &'a str, first_id: u32) -> Self {
        Self {
            base: BaseExtractor::new(file_path, content),
            comments: CommentIndex::default(),
            next_id: first_id,
        }
    }

    /// The id the next lowered expression would receive
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn extract_file(&mut self, tree: &Tree) -> Result<File, ExtractError> {
        let root = tree.root_node();
        self.comments = CommentIndex::build(&self.base, &root);

        let clause = self
            .base
            .find_child_by_type(&root, "package_clause")
            .ok_or_else(|| self.base.missing(&root, "package_clause"))?;
        let name_node = self
            .base
            .find_child_by_type(&clause, "package_identifier")
            .ok_or_else(|| self.base.missing(&clause, "package_identifier"))?;
        let package_name = self.ident(&name_node);
        let doc = self.comments.doc_for(BaseExtractor::span(&clause).start);

        let mut decls = Vec::new();
        let mut end = BaseExtractor::span(&clause).end;
        for child in self.base.named_children(&root) {
            if let Some(decl) = self.extract_top_level(child)? {
                end = BaseExtractor::span(&child).end;
                decls.push(decl);
            }
        }

        Ok(File {
            doc,
            package_name,
            path: self.base.file_path.clone(),
            decls,
            span: Span::new(BaseExtractor::span(&clause).start, end),
        })
    }

    fn extract_top_level(&mut self, node: Node) -> Result<Option<Decl>, ExtractError> {
        let decl = match node.kind() {
            "package_clause" => return Ok(None),
            "function_declaration" | "method_declaration" => {
                Decl::Func(self.extract_func_decl(node)?)
            }
            "import_declaration" | "const_declaration" | "var_declaration"
            | "type_declaration" => Decl::Gen(self.extract_gen_decl(node)?),
            _ => return Err(self.base.unsupported(&node)),
        };
        Ok(Some(decl))
    }

    fn alloc_id(&mut self) -> ExprId {
        let id = ExprId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(super) fn make_expr(&mut self, span: Span, kind: ExprKind) -> Expr {
        let id = self.alloc_id();
        Expr::new(id, span, kind)
    }

    pub(super) fn ident(&self, node: &Node) -> Ident {
        Ident::new(self.base.get_node_text(node), BaseExtractor::span(node))
    }
}
