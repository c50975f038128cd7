// Walker - node classifier and serializer
//
// Turns a package tree into an attributed element tree. Every node kind maps
// to zero or one element with a fixed tag; attributes are added in a fixed
// order (kind-specific, then Type/Mode, then positions) and children are
// walked in source order.
//
// Split by concern:
// - expressions.rs: identifiers, literals, expressions and types
// - statements.rs: statements and blocks
// - declarations.rs: declarations and specs
// - operators.rs: token → tag tables

mod declarations;
mod expressions;
mod operators;
mod statements;


use std::fs;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::{debug, warn};

use crate::ast::{CommentGroup, Expr, Field, FieldList, File, Package, Span};
use crate::binding::{BindingTable, Resolver};
use crate::document::Element;
use crate::error::{ExtractError, Result};

pub use operators::{binary_tag, literal_tag, unary_tag};

/// Immutable traversal context shared by every node of one package
#[derive(Debug, Clone, Copy)]
pub struct Walker<'a> {
    bindings: Option<&'a BindingTable>,
    embed_source: bool,
}

impl<'a> Walker<'a> {
    pub fn new(bindings: Option<&'a BindingTable>) -> Self {
        Self {
            bindings,
            embed_source: true,
        }
    }

    /// Whether `File` elements carry the base64-encoded source bytes
    pub fn with_source_embedding(mut self, embed_source: bool) -> Self {
        self.embed_source = embed_source;
        self
    }

    /// Serialize a whole package under `parent`.
    ///
    /// The resolver runs exactly once, before any file is walked; a failed
    /// resolution is logged and the files are walked without type attributes.
    pub fn walk_package(
        parent: &mut Element,
        package: &Package,
        resolver: Option<&dyn Resolver>,
        embed_source: bool,
    ) -> Result<()> {
        let package_node = parent.create_child("Package");
        package_node.set_attribute("Language", "go");
        package_node.set_attribute("Name", package.name.as_str());

        let bindings = match resolver.map(|r| r.resolve(package)) {
            Some(Ok(table)) => {
                debug!(
                    "Resolved {} expressions in package {}",
                    table.len(),
                    package.name
                );
                Some(table)
            }
            Some(Err(e)) => {
                warn!(
                    "Type resolution failed for package {}: {} - continuing without types",
                    package.name, e
                );
                None
            }
            None => None,
        };

        let walker = Walker::new(bindings.as_ref()).with_source_embedding(embed_source);
        for file in &package.files {
            walker.walk_file(package_node, file)?;
        }
        Ok(())
    }

    /// Serialize one compilation unit. This is the only case that performs
    /// I/O: the raw file bytes are read for embedding.
    pub fn walk_file(&self, parent: &mut Element, file: &File) -> Result<()> {
        let file_node = parent.create_child("File");
        file_node.set_attribute("Package", file.package_name.name.as_str());
        file_node.set_attribute("Filename", file.path.display().to_string());

        if self.embed_source {
            let source = fs::read(&file.path).map_err(|e| ExtractError::ReadSource {
                path: file.path.clone(),
                source: e,
            })?;
            file_node.set_attribute("Source", STANDARD.encode(source));
        }
        add_position(file_node, file.span);

        if let Some(doc) = &file.doc {
            self.walk_comment_group(file_node, doc);
        }
        for decl in &file.decls {
            self.walk_decl(file_node, decl);
        }
        Ok(())
    }

    pub(crate) fn walk_comment_group(&self, parent: &mut Element, group: &CommentGroup) {
        let group_node = parent.create_child("CommentGroup");
        add_position(group_node, group.span());
        for comment in &group.comments {
            group_node.create_child("Comment").append_text(&comment.text);
        }
    }

    pub(crate) fn walk_field_list(&self, parent: &mut Element, list: &FieldList) {
        let list_node = parent.create_child("Fields");
        add_position(list_node, list.span);
        for field in &list.fields {
            self.walk_field(list_node, field);
        }
    }

    fn walk_field(&self, parent: &mut Element, field: &Field) {
        let field_node = parent.create_child("Field");
        add_position(field_node, field.span);

        if let Some(doc) = &field.doc {
            self.walk_comment_group(field_node, doc);
        }
        let names_node = field_node.create_child("Names");
        for name in &field.names {
            self.walk_ident(names_node, name, None);
        }
        self.walk_expr(field_node, &field.ty);
        if let Some(tag) = &field.tag {
            self.walk_basic_lit(field_node, tag, None);
        }
        if let Some(comment) = &field.comment {
            self.walk_comment_group(field_node, comment);
        }
    }

    /// Add `Type`/`Mode` when the table has an entry for `expr`
    fn add_type(&self, element: &mut Element, expr: &Expr) {
        if let Some(binding) = self.bindings.and_then(|table| table.get(expr.id)) {
            element.set_attribute("Type", binding.ty.as_str());
            element.set_attribute("Mode", binding.mode.as_str());
        }
    }
}

/// Add position attributes for whichever endpoints are valid
pub(crate) fn add_position(element: &mut Element, span: Span) {
    if span.start.is_valid() {
        element.set_attribute("StartLine", span.start.line.to_string());
        element.set_attribute("StartColumn", span.start.column.to_string());
    }
    if span.end.is_valid() {
        element.set_attribute("EndLine", span.end.line.to_string());
        element.set_attribute("EndColumn", span.end.column.to_string());
    }
}

/// Remove one leading and one trailing double quote
pub(crate) fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}
