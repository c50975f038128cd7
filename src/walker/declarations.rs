use crate::ast::{Decl, FuncDecl, GenDecl, ImportSpec, Spec, TypeSpec, ValueSpec};
use crate::document::Element;

use super::operators::decl_tag;
use super::{add_position, strip_quotes};

/// Declaration serialization
impl super::Walker<'_> {
    pub(crate) fn walk_decl(&self, parent: &mut Element, decl: &Decl) {
        match decl {
            Decl::Bad(span) => {
                let node = parent.create_child("BadDeclaration");
                add_position(node, *span);
            }
            Decl::Gen(gen) => self.walk_gen_decl(parent, gen),
            Decl::Func(func) => self.walk_func_decl(parent, func),
        }
    }

    pub(crate) fn walk_gen_decl(&self, parent: &mut Element, decl: &GenDecl) {
        let node = parent.create_child(decl_tag(decl.keyword));
        add_position(node, decl.span);

        if let Some(doc) = &decl.doc {
            self.walk_comment_group(node, doc);
        }
        for spec in &decl.specs {
            match spec {
                Spec::Import(import) => self.walk_import_spec(node, import),
                Spec::Value(value) => self.walk_value_spec(node, value),
                Spec::Type(ty) => self.walk_type_spec(node, ty),
            }
        }
    }

    fn walk_import_spec(&self, parent: &mut Element, spec: &ImportSpec) {
        let node = parent.create_child("Item");
        if let Some(name) = &spec.name {
            node.set_attribute("Name", name.name.as_str());
        }
        node.set_attribute("Path", strip_quotes(&spec.path.value));
        add_position(node, spec.span);

        if let Some(doc) = &spec.doc {
            self.walk_comment_group(node, doc);
        }
        if let Some(comment) = &spec.comment {
            self.walk_comment_group(node, comment);
        }
    }

    fn walk_value_spec(&self, parent: &mut Element, spec: &ValueSpec) {
        let node = parent.create_child("ValueSpec");
        add_position(node, spec.span);

        if let Some(doc) = &spec.doc {
            self.walk_comment_group(node, doc);
        }
        for name in &spec.names {
            self.walk_ident(node, name, None);
        }
        if let Some(ty) = &spec.ty {
            self.walk_expr(node, ty);
        }
        self.walk_expr_list(node, &spec.values);
        if let Some(comment) = &spec.comment {
            self.walk_comment_group(node, comment);
        }
    }

    fn walk_type_spec(&self, parent: &mut Element, spec: &TypeSpec) {
        let node = parent.create_child("Item");
        node.set_attribute("Name", spec.name.name.as_str());
        if spec.alias {
            node.set_attribute("Alias", "true");
        }
        add_position(node, spec.span);

        if let Some(doc) = &spec.doc {
            self.walk_comment_group(node, doc);
        }
        self.walk_expr(node, &spec.ty);
        if let Some(comment) = &spec.comment {
            self.walk_comment_group(node, comment);
        }
    }

    fn walk_func_decl(&self, parent: &mut Element, func: &FuncDecl) {
        let node = parent.create_child("Func");
        node.set_attribute("Name", func.name.name.as_str());
        add_position(node, func.span);

        if let Some(doc) = &func.doc {
            self.walk_comment_group(node, doc);
        }
        if let Some(recv) = &func.recv {
            self.walk_field_list(node, recv);
        }
        self.walk_func_type(node, &func.ty, None);
        if let Some(body) = &func.body {
            self.walk_block(node, body);
        }
    }
}
