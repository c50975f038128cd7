use crate::ast::{BasicLit, Expr, ExprKind, FuncType, Ident, LitKind};
use crate::document::Element;

use super::operators::{binary_tag, chan_direction, literal_tag, unary_tag};
use super::{add_position, strip_quotes};

/// Expression and type serialization
impl super::Walker<'_> {
    pub(crate) fn walk_expr(&self, parent: &mut Element, expr: &Expr) {
        let node = match &expr.kind {
            // Parentheses produce no element of their own
            ExprKind::Paren(inner) => return self.walk_expr(parent, inner),
            ExprKind::Ident(ident) => return self.walk_ident(parent, ident, Some(expr)),
            ExprKind::BasicLit(lit) => return self.walk_basic_lit(parent, lit, Some(expr)),
            ExprKind::FuncType(ty) => return self.walk_func_type(parent, ty, Some(expr)),

            ExprKind::Bad => {
                let node = parent.create_child("BadExpression");
                add_position(node, expr.span);
                return;
            }
            ExprKind::Ellipsis(_) => parent.create_child("Ellipsis"),
            ExprKind::FuncLit { .. } => parent.create_child("FuncLit"),
            ExprKind::CompositeLit { incomplete, .. } => {
                let node = parent.create_child("CompositeLiteral");
                node.set_attribute("Incomplete", incomplete.to_string());
                node
            }
            ExprKind::Selector { .. } => parent.create_child("Selector"),
            ExprKind::Index { .. } => parent.create_child("Index"),
            ExprKind::Slice { slice3, .. } => {
                let node = parent.create_child("Slice");
                if *slice3 {
                    node.set_attribute("Slice3", "true");
                }
                node
            }
            ExprKind::TypeAssert { .. } => parent.create_child("TypeAssert"),
            ExprKind::Call { ellipsis, .. } => {
                let node = parent.create_child("Call");
                if *ellipsis {
                    node.set_attribute("Ellipsis", "true");
                }
                node
            }
            ExprKind::Star(_) => parent.create_child("Star"),
            ExprKind::Unary { op, .. } => parent.create_child(unary_tag(*op)),
            ExprKind::Binary { op, .. } => parent.create_child(binary_tag(*op)),
            ExprKind::KeyValue { .. } => parent.create_child("KeyValuePair"),
            ExprKind::ArrayType { .. } => parent.create_child("ArrayType"),
            ExprKind::StructType { incomplete, .. } => {
                let node = parent.create_child("Struct");
                node.set_attribute("Incomplete", incomplete.to_string());
                node
            }
            ExprKind::InterfaceType { incomplete, .. } => {
                let node = parent.create_child("InterfaceType");
                node.set_attribute("Incomplete", incomplete.to_string());
                node
            }
            ExprKind::MapType { .. } => parent.create_child("MapType"),
            ExprKind::ChanType { dir, .. } => {
                let node = parent.create_child("ChanType");
                node.set_attribute("Direction", chan_direction(*dir));
                node
            }
        };

        self.add_type(node, expr);
        add_position(node, expr.span);
        self.walk_expr_children(node, expr);
    }

    fn walk_expr_children(&self, node: &mut Element, expr: &Expr) {
        match &expr.kind {
            ExprKind::Bad
            | ExprKind::Ident(_)
            | ExprKind::BasicLit(_)
            | ExprKind::Paren(_)
            | ExprKind::FuncType(_) => {}

            ExprKind::Ellipsis(elt) => {
                if let Some(elt) = elt {
                    self.walk_expr(node, elt);
                }
            }
            ExprKind::FuncLit { ty, body } => {
                self.walk_func_type(node, ty, None);
                self.walk_block(node, body);
            }
            ExprKind::CompositeLit { ty, elts, .. } => {
                if let Some(ty) = ty {
                    self.walk_expr(node, ty);
                }
                self.walk_expr_list(node, elts);
            }
            ExprKind::Selector { x, sel } => {
                self.walk_expr(node, x);
                self.walk_ident(node, sel, None);
            }
            ExprKind::Index { x, index } => {
                self.walk_expr(node, x);
                self.walk_expr(node, index);
            }
            ExprKind::Slice {
                x, low, high, max, ..
            } => {
                self.walk_expr(node, x);
                for bound in [low, high, max].into_iter().flatten() {
                    self.walk_expr(node, bound);
                }
            }
            ExprKind::TypeAssert { x, ty } => {
                self.walk_expr(node, x);
                if let Some(ty) = ty {
                    self.walk_expr(node, ty);
                }
            }
            ExprKind::Call { fun, args, .. } => {
                self.walk_expr(node, fun);
                self.walk_expr_list(node, args);
            }
            ExprKind::Star(x) | ExprKind::Unary { x, .. } => self.walk_expr(node, x),
            ExprKind::Binary { x, y, .. } => {
                self.walk_expr(node, x);
                self.walk_expr(node, y);
            }
            ExprKind::KeyValue { key, value } => {
                self.walk_expr(node, key);
                self.walk_expr(node, value);
            }
            ExprKind::ArrayType { len, elt } => {
                if let Some(len) = len {
                    self.walk_expr(node, len);
                }
                self.walk_expr(node, elt);
            }
            ExprKind::StructType { fields, .. } => self.walk_field_list(node, fields),
            ExprKind::InterfaceType { methods, .. } => self.walk_field_list(node, methods),
            ExprKind::MapType { key, value } => {
                self.walk_expr(node, key);
                self.walk_expr(node, value);
            }
            ExprKind::ChanType { value, .. } => self.walk_expr(node, value),
        }
    }

    pub(crate) fn walk_expr_list(&self, parent: &mut Element, list: &[Expr]) {
        for expr in list {
            self.walk_expr(parent, expr);
        }
    }

    /// `expr` is the wrapping expression when the identifier is used as one;
    /// standalone names (declared names, selectors, labels) carry no type.
    pub(crate) fn walk_ident(&self, parent: &mut Element, ident: &Ident, expr: Option<&Expr>) {
        let node = parent.create_child("Ident");
        node.set_attribute("Name", ident.name.as_str());
        node.set_attribute("IsExported", ident.is_exported().to_string());
        if let Some(expr) = expr {
            self.add_type(node, expr);
        }
        add_position(node, ident.span);
    }

    pub(crate) fn walk_basic_lit(&self, parent: &mut Element, lit: &BasicLit, expr: Option<&Expr>) {
        let node = parent.create_child(literal_tag(lit.kind));
        let value = match lit.kind {
            LitKind::String => strip_quotes(&lit.value),
            _ => lit.value.as_str(),
        };
        node.set_attribute("Value", value);
        if let Some(expr) = expr {
            self.add_type(node, expr);
        }
        add_position(node, lit.span);
    }

    pub(crate) fn walk_func_type(&self, parent: &mut Element, ty: &FuncType, expr: Option<&Expr>) {
        let node = parent.create_child("FuncType");
        if let Some(expr) = expr {
            self.add_type(node, expr);
        }
        add_position(node, ty.span);
        if let Some(params) = &ty.params {
            self.walk_field_list(node, params);
        }
        if let Some(results) = &ty.results {
            self.walk_field_list(node, results);
        }
    }
}
