// Read-only traversal helpers
//
// `Visitor` has one hook per interesting node family; the `walk_*` functions
// drive it through every nested node in source order.

use super::decl::{Decl, File, Spec};
use super::expr::{Expr, ExprKind, FieldList, FuncType, Ident};
use super::stmt::{AssignOp, Block, Stmt, StmtKind};

pub trait Visitor {
    /// Called for every expression occurrence, outermost first
    fn visit_expr(&mut self, _expr: &Expr) {}

    /// Called for every identifier that introduces a name
    fn visit_declared_name(&mut self, _ident: &Ident) {}
}

pub fn walk_file<V: Visitor + ?Sized>(v: &mut V, file: &File) {
    for decl in &file.decls {
        walk_decl(v, decl);
    }
}

pub fn walk_decl<V: Visitor + ?Sized>(v: &mut V, decl: &Decl) {
    match decl {
        Decl::Bad(_) => {}
        Decl::Gen(gen) => {
            for spec in &gen.specs {
                walk_spec(v, spec);
            }
        }
        Decl::Func(func) => {
            if let Some(recv) = &func.recv {
                walk_field_list(v, recv, true);
            }
            // methods do not introduce package-level names
            if func.recv.is_none() {
                v.visit_declared_name(&func.name);
            }
            walk_func_type(v, &func.ty);
            if let Some(body) = &func.body {
                walk_block(v, body);
            }
        }
    }
}

fn walk_spec<V: Visitor + ?Sized>(v: &mut V, spec: &Spec) {
    match spec {
        Spec::Import(import) => {
            if let Some(name) = &import.name {
                v.visit_declared_name(name);
            }
        }
        Spec::Value(value) => {
            for name in &value.names {
                v.visit_declared_name(name);
            }
            if let Some(ty) = &value.ty {
                walk_expr(v, ty);
            }
            for expr in &value.values {
                walk_expr(v, expr);
            }
        }
        Spec::Type(ty) => {
            v.visit_declared_name(&ty.name);
            walk_expr(v, &ty.ty);
        }
    }
}

fn walk_field_list<V: Visitor + ?Sized>(v: &mut V, list: &FieldList, declares: bool) {
    for field in &list.fields {
        if declares {
            for name in &field.names {
                v.visit_declared_name(name);
            }
        }
        walk_expr(v, &field.ty);
    }
}

fn walk_func_type<V: Visitor + ?Sized>(v: &mut V, ty: &FuncType) {
    if let Some(params) = &ty.params {
        walk_field_list(v, params, true);
    }
    if let Some(results) = &ty.results {
        walk_field_list(v, results, true);
    }
}

pub fn walk_block<V: Visitor + ?Sized>(v: &mut V, block: &Block) {
    for stmt in &block.stmts {
        walk_stmt(v, stmt);
    }
}

fn walk_opt_stmt<V: Visitor + ?Sized>(v: &mut V, stmt: &Option<Box<Stmt>>) {
    if let Some(stmt) = stmt {
        walk_stmt(v, stmt);
    }
}

pub fn walk_stmt<V: Visitor + ?Sized>(v: &mut V, stmt: &Stmt) {
    match &stmt.kind {
        StmtKind::Bad | StmtKind::Empty | StmtKind::Branch { .. } => {}
        StmtKind::Decl(gen) => {
            for spec in &gen.specs {
                walk_spec(v, spec);
            }
        }
        StmtKind::Labeled { stmt, .. } => walk_stmt(v, stmt),
        StmtKind::Expr(x) | StmtKind::Go(x) | StmtKind::Defer(x) => walk_expr(v, x),
        StmtKind::Send { chan, value } => {
            walk_expr(v, chan);
            walk_expr(v, value);
        }
        StmtKind::IncDec { x, .. } => walk_expr(v, x),
        StmtKind::Assign { lhs, op, rhs } => {
            for x in lhs {
                if *op == AssignOp::Define {
                    if let ExprKind::Ident(ident) = &x.kind {
                        v.visit_declared_name(ident);
                    }
                }
                walk_expr(v, x);
            }
            for x in rhs {
                walk_expr(v, x);
            }
        }
        StmtKind::Return(results) => {
            for x in results {
                walk_expr(v, x);
            }
        }
        StmtKind::Block(block) | StmtKind::Select { body: block } => walk_block(v, block),
        StmtKind::If {
            init,
            cond,
            body,
            els,
        } => {
            walk_opt_stmt(v, init);
            walk_expr(v, cond);
            walk_block(v, body);
            walk_opt_stmt(v, els);
        }
        StmtKind::CaseClause { list, body } => {
            for x in list {
                walk_expr(v, x);
            }
            for s in body {
                walk_stmt(v, s);
            }
        }
        StmtKind::Switch { init, tag, body } => {
            walk_opt_stmt(v, init);
            if let Some(tag) = tag {
                walk_expr(v, tag);
            }
            walk_block(v, body);
        }
        StmtKind::TypeSwitch { init, assign, body } => {
            walk_opt_stmt(v, init);
            walk_stmt(v, assign);
            walk_block(v, body);
        }
        StmtKind::CommClause { comm, body } => {
            walk_opt_stmt(v, comm);
            for s in body {
                walk_stmt(v, s);
            }
        }
        StmtKind::For {
            init,
            cond,
            post,
            body,
        } => {
            walk_opt_stmt(v, init);
            if let Some(cond) = cond {
                walk_expr(v, cond);
            }
            walk_opt_stmt(v, post);
            walk_block(v, body);
        }
        StmtKind::Range {
            key,
            value,
            op,
            x,
            body,
        } => {
            for bound in [key, value].into_iter().flatten() {
                if *op == Some(AssignOp::Define) {
                    if let ExprKind::Ident(ident) = &bound.kind {
                        v.visit_declared_name(ident);
                    }
                }
                walk_expr(v, bound);
            }
            walk_expr(v, x);
            walk_block(v, body);
        }
    }
}

pub fn walk_expr<V: Visitor + ?Sized>(v: &mut V, expr: &Expr) {
    v.visit_expr(expr);
    match &expr.kind {
        ExprKind::Bad | ExprKind::Ident(_) | ExprKind::BasicLit(_) => {}
        ExprKind::Ellipsis(elt) => {
            if let Some(elt) = elt {
                walk_expr(v, elt);
            }
        }
        ExprKind::FuncLit { ty, body } => {
            walk_func_type(v, ty);
            walk_block(v, body);
        }
        ExprKind::CompositeLit { ty, elts, .. } => {
            if let Some(ty) = ty {
                walk_expr(v, ty);
            }
            for elt in elts {
                walk_expr(v, elt);
            }
        }
        ExprKind::Paren(x) | ExprKind::Star(x) | ExprKind::Unary { x, .. } => walk_expr(v, x),
        ExprKind::Selector { x, .. } => walk_expr(v, x),
        ExprKind::Index { x, index } => {
            walk_expr(v, x);
            walk_expr(v, index);
        }
        ExprKind::Slice {
            x, low, high, max, ..
        } => {
            walk_expr(v, x);
            for bound in [low, high, max].into_iter().flatten() {
                walk_expr(v, bound);
            }
        }
        ExprKind::TypeAssert { x, ty } => {
            walk_expr(v, x);
            if let Some(ty) = ty {
                walk_expr(v, ty);
            }
        }
        ExprKind::Call { fun, args, .. } => {
            walk_expr(v, fun);
            for arg in args {
                walk_expr(v, arg);
            }
        }
        ExprKind::Binary { x, y, .. } => {
            walk_expr(v, x);
            walk_expr(v, y);
        }
        ExprKind::KeyValue { key, value } => {
            walk_expr(v, key);
            walk_expr(v, value);
        }
        ExprKind::ArrayType { len, elt } => {
            if let Some(len) = len {
                walk_expr(v, len);
            }
            walk_expr(v, elt);
        }
        ExprKind::StructType { fields, .. } => walk_field_list(v, fields, false),
        ExprKind::InterfaceType { methods, .. } => walk_field_list(v, methods, false),
        ExprKind::FuncType(ty) => walk_func_type(v, ty),
        ExprKind::MapType { key, value } => {
            walk_expr(v, key);
            walk_expr(v, value);
        }
        ExprKind::ChanType { value, .. } => walk_expr(v, value),
    }
}
