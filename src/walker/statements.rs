use crate::ast::{Block, Stmt, StmtKind};
use crate::document::Element;

use super::add_position;
use super::operators::{branch_tag, inc_dec_tag};

/// Statement serialization
impl super::Walker<'_> {
    pub(crate) fn walk_block(&self, parent: &mut Element, block: &Block) {
        let node = parent.create_child("BlockStatement");
        add_position(node, block.span);
        self.walk_stmt_list(node, &block.stmts);
    }

    fn walk_stmt_list(&self, parent: &mut Element, list: &[Stmt]) {
        for stmt in list {
            self.walk_stmt(parent, stmt);
        }
    }

    fn walk_opt_stmt(&self, parent: &mut Element, stmt: &Option<Box<Stmt>>) {
        if let Some(stmt) = stmt {
            self.walk_stmt(parent, stmt);
        }
    }

    pub(crate) fn walk_stmt(&self, parent: &mut Element, stmt: &Stmt) {
        let node = match &stmt.kind {
            // The block carries its own span
            StmtKind::Block(block) => return self.walk_block(parent, block),

            StmtKind::Bad => parent.create_child("BadStatement"),
            StmtKind::Decl(_) => parent.create_child("DeclStatement"),
            StmtKind::Empty => parent.create_child("EmptyStatement"),
            StmtKind::Labeled { label, .. } => {
                let node = parent.create_child("LabeledStatement");
                node.set_attribute("Label", label.name.as_str());
                node
            }
            StmtKind::Expr(_) => parent.create_child("ExpressionStatement"),
            StmtKind::Send { .. } => parent.create_child("SendStatement"),
            StmtKind::IncDec { op, .. } => parent.create_child(inc_dec_tag(*op)),
            StmtKind::Assign { op, .. } => {
                let node = parent.create_child("AssignmentStatement");
                node.set_attribute("Operator", op.as_str());
                node
            }
            StmtKind::Go(_) => parent.create_child("GoStatement"),
            StmtKind::Defer(_) => parent.create_child("DeferStatement"),
            StmtKind::Return(_) => parent.create_child("ReturnStatement"),
            StmtKind::Branch { kind, label } => {
                let node = parent.create_child(branch_tag(*kind));
                if let Some(label) = label {
                    node.set_attribute("Label", label.name.as_str());
                }
                node
            }
            StmtKind::If { .. } => parent.create_child("IfStatement"),
            StmtKind::CaseClause { .. } => parent.create_child("CaseClause"),
            StmtKind::Switch { .. } => parent.create_child("SwitchStatement"),
            StmtKind::TypeSwitch { .. } => parent.create_child("TypeSwitchStatement"),
            StmtKind::CommClause { .. } => parent.create_child("CommClause"),
            StmtKind::Select { .. } => parent.create_child("SelectStatement"),
            StmtKind::For { .. } => parent.create_child("ForStatement"),
            StmtKind::Range { op, .. } => {
                let node = parent.create_child("RangeStatement");
                if let Some(op) = op {
                    node.set_attribute("Operator", op.as_str());
                }
                node
            }
        };

        add_position(node, stmt.span);
        self.walk_stmt_children(node, stmt);
    }

    fn walk_stmt_children(&self, node: &mut Element, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Bad | StmtKind::Empty | StmtKind::Branch { .. } | StmtKind::Block(_) => {}

            StmtKind::Decl(decl) => self.walk_gen_decl(node, decl),
            StmtKind::Labeled { stmt, .. } => self.walk_stmt(node, stmt),
            StmtKind::Expr(x) | StmtKind::Go(x) | StmtKind::Defer(x) => self.walk_expr(node, x),
            StmtKind::Send { chan, value } => {
                self.walk_expr(node, chan);
                self.walk_expr(node, value);
            }
            StmtKind::IncDec { x, .. } => self.walk_expr(node, x),
            StmtKind::Assign { lhs, rhs, .. } => {
                self.walk_expr_list(node, lhs);
                self.walk_expr_list(node, rhs);
            }
            StmtKind::Return(results) => self.walk_expr_list(node, results),
            StmtKind::If {
                init,
                cond,
                body,
                els,
            } => {
                self.walk_opt_stmt(node, init);
                self.walk_expr(node, cond);
                self.walk_block(node, body);
                self.walk_opt_stmt(node, els);
            }
            StmtKind::CaseClause { list, body } => {
                self.walk_expr_list(node, list);
                self.walk_stmt_list(node, body);
            }
            StmtKind::Switch { init, tag, body } => {
                self.walk_opt_stmt(node, init);
                if let Some(tag) = tag {
                    self.walk_expr(node, tag);
                }
                self.walk_block(node, body);
            }
            StmtKind::TypeSwitch { init, assign, body } => {
                self.walk_opt_stmt(node, init);
                self.walk_stmt(node, assign);
                self.walk_block(node, body);
            }
            StmtKind::CommClause { comm, body } => {
                self.walk_opt_stmt(node, comm);
                self.walk_stmt_list(node, body);
            }
            StmtKind::Select { body } => self.walk_block(node, body),
            StmtKind::For {
                init,
                cond,
                post,
                body,
            } => {
                self.walk_opt_stmt(node, init);
                if let Some(cond) = cond {
                    self.walk_expr(node, cond);
                }
                self.walk_opt_stmt(node, post);
                self.walk_block(node, body);
            }
            StmtKind::Range {
                key,
                value,
                x,
                body,
                ..
            } => {
                if let Some(key) = key {
                    self.walk_expr(node, key);
                }
                if let Some(value) = value {
                    self.walk_expr(node, value);
                }
                self.walk_expr(node, x);
                self.walk_block(node, body);
            }
        }
    }
}
