use tree_sitter::Node;

use crate::ast::{
    AssignOp, Block, BranchKind, Expr, ExprKind, IncDec, Span, Stmt, StmtKind,
};
use crate::error::ExtractError;
use crate::extractors::base::BaseExtractor;

/// Where a `default_case` appears decides its clause kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClauseContext {
    Switch,
    Select,
}

/// Statement lowering
impl super::GoExtractor<'_> {
    /// Lower a run of statements, flattening any `statement_list` wrapper
    pub(super) fn extract_stmt_sequence(&mut self, nodes: &[Node]) -> Result<Vec<Stmt>, ExtractError> {
        let mut stmts = Vec::new();
        for node in nodes {
            if node.kind() == "statement_list" {
                let inner = self.base.named_children(node);
                stmts.extend(self.extract_stmt_sequence(&inner)?);
            } else {
                stmts.push(self.extract_stmt(*node)?);
            }
        }
        Ok(stmts)
    }

    fn extract_opt_stmt(&mut self, node: Option<Node>) -> Result<Option<Box<Stmt>>, ExtractError> {
        match node {
            Some(node) => Ok(Some(Box::new(self.extract_stmt(node)?))),
            None => Ok(None),
        }
    }

    pub(super) fn extract_stmt(&mut self, node: Node) -> Result<Stmt, ExtractError> {
        let span = BaseExtractor::span(&node);

        let kind = match node.kind() {
            "const_declaration" | "var_declaration" | "type_declaration" => {
                StmtKind::Decl(self.extract_gen_decl(node)?)
            }
            "empty_statement" => StmtKind::Empty,
            "labeled_statement" | "empty_labeled_statement" => {
                let label = self.base.required(&node, "label")?;
                let inner = self
                    .base
                    .named_children(&node)
                    .into_iter()
                    .find(|c| c.id() != label.id());
                let stmt = match inner {
                    Some(inner) => self.extract_stmt(inner)?,
                    // `L:` right before a closing brace labels an implicit empty statement
                    None => Stmt::new(Span::new(span.end, span.end), StmtKind::Empty),
                };
                StmtKind::Labeled {
                    label: self.ident(&label),
                    stmt: Box::new(stmt),
                }
            }
            "expression_statement" => {
                let inner = self.single_named_child(&node)?;
                StmtKind::Expr(self.extract_expr(inner)?)
            }
            "send_statement" => {
                let chan = self.base.required(&node, "channel")?;
                let value = self.base.required(&node, "value")?;
                StmtKind::Send {
                    chan: self.extract_expr(chan)?,
                    value: self.extract_expr(value)?,
                }
            }
            "inc_statement" | "dec_statement" => {
                let inner = self.single_named_child(&node)?;
                StmtKind::IncDec {
                    x: self.extract_expr(inner)?,
                    op: if node.kind() == "inc_statement" {
                        IncDec::Inc
                    } else {
                        IncDec::Dec
                    },
                }
            }
            "assignment_statement" => {
                let token = self.operator_text(&node)?;
                let op = AssignOp::from_token(&token).ok_or_else(|| self.base.unsupported(&node))?;
                let left = self.base.required(&node, "left")?;
                let right = self.base.required(&node, "right")?;
                StmtKind::Assign {
                    lhs: self.extract_expr_list(left)?,
                    op,
                    rhs: self.extract_expr_list(right)?,
                }
            }
            "short_var_declaration" => {
                let left = self.base.required(&node, "left")?;
                let right = self.base.required(&node, "right")?;
                StmtKind::Assign {
                    lhs: self.extract_expr_list(left)?,
                    op: AssignOp::Define,
                    rhs: self.extract_expr_list(right)?,
                }
            }
            // only reachable as the communication of a select case
            "receive_statement" => {
                let right = self.base.required(&node, "right")?;
                let rhs = self.extract_expr(right)?;
                match node.child_by_field_name("left") {
                    Some(left) => StmtKind::Assign {
                        lhs: self.extract_expr_list(left)?,
                        op: self.define_or_assign(&node),
                        rhs: vec![rhs],
                    },
                    None => StmtKind::Expr(rhs),
                }
            }
            "go_statement" | "defer_statement" => {
                let inner = self.single_named_child(&node)?;
                let call = self.extract_expr(inner)?;
                if node.kind() == "go_statement" {
                    StmtKind::Go(call)
                } else {
                    StmtKind::Defer(call)
                }
            }
            "return_statement" => {
                let results = self.base.named_children(&node).into_iter().next();
                StmtKind::Return(self.opt_expr_list(results)?)
            }
            "break_statement" | "continue_statement" | "goto_statement"
            | "fallthrough_statement" => {
                let kind = match node.kind() {
                    "break_statement" => BranchKind::Break,
                    "continue_statement" => BranchKind::Continue,
                    "goto_statement" => BranchKind::Goto,
                    _ => BranchKind::Fallthrough,
                };
                let label = self
                    .base
                    .find_child_by_type(&node, "label_name")
                    .map(|label| self.ident(&label));
                StmtKind::Branch { kind, label }
            }
            "block" => StmtKind::Block(self.extract_block(node)?),
            "if_statement" => self.extract_if(node)?,
            "for_statement" => self.extract_for(node)?,
            "expression_switch_statement" => {
                let init = self.extract_opt_stmt(node.child_by_field_name("initializer"))?;
                let tag = match node.child_by_field_name("value") {
                    Some(value) => Some(self.extract_expr(value)?),
                    None => None,
                };
                StmtKind::Switch {
                    init,
                    tag,
                    body: self.extract_clause_block(&node, ClauseContext::Switch)?,
                }
            }
            "type_switch_statement" => self.extract_type_switch(node)?,
            "select_statement" => StmtKind::Select {
                body: self.extract_clause_block(&node, ClauseContext::Select)?,
            },
            _ => return Err(self.base.unsupported(&node)),
        };

        Ok(Stmt::new(span, kind))
    }

    fn define_or_assign(&self, node: &Node) -> AssignOp {
        if self.base.find_child_by_type(node, ":=").is_some() {
            AssignOp::Define
        } else {
            AssignOp::Assign
        }
    }

    fn extract_if(&mut self, node: Node) -> Result<StmtKind, ExtractError> {
        let init = self.extract_opt_stmt(node.child_by_field_name("initializer"))?;
        let condition = self.base.required(&node, "condition")?;
        let consequence = self.base.required(&node, "consequence")?;
        let cond = self.extract_expr(condition)?;
        let body = self.extract_block(consequence)?;
        let els = self.extract_opt_stmt(node.child_by_field_name("alternative"))?;
        Ok(StmtKind::If {
            init,
            cond,
            body,
            els,
        })
    }

    fn extract_for(&mut self, node: Node) -> Result<StmtKind, ExtractError> {
        let body_node = self.base.required(&node, "body")?;
        let header = self
            .base
            .named_children(&node)
            .into_iter()
            .find(|c| c.id() != body_node.id());

        let kind = match header {
            // for {}
            None => StmtKind::For {
                init: None,
                cond: None,
                post: None,
                body: self.extract_block(body_node)?,
            },
            Some(clause) if clause.kind() == "for_clause" => {
                let init = self.extract_opt_stmt(clause.child_by_field_name("initializer"))?;
                let cond = match clause.child_by_field_name("condition") {
                    Some(cond) => Some(self.extract_expr(cond)?),
                    None => None,
                };
                let post = self.extract_opt_stmt(clause.child_by_field_name("update"))?;
                StmtKind::For {
                    init,
                    cond,
                    post,
                    body: self.extract_block(body_node)?,
                }
            }
            Some(clause) if clause.kind() == "range_clause" => {
                let (key, value, op) = match clause.child_by_field_name("left") {
                    Some(left) => {
                        let mut bound = self.extract_expr_list(left)?.into_iter();
                        (bound.next(), bound.next(), Some(self.define_or_assign(&clause)))
                    }
                    None => (None, None, None),
                };
                let right = self.base.required(&clause, "right")?;
                StmtKind::Range {
                    key,
                    value,
                    op,
                    x: self.extract_expr(right)?,
                    body: self.extract_block(body_node)?,
                }
            }
            // for cond {}
            Some(cond) => StmtKind::For {
                init: None,
                cond: Some(self.extract_expr(cond)?),
                post: None,
                body: self.extract_block(body_node)?,
            },
        };
        Ok(kind)
    }

    /// `switch [init;] [x :=] y.(type) { ... }`
    fn extract_type_switch(&mut self, node: Node) -> Result<StmtKind, ExtractError> {
        let init = self.extract_opt_stmt(node.child_by_field_name("initializer"))?;
        let value = self.base.required(&node, "value")?;

        // the guard ends at the `)` closing `.(type)`
        let guard_end = self
            .base
            .find_child_by_type(&node, "type")
            .and_then(|keyword| keyword.next_sibling())
            .map(|paren| BaseExtractor::span(&paren).end)
            .unwrap_or_else(|| BaseExtractor::span(&value).end);

        let x = self.extract_expr(value)?;
        let assert_span = Span::new(x.span.start, guard_end);
        let assert = self.make_expr(
            assert_span,
            ExprKind::TypeAssert {
                x: Box::new(x),
                ty: None,
            },
        );

        let assign = match node.child_by_field_name("alias") {
            Some(alias) => {
                let lhs = self.extract_expr_list(alias)?;
                let start = lhs.first().map_or(assert_span.start, |e| e.span.start);
                Stmt::new(
                    Span::new(start, guard_end),
                    StmtKind::Assign {
                        lhs,
                        op: AssignOp::Define,
                        rhs: vec![assert],
                    },
                )
            }
            None => Stmt::new(assert_span, StmtKind::Expr(assert)),
        };

        Ok(StmtKind::TypeSwitch {
            init,
            assign: Box::new(assign),
            body: self.extract_clause_block(&node, ClauseContext::Switch)?,
        })
    }

    /// The braced clause list of a switch or select, as a block of clauses
    fn extract_clause_block(
        &mut self,
        node: &Node,
        context: ClauseContext,
    ) -> Result<Block, ExtractError> {
        let mut stmts = Vec::new();
        for clause in self.base.named_children(node) {
            let kind = match (clause.kind(), context) {
                ("expression_case" | "type_case" | "default_case", ClauseContext::Switch) => {
                    let list = self.extract_case_list(&clause)?;
                    StmtKind::CaseClause {
                        list,
                        body: self.extract_clause_body(&clause)?,
                    }
                }
                ("communication_case", ClauseContext::Select) => {
                    let comm = self.base.required(&clause, "communication")?;
                    StmtKind::CommClause {
                        comm: Some(Box::new(self.extract_stmt(comm)?)),
                        body: self.extract_clause_body(&clause)?,
                    }
                }
                ("default_case", ClauseContext::Select) => StmtKind::CommClause {
                    comm: None,
                    body: self.extract_clause_body(&clause)?,
                },
                // header parts (initializer, tag, guard) are not clauses
                _ if clause.start_byte() < self.open_brace_byte(node) => continue,
                _ => return Err(self.base.unsupported(&clause)),
            };
            stmts.push(Stmt::new(BaseExtractor::span(&clause), kind));
        }

        Ok(Block {
            stmts,
            span: self.delimited_span(node, "{", "}"),
        })
    }

    fn open_brace_byte(&self, node: &Node) -> usize {
        self.base
            .find_child_by_type(node, "{")
            .map_or(0, |brace| brace.start_byte())
    }

    fn extract_case_list(&mut self, clause: &Node) -> Result<Vec<Expr>, ExtractError> {
        match clause.kind() {
            "expression_case" => {
                let value = self.base.required(clause, "value")?;
                self.extract_expr_list(value)
            }
            "type_case" => self
                .base
                .children_by_field(clause, "type")
                .into_iter()
                .map(|ty| self.extract_expr(ty))
                .collect(),
            _ => Ok(Vec::new()),
        }
    }

    /// Statements after the clause's `:`
    fn extract_clause_body(&mut self, clause: &Node) -> Result<Vec<Stmt>, ExtractError> {
        let body = self.base.named_children_after(clause, ":");
        self.extract_stmt_sequence(&body)
    }
}
