// Closed syntax tree for Go compilation units
//
// The tree is produced by the front end (`extractors::go`) and consumed by the
// walker. Every node kind is a variant of a Rust enum, so consumers match
// exhaustively and an unmodelled construct can never reach serialization.
//
// - span.rs: source positions
// - expr.rs: expressions, types, fields and comments
// - stmt.rs: statements and blocks
// - decl.rs: declarations, files and packages
// - visit.rs: read-only traversal

pub mod decl;
pub mod expr;
pub mod span;
pub mod stmt;
pub mod visit;

pub use decl::{
    Decl, DeclKeyword, File, FuncDecl, GenDecl, ImportSpec, Package, Spec, TypeSpec, ValueSpec,
};
pub use expr::{
    BasicLit, BinaryOp, ChanDir, Comment, CommentGroup, Expr, ExprId, ExprKind, Field, FieldList,
    FuncType, Ident, LitKind, UnaryOp,
};
pub use span::{Pos, Span};
pub use stmt::{AssignOp, Block, BranchKind, IncDec, Stmt, StmtKind};
