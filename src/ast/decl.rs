// Declarations, compilation units and packages

use std::path::PathBuf;

use super::expr::{BasicLit, CommentGroup, Expr, FieldList, FuncType, Ident};
use super::span::Span;
use super::stmt::Block;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKeyword {
    Import,
    Const,
    Type,
    Var,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportSpec {
    pub doc: Option<CommentGroup>,
    pub name: Option<Ident>,
    pub path: BasicLit,
    pub comment: Option<CommentGroup>,
    pub span: Span,
}

/// A constant or variable spec
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSpec {
    pub doc: Option<CommentGroup>,
    pub names: Vec<Ident>,
    pub ty: Option<Expr>,
    pub values: Vec<Expr>,
    pub comment: Option<CommentGroup>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    pub doc: Option<CommentGroup>,
    pub name: Ident,
    /// `type A = B`
    pub alias: bool,
    pub ty: Expr,
    pub comment: Option<CommentGroup>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Spec {
    Import(ImportSpec),
    Value(ValueSpec),
    Type(TypeSpec),
}

/// `import`, `const`, `type` or `var`, grouped or not
#[derive(Debug, Clone, PartialEq)]
pub struct GenDecl {
    pub doc: Option<CommentGroup>,
    pub keyword: DeclKeyword,
    pub specs: Vec<Spec>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub doc: Option<CommentGroup>,
    pub recv: Option<FieldList>,
    pub name: Ident,
    pub ty: FuncType,
    /// `None` for external (body-less) declarations
    pub body: Option<Block>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Bad(Span),
    Gen(GenDecl),
    Func(FuncDecl),
}

/// One compilation unit
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    pub doc: Option<CommentGroup>,
    pub package_name: Ident,
    pub path: PathBuf,
    pub decls: Vec<Decl>,
    pub span: Span,
}

/// An aggregate of compilation units sharing a package name and directory
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub name: String,
    pub files: Vec<File>,
}
