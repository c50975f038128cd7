// Expression and type nodes
//
// Go types are expressions in this model, exactly as in the source language:
// a type can appear wherever an expression can (conversions, composite literal
// types, type switch cases), so both share `Expr`.

use super::span::Span;
use super::stmt::Block;

/// Per-aggregate unique id of an expression occurrence; keys the binding table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExprId(pub u32);

/// An identifier, either standalone (names, labels) or wrapped in an `Expr`
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }

    /// Go visibility rule: exported names start with an uppercase letter
    pub fn is_exported(&self) -> bool {
        self.name.chars().next().is_some_and(|c| c.is_uppercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LitKind {
    Int,
    Float,
    Imag,
    Char,
    String,
}

/// A literal with its raw lexeme (quotes included)
#[derive(Debug, Clone, PartialEq)]
pub struct BasicLit {
    pub kind: LitKind,
    pub value: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub text: String,
    pub span: Span,
}

/// Comments with no other tokens and no empty lines between them
#[derive(Debug, Clone, PartialEq)]
pub struct CommentGroup {
    pub comments: Vec<Comment>,
}

impl CommentGroup {
    pub fn span(&self) -> Span {
        match (self.comments.first(), self.comments.last()) {
            (Some(first), Some(last)) => first.span.to(last.span),
            _ => Span::NONE,
        }
    }
}

/// A struct field, interface method, or parameter/result declaration.
/// `names` is empty for embedded fields and unnamed parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub doc: Option<CommentGroup>,
    pub names: Vec<Ident>,
    pub ty: Expr,
    pub tag: Option<BasicLit>,
    pub comment: Option<CommentGroup>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldList {
    pub fields: Vec<Field>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncType {
    pub params: Option<FieldList>,
    pub results: Option<FieldList>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `&x`
    AddressOf,
    /// `-x`
    Minus,
    /// `+x`
    Plus,
    /// `!x`
    Not,
    /// `<-x`
    Recv,
    /// `^x`
    Complement,
}

impl UnaryOp {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "&" => Some(UnaryOp::AddressOf),
            "-" => Some(UnaryOp::Minus),
            "+" => Some(UnaryOp::Plus),
            "!" => Some(UnaryOp::Not),
            "<-" => Some(UnaryOp::Recv),
            "^" => Some(UnaryOp::Complement),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Quo,
    Rem,
    And,
    Or,
    Xor,
    AndNot,
    Shl,
    Shr,
    Eql,
    Neq,
    Lss,
    Leq,
    Gtr,
    Geq,
    LogicalAnd,
    LogicalOr,
}

impl BinaryOp {
    pub fn from_token(token: &str) -> Option<Self> {
        let op = match token {
            "+" => BinaryOp::Add,
            "-" => BinaryOp::Sub,
            "*" => BinaryOp::Mul,
            "/" => BinaryOp::Quo,
            "%" => BinaryOp::Rem,
            "&" => BinaryOp::And,
            "|" => BinaryOp::Or,
            "^" => BinaryOp::Xor,
            "&^" => BinaryOp::AndNot,
            "<<" => BinaryOp::Shl,
            ">>" => BinaryOp::Shr,
            "==" => BinaryOp::Eql,
            "!=" => BinaryOp::Neq,
            "<" => BinaryOp::Lss,
            "<=" => BinaryOp::Leq,
            ">" => BinaryOp::Gtr,
            ">=" => BinaryOp::Geq,
            "&&" => BinaryOp::LogicalAnd,
            "||" => BinaryOp::LogicalOr,
            _ => return None,
        };
        Some(op)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub id: ExprId,
    pub span: Span,
    pub kind: ExprKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Placeholder for an expression the front end could not build
    Bad,
    Ident(Ident),
    BasicLit(BasicLit),
    /// `...T` in a parameter list, or `[...]` as an array length
    Ellipsis(Option<Box<Expr>>),
    FuncLit {
        ty: FuncType,
        body: Block,
    },
    CompositeLit {
        ty: Option<Box<Expr>>,
        elts: Vec<Expr>,
        incomplete: bool,
    },
    Paren(Box<Expr>),
    Selector {
        x: Box<Expr>,
        sel: Ident,
    },
    Index {
        x: Box<Expr>,
        index: Box<Expr>,
    },
    Slice {
        x: Box<Expr>,
        low: Option<Box<Expr>>,
        high: Option<Box<Expr>>,
        max: Option<Box<Expr>>,
        slice3: bool,
    },
    /// `ty` is `None` for the `x.(type)` form of a type switch
    TypeAssert {
        x: Box<Expr>,
        ty: Option<Box<Expr>>,
    },
    Call {
        fun: Box<Expr>,
        args: Vec<Expr>,
        ellipsis: bool,
    },
    /// Pointer type or dereference
    Star(Box<Expr>),
    Unary {
        op: UnaryOp,
        x: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        x: Box<Expr>,
        y: Box<Expr>,
    },
    KeyValue {
        key: Box<Expr>,
        value: Box<Expr>,
    },
    /// Slice type when `len` is `None`
    ArrayType {
        len: Option<Box<Expr>>,
        elt: Box<Expr>,
    },
    StructType {
        fields: FieldList,
        incomplete: bool,
    },
    FuncType(FuncType),
    InterfaceType {
        methods: FieldList,
        incomplete: bool,
    },
    MapType {
        key: Box<Expr>,
        value: Box<Expr>,
    },
    ChanType {
        dir: ChanDir,
        value: Box<Expr>,
    },
}

impl Expr {
    pub fn new(id: ExprId, span: Span, kind: ExprKind) -> Self {
        Self { id, span, kind }
    }

    /// The expression with any enclosing parentheses removed
    pub fn unparen(&self) -> &Expr {
        match &self.kind {
            ExprKind::Paren(inner) => inner.unparen(),
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exported_follows_first_character_case() {
        assert!(Ident::new("Println", Span::NONE).is_exported());
        assert!(Ident::new("Éclair", Span::NONE).is_exported());
        assert!(!Ident::new("println", Span::NONE).is_exported());
        assert!(!Ident::new("_Hidden", Span::NONE).is_exported());
        assert!(!Ident::new("", Span::NONE).is_exported());
    }

    #[test]
    fn test_operator_tokens() {
        assert_eq!(UnaryOp::from_token("<-"), Some(UnaryOp::Recv));
        assert_eq!(UnaryOp::from_token("*"), None);
        assert_eq!(UnaryOp::from_token("~"), None);
        assert_eq!(BinaryOp::from_token("&^"), Some(BinaryOp::AndNot));
        assert_eq!(BinaryOp::from_token("||"), Some(BinaryOp::LogicalOr));
        assert_eq!(BinaryOp::from_token("<-"), None);
    }
}
