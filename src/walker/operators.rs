// Token → tag tables
//
// Each table is an exhaustive match, so a new operator variant cannot compile
// without a tag.

use crate::ast::{BinaryOp, BranchKind, ChanDir, DeclKeyword, IncDec, LitKind, UnaryOp};

pub fn binary_tag(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "Plus",
        BinaryOp::Sub => "Minus",
        BinaryOp::Mul => "Multiply",
        BinaryOp::Quo => "Divide",
        BinaryOp::Rem => "Remainder",
        BinaryOp::And => "BitwiseAnd",
        BinaryOp::Or => "BitwiseOr",
        BinaryOp::Xor => "Xor",
        BinaryOp::AndNot => "BitClear",
        BinaryOp::Shl => "ShiftLeft",
        BinaryOp::Shr => "ShiftRight",
        BinaryOp::Eql => "Equal",
        BinaryOp::Neq => "NotEqual",
        BinaryOp::Lss => "LessThan",
        BinaryOp::Leq => "LessThanOrEqual",
        BinaryOp::Gtr => "GreaterThan",
        BinaryOp::Geq => "GreaterThanOrEqual",
        BinaryOp::LogicalAnd => "And",
        BinaryOp::LogicalOr => "Or",
    }
}

pub fn unary_tag(op: UnaryOp) -> &'static str {
    match op {
        UnaryOp::AddressOf => "AddressOf",
        UnaryOp::Minus => "UnaryMinus",
        UnaryOp::Plus => "UnaryPlus",
        UnaryOp::Not => "Negation",
        UnaryOp::Recv => "Receive",
        UnaryOp::Complement => "Xor",
    }
}

pub fn literal_tag(kind: LitKind) -> &'static str {
    match kind {
        LitKind::Int => "Int",
        LitKind::Float => "Float",
        LitKind::Imag => "Imaginary",
        LitKind::String => "String",
        LitKind::Char => "Char",
    }
}

pub(super) fn branch_tag(kind: BranchKind) -> &'static str {
    match kind {
        BranchKind::Break => "BreakStatement",
        BranchKind::Continue => "ContinueStatement",
        BranchKind::Goto => "GotoStatement",
        BranchKind::Fallthrough => "FallthroughStatement",
    }
}

pub(super) fn inc_dec_tag(op: IncDec) -> &'static str {
    match op {
        IncDec::Inc => "IncrementStatement",
        IncDec::Dec => "DecrementStatement",
    }
}

pub(super) fn decl_tag(keyword: DeclKeyword) -> &'static str {
    match keyword {
        DeclKeyword::Import => "Import",
        DeclKeyword::Const => "Constant",
        DeclKeyword::Type => "Type",
        DeclKeyword::Var => "Var",
    }
}

pub(super) fn chan_direction(dir: ChanDir) -> &'static str {
    match dir {
        ChanDir::Both => "both",
        ChanDir::Send => "send",
        ChanDir::Recv => "receive",
    }
}
