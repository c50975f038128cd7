// Expression → static type bindings
//
// A binding table is produced once per package by a `Resolver` and is then
// read by the walker. Expressions the resolver knows nothing about are simply
// absent; the walker emits no type attributes for them.

use std::collections::HashMap;
use std::fmt;

use crate::ast::{ExprId, Package};
use crate::error::ResolveError;

/// How an expression denotes its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Constant,
    Variable,
    /// A map index, type assertion or receive usable in a two-value assignment
    CommaOk,
    Builtin,
    Type,
    Invalid,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Constant => "constant",
            Mode::Variable => "variable",
            Mode::CommaOk => "value,ok",
            Mode::Builtin => "builtin",
            Mode::Type => "type",
            Mode::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Canonical type string, e.g. `untyped int` or `[]string`
    pub ty: String,
    pub mode: Mode,
}

impl Binding {
    pub fn new(ty: impl Into<String>, mode: Mode) -> Self {
        Self {
            ty: ty.into(),
            mode,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BindingTable {
    entries: HashMap<ExprId, Binding>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: ExprId, binding: Binding) {
        self.entries.insert(id, binding);
    }

    pub fn get(&self, id: ExprId) -> Option<&Binding> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Supplies static type information for one package at a time
pub trait Resolver: Send + Sync {
    fn resolve(&self, package: &Package) -> Result<BindingTable, ResolveError>;
}
