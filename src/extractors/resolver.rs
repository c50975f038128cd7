// UniverseResolver - lexical bindings for literals and predeclared names
//
// Not a type checker. Literals get their untyped constant type, and uses of
// Go's predeclared identifiers (types, constants, builtin functions) get the
// universe binding unless the package declares the same name anywhere, in
// which case the use may be shadowed and is left unbound.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::ast::visit::{self, Visitor};
use crate::ast::{Expr, ExprId, ExprKind, Ident, LitKind, Package};
use crate::binding::{Binding, BindingTable, Mode, Resolver};
use crate::error::ResolveError;

/// Predeclared identifiers of the universe block: name → (type, mode)
static UNIVERSE: LazyLock<HashMap<&'static str, (&'static str, Mode)>> = LazyLock::new(|| {
    let mut universe = HashMap::new();

    for ty in [
        "any",
        "bool",
        "byte",
        "comparable",
        "complex64",
        "complex128",
        "error",
        "float32",
        "float64",
        "int",
        "int8",
        "int16",
        "int32",
        "int64",
        "rune",
        "string",
        "uint",
        "uint8",
        "uint16",
        "uint32",
        "uint64",
        "uintptr",
    ] {
        universe.insert(ty, (ty, Mode::Type));
    }

    for builtin in [
        "append", "cap", "clear", "close", "complex", "copy", "delete", "imag", "len", "make",
        "max", "min", "new", "panic", "print", "println", "real", "recover",
    ] {
        universe.insert(builtin, (builtin, Mode::Builtin));
    }

    universe.insert("true", ("untyped bool", Mode::Constant));
    universe.insert("false", ("untyped bool", Mode::Constant));
    universe.insert("iota", ("untyped int", Mode::Constant));
    universe
});

fn literal_type(kind: LitKind) -> &'static str {
    match kind {
        LitKind::Int => "untyped int",
        LitKind::Float => "untyped float",
        LitKind::Imag => "untyped complex",
        LitKind::Char => "untyped rune",
        LitKind::String => "untyped string",
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UniverseResolver;

impl UniverseResolver {
    pub fn new() -> Self {
        Self
    }
}

enum Candidate {
    Literal(LitKind),
    Name(String),
}

#[derive(Default)]
struct Collector {
    declared: HashSet<String>,
    candidates: Vec<(ExprId, Candidate)>,
    seen: HashSet<ExprId>,
    duplicate: Option<ExprId>,
}

impl Visitor for Collector {
    fn visit_expr(&mut self, expr: &Expr) {
        if !self.seen.insert(expr.id) {
            self.duplicate.get_or_insert(expr.id);
            return;
        }
        let candidate = match &expr.kind {
            ExprKind::BasicLit(lit) => Candidate::Literal(lit.kind),
            ExprKind::Ident(ident) => Candidate::Name(ident.name.clone()),
            _ => return,
        };
        self.candidates.push((expr.id, candidate));
    }

    fn visit_declared_name(&mut self, ident: &Ident) {
        self.declared.insert(ident.name.clone());
    }
}

impl Resolver for UniverseResolver {
    fn resolve(&self, package: &Package) -> Result<BindingTable, ResolveError> {
        let mut collector = Collector::default();
        for file in &package.files {
            visit::walk_file(&mut collector, file);
        }
        if let Some(id) = collector.duplicate {
            return Err(ResolveError::DuplicateExpressionId(id));
        }

        let mut table = BindingTable::new();
        for (id, candidate) in collector.candidates {
            match candidate {
                Candidate::Literal(kind) => {
                    table.insert(id, Binding::new(literal_type(kind), Mode::Constant));
                }
                Candidate::Name(name) => {
                    if collector.declared.contains(&name) {
                        continue;
                    }
                    if let Some((ty, mode)) = UNIVERSE.get(name.as_str()) {
                        table.insert(id, Binding::new(*ty, *mode));
                    }
                }
            }
        }
        Ok(table)
    }
}
