// go-extractor - Go source trees as attributed XML
//
// The front end (`extractors`) parses and lowers Go files into a closed
// syntax tree (`ast`); the walker serializes each package into an element
// tree (`document`), annotated with bindings from a `Resolver`. Structural
// errors are reported through `diagnostics` instead.

pub mod ast;
pub mod binding;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod extractors;
pub mod utils;
pub mod walker;

pub use binding::{Binding, BindingTable, Mode, Resolver};
pub use diagnostics::Diagnostic;
pub use document::{Document, Element};
pub use error::{DocumentError, ExtractError, ResolveError, Result};
pub use extractors::{ExtractSummary, ExtractorConfig, ExtractorManager, GoFrontEnd, UniverseResolver};
pub use walker::Walker;
