// Base extractor shared by the lowering passes
//
// - extractor.rs: BaseExtractor (source text, positions, typed errors)
// - tree_methods.rs: tree navigation helpers

pub mod extractor;
pub mod tree_methods;

pub use extractor::BaseExtractor;
