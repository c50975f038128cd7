//! Go front end and batch coordination
//!
//! # Architecture
//!
//! - `base` - per-file node helpers shared by the lowering passes
//! - `go` - lowers a tree-sitter-go tree into the closed syntax tree
//! - `frontend` - discovery, parsing, structural errors and package grouping
//! - `resolver` - the default `Resolver` over Go's universe block
//! - `manager` - ExtractorManager public API

pub mod base;
pub mod frontend;
pub mod go;
pub mod manager;
pub mod resolver;

pub use frontend::{GoFrontEnd, ParseOutcome, ParsedFile, ParsedPackage};
pub use go::GoExtractor;
pub use manager::{ExtractSummary, ExtractorConfig, ExtractorManager};
pub use resolver::UniverseResolver;
