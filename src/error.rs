//! Error types for go-extractor

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::ast::{ExprId, Pos};

/// Errors surfaced by extraction
///
/// Front-end structural errors are not represented here: they are data
/// (`diagnostics::Diagnostic`) and end up in the diagnostics document.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The source argument does not name an existing directory
    #[error("{0} is not a directory or it does not exist")]
    SourceNotDirectory(PathBuf),

    /// The target directory could not be created
    #[error("the target directory {path} could not be created: {source}")]
    TargetNotCreatable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A syntax construct with no counterpart in the node model
    #[error("{file}:{pos}: unsupported construct `{kind}`")]
    UnsupportedConstruct {
        kind: String,
        file: PathBuf,
        pos: Pos,
    },

    /// A syntax node lacks a child the node model requires
    #[error("{file}:{pos}: `{parent}` has no `{field}`")]
    MissingChild {
        parent: String,
        field: String,
        file: PathBuf,
        pos: Pos,
    },

    /// Reading a source file failed
    #[error("failed to read {path}: {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing an output document failed
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },

    /// Creating a per-package output directory failed
    #[error("failed to create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory traversal of the source tree failed
    #[error("failed to traverse source tree: {0}")]
    Walk(#[from] walkdir::Error),

    /// The Go grammar is incompatible with the linked tree-sitter runtime
    #[error("failed to load the Go grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// The parser returned no tree (cancelled or timed out)
    #[error("parser produced no tree for {0}")]
    ParseAborted(PathBuf),
}

/// Errors from building or writing an output document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("output is not valid UTF-8: {0}")]
    Encoding(String),
}

/// Errors from semantic resolution; never fatal to extraction
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Two expression occurrences share an id
    #[error("expression id {0:?} is assigned more than once")]
    DuplicateExpressionId(ExprId),

    /// Resolution of the named package failed for a resolver-specific reason
    #[error("resolution of package {package} failed: {message}")]
    Failed { package: String, message: String },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
