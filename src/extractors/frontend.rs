//! Go front end - discovery, parsing and structural checks
//!
//! Walks a source tree, parses every `.go` file with tree-sitter-go, reports
//! structural errors as diagnostics, and groups the clean files into packages
//! keyed by (directory, declared package name). Lowering to the closed syntax
//! tree happens per package, on demand, so it can run on the worker that
//! serializes the package.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use tree_sitter::{Language, Node, Parser, Tree};
use walkdir::{DirEntry, WalkDir};

use crate::ast::{self, Span};
use crate::diagnostics::Diagnostic;
use crate::error::{ExtractError, Result};
use crate::extractors::base::BaseExtractor;
use crate::extractors::go::GoExtractor;

/// Longest offending token quoted in a syntax error message
const MAX_TOKEN_LEN: usize = 24;

/// One parsed compilation unit
pub struct ParsedFile {
    pub path: PathBuf,
    pub source: String,
    pub tree: Tree,
}

/// Parsed files sharing a directory and a package name, ordered by file name
pub struct ParsedPackage {
    pub name: String,
    pub dir: PathBuf,
    pub files: Vec<ParsedFile>,
}

impl ParsedPackage {
    /// Lower every file into one `ast::Package`, numbering expressions
    /// across the whole package
    pub fn lower(&self) -> Result<ast::Package> {
        let mut next_id = 0;
        let mut files = Vec::with_capacity(self.files.len());

        for parsed in &self.files {
            let mut extractor = GoExtractor::new(parsed.path.clone(), &parsed.source, next_id);
            let file = extractor.extract_file(&parsed.tree)?;
            debug!(
                "Lowered {} ({} declarations)",
                parsed.path.display(),
                file.decls.len()
            );
            next_id = extractor.next_id();
            files.push(file);
        }

        Ok(ast::Package {
            name: self.name.clone(),
            files,
        })
    }
}

/// Everything the front end learned about one source tree
#[derive(Default)]
pub struct ParseOutcome {
    pub packages: Vec<ParsedPackage>,
    /// Structural errors, sorted by file then position
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

pub struct GoFrontEnd {
    language: Language,
}

impl Default for GoFrontEnd {
    fn default() -> Self {
        Self::new()
    }
}

impl GoFrontEnd {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_go::LANGUAGE.into(),
        }
    }

    /// Every `.go` file under `root`, in sorted order.
    ///
    /// Directories named `testdata` or starting with `.` or `_` are skipped,
    /// as the Go tool skips them. The root itself is never skipped.
    pub fn discover(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_ignored_dir(entry));

        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == "go")
            {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    pub fn parse_source(&self, path: &Path, source: String) -> Result<ParsedFile> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)?;
        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| ExtractError::ParseAborted(path.to_path_buf()))?;

        debug!("Parsed {} ({} bytes)", path.display(), source.len());
        Ok(ParsedFile {
            path: path.to_path_buf(),
            source,
            tree,
        })
    }

    /// Discover, parse and group the tree under `root`
    pub fn parse_tree(&self, root: &Path) -> Result<ParseOutcome> {
        let mut outcome = ParseOutcome::default();
        let mut groups: BTreeMap<(PathBuf, String), Vec<ParsedFile>> = BTreeMap::new();

        for path in self.discover(root)? {
            let bytes = fs::read(&path).map_err(|e| ExtractError::ReadSource {
                path: path.clone(),
                source: e,
            })?;
            let source = match String::from_utf8(bytes) {
                Ok(source) => source,
                Err(_) => {
                    outcome
                        .diagnostics
                        .push(Diagnostic::at("illegal UTF-8 encoding", path, Span::NONE));
                    continue;
                }
            };

            let parsed = self.parse_source(&path, source)?;
            let errors = structural_errors(&parsed);
            if !errors.is_empty() {
                outcome.diagnostics.extend(errors);
                continue;
            }

            match package_name(&parsed) {
                Some(name) => {
                    let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
                    groups.entry((dir, name)).or_default().push(parsed);
                }
                None => outcome.diagnostics.push(Diagnostic::at(
                    "expected 'package' clause",
                    path,
                    Span::NONE,
                )),
            }
        }

        outcome.diagnostics.sort_by(Diagnostic::sort_key_cmp);
        outcome.packages = groups
            .into_iter()
            .map(|((dir, name), files)| ParsedPackage { name, dir, files })
            .collect();
        Ok(outcome)
    }
}

fn is_ignored_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name.starts_with('_') || name == "testdata"
}

/// The declared package name, if the file has a package clause
fn package_name(file: &ParsedFile) -> Option<String> {
    let base = BaseExtractor::new(file.path.clone(), &file.source);
    let root = file.tree.root_node();
    let clause = base.find_child_by_type(&root, "package_clause")?;
    let name = base.find_child_by_type(&clause, "package_identifier")?;
    Some(base.get_node_text(&name))
}

/// ERROR and MISSING nodes of a parsed file; an ERROR subtree reports once
fn structural_errors(file: &ParsedFile) -> Vec<Diagnostic> {
    let root = file.tree.root_node();
    if !root.has_error() {
        return Vec::new();
    }

    let base = BaseExtractor::new(file.path.clone(), &file.source);
    let mut diagnostics = Vec::new();
    let mut cursor = root.walk();
    let mut visited_children = false;
    loop {
        let node = cursor.node();
        if !visited_children {
            let mut descend = node.has_error();
            if node.is_error() {
                diagnostics.push(Diagnostic::at(
                    format!("syntax error: unexpected {}", offending_token(&base, &node)),
                    file.path.clone(),
                    BaseExtractor::span(&node),
                ));
                descend = false;
            } else if node.is_missing() {
                diagnostics.push(Diagnostic::at(
                    format!("syntax error: missing {}", node.kind()),
                    file.path.clone(),
                    BaseExtractor::span(&node),
                ));
            }
            if descend && cursor.goto_first_child() {
                continue;
            }
        }
        if cursor.goto_next_sibling() {
            visited_children = false;
        } else if cursor.goto_parent() {
            visited_children = true;
        } else {
            break;
        }
    }
    diagnostics
}

/// First line of an ERROR node's text, shortened for the message
fn offending_token(base: &BaseExtractor, node: &Node) -> String {
    let text = base.get_node_text(node);
    let first = text.lines().map(str::trim).find(|line| !line.is_empty());
    match first {
        None => "newline".to_string(),
        Some(line) if line.chars().count() > MAX_TOKEN_LEN => {
            let short: String = line.chars().take(MAX_TOKEN_LEN).collect();
            format!("{short}...")
        }
        Some(line) => line.to_string(),
    }
}
