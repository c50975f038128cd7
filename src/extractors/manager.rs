//! ExtractorManager - batch coordinator for one source tree
//!
//! Validates the source and target directories, runs the front end, and then
//! either writes the diagnostics document (when the tree has structural
//! errors) or extracts every package into its own XML document. Packages are
//! independent and are extracted in parallel.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, error, info, warn};

use super::frontend::{GoFrontEnd, ParsedPackage};
use super::resolver::UniverseResolver;
use crate::binding::Resolver;
use crate::diagnostics;
use crate::document::Document;
use crate::error::{ExtractError, Result};
use crate::utils::paths::{
    check_directory, create_directory, package_output_path, to_relative_unix_style,
};
use crate::walker::Walker;

/// Options for an extraction run
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Embed each file's base64-encoded bytes as `File/@Source`
    pub embed_source: bool,
    /// Extract packages on the rayon pool instead of one by one
    pub parallel: bool,
    /// Name of the diagnostics document written into the target root
    pub diagnostics_file_name: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            embed_source: true,
            parallel: true,
            diagnostics_file_name: "errors.xml".to_string(),
        }
    }
}

/// What a run produced
#[derive(Debug, Default)]
pub struct ExtractSummary {
    /// Package documents written, in package order
    pub written: Vec<PathBuf>,
    /// Packages that failed, with the reason
    pub failed: Vec<(String, ExtractError)>,
    /// Structural errors reported (zero when packages were extracted)
    pub diagnostics: usize,
    /// The diagnostics document, when one was written
    pub diagnostics_file: Option<PathBuf>,
}

impl ExtractSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct ExtractorManager {
    config: ExtractorConfig,
    front_end: GoFrontEnd,
    resolver: Arc<dyn Resolver>,
}

impl Default for ExtractorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorManager {
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    pub fn with_config(config: ExtractorConfig) -> Self {
        Self {
            config,
            front_end: GoFrontEnd::new(),
            resolver: Arc::new(UniverseResolver::new()),
        }
    }

    /// Replace the binding provider used for `Type`/`Mode` attributes
    pub fn with_resolver(mut self, resolver: Arc<dyn Resolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract the tree under `source` into `target`.
    ///
    /// Input errors (bad source, uncreatable target) and front-end failures
    /// are returned as `Err`. Per-package failures are collected in the
    /// summary so the remaining packages are still written.
    pub fn extract(&self, source: &Path, target: &Path) -> Result<ExtractSummary> {
        check_directory(source)?;
        create_directory(target)?;

        let outcome = self.front_end.parse_tree(source)?;
        let diagnostics_path = target.join(&self.config.diagnostics_file_name);
        let mut summary = ExtractSummary::default();

        if let Some(doc) = diagnostics::build_document(&outcome.diagnostics) {
            write_document(&doc, &diagnostics_path)?;
            info!(
                "Found {} structural errors; wrote {}",
                outcome.diagnostics.len(),
                diagnostics_path.display()
            );
            summary.diagnostics = outcome.diagnostics.len();
            summary.diagnostics_file = Some(diagnostics_path);
            return Ok(summary);
        }

        if diagnostics_path.exists() {
            if let Err(e) = fs::remove_file(&diagnostics_path) {
                warn!(
                    "Failed to remove stale {}: {}",
                    diagnostics_path.display(),
                    e
                );
            }
        }

        debug!("Extracting {} packages", outcome.packages.len());
        let results: Vec<(String, Result<PathBuf>)> = if self.config.parallel {
            outcome
                .packages
                .into_par_iter()
                .map(|package| {
                    let result = self.extract_package(source, target, &package);
                    (package.name, result)
                })
                .collect()
        } else {
            outcome
                .packages
                .into_iter()
                .map(|package| {
                    let result = self.extract_package(source, target, &package);
                    (package.name, result)
                })
                .collect()
        };

        for (name, result) in results {
            match result {
                Ok(path) => summary.written.push(path),
                Err(e) => {
                    error!("Failed to extract package {}: {}", name, e);
                    summary.failed.push((name, e));
                }
            }
        }

        info!(
            "Extracted {} packages ({} failed) into {}",
            summary.written.len(),
            summary.failed.len(),
            target.display()
        );
        Ok(summary)
    }

    /// Lower, walk and write one package; returns the document path
    fn extract_package(
        &self,
        source: &Path,
        target: &Path,
        package: &ParsedPackage,
    ) -> Result<PathBuf> {
        let relative_dir = to_relative_unix_style(&package.dir, source).unwrap_or_default();
        let output = package_output_path(target, &relative_dir, &package.name);

        let ast = package.lower()?;
        let mut doc = Document::new();
        Walker::walk_package(
            doc.node_mut(),
            &ast,
            Some(self.resolver.as_ref()),
            self.config.embed_source,
        )?;

        if let Some(dir) = output.parent() {
            fs::create_dir_all(dir).map_err(|e| ExtractError::CreateOutputDir {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }
        write_document(&doc, &output)?;

        info!(
            "Wrote package {} ({} files) to {}",
            package.name,
            ast.files.len(),
            output.display()
        );
        Ok(output)
    }
}

fn write_document(doc: &Document, path: &Path) -> Result<()> {
    doc.write_to_file(path).map_err(|e| ExtractError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sequential() -> ExtractorManager {
        ExtractorManager::with_config(ExtractorConfig {
            parallel: false,
            ..ExtractorConfig::default()
        })
    }

    #[test]
    fn test_default_config() {
        let config = ExtractorConfig::default();
        assert!(config.embed_source);
        assert!(config.parallel);
        assert_eq!(config.diagnostics_file_name, "errors.xml");
    }

    #[test]
    fn test_missing_source_is_an_input_error() {
        let temp = TempDir::new().unwrap();
        let result = sequential().extract(&temp.path().join("nope"), &temp.path().join("out"));
        assert!(matches!(result, Err(ExtractError::SourceNotDirectory(_))));
    }

    #[test]
    fn test_package_layout_mirrors_source_tree() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(src.path().join("main.go"), "package main\n\nfunc main() {}\n").unwrap();
        fs::create_dir_all(src.path().join("pkg/shapes")).unwrap();
        fs::write(
            src.path().join("pkg/shapes/shapes.go"),
            "package shapes\n\ntype Square struct{ Side int }\n",
        )
        .unwrap();

        let summary = sequential().extract(src.path(), out.path()).unwrap();

        assert!(summary.is_success());
        assert_eq!(
            summary.written,
            vec![
                out.path().join("main/main.xml"),
                out.path().join("pkg/shapes/shapes/shapes.xml"),
            ]
        );
        assert!(summary.written.iter().all(|p| p.is_file()));
    }

    #[test]
    fn test_unsupported_construct_fails_only_its_package() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(src.path().join("ok.go"), "package ok\n").unwrap();
        fs::create_dir_all(src.path().join("generic")).unwrap();
        fs::write(
            src.path().join("generic/g.go"),
            "package generic\n\nfunc Id[T any](x T) T { return x }\n",
        )
        .unwrap();

        let summary = sequential().extract(src.path(), out.path()).unwrap();

        assert!(!summary.is_success());
        assert_eq!(summary.written.len(), 1);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].0, "generic");
        assert!(matches!(
            summary.failed[0].1,
            ExtractError::UnsupportedConstruct { .. }
        ));
    }
}
