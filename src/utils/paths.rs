// Path helpers for the source and target directories
//
// Package directories are reported relative to the source root with `/`
// separators on every platform, and the same relative path is mirrored under
// the target directory.

use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::error::{ExtractError, Result};

/// Fail unless `path` names an existing directory
pub fn check_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(ExtractError::SourceNotDirectory(path.to_path_buf()))
    }
}

/// Create `path` and any missing parents; an existing directory is fine
pub fn create_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| ExtractError::TargetNotCreatable {
        path: path.to_path_buf(),
        source: e,
    })
}

/// `absolute` relative to `root` with `/` separators, or `None` when it is
/// not inside `root`. The root itself maps to the empty string.
pub fn to_relative_unix_style(absolute: &Path, root: &Path) -> Option<String> {
    let relative = absolute.strip_prefix(root).ok()?;
    let path_str = relative.to_str()?;

    // On Unix, MAIN_SEPARATOR is already '/'
    let unix_style = if MAIN_SEPARATOR == '\\' {
        path_str.replace('\\', "/")
    } else {
        path_str.to_string()
    };
    Some(unix_style)
}

/// `<target>/<relative dir>/<package>/<package>.xml`
pub fn package_output_path(target: &Path, relative_dir: &str, package: &str) -> PathBuf {
    let mut path = target.to_path_buf();
    for segment in relative_dir.split('/').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path.push(package);
    path.push(format!("{package}.xml"));
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_nested_directory_to_relative() {
        let root = PathBuf::from("/home/gopher/src/project");
        let dir = PathBuf::from("/home/gopher/src/project/internal/geometry");

        let result = to_relative_unix_style(&dir, &root).unwrap();

        assert_eq!(result, "internal/geometry");
        assert!(!result.contains('\\'), "Should have no backslashes");
    }

    #[test]
    fn test_root_maps_to_empty_string() {
        let root = PathBuf::from("/home/gopher/src/project");
        assert_eq!(to_relative_unix_style(&root, &root).as_deref(), Some(""));
    }

    #[test]
    fn test_directory_outside_root_rejected() {
        let root = PathBuf::from("/home/gopher/src/project");
        let outside = PathBuf::from("/etc");
        assert!(to_relative_unix_style(&outside, &root).is_none());
    }

    #[test]
    fn test_package_output_layout() {
        let target = PathBuf::from("/out");

        assert_eq!(
            package_output_path(&target, "", "main"),
            PathBuf::from("/out/main/main.xml")
        );
        assert_eq!(
            package_output_path(&target, "internal/geometry", "geometry"),
            PathBuf::from("/out/internal/geometry/geometry/geometry.xml")
        );
    }

    #[test]
    fn test_check_directory_rejects_files_and_missing_paths() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("main.go");
        fs::write(&file, "package main\n").unwrap();

        assert!(check_directory(temp.path()).is_ok());
        assert!(matches!(
            check_directory(&file),
            Err(ExtractError::SourceNotDirectory(_))
        ));
        assert!(matches!(
            check_directory(&temp.path().join("missing")),
            Err(ExtractError::SourceNotDirectory(_))
        ));
    }

    #[test]
    fn test_create_directory_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("a/b/c");

        create_directory(&target).unwrap();
        create_directory(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_create_directory_under_a_file_fails() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("occupied");
        fs::write(&file, "").unwrap();

        assert!(matches!(
            create_directory(&file.join("out")),
            Err(ExtractError::TargetNotCreatable { .. })
        ));
    }
}
