// Exit codes and usage output of the go-extractor binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temporary paths are UTF-8")
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_go-extractor"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("binary runs")
}

#[test]
fn test_missing_arguments_print_usage_and_succeed() {
    let out = TempDir::new().unwrap();
    let target = path_str(out.path());
    for args in [vec![], vec!["--target", target]] {
        let output = run(&args);
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Usage"), "usage expected, got {stdout}");
        assert!(stdout.contains("--source"));
    }
}

#[test]
fn test_source_that_is_not_a_directory_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");
    let target = dir.path().join("out");

    let output = run(&["-s", path_str(&missing), "-t", path_str(&target)]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("is not a directory"), "stderr: {stderr}");
}

#[test]
fn test_successful_run_writes_documents() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(src.path().join("main.go"), "package main\n\nfunc main() {}\n").unwrap();

    let output = run(&[
        "--source",
        path_str(src.path()),
        "--target",
        path_str(out.path()),
    ]);

    assert!(output.status.success());
    assert!(out.path().join("main/main.xml").is_file());
}

#[test]
fn test_structural_errors_still_exit_zero() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(src.path().join("bad.go"), "package main\n\nfunc main( {\n").unwrap();

    let output = run(&["-s", path_str(src.path()), "-t", path_str(out.path())]);

    assert!(output.status.success());
    assert!(out.path().join("errors.xml").is_file());
}

#[test]
fn test_failed_package_exits_one_after_writing_the_rest() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(src.path().join("ok.go"), "package ok\n").unwrap();
    fs::create_dir_all(src.path().join("g")).unwrap();
    fs::write(
        src.path().join("g/g.go"),
        "package g\n\ntype List[T any] []T\n",
    )
    .unwrap();

    let output = run(&["-s", path_str(src.path()), "-t", path_str(out.path())]);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.path().join("ok/ok.xml").is_file());
    assert!(!out.path().join("g/g/g.xml").exists());
}
