//! End-to-end tests for the namegoto binary

use std::path::PathBuf;
use std::process::Command;

use pretty_assertions::assert_eq;

const CATALOG: &str = r#"[
    "foo/bar/index.html",
    "bar/foo/index.html",
    {"short_name": "IndexUtil", "full_name": "lib/IndexUtil", "in_project": false},
    "src/reindex.rs"
]"#;

/// Write the catalog to a per-test file under the system temp directory
fn catalog_file(test: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "namegoto-{}-{}.json",
        test,
        std::process::id()
    ));
    std::fs::write(&path, CATALOG).unwrap();
    path
}

fn namegoto(catalog: &PathBuf, pattern: &str, vars: &[(&str, &str)]) -> (bool, String) {
    let mut command = Command::new(env!("CARGO_BIN_EXE_namegoto"));
    command
        .arg(catalog)
        .arg(pattern)
        .env("NAMEGOTO_SEPARATORS", "/");
    for (key, value) in vars {
        command.env(key, value);
    }
    let output = command.output().unwrap();
    (
        output.status.success(),
        String::from_utf8(output.stdout).unwrap(),
    )
}

#[test]
fn test_qualified_search_ranks_closer_directory_first() {
    let catalog = catalog_file("qualified");
    let (ok, stdout) = namegoto(&catalog, "foo/index", &[]);
    std::fs::remove_file(&catalog).unwrap();

    assert!(ok);
    assert_eq!(stdout, "bar/foo/index.html\nfoo/bar/index.html\n");
}

#[test]
fn test_search_anywhere_and_external_symbols() {
    let catalog = catalog_file("anywhere");
    let (ok, stdout) = namegoto(
        &catalog,
        "index",
        &[
            ("NAMEGOTO_SEARCH_ANYWHERE", "true"),
            ("NAMEGOTO_INCLUDE_NON_PROJECT", "true"),
            ("NAMEGOTO_LIMIT", "3"),
        ],
    );
    std::fs::remove_file(&catalog).unwrap();

    assert!(ok);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec!["bar/foo/index.html", "foo/bar/index.html", "lib/IndexUtil"]
    );
}

#[test]
fn test_empty_pattern_fails() {
    let catalog = catalog_file("empty");
    let (ok, stdout) = namegoto(&catalog, "", &[]);
    std::fs::remove_file(&catalog).unwrap();

    assert!(!ok);
    assert!(stdout.is_empty());
}

#[test]
fn test_missing_arguments_fail() {
    let output = Command::new(env!("CARGO_BIN_EXE_namegoto"))
        .output()
        .unwrap();
    assert!(!output.status.success());
}
