use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run(workdir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_highlights2md"))
        .current_dir(workdir)
        .args(args)
        .output()
        .expect("run highlights2md")
}

fn workspace() -> tempfile::TempDir {
    let root = tempfile::tempdir().expect("tempdir");
    fs::create_dir_all(root.path().join("data")).expect("data dir");
    fs::create_dir_all(root.path().join("output")).expect("output dir");
    root
}

#[test]
fn highlight_export_is_written_to_output_dir() {
    let root = workspace();
    fs::write(
        root.path().join("data/highlights.txt"),
        "Some quote\nYellow highlight | Page: 12\n\nAuthor-Chapter 1\n\n  \nNote: remember this",
    )
    .expect("write input");

    let out = run(root.path(), &["data/highlights.txt"]);
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    let md = fs::read_to_string(root.path().join("output/highlights.md")).expect("read output");
    assert_eq!(md, "## Some quoteAuthor-Chapter 1\n- remember this");
    assert!(String::from_utf8_lossy(&out.stderr).contains("Converted data/highlights.txt"));
}

#[test]
fn quote_export_headings_follow_reversed_rows() {
    let root = workspace();
    fs::write(
        root.path().join("data/quotes.csv"),
        "chapter,quote\nThe End,Last thing I read\nThe Beginning,First thing I read\n",
    )
    .expect("write input");

    let out = run(root.path(), &["data/quotes.csv"]);
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    let md = fs::read_to_string(root.path().join("output/quotes.md")).expect("read output");
    let headings: Vec<&str> = md.lines().filter(|l| l.starts_with("## ")).collect();
    assert_eq!(headings, ["## The Beginning", "## The End"]);
}

#[test]
fn custom_output_dir() {
    let root = workspace();
    fs::create_dir_all(root.path().join("notes")).expect("notes dir");
    fs::write(root.path().join("data/book.txt"), "Only one highlight.").expect("write input");

    let out = run(root.path(), &["--output-dir", "notes", "data/book.txt"]);
    assert!(out.status.success());
    assert_eq!(
        fs::read_to_string(root.path().join("notes/book.md")).expect("read output"),
        "Only one highlight."
    );
}

#[test]
fn unsupported_extension_fails() {
    let root = workspace();
    fs::write(root.path().join("data/book.epub"), "binary").expect("write input");

    let out = run(root.path(), &["data/book.epub"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Unsupported export format"));
    assert_eq!(
        fs::read_dir(root.path().join("output")).expect("list output").count(),
        0
    );
}

#[test]
fn missing_input_fails() {
    let root = workspace();

    let out = run(root.path(), &["data/absent.txt"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Failed to read export"));
}

#[test]
fn missing_output_dir_fails() {
    let root = tempfile::tempdir().expect("tempdir");
    fs::create_dir_all(root.path().join("data")).expect("data dir");
    fs::write(root.path().join("data/highlights.txt"), "A highlight.").expect("write input");

    let out = run(root.path(), &["data/highlights.txt"]);
    assert!(!out.status.success());
    assert!(!root.path().join("output").exists());
}

#[test]
fn malformed_quote_table_fails() {
    let root = workspace();
    fs::write(root.path().join("data/quotes.csv"), "title,text\nA,B\n").expect("write input");

    let out = run(root.path(), &["data/quotes.csv"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Failed to parse quote table"));
    assert!(!root.path().join("output/quotes.md").exists());
}
