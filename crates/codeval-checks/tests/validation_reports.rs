//! End-to-end validation runs over temporary Python trees.

use codeval_checks::default_checks;
use codeval_core::{Analyzer, Config};
use codeval_python::PythonParser;
use std::fmt::Write;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn analyzer_with(root: &Path, out: &Path, config: Config) -> Analyzer {
    let mut builder = Analyzer::builder()
        .root(root)
        .parser(PythonParser::new())
        .config(config)
        .output_dir(out);
    for check in default_checks() {
        builder = builder.check_box(check);
    }
    builder.build().unwrap()
}

fn analyzer(root: &Path, out: &Path) -> Analyzer {
    analyzer_with(root, out, Config::default())
}

struct Workspace {
    _tmp: TempDir,
    src: std::path::PathBuf,
    out: std::path::PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let out = tmp.path().join("out");
        fs::create_dir_all(&src).unwrap();
        Self {
            _tmp: tmp,
            src,
            out,
        }
    }

    fn write(&self, rel: &str, content: &str) {
        let path = self.src.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn report(&self, name: &str) -> String {
        fs::read_to_string(self.out.join(format!("{name}_validation_output.md"))).unwrap()
    }
}

#[test]
fn clean_file_checks_every_box() {
    let ws = Workspace::new();
    ws.write(
        "clean.py",
        "# Module description\nimport os\n\n\n# Adds two numbers.\ndef add(a, b):\n    return a + b\n",
    );

    let summary = analyzer(&ws.src, &ws.out).analyze();
    assert_eq!(summary.reports.len(), 1);
    assert_eq!(summary.total_violations(), 0);

    insta::assert_snapshot!(ws.report("clean.py"), @r"
    # Code Validation: clean.py

    ## Standards

     - [X] The file parses as valid Python source
     - [X] The file has a header (comment or docstring) explaining what it does
     - [X] The file is at most 2000 lines long
     - [X] Imports never use `*`; only import what you need
     - [X] Every line is at most 150 characters long
     - [X] Every class has a header (comment above or docstring below the definition)
     - [X] Every function has a header (comment above or docstring below the definition)
     - [X] Every function is at most 40 lines long
     - [X] Every variable name is at most 25 characters long

    ## Wildcard Imports

    None :)

    ## Lines Longer Than 150 Characters

    None :)

    ## Classes Without Headers

    None :)

    ## Functions Without Headers

    None :)

    ## Functions Longer Than 40 Lines

    None :)

    ## Variable Names Longer Than 25 Characters

    None :)
    ");
}

#[test]
fn long_function_is_listed() {
    let ws = Workspace::new();
    let mut src = String::from("# Long module\n\n# Does too much.\ndef busy():\n    \"\"\"Docs are free.\"\"\"\n");
    for i in 0..45 {
        let _ = writeln!(src, "    v{i} = {i}");
    }
    src.push_str("    # trailing note\n\n# Short.\ndef idle():\n    pass\n");
    ws.write("busy.py", &src);

    let summary = analyzer(&ws.src, &ws.out).analyze();
    let violations = &summary.reports[0].violations;
    assert_eq!(violations.lengthy_functions, vec!["busy"]);

    let report = ws.report("busy.py");
    assert!(report.contains(" - [ ] Every function is at most 40 lines long"));
    assert!(report.contains("## Functions Longer Than 40 Lines\n\n - [ ] busy\n"));
}

#[test]
fn wildcard_import_is_listed_and_plain_import_is_not() {
    let ws = Workspace::new();
    ws.write("star.py", "# Star\nfrom os import *\nimport os, sys, re\n");

    let summary = analyzer(&ws.src, &ws.out).analyze();
    assert_eq!(summary.reports[0].violations.invalid_imports, vec!["os"]);
    assert!(ws
        .report("star.py")
        .contains("## Wildcard Imports\n\n - [ ] os\n"));
}

#[test]
fn class_header_must_touch_the_definition() {
    let ws = Workspace::new();
    ws.write(
        "shapes.py",
        "# Shapes\n\n# Represents a circle.\nclass Circle:\n    pass\n\n# Represents a square.\n\nclass Square:\n    pass\n",
    );

    let summary = analyzer(&ws.src, &ws.out).analyze();
    assert_eq!(summary.reports[0].violations.headless_classes, vec!["Square"]);
    let report = ws.report("shapes.py");
    assert!(report.contains(" - [ ] Every class has a header"));
    assert!(report.contains("## Classes Without Headers\n\n - [ ] Square\n"));
}

#[test]
fn line_length_boundary() {
    let ws = Workspace::new();
    let at_limit = format!("a = '{}'", "x".repeat(144));
    let over_limit = format!("b = '{}'", "x".repeat(145));
    assert_eq!(at_limit.chars().count(), 150);
    assert_eq!(over_limit.chars().count(), 151);
    ws.write("wide.py", &format!("# Wide\n{at_limit}\n{over_limit}\n"));

    let summary = analyzer(&ws.src, &ws.out).analyze();
    assert_eq!(summary.reports[0].violations.lengthy_lines, vec![3]);
    assert!(ws.report("wide.py").contains(" - [ ] Line Number - 3\n"));
}

#[test]
fn empty_file_produces_no_report() {
    let ws = Workspace::new();
    ws.write("empty.py", "");
    ws.write("one.py", "# One\n");

    let summary = analyzer(&ws.src, &ws.out).analyze();
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.reports.len(), 1);
    assert!(!ws.out.join("empty.py_validation_output.md").exists());
}

#[test]
fn syntax_error_keeps_text_checks() {
    let ws = Workspace::new();
    let long = format!("x = '{}'", "y".repeat(200));
    ws.write(
        "broken.py",
        &format!("# Broken\ndef broken(:\n    pass\n{long}\nfrom os import *\n"),
    );
    ws.write("fine.py", "# Fine\nx = 1\n");

    let summary = analyzer(&ws.src, &ws.out).analyze();
    assert!(!summary.has_failures());
    assert_eq!(summary.reports.len(), 2);
    assert_eq!(summary.parse_errors(), 1);

    let report = ws.report("broken.py");
    assert!(report.contains(" - [ ] The file parses as valid Python source"));
    assert!(report.contains(" - [ ] Line Number - 4\n"));
    assert!(report.contains(" - [ ] os\n"));
    assert!(report.contains("## Functions Without Headers\n\nNone :)"));
    assert!(ws
        .report("fine.py")
        .contains(" - [X] The file parses as valid Python source"));
}

#[test]
fn exempt_names_never_listed() {
    let ws = Workspace::new();
    let mut src = String::from("# Widgets\n\n# A widget.\nclass Widget:\n    def __init__(self):\n");
    for i in 0..50 {
        let _ = writeln!(src, "        self.v{i} = {i}");
    }
    src.push_str("\n    # Show it.\n    def show(self):\n        THIS_IS_A_VERY_LONG_CONSTANT_NAME = 1\n        # {}\n        return THIS_IS_A_VERY_LONG_CONSTANT_NAME\n");
    src = src.replace("{}", &"c".repeat(200));
    ws.write("widget.py", &src);

    let summary = analyzer(&ws.src, &ws.out).analyze();
    assert!(summary.reports[0].violations.is_clean());
}

#[test]
fn rerun_is_byte_identical() {
    let ws = Workspace::new();
    ws.write("a.py", "from sys import *\nclass A:\n    pass\n");
    ws.write("pkg/b.py", "# B\ndef b():\n    return 1\n");

    let first = analyzer(&ws.src, &ws.out).analyze();
    let a1 = ws.report("a.py");
    let b1 = ws.report("b.py");
    let second = analyzer(&ws.src, &ws.out).analyze();

    assert_eq!(first.reports.len(), second.reports.len());
    assert_eq!(ws.report("a.py"), a1);
    assert_eq!(ws.report("b.py"), b1);
}

#[test]
fn files_do_not_share_violations() {
    let ws = Workspace::new();
    ws.write("a_bad.py", "from os import *\n");
    ws.write("b_good.py", "# Good\n");

    let summary = analyzer(&ws.src, &ws.out).analyze();
    assert_eq!(summary.reports.len(), 2);
    assert!(!summary.reports[0].violations.is_clean());
    assert!(summary.reports[1].violations.is_clean());
    assert!(ws.report("b_good.py").contains("## Wildcard Imports\n\nNone :)"));
}

#[test]
fn config_disables_checks_and_sets_thresholds() {
    let ws = Workspace::new();
    ws.write(
        "tuned.py",
        "# Tuned\nfrom os import *\nabcdefghij = 1\n",
    );
    let config = Config::parse(
        r#"
[thresholds]
max_variable_length = 5

[checks.wildcard-imports]
enabled = false
"#,
    )
    .unwrap();

    let summary = analyzer_with(&ws.src, &ws.out, config).analyze();
    let violations = &summary.reports[0].violations;
    assert!(violations.invalid_imports.is_empty());
    assert_eq!(violations.lengthy_variables, vec![3]);

    let report = ws.report("tuned.py");
    assert!(report.contains(" - [X] Imports never use `*`"));
    assert!(report.contains("at most 5 characters long"));
}

#[test]
fn excluded_directories_are_skipped() {
    let ws = Workspace::new();
    ws.write("keep.py", "# Keep\n");
    ws.write("__pycache__/cached.py", "x = 1\n");
    ws.write(".venv/lib/site.py", "x = 1\n");
    ws.write("notes.txt", "not python\n");

    let summary = analyzer(&ws.src, &ws.out).analyze();
    assert_eq!(summary.files_seen(), 1);
    assert!(summary.reports[0].source.ends_with("keep.py"));
}
