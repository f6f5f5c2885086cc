use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

/// Return a `Command` for the `marketlint` binary built by Cargo.
fn marketlint() -> Command {
    cargo_bin_cmd!("marketlint")
}

const MARKETPLACE: &str = r#"{"name":"m","owner":{"name":"a","email":"a@x.com"},"version":"1.0","plugins":[{"name":"p","source":"./plugins/p"}]}"#;
const PLUGIN: &str = r#"{"name":"p","description":"d","version":"1.0","author":{"name":"a","email":"a@x.com"}}"#;

/// Write `content` to `root/rel`, creating parent directories.
fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Create the minimal valid marketplace tree.
fn make_tree() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    write(dir.path(), ".claude-plugin/marketplace.json", MARKETPLACE);
    write(dir.path(), "plugins/p/plugin.json", PLUGIN);
    dir
}

// ── Global flags ────────────────────────────────────────────────────

#[test]
fn help_flag() {
    marketlint()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("plugin marketplace"));
}

#[test]
fn version_flag() {
    marketlint()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_args_shows_usage() {
    marketlint()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn extra_positional_is_usage_error() {
    marketlint().args(["a", "b"]).assert().code(1);
}

// ── End-to-end ──────────────────────────────────────────────────────

#[test]
fn valid_tree_passes() {
    let dir = make_tree();
    let output = marketlint().arg(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("marketplace.json is valid"));
    assert!(stdout.contains("plugin.json is valid"));
    assert_eq!(
        stdout.lines().last(),
        Some("✓ All validations passed! (2 files checked)")
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn empty_author_email_fails() {
    let dir = make_tree();
    write(
        dir.path(),
        "plugins/p/plugin.json",
        r#"{"name":"p","description":"d","version":"1.0","author":{"name":"a","email":""}}"#,
    );
    marketlint()
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("All validations passed").not())
        .stderr(predicate::str::is_match(r"ERROR in .*plugin\.json: author\.email is required").unwrap());
}

#[test]
fn marketplace_missing_owner_email_fails() {
    let dir = make_tree();
    write(
        dir.path(),
        ".claude-plugin/marketplace.json",
        r#"{"name":"m","owner":{"name":"a"},"version":"1.0","plugins":[{"name":"p","source":"s"}]}"#,
    );
    marketlint()
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("owner.email is required"))
        .stdout(predicate::str::contains("plugin.json is valid"));
}

#[test]
fn marketplace_without_plugins_fails() {
    let dir = make_tree();
    write(
        dir.path(),
        ".claude-plugin/marketplace.json",
        r#"{"name":"m","owner":{"name":"a","email":"e"},"version":"1.0","plugins":[]}"#,
    );
    marketlint()
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("at least one plugin is required"));
}

#[test]
fn missing_marketplace_is_not_an_error() {
    let dir = tempdir().unwrap();
    write(dir.path(), "plugins/p/plugin.json", PLUGIN);
    marketlint()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(1 file checked)"));
}

#[test]
fn every_problem_reported_in_one_pass() {
    let dir = make_tree();
    write(dir.path(), "plugins/p/agents/reviewer.md", "# no header\n");
    write(dir.path(), "plugins/q/plugin.json", "{ broken");
    write(dir.path(), "plugins/q/agents/open.md", "---\nname: open\n");
    write(dir.path(), "plugins/q/commands/run.md", "Run it.\n");
    let output = marketlint().arg(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stderr.contains("reviewer.md: missing YAML frontmatter"));
    assert!(stderr.contains("open.md: YAML frontmatter not properly closed"));
    assert!(stderr.contains("invalid JSON"));
    assert!(stdout.contains("run.md is valid"));
    assert_eq!(
        stderr.lines().last(),
        Some("✗ Validation failed: 3 of 6 files had errors")
    );
}

#[test]
fn command_without_frontmatter_passes() {
    let dir = make_tree();
    write(dir.path(), "plugins/p/commands/deploy.md", "Deploy the app.\n");
    marketlint()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("deploy.md is valid"));
}

#[test]
fn agent_without_frontmatter_fails() {
    let dir = make_tree();
    write(dir.path(), "plugins/p/agents/helper.md", "You are a helper.\n");
    marketlint()
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("helper.md: missing YAML frontmatter"));
}

#[test]
fn unrelated_markdown_is_ignored() {
    let dir = make_tree();
    write(dir.path(), "plugins/p/README.md", "# Readme\n");
    marketlint()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("README.md").not());
}

#[test]
fn missing_plugins_dir_is_fatal() {
    let dir = tempdir().unwrap();
    write(dir.path(), ".claude-plugin/marketplace.json", MARKETPLACE);
    marketlint()
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("marketplace.json is valid"))
        .stdout(predicate::str::contains("All validations passed").not())
        .stderr(predicate::str::contains("ERROR walking directory"));
}

#[test]
fn nonexistent_root_is_fatal() {
    let dir = tempdir().unwrap();
    marketlint()
        .arg(dir.path().join("nope"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ERROR walking directory"));
}

#[test]
fn repeated_runs_are_identical() {
    let dir = make_tree();
    write(dir.path(), "plugins/p/agents/a.md", "---\nname: a\n---\n");
    write(dir.path(), "plugins/p/commands/b.md", "Body\n");
    let first = marketlint().arg(dir.path()).output().unwrap();
    let second = marketlint().arg(dir.path()).output().unwrap();
    assert_eq!(first.status.code(), Some(0));
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.stderr, second.stderr);
}

#[test]
fn validation_does_not_modify_files() {
    let dir = make_tree();
    marketlint().arg(dir.path()).assert().success();
    let content = fs::read_to_string(dir.path().join("plugins/p/plugin.json")).unwrap();
    assert_eq!(content, PLUGIN);
}

// ── --format json ───────────────────────────────────────────────────

#[test]
fn json_format_lists_every_file() {
    let dir = make_tree();
    write(dir.path(), "plugins/p/agents/a.md", "no header");
    let output = marketlint()
        .args(["--format", "json"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert!(arr[0]["path"].as_str().unwrap().ends_with("marketplace.json"));
    assert_eq!(arr[0]["valid"], true);
    assert_eq!(arr[1]["valid"], false);
    assert_eq!(arr[1]["error"]["kind"], "missing_frontmatter");
    assert_eq!(arr[2]["valid"], true);
}

#[test]
fn json_format_reports_field() {
    let dir = make_tree();
    write(
        dir.path(),
        "plugins/p/plugin.json",
        r#"{"name":"p","version":"1.0"}"#,
    );
    let output = marketlint()
        .args(["--format", "json"])
        .arg(dir.path())
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let plugin = &json.as_array().unwrap()[1];
    assert_eq!(plugin["error"]["field"], "description");
    assert_eq!(plugin["error"]["message"], "description is required");
}

#[test]
fn invalid_format_value_is_usage_error() {
    let dir = make_tree();
    marketlint()
        .args(["--format", "yaml"])
        .arg(dir.path())
        .assert()
        .code(1);
}

// ── --strict ────────────────────────────────────────────────────────

#[test]
fn strict_flags_naming() {
    let dir = make_tree();
    write(dir.path(), "plugins/p/commands/Do_Thing.md", "Body\n");
    marketlint().arg(dir.path()).assert().success();
    marketlint()
        .arg("--strict")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "file name is not valid kebab-case: \"Do_Thing\"",
        ));
}

#[test]
fn strict_requires_agent_description() {
    let dir = make_tree();
    write(dir.path(), "plugins/p/agents/reviewer.md", "---\nname: reviewer\n---\nBody\n");
    marketlint()
        .arg("--strict")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("reviewer.md: description is required"));
}

#[test]
fn strict_valid_tree_passes() {
    let dir = make_tree();
    write(
        dir.path(),
        "plugins/p/agents/code-reviewer.md",
        "---\nname: code-reviewer\ndescription: Reviews code\n---\nBody\n",
    );
    write(dir.path(), "plugins/p/commands/run-tests.md", "Run the tests.\n");
    marketlint()
        .arg("--strict")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(4 files checked)"));
}

// ── logging ─────────────────────────────────────────────────────────

#[test]
fn verbose_logs_to_stderr_only() {
    let dir = make_tree();
    let output = marketlint()
        .arg("--verbose")
        .arg(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("visiting file"));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("visiting file"));
}
