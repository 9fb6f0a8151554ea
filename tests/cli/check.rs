use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_missing_space_line_comment() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "const a = 1; //bad\n")?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Expected space or tab after // in comment."  spaced-comment
      --> ./src/app.js:1:14
      |
    1 | const a = 1; //bad
      |              ^

    ✘ 1 problem (1 error)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_clean_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a.js", "// fine\n/* fine */\n/*\n * doc\n */\nlet a;\n")?;
    test.write_file("src/b.ts", "//\nexport const b: number = 1; // ok\n")?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 2 source files - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_wide_characters_before_comment() -> Result<()> {
    let test = CliTest::with_file("a.js", "const s = \"你好\"; //x\n")?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Expected space or tab after // in comment."  spaced-comment
      --> ./a.js:1:17
      |
    1 | const s = "你好"; //x
      |                   ^

    ✘ 1 problem (1 error)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_block_comment_in_tsx() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"export function App() {
  return <div>{/*label*/}</div>;
}
"#,
    )?;

    let result = run(test.check_command())?;

    assert_eq!(result.code, Some(1));
    assert!(
        result
            .stdout
            .contains("\"Expected space or tab after /* in comment.\"")
    );
    assert!(result.stdout.contains("./src/app.tsx:2:16"));

    Ok(())
}

#[test]
fn test_never_mode_from_cli() -> Result<()> {
    let test = CliTest::with_file("a.js", "//tight\n// loose\n/*\nnewline */\n")?;

    let result = run({
        let mut cmd = test.check_command();
        cmd.args(["--mode", "never"]);
        cmd
    })?;

    assert_eq!(result.code, Some(1));
    assert!(
        result
            .stdout
            .contains("\"Unexpected space or tab after // in comment.\"")
    );
    assert!(result.stdout.contains("./a.js:2:1"));
    assert!(result.stdout.contains("1 problem (1 error)"));

    Ok(())
}

#[test]
fn test_exceptions_from_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".spacedcommentrc.json",
        r#"{ "spacedComment": ["always", { "exceptions": ["-", "="] }] }"#,
    )?;
    test.write_file("a.js", "//------\n//======\n//-=-=\n/*----*/\nlet a;\n")?;

    let result = run(test.check_command())?;

    assert_eq!(result.code, Some(1));
    assert!(
        result
            .stdout
            .contains("\"Expected exception block, space or tab after // in comment.\"")
    );
    assert!(result.stdout.contains("./a.js:3:1"));
    assert!(result.stdout.contains("1 problem (1 error)"));

    Ok(())
}

#[test]
fn test_exceptions_from_cli() -> Result<()> {
    let test = CliTest::with_file("a.js", "//********\nlet a;\n")?;

    let result = run({
        let mut cmd = test.check_command();
        cmd.args(["--exception", "*"]);
        cmd
    })?;

    assert_eq!(result.code, Some(0), "stdout: {}", result.stdout);

    Ok(())
}

#[test]
fn test_positional_paths() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a.js", "// ok\n")?;
    test.write_file("legacy/b.js", "//bad\n")?;

    let result = run({
        let mut cmd = test.check_command();
        cmd.arg("src");
        cmd
    })?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Checked 1 source file - no issues found"));

    Ok(())
}

#[test]
fn test_default_ignores_skip_node_modules() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("node_modules/pkg/index.js", "//bad\n")?;
    test.write_file("dist/bundle.js", "//bad\n")?;
    test.write_file("src/a.js", "// ok\n")?;

    let result = run(test.check_command())?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Checked 1 source file"));

    Ok(())
}

#[test]
fn test_parse_error_is_reported() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("bad.js", "let = ;\n")?;
    test.write_file("good.js", "// ok\n")?;

    let result = run(test.check_command())?;

    assert_eq!(result.code, Some(1));
    assert!(result.stdout.contains("parse-error"));
    assert!(result.stdout.contains("--> ./bad.js\n"));
    assert!(result.stderr.contains("1 file(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".spacedcommentrc.json",
        r#"{ "spacedComment": ["always", { "exceptions": "-" }] }"#,
    )?;
    test.write_file("a.js", "//bad\n")?;

    let result = run(test.check_command())?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("Failed to parse config file"));
    assert!(result.stdout.is_empty());

    Ok(())
}

#[test]
fn test_invalid_mode_flag_is_rejected() -> Result<()> {
    let test = CliTest::new()?;

    let result = run({
        let mut cmd = test.check_command();
        cmd.args(["--mode", "sometimes"]);
        cmd
    })?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("sometimes"));

    Ok(())
}

#[test]
fn test_source_root() -> Result<()> {
    let test = CliTest::with_file("web/src/a.js", "//bad\n")?;

    let result = run({
        let mut cmd = test.check_command();
        cmd.args(["--source-root", "web"]);
        cmd
    })?;

    assert_eq!(result.code, Some(1));
    assert!(result.stdout.contains("web/src/a.js:1:1"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let result = run({
        let mut cmd = test.check_command();
        cmd.arg("--help");
        cmd
    })?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("--mode <MODE>"));
    assert!(result.stdout.contains("--exception <STR>"));

    Ok(())
}
