use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created ./.spacedcommentrc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".spacedcommentrc.json").exists());

    let content = test.read_file(".spacedcommentrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["spacedComment"], json!(["always"]));
    assert_eq!(parsed["includes"], json!([]));
    assert_eq!(
        parsed["ignores"],
        json!(["**/node_modules/**", "**/dist/**"])
    );

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".spacedcommentrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: .spacedcommentrc.json already exists
    ");
    assert_eq!(test.read_file(".spacedcommentrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("src/app.js", "// ok\n")?;

    let result = run(test.check_command())?;
    assert_eq!(
        result.code,
        Some(0),
        "Check command should work with initialized config. stderr: {}",
        result.stderr
    );

    Ok(())
}
