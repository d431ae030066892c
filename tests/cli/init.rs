use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

const CONFIG_FILE: &str = ".transmarkrc.json";

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in [
        "includes",
        "ignores",
        "ignoreTestFiles",
        "ignoreAttributes",
        "ignoreTags",
        "ignoreFunctions",
    ] {
        assert!(parsed.get(field).is_some(), "Config should have '{field}'");
    }
    assert_eq!(parsed["ignoreTestFiles"], Value::Bool(true));
    assert_eq!(
        parsed["ignores"],
        serde_json::json!(["**/node_modules/**", "**/dist/**", "**/build/**"])
    );

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );
    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .transmarkrc.json

    ----- stderr -----
    ");

    assert_config_content(&test.read_file(CONFIG_FILE)?)?;
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(CONFIG_FILE, r#"{ "ignoreTags": ["Select"] }"#)?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: .transmarkrc.json already exists
    ");

    assert_eq!(
        test.read_file(CONFIG_FILE)?,
        r#"{ "ignoreTags": ["Select"] }"#
    );
    Ok(())
}

#[test]
fn test_init_output_is_loadable_by_check() -> Result<()> {
    let test = CliTest::new()?;

    let init = test.command().arg("init").output()?;
    assert!(init.status.success());
    assert!(test.root().join(CONFIG_FILE).is_file());

    test.write_file("src/app.tsx", "export const A = () => <p>Hello</p>;")?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Hello"  string-is-marked-for-translation
      --> ./src/app.tsx:1:27
      |
    1 | export const A = () => <p>Hello</p>;
      |                           ^
      = note: String is not marked for translation.

    ✘ 1 problem

    ----- stderr -----
    "#);

    Ok(())
}
