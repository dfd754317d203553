use anyhow::{Context, Result};
use insta::assert_snapshot;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["locale"], "en");
    assert_eq!(parsed["selectDefinitions"], true);
    assert_eq!(parsed["messagesRoot"], "./messages");
    assert!(
        parsed.get("overrides").is_some(),
        "Config should have 'overrides' field"
    );

    // 2-space indentation
    assert!(content.contains("\n  \"locale\""));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output).trim_end(), @"✓ Created .apidoc-i18n.json");
    assert!(test.root().join(".apidoc-i18n.json").exists());

    let content = test.read_file(".apidoc-i18n.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".apidoc-i18n.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_snapshot!(stderr(&output).trim_end(), @"Error: .apidoc-i18n.json already exists");
    assert_eq!(test.read_file(".apidoc-i18n.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("messages/en.json", r#"{ "a": "A" }"#)?;

    let output = test.command().args(["resolve", "#{a}"]).output()?;
    assert!(
        output.status.success(),
        "Resolve should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert_eq!(stdout(&output), "A\n");

    Ok(())
}
