use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, sample_project, stderr, stdout};

#[test]
fn test_resolve_from_catalog() -> Result<()> {
    let test = sample_project()?;

    let output = test.command().args(["resolve", "#{user.list}"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_snapshot!(stdout(&output).trim_end(), @"List users");
    Ok(())
}

#[test]
fn test_resolve_plain_and_missing_text_unchanged() -> Result<()> {
    let test = sample_project()?;

    let output = test
        .command()
        .args(["resolve", "Just text", "#{missing.key}"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Just text\n#{missing.key}\n");
    Ok(())
}

#[test]
fn test_resolve_trims_key() -> Result<()> {
    let test = sample_project()?;

    let output = test
        .command()
        .args(["resolve", "#{  user.api  }"])
        .output()?;

    assert_eq!(stdout(&output), "User API\n");
    Ok(())
}

#[test]
fn test_resolve_locale_flag_with_fallback() -> Result<()> {
    let test = sample_project()?;

    // fr-FR -> fr for user.list, then the default locale for user.page.
    let output = test
        .command()
        .args(["resolve", "--locale", "fr_FR", "#{user.list}", "#{user.page}"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Lister les utilisateurs\nPage number\n");
    Ok(())
}

#[test]
fn test_overrides_win_over_catalog() -> Result<()> {
    let test = sample_project()?;
    test.write_file(
        ".apidoc-i18n.json",
        r#"{ "overrides": { "user.list": "Overridden" } }"#,
    )?;

    let output = test
        .command()
        .args(["resolve", "#{user.list}", "#{user.api}"])
        .output()?;

    assert_eq!(stdout(&output), "Overridden\nUser API\n");
    Ok(())
}

#[test]
fn test_config_locale() -> Result<()> {
    let test = sample_project()?;
    test.write_file(".apidoc-i18n.json", r#"{ "locale": "fr" }"#)?;

    let output = test.command().args(["resolve", "#{user.api}"]).output()?;

    assert_eq!(stdout(&output), "API utilisateur\n");
    Ok(())
}

#[test]
fn test_without_messages_is_passthrough() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["resolve", "#{user.api}"]).output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "#{user.api}\n");
    Ok(())
}

#[test]
fn test_broken_catalog_file_is_skipped() -> Result<()> {
    let test = sample_project()?;
    test.write_file("messages/de.json", "{ broken")?;

    let output = test.command().args(["resolve", "#{user.api}"]).output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "User API\n");
    assert!(stderr(&output).contains("de.json"));
    Ok(())
}

#[test]
fn test_missing_explicit_messages_root_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["resolve", "--messages-root", "nope", "#{a}"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("does not exist"));
    Ok(())
}

#[test]
fn test_invalid_locale_flag() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["resolve", "--locale", "not a locale", "#{a}"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid --locale value"));
    Ok(())
}

#[test]
fn test_resolve_with_english_locale_name() -> Result<()> {
    let test = sample_project()?;
    test.write_file(".apidoc-i18n.json", r#"{ "locale": "English" }"#)?;

    let output = test.command().args(["resolve", "#{user.list}"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "List users\n");
    Ok(())
}

#[test]
fn test_resolve_uses_configured_fallback_locale() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/de.json", r#"{ "only": { "de": "Nur Deutsch" } }"#)?;
    test.write_file(
        ".apidoc-i18n.json",
        r#"{ "locale": "ja", "fallbackLocale": "de" }"#,
    )?;

    let output = test.command().args(["resolve", "#{only.de}"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Nur Deutsch\n");
    Ok(())
}
