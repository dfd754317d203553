use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, SAMPLE_DOC, sample_project, stderr, stdout};

#[test]
fn test_localize_dry_run_writes_nothing() -> Result<()> {
    let test = sample_project()?;

    let output = test
        .command()
        .args(["localize", "docs/api.json"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "  docs/api.json: 5 rewritten of 5 fields\n\
         \u{2713} Would localize 1 file (en), 5 fields rewritten\n\
         note: run with --apply or --out-dir to write the result\n"
    );
    assert_eq!(test.read_file("docs/api.json")?, SAMPLE_DOC);
    Ok(())
}

#[test]
fn test_localize_out_dir() -> Result<()> {
    let test = sample_project()?;

    let output = test
        .command()
        .args(["localize", "docs/api.json", "--out-dir", "out"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("-> out/api.json"));
    assert_eq!(test.read_file("docs/api.json")?, SAMPLE_DOC);

    let doc: Value = serde_json::from_str(&test.read_file("out/api.json")?)?;
    let listing = &doc["listings"][0];
    assert_eq!(listing["description"], "User API");
    assert_eq!(listing["tags"][0]["name"], "Users");
    let operation = &listing["operations"][0];
    assert_eq!(operation["summary"], "List users");
    assert_eq!(operation["notes"], "Plain notes");
    assert_eq!(operation["parameters"][0]["description"], "Page number");
    assert_eq!(doc["models"][0]["description"], "A user account");
    assert_eq!(doc["extensions"]["x-locale"], "en");
    assert_eq!(doc["extensions"]["x-select-definitions"], true);
    Ok(())
}

#[test]
fn test_localize_apply_in_place_with_locale() -> Result<()> {
    let test = sample_project()?;
    test.write_file(
        ".apidoc-i18n.json",
        r#"{ "locale": "fr", "selectDefinitions": false }"#,
    )?;

    let output = test
        .command()
        .args(["localize", "--apply", "docs/api.json"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let doc: Value = serde_json::from_str(&test.read_file("docs/api.json")?)?;
    assert_eq!(doc["listings"][0]["description"], "API utilisateur");
    assert_eq!(
        doc["listings"][0]["operations"][0]["summary"],
        "Lister les utilisateurs"
    );
    // Falls back to English where French has no entry.
    assert_eq!(doc["models"][0]["description"], "A user account");
    assert_eq!(doc["extensions"]["x-locale"], "fr");
    assert_eq!(doc["extensions"]["x-select-definitions"], false);
    Ok(())
}

#[test]
fn test_localize_default_tag_for_untagged_controller() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "api.json",
        r#"{ "listings": [{ "controller": "PetStoreController" }] }"#,
    )?;

    let output = test
        .command()
        .args(["localize", "api.json", "--out-dir", "out"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let doc: Value = serde_json::from_str(&test.read_file("out/api.json")?)?;
    assert_eq!(doc["listings"][0]["tags"][0]["name"], "pet-store-controller");
    Ok(())
}

#[test]
fn test_localize_multiple_files_keeps_order() -> Result<()> {
    let test = sample_project()?;
    test.write_file("docs/empty.json", "{}")?;

    let output = test
        .command()
        .args(["localize", "docs/api.json", "docs/empty.json"])
        .output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "  docs/api.json: 5 rewritten of 5 fields");
    assert_eq!(lines[1], "  docs/empty.json: 0 rewritten of 0 fields");
    Ok(())
}

#[test]
fn test_localize_missing_file() -> Result<()> {
    let test = sample_project()?;

    let output = test
        .command()
        .args(["localize", "docs/api.json", "docs/missing.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("docs/missing.json"));
    assert!(stdout(&output).contains("docs/api.json: 5 rewritten"));
    Ok(())
}

#[test]
fn test_localize_apply_keeps_unmodelled_keys() -> Result<()> {
    let test = sample_project()?;
    test.write_file(
        "docs/api.json",
        r##"{
  "swagger": "2.0",
  "info": { "title": "Users", "version": "1.0" },
  "listings": [
    {
      "controller": "UserController",
      "description": "#{user.api}",
      "operations": [
        {
          "operationId": "listUsers",
          "method": "GET",
          "path": "/users",
          "summary": "#{user.list}",
          "parameters": [{ "name": "page", "in": "query", "required": false }]
        }
      ]
    }
  ]
}"##,
    )?;

    let output = test
        .command()
        .args(["localize", "--apply", "docs/api.json"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let doc: Value = serde_json::from_str(&test.read_file("docs/api.json")?)?;
    assert_eq!(doc["swagger"], "2.0");
    assert_eq!(doc["info"]["version"], "1.0");
    let operation = &doc["listings"][0]["operations"][0];
    assert_eq!(operation["summary"], "List users");
    assert_eq!(operation["method"], "GET");
    assert_eq!(operation["path"], "/users");
    assert_eq!(operation["parameters"][0]["in"], "query");
    assert_eq!(operation["parameters"][0]["required"], false);
    Ok(())
}
