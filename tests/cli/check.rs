use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, sample_project, stderr, stdout};

#[test]
fn test_check_all_resolved() -> Result<()> {
    let test = sample_project()?;

    let output = test.command().args(["check", "docs/api.json"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "\u{2713} Checked 1 file (en) - all markers resolved\n"
    );
    Ok(())
}

#[test]
fn test_check_reports_missing_keys() -> Result<()> {
    let test = sample_project()?;

    // fr.json lacks tag.users, user.page and model.user, but English fills them in.
    // Only keys absent from every locale are reported.
    test.write_file(
        "docs/orders.json",
        r##"{
          "listings": [{
            "controller": "OrderController",
            "operations": [{ "operationId": "create", "summary": "#{order.create}" }]
          }],
          "models": [{ "name": "Order", "description": "#{model.order}" }]
        }"##,
    )?;

    let output = test
        .command()
        .args(["check", "--locale", "fr", "docs/api.json", "docs/orders.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "error: \"order.create\"  unresolved-key\n  \
         --> docs/orders.json: OrderController.create.summary\n  \
         = field: operation summary\n\
         \n\
         error: \"model.order\"  unresolved-key\n  \
         --> docs/orders.json: Order.description\n  \
         = field: model description\n\
         \n\
         \u{2718} 2 unresolved markers in 2 files (fr)\n"
    );
    Ok(())
}

#[test]
fn test_check_ignores_unprefixed_summary() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "api.json",
        r##"{
          "listings": [{
            "controller": "Ping",
            "operations": [{ "summary": "Ping with #{not.a.marker}" }]
          }]
        }"##,
    )?;

    let output = test.command().args(["check", "api.json"]).output()?;

    assert!(output.status.success());
    Ok(())
}

#[test]
fn test_check_invalid_document() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("api.json", "{ not json")?;

    let output = test.command().args(["check", "api.json"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("api.json"));
    Ok(())
}
