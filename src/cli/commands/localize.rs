use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde_json::Value;

use super::super::{
    args::LocalizeCommand,
    exit_status::ExitStatus,
    report::{print_file_error, print_localize_summary_to, print_localized_file_to},
};
use super::helper::{CommandContext, build_context, output_path};
use crate::document::ApiDocument;
use crate::interceptor::LocalizeSummary;

/// Vendor extension carrying the `selectDefinitions` setting.
pub const SELECT_DEFINITIONS_EXTENSION: &str = "x-select-definitions";

struct FileOutcome {
    summary: LocalizeSummary,
    written_to: Option<PathBuf>,
}

/// Localize documentation files in parallel.
///
/// Without `--apply` or `--out-dir` nothing is written.
pub fn localize(cmd: LocalizeCommand) -> Result<ExitStatus> {
    let ctx = build_context(&cmd.common)?;
    let dry_run = !cmd.apply && cmd.out_dir.is_none();

    if let Some(out_dir) = &cmd.out_dir {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("Failed to create output directory: {:?}", out_dir))?;
    }

    let results: Vec<(&PathBuf, Result<FileOutcome>)> = cmd
        .files
        .par_iter()
        .map(|path| {
            let outcome =
                target_for(&cmd, path).and_then(|target| localize_file(&ctx, path, target));
            (path, outcome)
        })
        .collect();

    let mut out = io::stdout().lock();
    let mut localized = 0;
    let mut rewritten = 0;
    let mut failed = false;
    for (path, result) in &results {
        match result {
            Ok(outcome) => {
                print_localized_file_to(
                    path,
                    &outcome.summary,
                    outcome.written_to.as_deref(),
                    &mut out,
                );
                localized += 1;
                rewritten += outcome.summary.rewritten;
            }
            Err(err) => {
                print_file_error(path, err);
                failed = true;
            }
        }
    }
    print_localize_summary_to(localized, rewritten, &ctx.locale, dry_run, &mut out);
    out.flush()?;

    Ok(if failed {
        ExitStatus::Error
    } else {
        ExitStatus::Success
    })
}

/// Where the localized copy of `path` goes, if anywhere.
fn target_for(cmd: &LocalizeCommand, path: &Path) -> Result<Option<PathBuf>> {
    if cmd.apply {
        return Ok(Some(path.to_path_buf()));
    }
    cmd.out_dir
        .as_deref()
        .map(|dir| output_path(dir, path))
        .transpose()
}

fn localize_file(
    ctx: &CommandContext,
    path: &Path,
    target: Option<PathBuf>,
) -> Result<FileOutcome> {
    let mut doc = ApiDocument::load(path)?;
    let summary = ctx.interceptor.apply(&mut doc);
    doc.extensions.insert(
        SELECT_DEFINITIONS_EXTENSION.to_string(),
        Value::Bool(ctx.config.select_definitions),
    );

    if let Some(target) = &target {
        fs::write(target, doc.to_json_pretty()? + "\n")
            .with_context(|| format!("Failed to write {:?}", target))?;
    }

    Ok(FileOutcome {
        summary,
        written_to: target,
    })
}
