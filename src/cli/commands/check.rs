use std::path::PathBuf;

use anyhow::Result;
use rayon::prelude::*;

use super::super::{
    args::CheckCommand,
    exit_status::ExitStatus,
    report::{print_check_summary, print_file_error, print_unresolved},
};
use super::helper::build_context;
use crate::document::ApiDocument;
use crate::interceptor::UnresolvedMarker;

/// Report every marker no backend resolves. Exits with `Failure` if any.
pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = build_context(&cmd.common)?;
    let interceptor = &ctx.interceptor;

    let results: Vec<(PathBuf, Result<Vec<UnresolvedMarker>>)> = cmd
        .files
        .par_iter()
        .map(|path| {
            let markers = ApiDocument::load(path).map(|doc| interceptor.unresolved(&doc));
            (path.clone(), markers)
        })
        .collect();

    let mut unresolved = 0;
    let mut failed = false;
    for (path, result) in &results {
        match result {
            Ok(markers) => {
                print_unresolved(path, markers);
                unresolved += markers.len();
            }
            Err(err) => {
                print_file_error(path, err);
                failed = true;
            }
        }
    }

    print_check_summary(unresolved, results.len(), &ctx.locale);

    Ok(if failed {
        ExitStatus::Error
    } else if unresolved > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    })
}
