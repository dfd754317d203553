use std::io::{self, Write};

use anyhow::Result;

use super::super::{args::ResolveCommand, exit_status::ExitStatus};
use super::helper::build_context;

/// Print one resolved line per input text.
pub fn resolve(cmd: ResolveCommand) -> Result<ExitStatus> {
    let ctx = build_context(&cmd.common)?;
    let resolver = ctx.resolver();

    let mut out = io::stdout().lock();
    for text in &cmd.texts {
        writeln!(out, "{}", resolver.resolve_text(text))?;
    }

    Ok(ExitStatus::Success)
}
