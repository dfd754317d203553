use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::super::args::CommonArgs;
use crate::catalog::{JsonCatalog, StaticMessages};
use crate::config::{Config, load_config};
use crate::interceptor::TextInterceptor;
use crate::locale::Locale;
use crate::resolver::{MessageResolver, ResolverChain};

/// Everything a command needs once configuration is merged with CLI flags.
pub struct CommandContext {
    pub config: Config,
    pub locale: Locale,
    pub interceptor: TextInterceptor,
}

impl CommandContext {
    pub fn resolver(&self) -> &MessageResolver {
        self.interceptor.resolver()
    }
}

pub fn build_context(common: &CommonArgs) -> Result<CommandContext> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let loaded = load_config(&cwd)?;
    let config = loaded.config;

    let locale = match &common.locale {
        Some(tag) => tag
            .parse::<Locale>()
            .with_context(|| format!("Invalid --locale value: \"{}\"", tag))?,
        None => config.parsed_locale()?,
    };

    let mut chain = ResolverChain::builder();

    if !config.overrides.is_empty() {
        chain = chain.plugin(StaticMessages::from(config.overrides.clone()));
    }

    // An explicit --messages-root must exist; the configured one may not.
    let (messages_root, explicit) = match &common.messages_root {
        Some(path) => (path.clone(), true),
        None => (loaded.base_dir.join(&config.messages_root), false),
    };
    if explicit || messages_root.is_dir() {
        let catalog = JsonCatalog::load_dir(&messages_root, config.parsed_fallback_locale()?)?;
        chain = chain.source(catalog);
    } else {
        debug!(dir = %messages_root.display(), "no messages directory, catalog disabled");
    }

    let resolver = MessageResolver::new(chain.build(), locale.clone());
    debug!(
        backends = resolver.chain().len(),
        locale = %locale,
        "resolver configured"
    );

    Ok(CommandContext {
        config,
        locale,
        interceptor: TextInterceptor::new(resolver),
    })
}

/// Output path of a localized copy: `<out_dir>/<file name>`.
pub fn output_path(out_dir: &std::path::Path, input: &std::path::Path) -> Result<PathBuf> {
    let name = input
        .file_name()
        .with_context(|| format!("Not a file path: {:?}", input))?;
    Ok(out_dir.join(name))
}
