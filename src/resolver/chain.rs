use std::sync::Arc;

use super::backend::{Backend, MessagePlugin, MessageSource};

/// Ordered list of backends, fixed once built.
///
/// Plugins always come before sources. Within each tier backends keep their
/// registration order.
#[derive(Debug, Clone, Default)]
pub struct ResolverChain {
    backends: Vec<Backend>,
}

impl ResolverChain {
    /// A chain with no backends. Every lookup falls back to the raw text.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> ResolverChainBuilder {
        ResolverChainBuilder::default()
    }

    pub fn backends(&self) -> &[Backend] {
        &self.backends
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    pub fn len(&self) -> usize {
        self.backends.len()
    }
}

#[derive(Default)]
pub struct ResolverChainBuilder {
    plugins: Vec<Backend>,
    sources: Vec<Backend>,
}

impl ResolverChainBuilder {
    pub fn plugin(self, plugin: impl MessagePlugin + 'static) -> Self {
        self.plugin_arc(Arc::new(plugin))
    }

    pub fn plugin_arc(mut self, plugin: Arc<dyn MessagePlugin>) -> Self {
        self.plugins.push(Backend::Plugin(plugin));
        self
    }

    pub fn source(self, source: impl MessageSource + 'static) -> Self {
        self.source_arc(Arc::new(source))
    }

    pub fn source_arc(mut self, source: Arc<dyn MessageSource>) -> Self {
        self.sources.push(Backend::Source(source));
        self
    }

    pub fn build(self) -> ResolverChain {
        let mut backends = self.plugins;
        backends.extend(self.sources);
        ResolverChain { backends }
    }
}
