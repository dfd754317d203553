//! apidoc-i18n - i18n markers for generated API documentation
//!
//! Documentation text written as `#{some.key}` is looked up in a chain of
//! message backends (override plugins first, then locale-aware catalogs)
//! and replaced with the resolved message. Text without a marker, or with a
//! key nobody knows, is left exactly as written.
//!
//! ## Module Structure
//!
//! - `marker`: `#{key}` marker parsing
//! - `locale`: Locale identifiers and the locale vendor extension
//! - `resolver`: Backend traits, resolver chain, fallback policy
//! - `catalog`: JSON message catalogs and static overrides
//! - `interceptor`: Per-field resolution rules for documentation elements
//! - `document`: Documentation model the interceptor rewrites
//! - `config`: Configuration file loading and parsing
//! - `cli`: Command-line interface layer
//!
//! ## Example
//!
//! ```
//! use apidoc_i18n::locale::Locale;
//! use apidoc_i18n::resolver::{MessageResolver, ResolverChain};
//!
//! let chain = ResolverChain::builder()
//!     .plugin(|code: &str| (code == "greeting.hello").then(|| "Hello!".to_string()))
//!     .build();
//! let resolver = MessageResolver::new(chain, Locale::english());
//!
//! assert_eq!(resolver.resolve_text("#{greeting.hello}"), "Hello!");
//! assert_eq!(resolver.resolve_text("#{missing.key}"), "#{missing.key}");
//! assert_eq!(resolver.resolve_text("Just text"), "Just text");
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod document;
pub mod interceptor;
pub mod locale;
pub mod marker;
pub mod resolver;
