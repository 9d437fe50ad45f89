//! Catalog generation engine.
//!
//! A run has three phases:
//! 1. Collection: extract each bundle's messages and fold their default texts
//!    into one table (`requirements`, backed by `extract`)
//! 2. Building: resolve every bundle's identifiers per locale against the
//!    default texts or the locale's translation table (`catalog`, `translations`)
//! 3. Materializing: write or remove catalog files and the marker (`materialize`)
//!
//! ## Module Structure
//!
//! - `messages`: message definitions, ordered message maps and catalogs
//! - `bundles` / `locales`: descriptor loading and validation
//! - `extract`: static extraction from JS/TS/Vue sources
//! - `translations`: CSV translation tables
//! - `generator`: the pipeline tying the phases together
//! - `context`: configuration and input resolution for the CLI

pub mod bundles;
pub mod catalog;
pub mod context;
pub mod extract;
pub mod generator;
pub mod locales;
pub mod materialize;
pub mod messages;
pub mod requirements;
pub mod translations;

pub use bundles::{BundleDescriptor, EntryRef};
pub use catalog::{BundleCatalog, CatalogBuilder, MissingTranslation};
pub use context::GenerateContext;
pub use extract::{ExtractOptions, MessageExtractor, SourceExtractor, ignore::IgnoreRules};
pub use generator::{GenerateOptions, GenerateSummary, generate};
pub use locales::{LocaleDescriptor, to_locale};
pub use messages::{Catalog, MessageDefinition, MessageMap};
pub use requirements::{Requirements, collect_requirements};
pub use translations::{CsvTranslationSource, TranslationRow, TranslationSource};
