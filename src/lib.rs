//! Catgen - message catalog generator for bundled front-end apps
//!
//! Catgen extracts the translatable messages each front-end bundle defines,
//! then writes one JSON catalog per bundle and locale, filled from the source
//! texts for the default locale and from CSV translation exports for the rest.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Generation engine (collect, build, materialize)
//! - `logging`: Logger seam and its console implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
