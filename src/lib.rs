//! dts-i18n - documentation i18n for TypeScript declaration files
//!
//! dts-i18n reads a `.d.ts` project, assigns a stable translation key to
//! every documentation text, and re-emits the declarations with comments
//! taken from a key map in the chosen language.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Declaration model, doc flags, keys and rendering
//! - `issues`: Issue type definitions and reporting
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod utils;
