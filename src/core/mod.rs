//! Core pipeline.
//!
//! - `model`: declaration and type model, arena tree
//! - `doc`: doc-flag engine and record expansion
//! - `i18n`: key derivation, key maps, translation
//! - `render`: declaration-file code generation
//! - `parsers`: swc front end building the model
//! - `project`: entry file plus references into one tree

pub mod doc;
pub mod i18n;
pub mod model;
pub mod parsers;
pub mod project;
pub mod render;
