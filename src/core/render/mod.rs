//! Code rendering.
//!
//! - `code`: generic statement/block pretty-printer
//! - `types`: type expressions as source text
//! - `dts`: declaration-file specialization

pub mod code;
pub mod dts;
pub mod types;

pub use code::{Block, CodeStyle, CommentBlock, Render, Statement};
pub use dts::{DtsCode, DtsGenerator, RenderError};
