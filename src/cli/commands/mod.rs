pub mod ast;
mod command_result;
mod context;
pub mod init;
pub mod keys;
pub mod render;

pub use command_result::*;
pub use context::CommandContext;
