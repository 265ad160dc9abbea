//! Declaration-file front end.
//!
//! - `references`: entry-file discovery through reference directives
//! - `dts`: swc parsing in `.d.ts` mode
//! - `comments`: JSDoc tag collection and attachment
//! - `builder`: swc AST to declaration nodes

pub mod builder;
pub mod comments;
pub mod dts;
pub mod references;

pub use builder::{ModelBuilder, build_source_file};
pub use comments::{DocComment, DocComments, RawTag};
pub use dts::{ParsedDts, parse_dts_source};
pub use references::{
    DiscoveredFiles, discover_files, reference_paths, relative_path, source_file_name,
};
