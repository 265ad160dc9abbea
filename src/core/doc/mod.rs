//! Documentation flags and the records they expand into.

pub mod flags;
pub mod records;

pub use flags::{DocFlags, DocTag, FlagOutcome, build_doc_flags, default_flags, is_known_tag};
pub use records::{DocRecord, RecordExpansion, TagError, expand_records};
