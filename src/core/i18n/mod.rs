//! Key derivation, key maps and translation.

pub mod key;
pub mod key_map;
pub mod translator;

pub use key::{format_key_segment, node_key};
pub use key_map::{KeyMap, KeyMapOutcome, TranslatedValue, build_key_map};
pub use translator::{LangFormat, PassthroughFormat, Translator, WrapFormat, lang_format};
