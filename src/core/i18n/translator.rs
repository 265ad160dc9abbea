//! Translation lookup and per-language line formatting.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::doc::DocRecord;
use crate::core::i18n::key_map::{KeyMap, TranslatedValue};

/// Post-processing applied to translated comment lines.
pub trait LangFormat {
    fn format_lines(&self, lines: Vec<String>) -> Vec<String>;
}

/// Greedy word wrap at a fixed display width.
#[derive(Debug, Clone, Copy)]
pub struct WrapFormat {
    pub max_width: usize,
}

impl WrapFormat {
    /// Byte index of the first char that does not fit in `max_width`
    /// columns. Always at least one char, so wrapping makes progress.
    fn fit(&self, line: &str) -> usize {
        let mut width = 0;
        for (index, ch) in line.char_indices() {
            width += ch.width().unwrap_or(0);
            if width > self.max_width {
                return if index == 0 { ch.len_utf8() } else { index };
            }
        }
        line.len()
    }
}

impl LangFormat for WrapFormat {
    fn format_lines(&self, lines: Vec<String>) -> Vec<String> {
        let mut formatted = Vec::with_capacity(lines.len());
        for line in &lines {
            let mut current = line.trim();
            while current.width() > self.max_width {
                let cut = self.fit(current);
                let break_at = if current[cut..].starts_with(' ') {
                    Some(cut)
                } else {
                    current[..cut].rfind(' ')
                };
                let (head, tail) = match break_at {
                    Some(space) => (&current[..space], &current[space + 1..]),
                    None => current.split_at(cut),
                };
                formatted.push(head.trim_end().to_string());
                current = tail.trim();
            }
            if !current.is_empty() {
                formatted.push(current.to_string());
            }
        }
        formatted
    }
}

/// Leaves lines untouched. Used for languages without word spacing and for
/// unrecognized language codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughFormat;

impl LangFormat for PassthroughFormat {
    fn format_lines(&self, lines: Vec<String>) -> Vec<String> {
        lines
    }
}

/// Pick the formatting strategy for a language code.
pub fn lang_format(language: &str, max_width: usize) -> Box<dyn LangFormat> {
    match language {
        "en_us" => Box::new(WrapFormat { max_width }),
        _ => Box::new(PassthroughFormat),
    }
}

/// Resolves keys against a key map in one target language.
pub struct Translator<'a> {
    keys: &'a KeyMap,
    format: Box<dyn LangFormat>,
}

impl<'a> Translator<'a> {
    pub fn new(keys: &'a KeyMap, language: &str, max_width: usize) -> Self {
        Self {
            keys,
            format: lang_format(language, max_width),
        }
    }

    /// The translation stored for `key`; a missing or empty entry resolves
    /// to the key itself.
    pub fn translate(&self, key: &str) -> TranslatedValue {
        match self.keys.get(key) {
            Some(value) if !value.is_empty() => value,
            _ => TranslatedValue::Text(key.to_string()),
        }
    }

    pub fn format_lines(&self, lines: Vec<String>) -> Vec<String> {
        self.format.format_lines(lines)
    }

    /// Comment lines for one record: the prefix joined to the translation,
    /// then language formatting.
    pub fn record_lines(&self, record: &DocRecord) -> Vec<String> {
        let lines = match self.translate(&record.key) {
            TranslatedValue::Text(text) => {
                let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
                if !record.prefix.is_empty()
                    && let Some(first) = lines.first_mut()
                {
                    *first = format!("{} {}", record.prefix, first);
                }
                lines
            }
            TranslatedValue::Lines(entries) => {
                let mut lines = Vec::with_capacity(entries.len() + 1);
                if !record.prefix.is_empty() {
                    lines.push(record.prefix.clone());
                }
                lines.extend(entries);
                lines
            }
        };
        self.format_lines(lines)
    }
}
