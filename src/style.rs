//! Layout hints that cascade from a node to everything beneath it.

use std::borrow::Cow;
use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::area::{LongWords, TextArea, WrapOptions, DEFAULT_WIDTH, SPACE};
use crate::error::{LayoutError, Result};

/// Style keys with a defined meaning. Anything else is carried along and
/// ignored.
pub mod keys {
    /// Wrap width for text.
    pub const WIDTH: &str = "width";
    /// Lines stacked between the items of a document.
    pub const ITEM_SEP: &str = "itemsep";
    /// String placed between table columns.
    pub const COLUMN_SEP: &str = "columnsep";
    /// Fallback for `itemsep` and `columnsep`. A value only stands in for a
    /// separator whose shape it fits: multi-line `sep` lines separate
    /// document items but leave table columns on the default space.
    pub const SEP: &str = "sep";
    pub const BREAK_LONG_WORDS: &str = "breaklongwords";
    pub const SHOW_TITLE: &str = "showtitle";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValue {
    Width(usize),
    Flag(bool),
    Text(String),
    Lines(Vec<String>),
}

impl From<usize> for StyleValue {
    fn from(width: usize) -> Self {
        Self::Width(width)
    }
}

impl From<bool> for StyleValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<&str> for StyleValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for StyleValue {
    fn from(lines: Vec<String>) -> Self {
        Self::Lines(lines)
    }
}

impl From<TextArea> for StyleValue {
    fn from(area: TextArea) -> Self {
        Self::Lines(area.into_lines())
    }
}

/// A shallow key/value mapping of layout hints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style(BTreeMap<String, StyleValue>);

impl Style {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Option<StyleValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, StyleValue> {
        self.0.iter()
    }

    pub fn width(self, width: usize) -> Self {
        self.set(keys::WIDTH, width)
    }

    pub fn item_sep<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(keys::ITEM_SEP, TextArea::from_lines(lines))
    }

    pub fn column_sep(self, sep: impl Into<String>) -> Self {
        self.set(keys::COLUMN_SEP, sep.into())
    }

    pub fn break_long_words(self, flag: bool) -> Self {
        self.set(keys::BREAK_LONG_WORDS, flag)
    }

    pub fn show_title(self, flag: bool) -> Self {
        self.set(keys::SHOW_TITLE, flag)
    }

    /// `inherited` with every key of `own` written over it.
    ///
    /// Values are replaced wholesale, never merged with each other.
    pub fn merge(inherited: &Style, own: &Style) -> Style {
        let mut merged = inherited.clone();
        merged
            .0
            .extend(own.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    pub(crate) fn wrap_options(&self) -> Result<WrapOptions> {
        let width = match self.get(keys::WIDTH) {
            None => DEFAULT_WIDTH,
            Some(StyleValue::Width(width)) => *width,
            Some(_) => {
                return Err(LayoutError::StyleType {
                    key: keys::WIDTH,
                    expected: "a width",
                })
            }
        };
        let long_words = if self.flag(keys::BREAK_LONG_WORDS)? {
            LongWords::Break
        } else {
            LongWords::Overflow
        };
        Ok(WrapOptions::new(width).long_words(long_words))
    }

    pub(crate) fn flag(&self, key: &'static str) -> Result<bool> {
        match self.get(key) {
            None => Ok(false),
            Some(StyleValue::Flag(flag)) => Ok(*flag),
            Some(_) => Err(LayoutError::StyleType {
                key,
                expected: "a flag",
            }),
        }
    }

    /// Separator between document items: `itemsep`, then `sep`.
    pub(crate) fn item_separator(&self) -> Result<Option<TextArea>> {
        match self.lookup(keys::ITEM_SEP) {
            None => Ok(None),
            Some((_, StyleValue::Lines(lines))) => Ok(Some(TextArea::from_lines(lines.iter().cloned()))),
            Some((_, StyleValue::Text(line))) => Ok(Some(TextArea::from_lines([line.clone()]))),
            Some((key, _)) => Err(LayoutError::StyleType {
                key,
                expected: "separator lines",
            }),
        }
    }

    /// Separator between table columns: `columnsep`, then a single-line
    /// `sep`, then a single space.
    pub(crate) fn column_separator(&self) -> Result<Cow<'_, str>> {
        match self.get(keys::COLUMN_SEP) {
            Some(value) => single_line(value).map(Cow::Borrowed).ok_or(LayoutError::StyleType {
                key: keys::COLUMN_SEP,
                expected: "a single-line separator",
            }),
            None => Ok(Cow::Borrowed(
                self.get(keys::SEP).and_then(single_line).unwrap_or(SPACE),
            )),
        }
    }

    fn lookup(&self, key: &'static str) -> Option<(&'static str, &StyleValue)> {
        self.get(key)
            .map(|value| (key, value))
            .or_else(|| self.get(keys::SEP).map(|value| (keys::SEP, value)))
    }
}

fn single_line(value: &StyleValue) -> Option<&str> {
    match value {
        StyleValue::Text(sep) => Some(sep.as_str()),
        StyleValue::Lines(lines) if lines.len() == 1 => Some(lines[0].as_str()),
        _ => None,
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<StyleValue>> Extend<(K, V)> for Style {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}
