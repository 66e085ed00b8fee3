//! Text areas: rectangular blocks of plain-text lines.
//!
//! Every primitive here is a pure function from areas to a new area. Widths
//! are counted in `char`s, which for the ASCII output this crate targets is
//! the same as the byte length of a line.

use core::fmt;
use core::ops::{Deref, DerefMut};

use crate::error::{LayoutError, Result};

/// Default wrap width when no `width` style is in effect.
pub const DEFAULT_WIDTH: usize = 80;

/// Default horizontal separator used by [`hjoin`].
pub const SPACE: &str = " ";

/// An ordered sequence of lines belonging to one rectangle.
///
/// Lines may differ in length until padded with [`hpad`]; everything the
/// composition engine hands back has been padded where alignment matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextArea(Vec<String>);

impl TextArea {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(lines.into_iter().map(Into::into).collect())
    }

    pub fn lines(&self) -> &[String] {
        &self.0
    }

    pub fn into_lines(self) -> Vec<String> {
        self.0
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.0.push(line.into());
    }

    pub fn width(&self) -> Result<usize> {
        width(self)
    }

    pub fn height(&self) -> usize {
        height(self)
    }
}

impl Deref for TextArea {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for TextArea {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<String>> for TextArea {
    fn from(lines: Vec<String>) -> Self {
        Self(lines)
    }
}

impl<S: Into<String>> FromIterator<S> for TextArea {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_lines(iter)
    }
}

impl IntoIterator for TextArea {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TextArea {
    type Item = &'a String;
    type IntoIter = core::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Lines joined with `\n`, no trailing newline.
impl fmt::Display for TextArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

pub(crate) fn line_len(line: &str) -> usize {
    line.chars().count()
}

/// Length of the longest line.
pub fn width(area: &[String]) -> Result<usize> {
    area.iter()
        .map(|line| line_len(line))
        .max()
        .ok_or(LayoutError::EmptyArea)
}

pub fn height(area: &[String]) -> usize {
    area.len()
}

/// Right-pads every line with spaces to exactly `target` characters.
pub fn hpad(area: TextArea, target: usize) -> Result<TextArea> {
    let actual = area.iter().map(|line| line_len(line)).max().unwrap_or(0);
    if target < actual {
        return Err(LayoutError::InvalidDimension {
            op: "hpad",
            target,
            actual,
        });
    }

    let lines = area
        .into_iter()
        .map(|mut line| {
            let fill = target - line_len(&line);
            line.extend(core::iter::repeat(' ').take(fill));
            line
        })
        .collect();
    Ok(TextArea(lines))
}

/// Appends empty lines until the area is `target` lines tall.
pub fn vpad(mut area: TextArea, target: usize) -> Result<TextArea> {
    let actual = area.height();
    if target < actual {
        return Err(LayoutError::InvalidDimension {
            op: "vpad",
            target,
            actual,
        });
    }

    area.0.resize(target, String::new());
    Ok(area)
}

/// Places areas side by side.
///
/// Shorter areas are padded with empty lines at the bottom; lines are *not*
/// padded horizontally, so ragged columns stay ragged.
pub fn hjoin(areas: Vec<TextArea>, sep: &str) -> Result<TextArea> {
    let max_height = areas
        .iter()
        .map(TextArea::height)
        .max()
        .ok_or(LayoutError::EmptyInput { op: "hjoin" })?;

    let same_height = areas
        .into_iter()
        .map(|area| vpad(area, max_height))
        .collect::<Result<Vec<_>>>()?;

    let rows = (0..max_height)
        .map(|i| {
            same_height
                .iter()
                .map(|area| area.0[i].as_str())
                .collect::<Vec<_>>()
                .join(sep)
        })
        .collect();
    Ok(TextArea(rows))
}

/// Stacks areas top to bottom, with `sep` between each adjacent pair.
pub fn vjoin(areas: Vec<TextArea>, sep: Option<&TextArea>) -> Result<TextArea> {
    if areas.is_empty() {
        return Err(LayoutError::EmptyInput { op: "vjoin" });
    }

    let mut lines = Vec::new();
    for (i, area) in areas.into_iter().enumerate() {
        if let Some(sep) = sep.filter(|_| i > 0) {
            lines.extend(sep.iter().cloned());
        }
        lines.extend(area.0);
    }
    Ok(TextArea(lines))
}

/// What the wrapper does with a word longer than the line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LongWords {
    /// Put the word on a line of its own and let it stick out.
    #[default]
    Overflow,
    /// Cut the word into line-sized pieces.
    ///
    /// Cuts fall on `char` boundaries, not grapheme clusters, so combining
    /// sequences can be split apart. Fine for ASCII text.
    Break,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapOptions {
    pub width: usize,
    pub long_words: LongWords,
}

impl WrapOptions {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            long_words: LongWords::default(),
        }
    }

    pub fn long_words(mut self, long_words: LongWords) -> Self {
        self.long_words = long_words;
        self
    }
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

/// Greedy word wrap at `width` with the overflow policy for long words.
pub fn wrap(text: &str, width: usize) -> Result<TextArea> {
    wrap_with(text, WrapOptions::new(width))
}

/// Greedy word wrap.
///
/// Any run of whitespace separates two words and is collapsed to one space.
/// Empty or blank text gives a single empty line.
pub fn wrap_with(text: &str, options: WrapOptions) -> Result<TextArea> {
    let width = options.width;
    if width == 0 {
        return Err(LayoutError::InvalidDimension {
            op: "wrap",
            target: 0,
            actual: 1,
        });
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = line_len(word);
        let room = if current_len == 0 {
            width
        } else {
            width.saturating_sub(current_len + 1)
        };

        if word_len <= room {
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(word);
            current_len += word_len;
            continue;
        }

        if word_len <= width || options.long_words == LongWords::Overflow {
            if current_len > 0 {
                lines.push(core::mem::take(&mut current));
            }
            current.push_str(word);
            current_len = word_len;
            continue;
        }

        // The head of the word fills what is left of the current line.
        let mut rest = word;
        if current_len > 0 {
            if room > 0 {
                let (head, tail) = split_at_char(rest, room);
                current.push(' ');
                current.push_str(head);
                rest = tail;
            }
            lines.push(core::mem::take(&mut current));
        }
        while line_len(rest) > width {
            let (head, tail) = split_at_char(rest, width);
            lines.push(head.to_string());
            rest = tail;
        }
        current.push_str(rest);
        current_len = line_len(rest);
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    Ok(TextArea(lines))
}

fn split_at_char(s: &str, n: usize) -> (&str, &str) {
    let idx = s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    s.split_at(idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn area(lines: &[&str]) -> TextArea {
        TextArea::from_lines(lines.iter().copied())
    }

    #[test]
    fn width_is_longest_line() {
        assert_eq!(width(&area(&["ab", "abcd", ""])), Ok(4));
    }

    #[test]
    fn width_of_nothing_fails() {
        assert_eq!(width(&TextArea::new()), Err(LayoutError::EmptyArea));
    }

    #[test]
    fn hpad_fills_every_line() {
        let padded = hpad(area(&["a", "abc"]), 4).unwrap();
        assert_eq!(padded.into_lines(), vec!["a   ", "abc "]);
    }

    #[test]
    fn hpad_refuses_to_shrink() {
        assert_eq!(
            hpad(area(&["abcdef"]), 3),
            Err(LayoutError::InvalidDimension {
                op: "hpad",
                target: 3,
                actual: 6
            })
        );
    }

    #[test]
    fn vpad_appends_empty_lines() {
        let padded = vpad(area(&["x"]), 3).unwrap();
        assert_eq!(padded.into_lines(), vec!["x", "", ""]);
    }

    #[test]
    fn vpad_refuses_to_shrink() {
        assert!(matches!(
            vpad(area(&["a", "b"]), 1),
            Err(LayoutError::InvalidDimension { op: "vpad", .. })
        ));
    }

    #[test]
    fn hjoin_keeps_ragged_lines() {
        let joined = hjoin(vec![area(&["a", "bbb"]), area(&["1"])], "|").unwrap();
        assert_eq!(joined.into_lines(), vec!["a|1", "bbb|"]);
    }

    #[test]
    fn hjoin_needs_input() {
        assert_eq!(
            hjoin(Vec::new(), SPACE),
            Err(LayoutError::EmptyInput { op: "hjoin" })
        );
    }

    #[test]
    fn vjoin_interleaves_separator() {
        let sep = area(&["--", "=="]);
        let joined = vjoin(vec![area(&["a"]), area(&["b", "c"]), area(&["d"])], Some(&sep)).unwrap();
        assert_eq!(
            joined.into_lines(),
            vec!["a", "--", "==", "b", "c", "--", "==", "d"]
        );
    }

    #[test]
    fn vjoin_single_area_has_no_separator() {
        let sep = area(&["--"]);
        let joined = vjoin(vec![area(&["only"])], Some(&sep)).unwrap();
        assert_eq!(joined.into_lines(), vec!["only"]);
    }

    #[test]
    fn vjoin_needs_input() {
        assert_eq!(
            vjoin(Vec::new(), None),
            Err(LayoutError::EmptyInput { op: "vjoin" })
        );
    }

    #[test]
    fn display_joins_with_newlines() {
        assert_eq!(area(&["a", "b"]).to_string(), "a\nb");
    }

    #[rstest]
    #[case("", 10, &[""])]
    #[case("   \t\n ", 10, &[""])]
    #[case("hello world foo", 5, &["hello", "world", "foo"])]
    #[case("hello   world\n\tfoo", 11, &["hello world", "foo"])]
    #[case("a b c d", 3, &["a b", "c d"])]
    #[case("tiny enormousword x", 6, &["tiny", "enormousword", "x"])]
    fn wrap_cases(#[case] text: &str, #[case] width: usize, #[case] expected: &[&str]) {
        assert_eq!(wrap(text, width).unwrap().into_lines(), expected.to_vec());
    }

    #[test]
    fn wrap_breaks_long_words_when_asked() {
        let options = WrapOptions::new(6).long_words(LongWords::Break);
        let lines = wrap_with("ab enormousword x", options).unwrap();
        assert_eq!(lines.into_lines(), vec!["ab eno", "rmousw", "ord x"]);
    }

    #[test]
    fn breaking_cuts_on_char_boundaries() {
        let options = WrapOptions::new(2).long_words(LongWords::Break);
        let lines = wrap_with("h\u{e9}llo", options).unwrap();
        assert_eq!(lines.into_lines(), vec!["h\u{e9}", "ll", "o"]);
    }

    #[test]
    fn wrap_rejects_zero_width() {
        assert!(matches!(
            wrap("text", 0),
            Err(LayoutError::InvalidDimension { op: "wrap", .. })
        ));
    }

    proptest! {
        #[test]
        fn hpad_is_idempotent(lines in prop::collection::vec("[a-z ]{0,12}", 1..6), extra in 0usize..5) {
            let a = TextArea::from_lines(lines);
            let w = a.width().unwrap() + extra;
            let once = hpad(a, w).unwrap();
            prop_assert_eq!(once.width().unwrap(), w);
            prop_assert_eq!(hpad(once.clone(), w).unwrap(), once);
        }

        #[test]
        fn hjoin_height_and_line_lengths(
            cols in prop::collection::vec(prop::collection::vec("[a-z]{0,6}", 3), 1..5),
        ) {
            let sep = " | ";
            let areas: Vec<TextArea> = cols.iter().cloned().map(TextArea::from_lines).collect();
            let joined = hjoin(areas, sep).unwrap();
            prop_assert_eq!(joined.height(), 3);
            for (i, line) in joined.iter().enumerate() {
                let expected: usize = cols.iter().map(|c| c[i].len()).sum::<usize>()
                    + sep.len() * (cols.len() - 1);
                prop_assert_eq!(line.len(), expected);
            }
        }

        #[test]
        fn vjoin_line_count(
            heights in prop::collection::vec(1usize..5, 1..6),
            sep_height in 0usize..3,
        ) {
            let areas: Vec<TextArea> = heights.iter().map(|&h| TextArea::from_lines(vec!["x"; h])).collect();
            let sep = TextArea::from_lines(vec!["-"; sep_height]);
            let total: usize = heights.iter().sum();
            prop_assert_eq!(vjoin(areas.clone(), None).unwrap().height(), total);
            prop_assert_eq!(
                vjoin(areas, Some(&sep)).unwrap().height(),
                total + sep_height * (heights.len() - 1)
            );
        }

        #[test]
        fn wrap_preserves_words(words in prop::collection::vec("[a-z]{1,8}", 0..30), width in 8usize..40) {
            let text = words.join("  ");
            let lines = wrap(&text, width).unwrap();
            for line in lines.iter() {
                prop_assert!(line.len() <= width);
                prop_assert_eq!(line.trim_end(), line.as_str());
            }
            let rewrapped: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
            prop_assert_eq!(rewrapped, words.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}
