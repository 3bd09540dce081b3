// crates/domain/src/document.rs

/// Ordered sequence of text lines read from a single source.
///
/// Lines are stored verbatim: no trimming, no case folding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Words as maximal runs of non-whitespace, in document order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().flat_map(|line| split_words(line))
    }

    /// Words split on the literal space character only; tabs stay inside words.
    pub fn space_separated_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().flat_map(|line| split_on_spaces(line))
    }
}

impl From<Vec<String>> for Document {
    fn from(lines: Vec<String>) -> Self {
        Self::new(lines)
    }
}

impl<S: Into<String>> FromIterator<S> for Document {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Word separators: space, tab, LF, vertical tab, form feed, CR.
#[inline]
pub fn is_word_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

pub fn split_words(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_word_separator).filter(|w| !w.is_empty())
}

pub fn split_on_spaces(line: &str) -> impl Iterator<Item = &str> {
    line.split(' ').filter(|w| !w.is_empty())
}

/// Length in Unicode scalar values.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
