// src/segment/phrase.rs

use std::fmt;
use std::num::NonZeroUsize;
use std::slice;

/// The full, ordered list of words driving one run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Phrase {
    words: Vec<String>,
}

impl Phrase {
    /// Split `text` on any run of whitespace.
    pub fn parse(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Slice the phrase into consecutive groups of `size` words.
    ///
    /// Every chunk has exactly `size` words except possibly the last one.
    /// The iterator is `Clone`, so a pass can be restarted from the start.
    pub fn chunks(&self, size: NonZeroUsize) -> Chunks<'_> {
        Chunks {
            inner: self.words.chunks(size.get()),
        }
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(" "))
    }
}

/// A contiguous run of words borrowed from a [`Phrase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    words: &'a [String],
}

impl<'a> Chunk<'a> {
    pub fn new(words: &'a [String]) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &'a [String] {
        self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words joined back together with single spaces.
    pub fn joined(&self) -> String {
        self.words.join(" ")
    }
}

/// Iterator returned by [`Phrase::chunks`].
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    inner: slice::Chunks<'a, String>,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Chunk::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Chunks<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn parse_collapses_whitespace() {
        let phrase = Phrase::parse("  we remember\tnot \n the word ");
        assert_eq!(phrase.words(), ["we", "remember", "not", "the", "word"]);
        assert_eq!(phrase.to_string(), "we remember not the word");
    }

    #[test]
    fn last_chunk_may_be_shorter() {
        let phrase = Phrase::parse("a b c d e");
        let chunks: Vec<String> = phrase.chunks(size(2)).map(|c| c.joined()).collect();
        assert_eq!(chunks, vec!["a b", "c d", "e"]);
        assert_eq!(phrase.chunks(size(2)).len(), 3);
    }

    #[test]
    fn chunks_are_restartable() {
        let phrase = Phrase::parse("no recordamos el verbo pero el sonido del verbo");
        let chunks = phrase.chunks(size(4));
        let first: Vec<_> = chunks.clone().collect();
        let second: Vec<_> = chunks.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert_eq!(first[2].words(), ["verbo"]);
    }

    #[test]
    fn empty_phrase_has_no_chunks() {
        let phrase = Phrase::parse("   ");
        assert!(phrase.is_empty());
        assert_eq!(phrase.chunks(size(3)).count(), 0);
    }
}
