// src/segment/pairs.rs

use std::iter::FusedIterator;

use crate::segment::phrase::Chunk;

/// Two adjacent chunks consumed together by one morph invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPair<'a> {
    pub first: Chunk<'a>,
    pub second: Chunk<'a>,
}

/// Pair every item with its successor: `(0, 1), (1, 2), ...`.
///
/// Yields `max(0, m - 1)` pairs for an input of `m` items.
pub fn consecutive_pairs<I>(items: I) -> ConsecutivePairs<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    ConsecutivePairs {
        inner: items.into_iter(),
        prev: None,
    }
}

/// Iterator returned by [`consecutive_pairs`].
#[derive(Debug, Clone)]
pub struct ConsecutivePairs<I: Iterator> {
    inner: I,
    prev: Option<I::Item>,
}

impl<I> Iterator for ConsecutivePairs<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if self.prev.is_none() {
            self.prev = Some(self.inner.next()?);
        }
        let next = self.inner.next()?;
        let prev = self.prev.replace(next.clone())?;
        Some((prev, next))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.inner.size_hint();
        if self.prev.is_some() {
            (lo, hi)
        } else {
            (lo.saturating_sub(1), hi.map(|h| h.saturating_sub(1)))
        }
    }
}

impl<I> FusedIterator for ConsecutivePairs<I>
where
    I: FusedIterator,
    I::Item: Clone,
{
}

impl<'a> From<(Chunk<'a>, Chunk<'a>)> for ChunkPair<'a> {
    fn from((first, second): (Chunk<'a>, Chunk<'a>)) -> Self {
        Self { first, second }
    }
}
