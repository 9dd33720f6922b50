//! Read-only enumeration of every recorded mistake, in store order.
//! Entries that fail to resolve are yielded with their error, not dropped.

use super::{QuestionBank, ResolvedQuestion, resolve};
use crate::error::ResolutionError;
use crate::storage::Mistakes;

/// One stored mistake and the outcome of resolving its key.
pub struct ReviewEntry<'a> {
    pub key: &'a str,
    pub count: u64,
    pub resolution: Result<ResolvedQuestion<'a>, ResolutionError>,
}

impl ReviewEntry<'_> {
    /// Correct labels sorted for display, or `None` when unresolved.
    pub fn sorted_answers(&self) -> Option<Vec<String>> {
        self.resolution
            .as_ref()
            .ok()
            .map(|resolved| resolved.question.sorted_answers())
    }
}

/// Lazy iterator over the mistakes. Clone it to walk the store again.
#[derive(Clone)]
pub struct ReviewEntries<'a> {
    inner: indexmap::map::Iter<'a, String, u64>,
    bank: &'a QuestionBank,
}

impl<'a> ReviewEntries<'a> {
    /// Drops unresolvable entries, yielding only (key, count, question).
    pub fn resolved(self) -> impl Iterator<Item = (&'a str, u64, ResolvedQuestion<'a>)> + Clone {
        self.filter_map(|entry| match entry.resolution {
            Ok(resolved) => Some((entry.key, entry.count, resolved)),
            Err(e) => {
                log::warn!("Skipping mistake entry: {}", e);
                None
            }
        })
    }
}

impl<'a> Iterator for ReviewEntries<'a> {
    type Item = ReviewEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (key, &count) = self.inner.next()?;
        Some(ReviewEntry {
            key,
            count,
            resolution: resolve(key, self.bank),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Walks `mistakes` in store order, resolving each key against `bank`.
pub fn review<'a>(mistakes: &'a Mistakes, bank: &'a QuestionBank) -> ReviewEntries<'a> {
    ReviewEntries {
        inner: mistakes.iter(),
        bank,
    }
}
