use std::borrow::Cow;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::trace;

use super::filter::TagFilter;
use crate::core::tag::{Tag, TagList};

struct CacheEntry {
    tags: TagList,
    query: String,
    matches: Arc<[Tag]>,
}

/// Remembers the most recent suggestion lookup.
///
/// Keyed by tag-list identity (see [`TagList::same_list`]) and query text. A
/// lookup with both unchanged returns the previous result without filtering
/// again; anything else replaces the single entry.
#[derive(Default)]
pub struct MatchCache {
    filter: TagFilter,
    last: Option<CacheEntry>,
}

impl MatchCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(filter: TagFilter) -> Self {
        Self { filter, last: None }
    }

    pub fn filter(&self) -> &TagFilter {
        &self.filter
    }

    pub fn matching_tags(&mut self, tags: &TagList, query: &str) -> Arc<[Tag]> {
        let filter = &self.filter;
        Self::lookup(&mut self.last, tags, query, |tags, query| {
            share_matches(tags, filter.filter(tags, query))
        })
    }

    /// Same as [`MatchCache::matching_tags`] with a caller-supplied filter.
    pub fn matching_tags_with<F>(&mut self, tags: &TagList, query: &str, compute: F) -> Arc<[Tag]>
    where
        F: FnOnce(&TagList, &str) -> Arc<[Tag]>,
    {
        Self::lookup(&mut self.last, tags, query, compute)
    }

    pub fn clear(&mut self) {
        self.last = None;
    }

    fn lookup<F>(last: &mut Option<CacheEntry>, tags: &TagList, query: &str, compute: F) -> Arc<[Tag]>
    where
        F: FnOnce(&TagList, &str) -> Arc<[Tag]>,
    {
        if let Some(entry) = last.as_ref() {
            if entry.tags.same_list(tags) && entry.query == query {
                trace!(query, "tag match cache hit");
                return Arc::clone(&entry.matches);
            }
        }

        trace!(query, "tag match cache miss");
        let matches = compute(tags, query);
        *last = Some(CacheEntry {
            tags: tags.clone(),
            query: query.to_string(),
            matches: Arc::clone(&matches),
        });
        matches
    }
}

/// Converts a filter result into the shared form the cache hands out. The
/// unfiltered fallback reuses the tag snapshot instead of copying it.
pub fn share_matches(tags: &TagList, matches: Cow<'_, [Tag]>) -> Arc<[Tag]> {
    match matches {
        Cow::Borrowed(all) if std::ptr::eq(all, tags.as_slice()) => tags.shared(),
        Cow::Borrowed(some) => Arc::from(some),
        Cow::Owned(owned) => Arc::from(owned),
    }
}

/// [`MatchCache`] behind a lock, for callers that look up suggestions from
/// more than one thread.
#[derive(Clone, Default)]
pub struct SharedMatchCache {
    inner: Arc<Mutex<MatchCache>>,
}

impl SharedMatchCache {
    pub fn new(cache: MatchCache) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    pub fn matching_tags(&self, tags: &TagList, query: &str) -> Arc<[Tag]> {
        // The slot is overwritten whole, so a poisoned lock still holds a
        // consistent entry.
        let mut cache = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        cache.matching_tags(tags, query)
    }

    pub fn clear(&self) {
        let mut cache = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        cache.clear();
    }
}
