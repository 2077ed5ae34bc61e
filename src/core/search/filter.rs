use std::borrow::Cow;

use tracing::trace;

use super::bounded::filter_at_most;
use super::term::{SearchTerm, TAG_PREFIX};
use crate::core::tag::Tag;

pub const MAX_SUGGESTIONS: usize = 5;

/// Tags matching the last term of `query`, at most [`MAX_SUGGESTIONS`].
///
/// A blank query matches everything: the whole list comes back, borrowed and
/// uncapped.
pub fn filter_tags<'t>(tags: &'t [Tag], query: &str) -> Cow<'t, [Tag]> {
    TagFilter::default().filter(tags, query)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFilter {
    max_results: usize,
    prefix: String,
}

impl Default for TagFilter {
    fn default() -> Self {
        Self {
            max_results: MAX_SUGGESTIONS,
            prefix: TAG_PREFIX.to_string(),
        }
    }
}

impl TagFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn prefix(&self) -> &str {
        self.prefix.as_str()
    }

    pub fn filter<'t>(&self, tags: &'t [Tag], query: &str) -> Cow<'t, [Tag]> {
        let Some(term) = SearchTerm::parse_with_prefix(query, &self.prefix) else {
            return Cow::Borrowed(tags);
        };

        let matches = filter_at_most(tags.iter(), |tag| term.matches(&tag.name), self.max_results);
        trace!(?term, matched = matches.len(), "filtered tags");
        Cow::Owned(matches.into_iter().cloned().collect())
    }
}
