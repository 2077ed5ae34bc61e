use std::sync::Arc;

use tracing::debug;

use crate::core::search::{MatchCache, TagFilter, replace_last_term};
use crate::core::tag::{Tag, TagList};
use crate::runtime::effect::{Effect, NOTES_SEARCHED_EVENT};

/// Tag suggestions for the note search bar.
///
/// Owns the match cache, so calling [`TagSuggestions::suggestions`] on every
/// render with unchanged inputs is cheap.
#[derive(Default)]
pub struct TagSuggestions {
    cache: MatchCache,
}

impl TagSuggestions {
    pub fn new(filter: TagFilter) -> Self {
        Self {
            cache: MatchCache::with_filter(filter),
        }
    }

    pub fn filter(&self) -> &TagFilter {
        self.cache.filter()
    }

    pub fn suggestions(&mut self, tags: &TagList, query: &str) -> Arc<[Tag]> {
        self.cache.matching_tags(tags, query)
    }

    /// The query that results from accepting `tag` while `query` is typed.
    pub fn accepted_query(&self, query: &str, tag: &Tag) -> String {
        replace_last_term(query, self.filter().prefix(), &tag.name)
    }

    /// Accepts `tag`: rewrites the search and refocuses the search field.
    pub fn select(&self, query: &str, tag: &Tag) -> Vec<Effect> {
        let next = self.accepted_query(query, tag);
        debug!(tag = %tag.id, query = %next, "tag suggestion selected");
        vec![
            Effect::Search(next),
            Effect::RecordEvent(NOTES_SEARCHED_EVENT),
            Effect::FocusSearch,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::TagSuggestions;
    use crate::core::search::TagFilter;
    use crate::core::tag::{Tag, TagList};
    use crate::runtime::effect::{Effect, NOTES_SEARCHED_EVENT};
    use std::sync::Arc;

    #[test]
    fn select_rewrites_last_term_and_refocuses() {
        let suggestions = TagSuggestions::default();
        let effects = suggestions.select("hello wo", &Tag::new("t1", "work"));
        assert_eq!(
            effects,
            vec![
                Effect::Search("hello tag:work ".to_string()),
                Effect::RecordEvent(NOTES_SEARCHED_EVENT),
                Effect::FocusSearch,
            ]
        );
    }

    #[test]
    fn accepted_query_uses_configured_prefix() {
        let suggestions = TagSuggestions::new(TagFilter::new().with_prefix("#"));
        assert_eq!(
            suggestions.accepted_query("notes #wo", &Tag::new("t1", "work")),
            "notes #work "
        );
    }

    #[test]
    fn accepted_suggestion_is_no_longer_suggested() {
        let mut suggestions = TagSuggestions::default();
        let tags: TagList = vec![Tag::new("t1", "work"), Tag::new("t2", "workout")].into();

        let first = suggestions.suggestions(&tags, "wo");
        assert_eq!(first.len(), 2);

        let next = suggestions.accepted_query("wo", &first[0]);
        let after = suggestions.suggestions(&tags, &next);
        assert!(after.iter().all(|tag| tag.name != "work"));
        assert_eq!(after.len(), 1);
    }

    #[test]
    fn repeated_render_reuses_result() {
        let mut suggestions = TagSuggestions::default();
        let tags: TagList = vec![Tag::new("t1", "work")].into();
        let a = suggestions.suggestions(&tags, "wo");
        let b = suggestions.suggestions(&tags, "wo");
        assert!(Arc::ptr_eq(&a, &b));
    }
}
