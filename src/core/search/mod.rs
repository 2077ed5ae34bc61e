pub mod bounded;
pub mod cache;
pub mod filter;
pub mod term;

pub use bounded::filter_at_most;
pub use cache::{MatchCache, SharedMatchCache, share_matches};
pub use filter::{MAX_SUGGESTIONS, TagFilter, filter_tags};
pub use term::{SearchTerm, TAG_PREFIX, last_term, replace_last_term, split_terms};
