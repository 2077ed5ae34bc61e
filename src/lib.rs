pub mod config;
pub mod core;
pub mod runtime;
pub mod state;
pub mod tag_file;
pub mod terminal;
pub mod ui;

pub use config::{LoadError, SuggestConfig};
pub use self::core::search::{MatchCache, SharedMatchCache, TagFilter, filter_tags, replace_last_term};
pub use self::core::tag::{Tag, TagId, TagList};
pub use runtime::effect::Effect;
pub use state::suggestions::TagSuggestions;
