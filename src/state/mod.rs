pub mod suggestions;

pub use suggestions::TagSuggestions;
