pub mod span;
pub mod style;
pub mod suggestion_list;

pub use suggestion_list::render_suggestions;
