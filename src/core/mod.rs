pub mod search;
pub mod tag;

pub use tag::{Tag, TagId, TagList};
