use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(String);

impl TagId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Borrow<str> for TagId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for TagId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for TagId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TagId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A user-defined label attached to notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
}

impl Tag {
    pub fn new(id: impl Into<TagId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Immutable snapshot of the user's tags.
///
/// Cloning the handle keeps its identity; building a new list from the same
/// tags does not. [`TagList::same_list`] is what the match cache keys on, so
/// callers should build a fresh `TagList` whenever their tags change and pass
/// the same handle around otherwise.
#[derive(Debug, Clone)]
pub struct TagList {
    tags: Arc<[Tag]>,
}

impl TagList {
    pub fn new(tags: impl Into<Arc<[Tag]>>) -> Self {
        Self { tags: tags.into() }
    }

    pub fn same_list(&self, other: &TagList) -> bool {
        Arc::ptr_eq(&self.tags, &other.tags)
    }

    pub fn as_slice(&self) -> &[Tag] {
        &self.tags
    }

    /// Shares the underlying snapshot without copying it.
    pub fn shared(&self) -> Arc<[Tag]> {
        Arc::clone(&self.tags)
    }
}

impl Default for TagList {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Deref for TagList {
    type Target = [Tag];

    fn deref(&self) -> &[Tag] {
        &self.tags
    }
}

impl From<Vec<Tag>> for TagList {
    fn from(tags: Vec<Tag>) -> Self {
        Self::new(tags)
    }
}

impl FromIterator<Tag> for TagList {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}
