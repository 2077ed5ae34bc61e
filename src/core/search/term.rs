//! Last-token extraction for the search query.
//!
//! Matching and suggestion acceptance both go through [`split_terms`], so the
//! token a suggestion was computed from is always the token it replaces.

pub const TAG_PREFIX: &str = "tag:";

/// Splits a query into its space-separated terms after trimming.
///
/// Splits on single spaces, so runs of spaces yield empty terms in between.
/// An empty (or all-whitespace) query yields one empty term.
pub fn split_terms(query: &str) -> std::str::Split<'_, char> {
    query.trim().split(' ')
}

/// The term suggestions are computed for, or `None` when there is nothing to
/// match against.
pub fn last_term(query: &str) -> Option<&str> {
    split_terms(query).last().filter(|term| !term.is_empty())
}

/// How the last term of a query selects tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTerm<'q> {
    /// `tag:<term>` with a non-empty remainder: tags that extend `term`.
    Prefix(&'q str),
    /// Anything else: tags whose name contains the term.
    Substring(&'q str),
}

impl<'q> SearchTerm<'q> {
    pub fn parse(query: &'q str) -> Option<Self> {
        Self::parse_with_prefix(query, TAG_PREFIX)
    }

    pub fn parse_with_prefix(query: &'q str, prefix: &str) -> Option<Self> {
        let term = last_term(query)?;
        match term.strip_prefix(prefix) {
            Some(rest) if !rest.is_empty() => Some(Self::Prefix(rest)),
            _ => Some(Self::Substring(term)),
        }
    }

    pub fn as_str(&self) -> &'q str {
        match self {
            Self::Prefix(term) | Self::Substring(term) => *term,
        }
    }

    /// Case-sensitive. A prefix term never matches a tag it already names in
    /// full.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Prefix(term) => name != *term && name.starts_with(term),
            Self::Substring(term) => name.contains(term),
        }
    }
}

/// Replaces the last term of `query` with `<prefix><tag_name>` and appends a
/// space so typing can continue.
pub fn replace_last_term(query: &str, prefix: &str, tag_name: &str) -> String {
    let replacement = format!("{prefix}{tag_name}");
    let mut terms = split_terms(query).collect::<Vec<_>>();
    if let Some(last) = terms.last_mut() {
        *last = replacement.as_str();
    }

    let mut out = terms.join(" ");
    out.push(' ');
    out
}
