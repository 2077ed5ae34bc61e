/// Returns the first `max` items for which `predicate` holds, in input order.
///
/// Like `filter().take()`, scanning stops as soon as `max` matches are
/// found, so the predicate is never evaluated past the last match. With
/// `max == 0` nothing is evaluated at all.
pub fn filter_at_most<I, P>(items: I, predicate: P, max: usize) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    if max == 0 {
        return Vec::new();
    }
    items.into_iter().filter(predicate).take(max).collect()
}
