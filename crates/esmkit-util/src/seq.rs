//! Small sequence helpers shared by the resolver and request handling code.

/// Returns true if `value` is one of `items`.
#[must_use]
pub fn includes<T, U>(items: &[T], value: &U) -> bool
where
    T: PartialEq<U>,
    U: ?Sized,
{
    items.iter().any(|item| item == value)
}

/// Keep the items accepted by `predicate`, preserving order.
///
/// An empty input returns an empty `Vec` without allocating.
#[must_use]
pub fn filter<T, F>(items: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    if items.is_empty() {
        return Vec::new();
    }
    items.iter().filter(|item| predicate(*item)).cloned().collect()
}

/// Returns true if `s` ends with any of `suffixes`.
#[must_use]
pub fn ends_with_any(s: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| s.ends_with(*suffix))
}

/// Concatenate two byte slices into a new buffer.
#[must_use]
pub fn concat_bytes(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    out.extend_from_slice(a);
    out.extend_from_slice(b);
    out
}
