use crate::path::SEP;

/// Join two path components with exactly one separator between them.
///
/// A separator already at the end of `base` is reused instead of doubled,
/// and a single trailing separator on `leaf` is trimmed, so the result
/// never ends with a separator. No `.`/`..` collapsing is performed.
///
/// An empty `base` is a caller contract violation, not a runtime error.
pub fn join(base: &str, leaf: &str) -> String {
    debug_assert!(!base.is_empty(), "join requires a non-empty base");

    let leaf = leaf.strip_suffix(SEP).unwrap_or(leaf);

    let mut combined = String::with_capacity(base.len() + 1 + leaf.len());
    combined.push_str(base);
    if !combined.ends_with(SEP) {
        combined.push(SEP);
    }
    combined.push_str(leaf);
    combined
}
