/// Turns a strict `is_less` predicate into the `a <= b` closure expected by
/// [`slice::is_sorted_by`].
#[macro_export]
macro_rules! is_less_to_le {
    ( $x:ident ) => {{
        |a, b| !$x(b, a)
    }};
}

/// Counts how often each value occurs. Used to check that a sort produced a
/// permutation of its input.
pub(crate) fn value_counts(v: &[i32]) -> std::collections::BTreeMap<i32, usize> {
    let mut counts = std::collections::BTreeMap::new();
    for x in v {
        *counts.entry(*x).or_insert(0) += 1;
    }
    counts
}
