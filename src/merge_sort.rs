use crate::{is_less_to_le, Less, Sortable};

/// Sorts the inclusive subrange `v[left..=right]` in place using top-down merge sort, which is
/// *O*(*n* log *n*) for every input.
///
/// A subrange with `left >= right` holds at most one element and is left untouched. Bounds
/// outside of `v` panic on indexing.
#[inline]
pub fn merge_sort(v: &mut [i32], left: usize, right: usize) {
    merge_sort_by(v, left, right, &i32::lt);
    debug_assert!(left >= right || v[left..=right].is_sorted());
}

/// Sorts all of `v`, the usual `merge_sort(v, 0, v.len() - 1)` call without the underflow on
/// empty slices.
#[inline]
pub fn merge_sort_all(v: &mut [i32]) {
    if let Some(right) = v.len().checked_sub(1) {
        merge_sort(v, 0, right);
    }
}

/// Sorts all of `v` by merging runs of width 1, 2, 4, ... without recursion.
#[inline]
pub fn merge_sort_bottom_up(v: &mut [i32]) {
    merge_sort_bottom_up_by(v, &i32::lt);
}

/// Merges the sorted runs `v[left..=mid]` and `v[mid + 1..=right]` into one sorted run.
#[inline]
pub fn merge(v: &mut [i32], left: usize, mid: usize, right: usize) {
    merge_by(v, left, mid, right, &i32::lt);
}

pub(crate) fn merge_sort_by<T, F>(v: &mut [T], left: usize, right: usize, is_less: &F)
where
    T: Sortable,
    F: Less<T>,
{
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    merge_sort_by(v, left, mid, is_less);
    merge_sort_by(v, mid + 1, right, is_less);
    merge_by(v, left, mid, right, is_less);
}

pub(crate) fn merge_sort_bottom_up_by<T, F>(v: &mut [T], is_less: &F)
where
    T: Sortable,
    F: Less<T>,
{
    let len = v.len();
    let mut width = 1;
    while width < len {
        let mut left = 0;
        // a trailing run without a partner is already sorted
        while left + width < len {
            let mid = left + width - 1;
            let right = (left + 2 * width - 1).min(len - 1);
            merge_by(v, left, mid, right, is_less);
            left += 2 * width;
        }
        width *= 2;
    }
    debug_assert!(v.is_sorted_by(is_less_to_le!(is_less)));
}

/// Both halves are copied into scratch buffers that live only for this call. On ties the
/// element from the left buffer is written first, which keeps the merge stable.
pub(crate) fn merge_by<T, F>(v: &mut [T], left: usize, mid: usize, right: usize, is_less: &F)
where
    T: Sortable,
    F: Less<T>,
{
    debug_assert!(left <= mid && mid < right);
    let lhs = v[left..=mid].to_vec();
    let rhs = v[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);
    while i < lhs.len() && j < rhs.len() {
        if !is_less(&rhs[j], &lhs[i]) {
            v[k] = lhs[i];
            i += 1;
        } else {
            v[k] = rhs[j];
            j += 1;
        }
        k += 1;
    }

    let lhs_rest = &lhs[i..];
    v[k..k + lhs_rest.len()].copy_from_slice(lhs_rest);
    k += lhs_rest.len();
    let rhs_rest = &rhs[j..];
    v[k..k + rhs_rest.len()].copy_from_slice(rhs_rest);
    debug_assert_eq!(k + rhs_rest.len(), right + 1);
}
