use crate::{is_less_to_le, Less, Sortable};

/// Sorts a slice of integers in place using insertion sort, which is *O*(*n*^2) worst-case
/// and *O*(*n*) on already sorted input.
#[inline]
pub fn insertion_sort(v: &mut [i32]) {
    insertion_sort_by(v, &i32::lt);
}

/// Grows a sorted prefix one element at a time. The current element is held as `key`, every
/// prefix element for which `is_less(key, elem)` holds moves one slot right, and `key` drops
/// into the gap. Equal elements are never moved past each other.
///
/// Returns the number of single-slot shifts performed.
pub(crate) fn insertion_sort_by<T, F>(v: &mut [T], is_less: &F) -> usize
where
    T: Sortable,
    F: Less<T>,
{
    let mut shifts = 0;
    for i in 1..v.len() {
        let key = v[i];
        let mut hole = i;
        while hole > 0 && is_less(&key, &v[hole - 1]) {
            v[hole] = v[hole - 1];
            hole -= 1;
        }
        shifts += i - hole;
        v[hole] = key;
    }
    debug_assert!(v.is_sorted_by(is_less_to_le!(is_less)));
    shifts
}

#[cfg(test)]
mod tests {
    use super::{insertion_sort, insertion_sort_by};

    #[test]
    fn mixed_input() {
        let mut v = [5, 2, 9, 1, 6, 3, 15, 3, 18, 8];
        insertion_sort(&mut v);
        assert_eq!(v, [1, 2, 3, 3, 5, 6, 8, 9, 15, 18]);
    }

    #[test]
    fn sorted_input_needs_no_shifts() {
        let mut v = [1, 2, 3, 4, 5];
        let shifts = insertion_sort_by(&mut v, &i32::lt);
        assert_eq!(shifts, 0);
        assert_eq!(v, [1, 2, 3, 4, 5]);

        let mut v = [7, 7, 7, 7];
        assert_eq!(insertion_sort_by(&mut v, &i32::lt), 0);
    }

    #[test]
    fn reverse_input_is_worst_case() {
        let mut v = [5, 4, 3, 2, 1];
        let shifts = insertion_sort_by(&mut v, &i32::lt);
        assert_eq!(v, [1, 2, 3, 4, 5]);
        // every pair is an inversion
        assert_eq!(shifts, 5 * 4 / 2);
    }

    #[test]
    fn empty_and_single() {
        let mut v: [i32; 0] = [];
        insertion_sort(&mut v);
        assert!(v.is_empty());

        let mut v = [42];
        assert_eq!(insertion_sort_by(&mut v, &i32::lt), 0);
        assert_eq!(v, [42]);
    }

    #[test]
    fn negatives_and_extremes() {
        let mut v = [0, i32::MAX, -3, i32::MIN, -3, 17];
        insertion_sort(&mut v);
        assert_eq!(v, [i32::MIN, -3, -3, 0, 17, i32::MAX]);
    }

    #[test]
    fn equal_keys_keep_their_order() {
        // (key, original position)
        let mut v = [(3, 0), (1, 1), (3, 2), (2, 3), (1, 4), (3, 5), (2, 6)];
        insertion_sort_by(&mut v, &|a: &(i32, usize), b: &(i32, usize)| a.0 < b.0);
        assert_eq!(
            v,
            [(1, 1), (1, 4), (2, 3), (2, 6), (3, 0), (3, 2), (3, 5)]
        );
    }
}
