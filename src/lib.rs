//! Insertion sort and merge sort over integer slices, plus the timing harness that compares
//! them on identical copies of an input.
pub use insertion_sort::insertion_sort;
pub use merge_sort::{merge, merge_sort, merge_sort_all, merge_sort_bottom_up};

pub mod constants;
pub mod harness;
mod insertion_sort;
pub mod input;
mod merge_sort;
mod util;

pub(crate) trait Sortable: Copy {}
impl<T: Copy> Sortable for T {}

pub(crate) trait Less<T>: Fn(&T, &T) -> bool {}
impl<T, F: Fn(&T, &T) -> bool> Less<T> for F {}
