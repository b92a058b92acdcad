use std::{
    fmt,
    time::{Duration, Instant},
};

use tracing::debug;

use crate::{insertion_sort, merge_sort_all, merge_sort_bottom_up, util::value_counts};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    InsertionSort,
    MergeSort,
    MergeSortBottomUp,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::InsertionSort => "Insertion Sort",
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::MergeSortBottomUp => "Bottom-up Merge Sort",
        }
    }

    /// Heading printed above the sorted preview.
    pub fn sorted_heading(self) -> &'static str {
        match self {
            Algorithm::InsertionSort => "Insertion Sorted Array:",
            Algorithm::MergeSort => "Merge Sorted Array:",
            Algorithm::MergeSortBottomUp => "Bottom-up Merge Sorted Array:",
        }
    }

    pub fn sort(self, v: &mut [i32]) {
        match self {
            Algorithm::InsertionSort => insertion_sort(v),
            Algorithm::MergeSort => merge_sort_all(v),
            Algorithm::MergeSortBottomUp => merge_sort_bottom_up(v),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct SortRun {
    pub algorithm: Algorithm,
    pub sorted: Vec<i32>,
    pub elapsed: Duration,
}

/// Sorts a private copy of `data` and measures the wall-clock time of the sort alone.
pub fn time_sort(algorithm: Algorithm, data: &[i32]) -> SortRun {
    let mut sorted = data.to_vec();
    let start = Instant::now();
    algorithm.sort(&mut sorted);
    let elapsed = start.elapsed();
    debug_assert_eq!(value_counts(&sorted), value_counts(data));
    debug!(
        algorithm = algorithm.name(),
        len = data.len(),
        "sorted in {}",
        human_time(elapsed)
    );
    SortRun {
        algorithm,
        sorted,
        elapsed,
    }
}

#[derive(Debug, Clone)]
pub struct Comparison {
    pub insertion: SortRun,
    pub merge: SortRun,
}

impl Comparison {
    /// Insertion sort wins only when strictly faster.
    pub fn faster(&self) -> Algorithm {
        if self.insertion.elapsed < self.merge.elapsed {
            Algorithm::InsertionSort
        } else {
            Algorithm::MergeSort
        }
    }
}

/// Times insertion sort and merge sort on independent copies of `data`.
pub fn compare(data: &[i32]) -> Comparison {
    Comparison {
        insertion: time_sort(Algorithm::InsertionSort, data),
        merge: time_sort(Algorithm::MergeSort, data),
    }
}

/// Joins the first `limit` values with `", "`, appending `", ..."` if any were left out.
pub fn preview(v: &[i32], limit: usize) -> String {
    let shown: Vec<String> = v.iter().take(limit).map(i32::to_string).collect();
    let mut preview = shown.join(", ");
    if v.len() > limit {
        preview.push_str(", ...");
    }
    preview
}

pub fn format_millis(duration: Duration) -> String {
    format!("{:.6} ms", duration.as_secs_f64() * 1000.0)
}

pub fn human_time(duration: Duration) -> String {
    let mut duration = duration.as_nanos() as f64;
    if duration < 1000.0 {
        return format!("{:.1}ns", duration);
    }
    duration /= 1000.0;
    if duration < 1000.0 {
        return format!("{:.1}us", duration);
    }
    duration /= 1000.0;
    if duration < 1000.0 {
        return format!("{:.1}ms", duration);
    }
    duration /= 1000.0;
    format!("{:.1}s", duration)
}
