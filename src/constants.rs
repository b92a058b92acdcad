/// Number of values shown when previewing an unsorted input.
pub const ORIGINAL_PREVIEW_LEN: usize = 15;
/// Number of values shown when previewing a sorted result.
pub const SORTED_PREVIEW_LEN: usize = 20;

pub const DEFAULT_INPUTS: [&str; 2] = ["a2_task1_input1.txt", "a2_task1_input2.txt"];

/// Small fixed input handy for eyeballing both algorithms.
pub const DEMO_INPUT: [i32; 10] = [5, 2, 9, 1, 6, 3, 15, 3, 18, 8];
