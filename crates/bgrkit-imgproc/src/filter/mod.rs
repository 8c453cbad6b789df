mod median;

pub use median::{median_filter, median_filter_with_rank};
