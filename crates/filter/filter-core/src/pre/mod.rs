//! Pre-detection filters.

mod hour_of_day;
mod pass_through;

pub use hour_of_day::HourOfDayFilter;
pub use pass_through::PassThroughFilter;
