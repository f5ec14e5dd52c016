//! Post-detection filters.

mod m_of_n;
mod pass_through;

pub use m_of_n::MOfNAggregationFilter;
pub use pass_through::PassThroughPostFilter;
