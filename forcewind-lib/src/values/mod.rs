pub mod compare;
pub mod extract;

pub use compare::{compare_values, sort_values, ValueToken};
pub use extract::{extract_value, CategoryFilter};
