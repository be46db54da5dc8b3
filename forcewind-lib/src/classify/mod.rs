pub mod category;
pub mod classifier;
pub mod tables;

pub use category::Category;
pub use classifier::Classifier;
pub use tables::{PrefixEntry, PrefixTable, COMPACT_TAXONOMY, FULL_TAXONOMY};
