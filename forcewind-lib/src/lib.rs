pub mod classify;
pub mod error;
pub mod force_generate;
pub mod render;
pub mod style;
pub mod values;

pub use error::{ForcewindError, Result};
