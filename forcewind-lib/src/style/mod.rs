pub mod force_css;
pub mod owned_css;
