use std::fmt;

/// The bucket a utility class is filed under.
///
/// Every variant borrows from a statically declared [`PrefixTable`], so the
/// set of categories is closed at compile time.
///
/// [`PrefixTable`]: crate::classify::PrefixTable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// A category named by a prefix table entry, e.g. "spacing-margin".
    Named(&'static str),
    /// A responsive/state variant, holding the marker without its colon.
    /// Displays as `variants-<marker>`.
    Variant(&'static str),
    /// The table's catch-all ("uncategorized" or "other").
    Fallback(&'static str),
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Named(name) | Category::Fallback(name) => f.write_str(name),
            Category::Variant(marker) => write!(f, "variants-{}", marker),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_categories_are_prefixed() {
        assert_eq!(Category::Variant("sm").to_string(), "variants-sm");
        assert_eq!(Category::Named("spacing-margin").to_string(), "spacing-margin");
        assert_eq!(Category::Fallback("other").to_string(), "other");
    }
}
