/// Single-category filter. Names carrying a variant (`hover:`, `sm:`, ...)
/// never match, whatever follows the colon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryFilter<'a> {
    category: &'a str,
    /// Also accept the bare category name (`-?<category>` with nothing after).
    allow_bare: bool,
}

impl<'a> CategoryFilter<'a> {
    /// Matches `-?<category>-...`; used when listing values.
    pub fn values(category: &'a str) -> Self {
        CategoryFilter {
            category,
            allow_bare: false,
        }
    }

    /// Matches `-?<category>` or `-?<category>-...`; used for prefab files.
    pub fn prefab(category: &'a str) -> Self {
        CategoryFilter {
            category,
            allow_bare: true,
        }
    }

    pub fn matches(&self, class_name: &str) -> bool {
        if class_name.contains(':') {
            return false;
        }
        let unsigned = class_name.strip_prefix('-').unwrap_or(class_name);
        match unsigned.strip_prefix(self.category) {
            Some(rest) => rest.starts_with('-') || (self.allow_bare && rest.is_empty()),
            None => false,
        }
    }
}

/// Strip `-?<category>-` from the front of `class_name`.
///
/// Purely textual: a name that does not start with that prefix comes back
/// unchanged, and the remainder is never normalized.
pub fn extract_value<'n>(class_name: &'n str, category: &str) -> &'n str {
    let unsigned = class_name.strip_prefix('-').unwrap_or(class_name);
    unsigned
        .strip_prefix(category)
        .and_then(|rest| rest.strip_prefix('-'))
        .unwrap_or(class_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_and_positive_names_give_the_same_value() {
        assert_eq!(extract_value("-gap-8", "gap"), "8");
        assert_eq!(extract_value("gap-8", "gap"), "8");
    }

    #[test]
    fn remainder_is_verbatim() {
        assert_eq!(extract_value("grid-cols-none", "grid-cols"), "none");
        assert_eq!(extract_value("w-1/2", "w"), "1/2");
        assert_eq!(extract_value("p-0.5", "p"), "0.5");
        assert_eq!(extract_value("m-Auto", "m"), "Auto");
        assert_eq!(extract_value("p-", "p"), "");
    }

    #[test]
    fn foreign_names_pass_through() {
        assert_eq!(extract_value("px-4", "p"), "px-4");
        assert_eq!(extract_value("-x", "x"), "-x");
        assert_eq!(extract_value("container", "p"), "container");
    }

    #[test]
    fn value_filter_needs_a_dash() {
        let filter = CategoryFilter::values("p");
        assert!(filter.matches("p-4"));
        assert!(filter.matches("-p-4"));
        assert!(!filter.matches("p"));
        assert!(!filter.matches("px-4"));
        assert!(!filter.matches("pl-4"));
    }

    #[test]
    fn prefab_filter_accepts_the_bare_name() {
        let filter = CategoryFilter::prefab("border");
        assert!(filter.matches("border"));
        assert!(filter.matches("border-2"));
        assert!(filter.matches("-border-2"));
        assert!(!filter.matches("borders"));
    }

    #[test]
    fn colon_names_never_match() {
        assert!(!CategoryFilter::values("p").matches("hover:p-4"));
        assert!(!CategoryFilter::prefab("p").matches("p-4:hover"));
        assert!(!CategoryFilter::values("sm").matches("sm:p-4"));
    }
}
