use crate::classify::category::Category;
use crate::classify::tables::{PrefixEntry, PrefixTable, COMPACT_TAXONOMY, FULL_TAXONOMY};

/// Assigns a class name to exactly one [`Category`] of a prefix table.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'t> {
    table: &'t PrefixTable,
}

impl<'t> Classifier<'t> {
    pub fn new(table: &'t PrefixTable) -> Self {
        Classifier { table }
    }

    /// Variant markers first, then the first table entry in declaration
    /// order, then the fallback. Never fails.
    pub fn classify(&self, class_name: &str) -> Category {
        if let Some(marker) = self
            .table
            .variant_markers
            .iter()
            .copied()
            .find(|marker| class_name.starts_with(*marker))
        {
            return Category::Variant(marker.strip_suffix(':').unwrap_or(marker));
        }

        self.table
            .entries
            .iter()
            .find(|e| self.matches(class_name, e))
            .map(|e| Category::Named(e.category))
            .unwrap_or(Category::Fallback(self.table.fallback))
    }

    fn matches(&self, class_name: &str, entry: &PrefixEntry) -> bool {
        if class_name.starts_with(entry.prefix) {
            return true;
        }
        self.table.negated_prefixes
            && class_name
                .strip_prefix('-')
                .is_some_and(|rest| rest.starts_with(entry.prefix))
    }
}

impl Classifier<'static> {
    pub fn full() -> Self {
        Classifier::new(&FULL_TAXONOMY)
    }

    pub fn compact() -> Self {
        Classifier::new(&COMPACT_TAXONOMY)
    }
}
