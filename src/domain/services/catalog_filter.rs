use crate::domain::models::{Product, CATEGORY_ALL};

/// Category + free-text filter over the product catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFilter {
    pub category: String,
    pub search: String,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            category: CATEGORY_ALL.to_string(),
            search: String::new(),
        }
    }
}

impl CatalogFilter {
    pub fn new(category: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            search: search.into(),
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = self.category == CATEGORY_ALL || product.category == self.category;
        if !category_ok {
            return false;
        }

        let term = self.search.trim().to_lowercase();
        term.is_empty()
            || product.title.to_lowercase().contains(&term)
            || product.summary.to_lowercase().contains(&term)
    }

    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::PRODUCTS;

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_all_returns_everything() {
        let filter = CatalogFilter::default();
        assert_eq!(filter.apply(PRODUCTS).len(), 14);
    }

    #[test]
    fn test_defense_systems_category() {
        let filter = CatalogFilter::new("Defense Systems", "");
        assert_eq!(ids(&filter.apply(PRODUCTS)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let filter = CatalogFilter::new("Quantum Widgets", "");
        assert!(filter.apply(PRODUCTS).is_empty());
    }

    #[test]
    fn test_search_miss_is_empty() {
        let filter = CatalogFilter::new(CATEGORY_ALL, "zeppelin");
        assert!(filter.apply(PRODUCTS).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_summary() {
        let by_title = CatalogFilter::new(CATEGORY_ALL, "lomah");
        assert_eq!(ids(&by_title.apply(PRODUCTS)), vec![1]);

        let by_summary = CatalogFilter::new("Technology Services", "PENETRATION");
        assert_eq!(ids(&by_summary.apply(PRODUCTS)), vec![8]);
    }

    #[test]
    fn test_reset() {
        let mut filter = CatalogFilter::new("Defense Systems", "tank");
        assert!(!filter.is_default());
        filter.reset();
        assert!(filter.is_default());
    }
}
