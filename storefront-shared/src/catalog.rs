//! Product listing filter.

use std::fmt;

use crate::models::Category;

/// Query parameter the products endpoint filters on.
pub const CATEGORY_QUERY_PARAM: &str = "categoryId";

/// Which products the catalog grid shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// Every product.
    #[default]
    All,
    /// Only products of one category.
    Category(i64),
}

impl CategoryFilter {
    /// Filter matching `category`.
    #[must_use]
    pub fn for_category(category: &Category) -> Self {
        Self::Category(category.id)
    }

    /// Query pairs for `GET /products`.
    #[must_use]
    pub fn query(self) -> Vec<(&'static str, String)> {
        match self {
            Self::All => Vec::new(),
            Self::Category(id) => vec![(CATEGORY_QUERY_PARAM, id.to_string())],
        }
    }

    /// Whether `self` is the currently selected filter.
    #[must_use]
    pub fn is_selected(self, current: Self) -> bool {
        self == current
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Category(id) => write!(f, "category:{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_no_query() {
        assert!(CategoryFilter::All.query().is_empty());
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }

    #[test]
    fn category_query_pair() {
        assert_eq!(
            CategoryFilter::Category(12).query(),
            vec![("categoryId", "12".to_string())]
        );
    }

    #[test]
    fn selection() {
        let category = Category {
            id: 3,
            name: "Ropa".to_string(),
            description: None,
            created_at: None,
            updated_at: None,
        };
        let current = CategoryFilter::for_category(&category);

        assert!(CategoryFilter::Category(3).is_selected(current));
        assert!(!CategoryFilter::All.is_selected(current));
        assert!(!CategoryFilter::Category(4).is_selected(current));
        assert_eq!(current.to_string(), "category:3");
    }
}
