//! Category types
//!
//! The fixed set of portfolio categories and the filter used by the portfolio view.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Portfolio category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "UI/UX")]
    UiUx,
    Marketing,
    Branding,
    Videography,
    #[serde(rename = "Graphic Design")]
    GraphicDesign,
    Photography,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 6] = [
        Category::UiUx,
        Category::Marketing,
        Category::Branding,
        Category::Videography,
        Category::GraphicDesign,
        Category::Photography,
    ];

    /// Label shown in the UI and written to storage
    pub fn label(&self) -> &'static str {
        match self {
            Category::UiUx => "UI/UX",
            Category::Marketing => "Marketing",
            Category::Branding => "Branding",
            Category::Videography => "Videography",
            Category::GraphicDesign => "Graphic Design",
            Category::Photography => "Photography",
        }
    }

    /// Parse a stored label. Matching is exact, as labels are written by this app.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which projects the portfolio view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Parse `"All"` or a category label
    pub fn from_label(label: &str) -> Option<Self> {
        if label == Self::ALL_LABEL {
            return Some(CategoryFilter::All);
        }
        Category::from_label(label).map(CategoryFilter::Only)
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    /// `All` followed by every category, for the filter pills
    pub fn choices() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::from_label("Sculpture"), None);
        assert_eq!(Category::from_label("ui/ux"), None);
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Category::GraphicDesign).unwrap();
        assert_eq!(json, "\"Graphic Design\"");
        let parsed: Category = serde_json::from_str("\"UI/UX\"").unwrap();
        assert_eq!(parsed, Category::UiUx);
    }

    #[test]
    fn test_filter() {
        assert_eq!(CategoryFilter::from_label("All"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_label("Branding"),
            Some(CategoryFilter::Only(Category::Branding))
        );
        assert_eq!(CategoryFilter::from_label("Everything"), None);

        assert!(CategoryFilter::All.matches(Category::Photography));
        assert!(!CategoryFilter::Only(Category::Marketing).matches(Category::Photography));
        assert_eq!(CategoryFilter::choices().count(), 7);
    }
}
