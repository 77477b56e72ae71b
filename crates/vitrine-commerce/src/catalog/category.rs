//! Category types for product organization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product category.
///
/// The catalog is static, so the category set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Face products (foundation, blush, primer).
    Face,
    /// Eye products (mascara, palettes, eyeliner).
    Eyes,
    /// Lip products (lipstick, gloss).
    Lips,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 3] = [Category::Face, Category::Eyes, Category::Lips];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Face => "face",
            Category::Eyes => "eyes",
            Category::Lips => "lips",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "face" => Some(Category::Face),
            "eyes" => Some(Category::Eyes),
            "lips" => Some(Category::Lips),
            _ => None,
        }
    }

    /// Human-readable label for the filter UI.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Face => "Face",
            Category::Eyes => "Eyes",
            Category::Lips => "Lips",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_category_from_str_case_insensitive() {
        assert_eq!(Category::from_str("Lips"), Some(Category::Lips));
        assert_eq!(Category::from_str("EYES"), Some(Category::Eyes));
    }

    #[test]
    fn test_category_from_str_unknown() {
        assert_eq!(Category::from_str("nails"), None);
    }

    #[test]
    fn test_category_label() {
        assert_eq!(Category::Face.label(), "Face");
        assert_eq!(format!("{}", Category::Eyes), "Eyes");
    }
}
