//! Domain types for content safety screening

use serde::{Deserialize, Serialize};

/// Harm categories tracked by the content safety service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Hate,
    SelfHarm,
    Sexual,
    Violence,
}

impl Category {
    /// All categories screened on every request
    pub const ALL: [Category; 4] = [
        Category::Hate,
        Category::SelfHarm,
        Category::Sexual,
        Category::Violence,
    ];

    /// Wire name of this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hate => "Hate",
            Category::SelfHarm => "SelfHarm",
            Category::Sexual => "Sexual",
            Category::Violence => "Violence",
        }
    }
}

/// Per-category severities from a text analyze call
///
/// Severities range 0-7; a category the service did not report stays
/// at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextAnalysis {
    pub hate: u8,
    pub self_harm: u8,
    pub sexual: u8,
    pub violence: u8,
}

impl TextAnalysis {
    /// Severity for a single category
    pub fn severity(&self, category: Category) -> u8 {
        match category {
            Category::Hate => self.hate,
            Category::SelfHarm => self.self_harm,
            Category::Sexual => self.sexual,
            Category::Violence => self.violence,
        }
    }

    /// Set the severity for a single category
    pub fn set(&mut self, category: Category, severity: u8) {
        match category {
            Category::Hate => self.hate = severity,
            Category::SelfHarm => self.self_harm = severity,
            Category::Sexual => self.sexual = severity,
            Category::Violence => self.violence = severity,
        }
    }

    /// First category at or above `threshold`, if any
    pub fn flagged(&self, threshold: u8) -> Option<Category> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| self.severity(*category) >= threshold)
    }
}

/// Result of a prompt shield call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShieldAnalysis {
    /// Whether the user prompt was classified as an injection attack
    pub attack_detected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        assert_eq!(Category::Hate.as_str(), "Hate");
        assert_eq!(Category::SelfHarm.as_str(), "SelfHarm");
        assert_eq!(Category::Sexual.as_str(), "Sexual");
        assert_eq!(Category::Violence.as_str(), "Violence");
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&Category::SelfHarm).unwrap();
        assert_eq!(json, "\"SelfHarm\"");
    }

    #[test]
    fn test_default_analysis_is_all_zero() {
        let analysis = TextAnalysis::default();
        for category in Category::ALL {
            assert_eq!(analysis.severity(category), 0);
        }
        assert_eq!(analysis.flagged(2), None);
    }

    #[test]
    fn test_flagged_at_threshold() {
        let analysis = TextAnalysis {
            violence: 2,
            ..TextAnalysis::default()
        };

        assert_eq!(analysis.flagged(2), Some(Category::Violence));
        assert_eq!(analysis.flagged(3), None);
    }

    #[test]
    fn test_set_and_read_back() {
        let mut analysis = TextAnalysis::default();
        analysis.set(Category::Sexual, 6);

        assert_eq!(analysis.severity(Category::Sexual), 6);
        assert_eq!(analysis.severity(Category::Hate), 0);
    }

    #[test]
    fn test_flagged_returns_first_in_category_order() {
        let analysis = TextAnalysis {
            self_harm: 4,
            violence: 6,
            ..TextAnalysis::default()
        };

        assert_eq!(analysis.flagged(2), Some(Category::SelfHarm));
    }
}
