//! The question bank: curated multiple-choice templates grouped by category.
//!
//! The bank is read-only once built. The procedural generator filters it by category and
//! difficulty, always falling back to the `general` category when a filter leaves nothing.

mod catalog;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::BankError;

/// Easiest difficulty level.
pub const MIN_DIFFICULTY: u8 = 1;

/// Hardest difficulty level.
pub const MAX_DIFFICULTY: u8 = 5;

/// Topic categories known to the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Math,
    Science,
    History,
    Programming,
    /// Fallback for unknown topics and empty pools.
    General,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Math,
        Category::Science,
        Category::History,
        Category::Programming,
        Category::General,
    ];

    /// Get the lowercase name used to resolve topics.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Math => "math",
            Category::Science => "science",
            Category::History => "history",
            Category::Programming => "programming",
            Category::General => "general",
        }
    }

    /// Resolve a topic by exact name. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A difficulty level in `MIN_DIFFICULTY..=MAX_DIFFICULTY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Difficulty(u8);

impl Difficulty {
    /// Clamp an arbitrary requested level into the valid range.
    pub fn clamped(level: i32) -> Self {
        Self(level.clamp(MIN_DIFFICULTY as i32, MAX_DIFFICULTY as i32) as u8)
    }

    /// Clamp into a narrower configured range.
    pub fn clamped_within(level: i32, min: u8, max: u8) -> Self {
        let min = min.max(MIN_DIFFICULTY);
        let max = max.min(MAX_DIFFICULTY).max(min);
        Self(level.clamp(min as i32, max as i32) as u8)
    }

    /// Get the numeric level.
    pub fn level(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A question template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankEntry {
    pub text: String,
    pub options: [String; 4],
    pub correct_index: usize,
    /// Lowest difficulty at which this entry may be drawn.
    pub min_difficulty: u8,
}

impl BankEntry {
    /// Create a bank entry from borrowed option text.
    pub fn new(
        text: impl Into<String>,
        options: [&str; 4],
        correct_index: usize,
        min_difficulty: u8,
    ) -> Self {
        Self {
            text: text.into(),
            options: options.map(str::to_owned),
            correct_index,
            min_difficulty,
        }
    }

    /// Check if this entry may be drawn at `difficulty`.
    pub fn is_eligible(&self, difficulty: Difficulty) -> bool {
        self.min_difficulty <= difficulty.level()
    }

    /// Get the text of the correct option.
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    fn validate(&self, category: &str) -> Result<(), BankError> {
        if self.correct_index >= self.options.len() {
            return Err(BankError::InvalidEntry {
                category: category.to_string(),
                reason: format!("correct_index {} out of range", self.correct_index),
            });
        }
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&self.min_difficulty) {
            return Err(BankError::InvalidEntry {
                category: category.to_string(),
                reason: format!("min_difficulty {} out of range", self.min_difficulty),
            });
        }
        Ok(())
    }
}

/// The entries eligible for one draw.
#[derive(Debug, Clone)]
pub struct Pool<'a> {
    /// Category the entries were actually taken from.
    pub source: Category,
    pub entries: Vec<&'a BankEntry>,
}

impl Pool<'_> {
    /// Check if the pool came from a different category than requested.
    pub fn is_fallback(&self, requested: Category) -> bool {
        self.source != requested
    }
}

/// Read-only collection of question templates by category.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    categories: HashMap<Category, Vec<BankEntry>>,
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}

impl QuestionBank {
    /// The curated catalog shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            categories: catalog::builtin_categories(),
        }
    }

    /// Load a custom bank from a JSON object keyed by category name.
    ///
    /// The `general` category must be present and non-empty, since it backs every fallback.
    pub fn from_json(json: &str) -> Result<Self, BankError> {
        let raw: HashMap<String, Vec<BankEntry>> = serde_json::from_str(json)?;
        let mut categories = HashMap::new();

        for (name, entries) in raw {
            let category =
                Category::from_name(&name).ok_or_else(|| BankError::UnknownCategory(name.clone()))?;
            for entry in &entries {
                entry.validate(&name)?;
            }
            categories.insert(category, entries);
        }

        let general = categories.get(&Category::General);
        if general.map_or(true, |entries| entries.is_empty()) {
            return Err(BankError::EmptyCategory(Category::General.name().to_string()));
        }

        Ok(Self { categories })
    }

    /// All entries in a category, in catalog order.
    pub fn entries(&self, category: Category) -> &[BankEntry] {
        self.categories
            .get(&category)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of entries across categories.
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Check if the bank has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries of `category` eligible at `difficulty`.
    ///
    /// If none qualify, the whole `general` category is returned regardless of difficulty.
    pub fn eligible(&self, category: Category, difficulty: Difficulty) -> Pool<'_> {
        let entries: Vec<_> = self
            .entries(category)
            .iter()
            .filter(|e| e.is_eligible(difficulty))
            .collect();

        if entries.is_empty() {
            return Pool {
                source: Category::General,
                entries: self.entries(Category::General).iter().collect(),
            };
        }

        Pool {
            source: category,
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_lookup_is_exact() {
        assert_eq!(Category::from_name("math"), Some(Category::Math));
        assert_eq!(Category::from_name("programming"), Some(Category::Programming));
        assert_eq!(Category::from_name("Math"), None);
        assert_eq!(Category::from_name("astrology"), None);
    }

    #[test]
    fn test_difficulty_clamping() {
        assert_eq!(Difficulty::clamped(-3).level(), 1);
        assert_eq!(Difficulty::clamped(0).level(), 1);
        assert_eq!(Difficulty::clamped(3).level(), 3);
        assert_eq!(Difficulty::clamped(42).level(), 5);

        assert_eq!(Difficulty::clamped_within(5, 2, 4).level(), 4);
        assert_eq!(Difficulty::clamped_within(1, 2, 4).level(), 2);
    }

    #[test]
    fn test_builtin_bank_is_well_formed() {
        let bank = QuestionBank::builtin();
        for category in Category::ALL {
            let entries = bank.entries(category);
            assert!(!entries.is_empty(), "{category} is empty");
            for entry in entries {
                assert!(entry.validate(category.name()).is_ok(), "{}", entry.text);
            }
        }
    }

    #[test]
    fn test_eligible_filters_by_difficulty() {
        let bank = QuestionBank::builtin();
        let pool = bank.eligible(Category::Math, Difficulty::clamped(1));

        assert_eq!(pool.source, Category::Math);
        assert!(pool.entries.iter().all(|e| e.min_difficulty <= 1));
        assert!(pool.entries.len() < bank.entries(Category::Math).len());
    }

    #[test]
    fn test_eligible_falls_back_to_general() {
        let bank = QuestionBank::builtin();
        let pool = bank.eligible(Category::Programming, Difficulty::clamped(1));

        assert!(pool.is_fallback(Category::Programming));
        assert_eq!(pool.entries.len(), bank.entries(Category::General).len());
    }

    #[test]
    fn test_from_json() {
        let bank = QuestionBank::from_json(
            r#"{
                "general": [
                    {"text": "Pick B", "options": ["A", "B", "C", "D"], "correct_index": 1, "min_difficulty": 1}
                ],
                "math": [
                    {"text": "1 + 1?", "options": ["1", "2", "3", "4"], "correct_index": 1, "min_difficulty": 4}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(bank.len(), 2);
        assert_eq!(bank.entries(Category::General)[0].correct_option(), "B");
        assert!(bank.entries(Category::History).is_empty());

        let pool = bank.eligible(Category::Math, Difficulty::clamped(2));
        assert_eq!(pool.source, Category::General);
    }

    #[test]
    fn test_from_json_requires_general() {
        let result = QuestionBank::from_json(r#"{"math": []}"#);
        assert!(matches!(result, Err(BankError::EmptyCategory(_))));
    }

    #[test]
    fn test_from_json_rejects_bad_entries() {
        let unknown = QuestionBank::from_json(r#"{"cooking": []}"#);
        assert!(matches!(unknown, Err(BankError::UnknownCategory(_))));

        let bad_index = QuestionBank::from_json(
            r#"{"general": [{"text": "?", "options": ["a","b","c","d"], "correct_index": 4, "min_difficulty": 1}]}"#,
        );
        assert!(matches!(bad_index, Err(BankError::InvalidEntry { .. })));

        let three_options = QuestionBank::from_json(
            r#"{"general": [{"text": "?", "options": ["a","b","c"], "correct_index": 0, "min_difficulty": 1}]}"#,
        );
        assert!(matches!(three_options, Err(BankError::JsonError(_))));
    }
}
