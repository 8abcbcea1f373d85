//! Core types for the flashcard application.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::expr;
use crate::matching;

/// Card category. Fixed at construction; selects the prompt label and the
/// answer checking rule for the card's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Vocabulary,
    Math,
}

impl Category {
    /// Get the category name as stored on disk.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vocabulary => "Vocabulary",
            Self::Math => "Math",
        }
    }

    /// Parse from a category name, case-insensitively.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "vocabulary" => Some(Self::Vocabulary),
            "math" => Some(Self::Math),
            _ => None,
        }
    }

    /// Label shown in front of the prompt when a card is displayed.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Vocabulary => "Definition",
            Self::Math => "Problem",
        }
    }
}

/// A single question/answer study unit.
///
/// Field order is the storage column order: category, prompt, expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub category: Category,
    pub prompt: String,
    pub expected: String,
}

impl Card {
    pub fn new(category: Category, prompt: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            category,
            prompt: prompt.into(),
            expected: expected.into(),
        }
    }

    pub fn vocabulary(prompt: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::new(Category::Vocabulary, prompt, expected)
    }

    pub fn math(prompt: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::new(Category::Math, prompt, expected)
    }

    /// Check a submitted answer against the expected one.
    ///
    /// Vocabulary cards compare case-insensitively with edge whitespace
    /// trimmed. Math cards parse the submission as a number and evaluate
    /// `expected` as an arithmetic expression; any parse or evaluation
    /// failure counts as a wrong answer, never an error.
    pub fn check_answer(&self, user_answer: &str) -> bool {
        match self.category {
            Category::Vocabulary => matching::vocabulary_match(&self.expected, user_answer),
            Category::Math => {
                let given: f64 = match user_answer.trim().parse() {
                    Ok(value) => value,
                    Err(_) => return false,
                };
                match expr::evaluate(&self.expected) {
                    Ok(value) => given == value,
                    Err(_) => false,
                }
            }
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category.label(), self.prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn category_round_trips_through_names() {
        assert_eq!(Category::from_str("Vocabulary"), Some(Category::Vocabulary));
        assert_eq!(Category::from_str("math"), Some(Category::Math));
        assert_eq!(Category::from_str(" MATH "), Some(Category::Math));
        assert_eq!(Category::from_str("Trivia"), None);
        assert_eq!(Category::Vocabulary.as_str(), "Vocabulary");
        assert_eq!(Category::Math.as_str(), "Math");
    }

    #[test]
    fn vocabulary_check_is_case_and_whitespace_insensitive() {
        let card = Card::vocabulary("capital of France", "Paris");
        assert!(card.check_answer("Paris"));
        assert!(card.check_answer(" paris "));
        assert!(card.check_answer("PARIS"));
        assert!(!card.check_answer("Lyon"));
    }

    #[test]
    fn math_check_compares_numerically() {
        let card = Card::math("What is 2 + 2?", "2 + 2");
        assert!(card.check_answer("4"));
        assert!(card.check_answer("4.0"));
        assert!(card.check_answer(" 4 "));
        assert!(!card.check_answer("5"));
    }

    #[test]
    fn math_check_masks_bad_input_and_bad_expressions() {
        let card = Card::math("What is 2 + 2?", "2 + 2");
        assert!(!card.check_answer("abc"));
        assert!(!card.check_answer(""));

        let broken = Card::math("divide", "1 / 0");
        assert!(!broken.check_answer("0"));

        let garbage = Card::math("garbage", "2 +");
        assert!(!garbage.check_answer("2"));
    }

    #[test]
    fn display_uses_category_label() {
        let vocab = Card::vocabulary("ephemeral", "short-lived");
        assert_eq!(vocab.to_string(), "Definition: ephemeral");

        let math = Card::math("3 * 7", "3 * 7");
        assert_eq!(math.to_string(), "Problem: 3 * 7");
    }
}
