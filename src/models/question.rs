//! A multiple-choice question and the read-only bank that holds them.
//! Field names follow the question bank JSON file.
use crate::config::DEFAULT_QUESTIONS_PER_DAY;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(default)]
    pub instruction: String,
    /// Option label ("A") to option text, in display order.
    #[serde(default)]
    pub options: IndexMap<String, String>,
    /// Correct option labels in stored order.
    #[serde(default)]
    pub answers: Vec<String>,
}

impl Question {
    /// Correct labels as an unordered set.
    pub fn answer_set(&self) -> BTreeSet<&str> {
        self.answers.iter().map(String::as_str).collect()
    }

    /// Correct labels sorted for display. Stored order is left untouched.
    pub fn sorted_answers(&self) -> Vec<String> {
        let mut sorted = self.answers.clone();
        sorted.sort();
        sorted
    }

    /// True when `selected` holds exactly the correct labels, ignoring order.
    pub fn is_correct<'a, I>(&self, selected: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let selected: BTreeSet<&str> = selected.into_iter().collect();
        selected == self.answer_set()
    }
}

/// Ordered question list, split into days of a fixed width.
#[derive(Clone, Debug)]
pub struct QuestionBank {
    pub questions: Vec<Question>,
    pub questions_per_day: usize,
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self {
            questions: Vec::new(),
            questions_per_day: DEFAULT_QUESTIONS_PER_DAY,
        }
    }
}

impl QuestionBank {
    /// Bank with the default day width of 40 questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            ..Default::default()
        }
    }

    /// Sets the number of questions making up one day.
    pub fn with_questions_per_day(mut self, questions_per_day: usize) -> Self {
        self.questions_per_day = questions_per_day;
        self
    }

    /// Question at a global (0-based) position.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Number of questions across all days.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// True when the bank holds no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> Question {
        serde_json::from_str(
            r#"{
                "question": "Which are prime?",
                "instruction": "Choose two.",
                "options": {"C": "4", "A": "2", "B": "3"},
                "answers": ["B", "A"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_deserialize_keeps_option_order() {
        let question = sample_question();
        assert_eq!(question.prompt, "Which are prime?");
        let labels: Vec<&str> = question.options.keys().map(String::as_str).collect();
        assert_eq!(labels, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_missing_optional_fields() {
        let question: Question = serde_json::from_str(r#"{"question": "Bare"}"#).unwrap();
        assert!(question.instruction.is_empty());
        assert!(question.options.is_empty());
        assert!(question.answers.is_empty());
    }

    #[test]
    fn test_is_correct_ignores_order() {
        let question = sample_question();
        assert!(question.is_correct(["A", "B"]));
        assert!(question.is_correct(["B", "A"]));
        assert!(!question.is_correct(["A"]));
        assert!(!question.is_correct(["A", "B", "C"]));
    }

    #[test]
    fn test_sorted_answers_for_display_only() {
        let question = sample_question();
        assert_eq!(question.sorted_answers(), vec!["A", "B"]);
        assert_eq!(question.answers, vec!["B", "A"]);
    }
}
