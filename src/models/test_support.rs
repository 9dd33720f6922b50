//! Fixtures shared by the model tests.

use super::{Question, QuestionBank};
use indexmap::IndexMap;

/// Question with two options where "A" is the single correct answer.
pub fn two_option_question(prompt: &str) -> Question {
    let mut options = IndexMap::new();
    options.insert("A".to_string(), "x".to_string());
    options.insert("B".to_string(), "y".to_string());
    Question {
        prompt: prompt.to_string(),
        instruction: "Select one.".to_string(),
        options,
        answers: vec!["A".to_string()],
    }
}

/// Bank of `len` questions whose prompts are their global indices.
pub fn numbered_bank(len: usize) -> QuestionBank {
    QuestionBank::new((0..len).map(|i| two_option_question(&i.to_string())).collect())
}
