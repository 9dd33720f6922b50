//! Loading of the read-only question bank.
//! The bank is a JSON array of question records.

use super::json::try_load;
use crate::error::StorageError;
use crate::models::{Question, QuestionBank};
use std::path::Path;

/// Loads the question bank from a JSON array.
///
/// A missing file yields an empty bank; malformed JSON is an error.
pub fn load_question_bank(path: &Path, questions_per_day: usize) -> Result<QuestionBank, StorageError> {
    let questions: Vec<Question> = match try_load(path)? {
        Some(questions) => questions,
        None => {
            log::warn!("Question bank {:?} not found, using an empty bank", path);
            Vec::new()
        }
    };
    log::info!("Loaded {} questions from {:?}", questions.len(), path);
    Ok(QuestionBank::new(questions).with_questions_per_day(questions_per_day))
}

/// Like [`load_question_bank`], but an unreadable or malformed file is
/// logged and replaced by an empty bank.
pub fn load_question_bank_or_empty(path: &Path, questions_per_day: usize) -> QuestionBank {
    load_question_bank(path, questions_per_day).unwrap_or_else(|e| {
        log::error!("Cannot load question bank {:?}: {}", path, e);
        QuestionBank::default().with_questions_per_day(questions_per_day)
    })
}
