//! Resolution of stored mistake keys into question records.

use super::{MistakeKey, Question, QuestionBank};
use crate::error::ResolutionError;

/// A mistake key together with the question it points at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedQuestion<'a> {
    pub key: MistakeKey,
    pub global_index: usize,
    pub question: &'a Question,
}

/// Parses `key` and looks the question up in `bank`.
pub fn resolve<'a>(key: &str, bank: &'a QuestionBank) -> Result<ResolvedQuestion<'a>, ResolutionError> {
    let parsed = MistakeKey::parse(key)?;

    let out_of_range = |index: usize| ResolutionError::IndexOutOfRange {
        key: key.to_string(),
        index,
        len: bank.len(),
    };

    // Day 0 has no position in the bank; report it like any other miss.
    let global_index = parsed
        .global_index(bank.questions_per_day)
        .ok_or_else(|| out_of_range(0))?;
    let question = bank.get(global_index).ok_or_else(|| out_of_range(global_index))?;

    Ok(ResolvedQuestion {
        key: parsed,
        global_index,
        question,
    })
}
