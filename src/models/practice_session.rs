//! Practice round over recorded mistakes.
//! Walks the mistake keys one at a time, checks multi-select answers and
//! records another mistake on every wrong submission.

use super::{Question, QuestionBank, ResolvedQuestion, resolve};
use crate::error::PracticeError;
use crate::storage::{MistakeStore, Mistakes};
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PracticeState {
    AwaitingAnswer,
    Submitted,
    Complete,
}

/// The question currently presented.
#[derive(Clone, Debug)]
pub struct PracticeItem<'a> {
    pub key: String,
    pub times_missed: u64,
    pub resolved: ResolvedQuestion<'a>,
}

/// Result of a submission, kept until the session moves on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// Correct labels sorted for display.
    pub correct_answers: Vec<String>,
    pub times_missed: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionSummary {
    pub correct: usize,
    pub wrong: usize,
    pub total: usize,
    pub accuracy: f64,
}

/// Session state. Only the store on disk outlives it.
#[derive(Clone, Debug)]
pub struct PracticeSession {
    /// Snapshot of (key, count) taken when the round started.
    items: Vec<(String, u64)>,
    current_index: usize,
    correct_count: usize,
    submitted: bool,
    selected: BTreeSet<String>,
    last_outcome: Option<AnswerOutcome>,
}

impl PracticeSession {
    /// Starts a round over every key in `mistakes`, in store order.
    pub fn start(mistakes: &Mistakes) -> Result<Self, PracticeError> {
        if mistakes.is_empty() {
            return Err(PracticeError::NothingToPractice);
        }
        let items = mistakes.iter().map(|(k, &v)| (k.clone(), v)).collect();
        Ok(Self {
            items,
            current_index: 0,
            correct_count: 0,
            submitted: false,
            selected: BTreeSet::new(),
            last_outcome: None,
        })
    }

    /// Where the round stands. Keys that fail to resolve only count as
    /// skipped once `current`, `submit` or `next` has looked at them.
    pub fn state(&self) -> PracticeState {
        if self.current_index >= self.items.len() {
            PracticeState::Complete
        } else if self.submitted {
            PracticeState::Submitted
        } else {
            PracticeState::AwaitingAnswer
        }
    }

    /// Returns the question to present, first stepping past any keys that
    /// cannot be resolved against `bank`. `None` once the round is over.
    pub fn current<'b>(&mut self, bank: &'b QuestionBank) -> Option<PracticeItem<'b>> {
        self.skip_unresolvable(bank);
        let (key, times_missed) = self.items.get(self.current_index)?;
        let resolved = resolve(key, bank).ok()?;
        Some(PracticeItem {
            key: key.clone(),
            times_missed: *times_missed,
            resolved,
        })
    }

    fn current_question<'b>(&self, bank: &'b QuestionBank) -> Option<&'b Question> {
        let (key, _) = self.items.get(self.current_index)?;
        resolve(key, bank).ok().map(|resolved| resolved.question)
    }

    /// Advances past keys that do not resolve. Returns true if any were skipped.
    fn skip_unresolvable(&mut self, bank: &QuestionBank) -> bool {
        if self.submitted {
            return false;
        }
        let start = self.current_index;
        while let Some((key, _)) = self.items.get(self.current_index) {
            match resolve(key, bank) {
                Ok(_) => break,
                Err(e) => {
                    log::warn!("Skipping practice item {}: {}", self.current_index + 1, e);
                    self.current_index += 1;
                    self.selected.clear();
                }
            }
        }
        self.current_index != start
    }

    /// Adds or removes `label` from the selection.
    pub fn toggle(&mut self, label: &str) {
        if !self.selected.remove(label) {
            self.selected.insert(label.to_string());
        }
    }

    /// Replaces the current selection.
    pub fn select<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = labels.into_iter().map(Into::into).collect();
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.selected.contains(label)
    }

    /// Labels currently selected, in label order.
    pub fn selection(&self) -> &BTreeSet<String> {
        &self.selected
    }

    /// Checks the current selection. A wrong answer bumps the key's count in
    /// `store`; an empty selection is rejected without any change.
    pub fn submit(
        &mut self,
        bank: &QuestionBank,
        store: &MistakeStore,
    ) -> Result<AnswerOutcome, PracticeError> {
        match self.state() {
            PracticeState::Complete => return Err(PracticeError::Complete),
            PracticeState::Submitted => return Err(PracticeError::AlreadySubmitted),
            PracticeState::AwaitingAnswer => {}
        }

        self.skip_unresolvable(bank);
        let question = self.current_question(bank).ok_or(PracticeError::Complete)?;
        if self.selected.is_empty() {
            return Err(PracticeError::EmptySelection);
        }
        let correct = question.is_correct(self.selected.iter().map(String::as_str));
        let correct_answers = question.sorted_answers();

        let (key, times_missed) = &mut self.items[self.current_index];
        if correct {
            self.correct_count += 1;
        } else {
            *times_missed = store.record_mistake(key)?;
        }

        let outcome = AnswerOutcome {
            correct,
            correct_answers,
            times_missed: *times_missed,
        };
        self.submitted = true;
        self.last_outcome = Some(outcome.clone());
        Ok(outcome)
    }

    /// Moves to the next question. Only allowed after a submission, except
    /// that unresolvable keys are stepped over without one.
    pub fn next(&mut self, bank: &QuestionBank) -> Result<PracticeState, PracticeError> {
        let skipped = self.skip_unresolvable(bank);
        match self.state() {
            PracticeState::Complete if skipped => return Ok(PracticeState::Complete),
            PracticeState::Complete => return Err(PracticeError::Complete),
            PracticeState::AwaitingAnswer => return Err(PracticeError::NotSubmitted),
            PracticeState::Submitted => {}
        }

        self.selected.clear();
        self.last_outcome = None;
        self.current_index += 1;
        self.submitted = false;
        self.skip_unresolvable(bank);
        Ok(self.state())
    }

    /// Starts a new round from a fresh copy of the store. Only allowed once
    /// the current round is complete.
    pub fn restart(&mut self, mistakes: &Mistakes) -> Result<PracticeState, PracticeError> {
        if self.state() != PracticeState::Complete {
            return Err(PracticeError::NotComplete);
        }
        *self = Self::start(mistakes)?;
        Ok(self.state())
    }

    pub fn last_outcome(&self) -> Option<&AnswerOutcome> {
        self.last_outcome.as_ref()
    }

    /// 1-based position of the current question.
    pub fn position(&self) -> usize {
        (self.current_index + 1).min(self.total())
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn progress(&self) -> f32 {
        if self.total() == 0 {
            return 0.0;
        }
        self.position() as f32 / self.total() as f32
    }

    /// Round totals. Accuracy is 0 for an empty round.
    pub fn summary(&self) -> SessionSummary {
        let total = self.total();
        let accuracy = if total == 0 {
            0.0
        } else {
            self.correct_count as f64 * 100.0 / total as f64
        };
        SessionSummary {
            correct: self.correct_count,
            wrong: total.saturating_sub(self.correct_count),
            total,
            accuracy,
        }
    }
}
