//! Domain types: questions, mistake keys, resolution, review and the
//! practice session state machine.

pub mod mistake_key;
pub mod practice_session;
pub mod question;
pub mod resolver;
pub mod review;

#[cfg(test)]
pub(crate) mod test_support;

pub use mistake_key::MistakeKey;
pub use practice_session::{AnswerOutcome, PracticeItem, PracticeSession, PracticeState, SessionSummary};
pub use question::{Question, QuestionBank};
pub use resolver::{ResolvedQuestion, resolve};
pub use review::{ReviewEntries, ReviewEntry, review};
