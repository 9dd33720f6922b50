//! Storage, practice and analysis of mistakes recorded during bulk quiz
//! practice. The `mistakes` binary provides the desktop and terminal front ends.

pub mod analysis;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;

pub use analysis::MistakeAnalysis;
pub use config::Config;
pub use models::{MistakeKey, PracticeSession, PracticeState, Question, QuestionBank};
pub use storage::{MistakeStore, Mistakes};
