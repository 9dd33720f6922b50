//! Whole-file JSON persistence for the mistake store and question bank.
//! Files are read whole and saved through a temp file and rename.

pub mod json;
pub mod mistake_store;
pub mod question_bank;

pub use mistake_store::{MistakeStore, Mistakes};
pub use question_bank::{load_question_bank, load_question_bank_or_empty};
