//! Terminal front end: listing, statistics and a practice loop on stdin.

use mistake_practice::analysis::MistakeAnalysis;
use mistake_practice::error::PracticeError;
use mistake_practice::models::{PracticeSession, PracticeState, QuestionBank, review};
use mistake_practice::storage::MistakeStore;
use std::error::Error;
use std::io::{self, BufRead, Write};

/// Prints every stored mistake with its options and correct answers.
pub fn print_review(store: &MistakeStore, bank: &QuestionBank) {
    let mistakes = store.load();
    if mistakes.is_empty() {
        println!("No bulk practice mistakes recorded yet.");
        return;
    }

    let entries = review(&mistakes, bank);
    let resolved_count = entries.clone().resolved().count();

    for entry in entries {
        let sorted_answers = entry.sorted_answers().unwrap_or_default();
        match &entry.resolution {
            Ok(resolved) => {
                let question = resolved.question;
                println!("{}. {}", resolved.key.label(), question.prompt);
                if !question.instruction.is_empty() {
                    println!("   {}", question.instruction);
                }
                for (label, text) in &question.options {
                    println!("   - {}: {}", label, text);
                }
                println!("   Correct Answer(s): {}", sorted_answers.join(", "));
                println!("   You answered this wrong {} time(s).", entry.count);
            }
            Err(e) => println!("Error processing question {}: {}", entry.key, e),
        }
        println!();
    }
    println!("{} of {} mistakes resolved against the question bank.", resolved_count, mistakes.len());
}

/// Prints per-day totals, the top mistaken questions and summary insights.
pub fn print_stats(store: &MistakeStore, bank: &QuestionBank, top_n: usize) {
    let analysis = MistakeAnalysis::compute(&store.load(), bank, top_n);
    if analysis.is_empty() {
        println!("No bulk mistakes found.");
        return;
    }

    println!("Mistakes per day:");
    let max_total = analysis.max_day_total().max(1);
    for (day, total) in &analysis.per_day {
        let bar = "#".repeat((total * 40 / max_total).max(1) as usize);
        println!("  Day {:>3} {:<40} {}", day, bar, total);
    }

    println!();
    println!("Top mistaken questions:");
    for row in &analysis.top {
        let position = match (row.day, row.index) {
            (Some(day), Some(index)) => format!("Day {} Q{}", day, u64::from(index) + 1),
            _ => row.key.clone(),
        };
        println!("  {:>4}x  {:<14} {}", row.count, position, row.question);
    }

    println!();
    println!("Total unique questions with mistakes: {}", analysis.distinct_keys);
    println!("Total recorded mistakes: {}", analysis.total_mistakes);
    if let Some(day) = analysis.busiest_day {
        println!("Day with most mistakes: {}", day);
    }
}

/// Splits "A, c" or "A C" into upper-cased option labels.
fn parse_selection(line: &str) -> Vec<String> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::to_uppercase)
        .collect()
}

/// Runs one or more practice rounds, reading answers from stdin.
pub fn run_practice(store: &MistakeStore, bank: &QuestionBank) -> Result<(), Box<dyn Error>> {
    let mut session = match PracticeSession::start(&store.load()) {
        Ok(session) => session,
        Err(PracticeError::NothingToPractice) => {
            println!("No bulk mistakes to practice!");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut prompt = |text: &str| -> Result<Option<String>, Box<dyn Error>> {
        print!("{}", text);
        io::stdout().flush()?;
        Ok(lines.next().transpose()?)
    };

    loop {
        if session.state() == PracticeState::Complete {
            let summary = session.summary();
            println!("You've practiced all mistaken questions!");
            println!("Round Summary:");
            println!("- Correct answers: {}", summary.correct);
            println!("- Wrong answers: {}", summary.wrong);
            println!("- Accuracy: {:.1}%", summary.accuracy);

            match prompt("Restart practice? (y/N): ")? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                    match session.restart(&store.load()) {
                        Ok(_) => continue,
                        Err(PracticeError::NothingToPractice) => {
                            println!("No bulk mistakes to practice!");
                            return Ok(());
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
                _ => return Ok(()),
            }
        }

        let Some(item) = session.current(bank) else {
            continue;
        };
        let question = item.resolved.question;

        println!();
        println!("Mistake {} / {}", session.position(), session.total());
        println!("{} - Times missed: {}", item.resolved.key.label(), item.times_missed);
        if !question.instruction.is_empty() {
            println!("{}", question.instruction);
        }
        println!("{}", question.prompt);
        for (label, text) in &question.options {
            println!("  {}: {}", label, text);
        }

        loop {
            let Some(line) = prompt("Your answer (e.g. A,C; q to quit): ")? else {
                return Ok(());
            };
            if line.trim().eq_ignore_ascii_case("q") {
                return Ok(());
            }

            session.select(parse_selection(&line));
            match session.submit(bank, store) {
                Ok(outcome) if outcome.correct => {
                    println!("Correct!");
                    break;
                }
                Ok(outcome) => {
                    println!("Incorrect.");
                    println!("Correct Answer(s): {}", outcome.correct_answers.join(", "));
                    break;
                }
                Err(PracticeError::EmptySelection) => {
                    println!("Please select at least one answer before submitting.");
                }
                Err(e) => return Err(e.into()),
            }
        }

        session.next(bank)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("A,C"), vec!["A", "C"]);
        assert_eq!(parse_selection(" a , b  d "), vec!["A", "B", "D"]);
        assert!(parse_selection("   ").is_empty());
    }
}
