//! Composite key naming one question by day and position within the day,
//! written as `day{D}_q{Q}`.
use crate::error::ResolutionError;
use std::fmt;
use std::str::FromStr;

const DAY_PREFIX: &str = "day";
const QUESTION_SEPARATOR: &str = "_q";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MistakeKey {
    /// 1-based day number.
    pub day: u32,
    /// 0-based index within the day.
    pub index: u32,
}

impl MistakeKey {
    /// Key for `day` (1-based) and `index` (0-based).
    pub fn new(day: u32, index: u32) -> Self {
        Self { day, index }
    }

    /// Parses `day{D}_q{Q}`. Anything else is `MalformedKey`.
    pub fn parse(key: &str) -> Result<Self, ResolutionError> {
        let malformed = || ResolutionError::MalformedKey(key.to_string());

        let rest = key.strip_prefix(DAY_PREFIX).ok_or_else(malformed)?;
        let (day, index) = rest.split_once(QUESTION_SEPARATOR).ok_or_else(malformed)?;
        let day = day.parse::<u32>().map_err(|_| malformed())?;
        let index = index.parse::<u32>().map_err(|_| malformed())?;
        Ok(Self { day, index })
    }

    /// Position in the question bank: `(day - 1) * per_day + index`.
    ///
    /// `None` for day 0. The index is not checked against `per_day`.
    pub fn global_index(&self, questions_per_day: usize) -> Option<usize> {
        let day_offset = (self.day as usize).checked_sub(1)?;
        day_offset
            .checked_mul(questions_per_day)?
            .checked_add(self.index as usize)
    }

    /// Human-facing label, e.g. `Day 2 Q5` for `day2_q4`.
    pub fn label(&self) -> String {
        format!("Day {} Q{}", self.day, u64::from(self.index) + 1)
    }
}

impl fmt::Display for MistakeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}{}", DAY_PREFIX, self.day, QUESTION_SEPARATOR, self.index)
    }
}

impl FromStr for MistakeKey {
    type Err = ResolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_key() {
        assert_eq!(MistakeKey::parse("day3_q17").unwrap(), MistakeKey::new(3, 17));
        assert_eq!(MistakeKey::parse("day1_q0").unwrap(), MistakeKey::new(1, 0));
    }

    #[test]
    fn test_parse_malformed_keys() {
        for key in ["", "day", "day1", "dayx_q1", "day1_qy", "q1_day1", "day1_q", "day-1_q0", "Day1_q0"] {
            assert_eq!(
                MistakeKey::parse(key),
                Err(ResolutionError::MalformedKey(key.to_string())),
                "key {key:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_matches_stored_form() {
        let key = MistakeKey::new(12, 39);
        assert_eq!(key.to_string(), "day12_q39");
        assert_eq!("day12_q39".parse::<MistakeKey>().unwrap(), key);
    }

    #[test]
    fn test_global_index() {
        assert_eq!(MistakeKey::new(1, 0).global_index(40), Some(0));
        assert_eq!(MistakeKey::new(1, 39).global_index(40), Some(39));
        assert_eq!(MistakeKey::new(2, 0).global_index(40), Some(40));
        assert_eq!(MistakeKey::new(3, 5).global_index(40), Some(85));
        assert_eq!(MistakeKey::new(0, 5).global_index(40), None);
    }

    #[test]
    fn test_index_past_day_width_spills_into_next_day() {
        assert_eq!(
            MistakeKey::new(1, 45).global_index(40),
            MistakeKey::new(2, 5).global_index(40)
        );
    }

    #[test]
    fn test_label() {
        assert_eq!(MistakeKey::new(2, 4).label(), "Day 2 Q5");
    }
}
