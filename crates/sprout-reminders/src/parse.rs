//! Free-text schedule parsing.
//!
//! Recognized shape: an optional leading "take", a medication name of one or
//! two words, the word "every", a numeric hour interval, and an optional
//! trailing "for N day(s)|week(s)". Matching is case-insensitive and
//! tolerant of surrounding text.

use crate::error::ReminderError;
use crate::schedule::ScheduleSpec;
use regex::Regex;

/// Contractual bound on the medication name: at most this many words before
/// "every". Longer names are rejected, never truncated.
pub const MAX_NAME_WORDS: usize = 2;

/// Longest accepted interval: one year. The clause regex accepts arbitrary
/// digit runs, so anything larger is rejected here, before the value could
/// overflow deadline or projected-fire arithmetic downstream.
pub const MAX_INTERVAL_HOURS: f64 = 24.0 * 366.0;

/// The interval/duration clause. The medication name is resolved separately
/// by walking backwards from the clause, so a long name is detected instead
/// of silently re-matching further right.
const CLAUSE: &str = r"(?i)\bevery\s+(\d+(?:\.\d+)?)\s*hours?\b(?:\s+for\s+(\d+)\s+(days?|weeks?)\b)?";

/// Parse a guardian's instruction into a schedule.
///
/// Never panics on malformed input; unrecognized text comes back as a
/// structured [`ReminderError`].
pub fn parse(text: &str) -> Result<ScheduleSpec, ReminderError> {
    let Ok(clause) = Regex::new(CLAUSE) else {
        return Err(ReminderError::UnrecognizedSchedule);
    };

    let Some(caps) = clause.captures(text) else {
        return Err(ReminderError::UnrecognizedSchedule);
    };

    let interval_hours: f64 = caps[1]
        .parse()
        .map_err(|_| ReminderError::UnrecognizedSchedule)?;
    if interval_hours <= 0.0 || interval_hours > MAX_INTERVAL_HOURS {
        return Err(ReminderError::UnrecognizedSchedule);
    }

    let duration_days = match (caps.get(2), caps.get(3)) {
        (Some(count), Some(unit)) => {
            let count: u32 = count
                .as_str()
                .parse()
                .map_err(|_| ReminderError::UnrecognizedSchedule)?;
            if unit.as_str().to_ascii_lowercase().starts_with("week") {
                let days = count
                    .checked_mul(7)
                    .ok_or(ReminderError::UnrecognizedSchedule)?;
                Some(days)
            } else {
                Some(count)
            }
        }
        _ => None,
    };

    let clause_start = caps.get(0).map(|m| m.start()).unwrap_or(0);
    let medication_name = name_before_clause(&text[..clause_start])?;

    Ok(ScheduleSpec {
        medication_name,
        interval_hours,
        duration_days,
    })
}

/// Resolve the medication name from the text preceding "every".
///
/// Walks backwards collecting contiguous name words, stopping at the leading
/// verb "take" or at any token with punctuation other than `'`/`-`. Three or
/// more collected words exceed [`MAX_NAME_WORDS`] and reject the input.
fn name_before_clause(prefix: &str) -> Result<String, ReminderError> {
    let mut words: Vec<&str> = Vec::new();

    for token in prefix.split_whitespace().rev() {
        let is_name_word = token
            .chars()
            .all(|c| c.is_alphanumeric() || c == '\'' || c == '-');
        if !is_name_word || token.eq_ignore_ascii_case("take") {
            break;
        }
        words.push(token);
        if words.len() > MAX_NAME_WORDS {
            return Err(ReminderError::NameTooLong);
        }
    }

    if words.is_empty() {
        return Err(ReminderError::UnrecognizedSchedule);
    }

    words.reverse();
    Ok(words
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" "))
}

/// Normalize a medication name for use as a store key: each word
/// capitalized, the rest lowercased.
pub(crate) fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let spec = parse("Take Zyrtec every 12 hours").unwrap();
        assert_eq!(spec.medication_name, "Zyrtec");
        assert_eq!(spec.interval_hours, 12.0);
        assert_eq!(spec.duration_days, None);
    }

    #[test]
    fn test_parse_with_days() {
        let spec = parse("Take Ibuprofen every 6 hours for 3 days").unwrap();
        assert_eq!(spec.medication_name, "Ibuprofen");
        assert_eq!(spec.interval_hours, 6.0);
        assert_eq!(spec.duration_days, Some(3));
    }

    #[test]
    fn test_parse_weeks_convert_to_days() {
        let spec = parse("Amoxicillin every 8 hours for 2 weeks").unwrap();
        assert_eq!(spec.medication_name, "Amoxicillin");
        assert_eq!(spec.duration_days, Some(14));
    }

    #[test]
    fn test_parse_singular_units() {
        let spec = parse("take tylenol every 1 hour for 1 day").unwrap();
        assert_eq!(spec.medication_name, "Tylenol");
        assert_eq!(spec.interval_hours, 1.0);
        assert_eq!(spec.duration_days, Some(1));
    }

    #[test]
    fn test_parse_decimal_interval() {
        let spec = parse("Take Motrin every 1.5 hours").unwrap();
        assert_eq!(spec.interval_hours, 1.5);
    }

    #[test]
    fn test_parse_two_word_name() {
        let spec = parse("take vitamin d every 24 hours").unwrap();
        assert_eq!(spec.medication_name, "Vitamin D");
    }

    #[test]
    fn test_parse_case_insensitive_and_embedded() {
        let spec = parse("Sure — TAKE ZYRTEC EVERY 12 HOURS, thanks").unwrap();
        assert_eq!(spec.medication_name, "Zyrtec");
        assert_eq!(spec.interval_hours, 12.0);
    }

    #[test]
    fn test_parse_no_every_clause() {
        assert_eq!(
            parse("give Tylenol twice daily"),
            Err(ReminderError::UnrecognizedSchedule)
        );
    }

    #[test]
    fn test_parse_no_name_before_clause() {
        assert_eq!(
            parse("every 6 hours"),
            Err(ReminderError::UnrecognizedSchedule)
        );
        assert_eq!(
            parse("take every 6 hours"),
            Err(ReminderError::UnrecognizedSchedule)
        );
    }

    #[test]
    fn test_parse_rejects_three_word_name() {
        assert_eq!(
            parse("Take Children's Cough Syrup every 4 hours"),
            Err(ReminderError::NameTooLong)
        );
    }

    #[test]
    fn test_parse_rejects_zero_interval() {
        assert_eq!(
            parse("Take Zyrtec every 0 hours"),
            Err(ReminderError::UnrecognizedSchedule)
        );
    }

    #[test]
    fn test_parse_rejects_oversized_interval() {
        // Digit runs the regex accepts but no schedule could honor.
        assert_eq!(
            parse("Take Zyrtec every 99999999999999999999 hours"),
            Err(ReminderError::UnrecognizedSchedule)
        );
        assert_eq!(
            parse("Take Zyrtec every 8785 hours"),
            Err(ReminderError::UnrecognizedSchedule)
        );
        assert!(parse("Take Zyrtec every 8784 hours").is_ok());
    }

    #[test]
    fn test_parse_rejects_overflowing_week_count() {
        assert_eq!(
            parse("Take Zyrtec every 8 hours for 4294967295 weeks"),
            Err(ReminderError::UnrecognizedSchedule)
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse(""), Err(ReminderError::UnrecognizedSchedule));
    }

    #[test]
    fn test_name_stops_at_punctuation() {
        let spec = parse("Reminder: Amoxicillin every 8 hours").unwrap();
        assert_eq!(spec.medication_name, "Amoxicillin");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("zyrtec"), "Zyrtec");
        assert_eq!(title_case("VITAMIN d"), "Vitamin D");
        assert_eq!(title_case("children's tylenol"), "Children's Tylenol");
    }
}
