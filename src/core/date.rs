use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;

use crate::domain::model::CalendarDate;
use crate::utils::error::{MatrixError, Result};

/// Month-name prefixes, Ukrainian first (nominative and genitive forms share
/// them), then English. Matched against lowercased word tokens.
const UK_MONTH_PREFIXES: [&str; 12] = [
    "січ", "лют", "берез", "квіт", "трав", "черв", "лип", "серп", "верес", "жовт", "листопад",
    "груд",
];
const EN_MONTH_PREFIXES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Turns free-form text into a `CalendarDate`.
///
/// A strict day-first `D.M.YYYY` pattern (also `-` and `/` separators) is
/// tried before a lenient fuzzy scan that tolerates month names and unrelated
/// tokens. Parsed dates must fall between 1900 and the parser's reference
/// date, which defaults to today.
#[derive(Debug)]
pub struct DateParser {
    reference: NaiveDate,
    strict: Regex,
    tokens: Regex,
}

impl Default for DateParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DateParser {
    pub fn new() -> Self {
        Self::with_reference_date(Local::now().date_naive())
    }

    /// Pins "today" for the not-in-the-future check.
    pub fn with_reference_date(reference: NaiveDate) -> Self {
        Self {
            reference,
            strict: Regex::new(r"^\s*(\d{1,2})[.\-/](\d{1,2})[.\-/](\d{4})\s*$").unwrap(),
            tokens: Regex::new(r"\d+|\p{L}+").unwrap(),
        }
    }

    pub fn parse(&self, text: &str) -> Result<CalendarDate> {
        let (year, month, day) = self
            .parse_strict(text)
            .or_else(|| self.parse_fuzzy(text))
            .ok_or_else(|| MatrixError::UnparseableDate {
                input: text.to_string(),
            })?;

        let date =
            NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| MatrixError::UnparseableDate {
                input: text.to_string(),
            })?;

        if date.year() < 1900 {
            return Err(MatrixError::DateOutOfRange {
                date: date.format("%d.%m.%Y").to_string(),
                reason: "year is before 1900".to_string(),
            });
        }
        if date > self.reference {
            return Err(MatrixError::DateOutOfRange {
                date: date.format("%d.%m.%Y").to_string(),
                reason: "date is in the future".to_string(),
            });
        }

        Ok(CalendarDate::from(date))
    }

    fn parse_strict(&self, text: &str) -> Option<(i32, u32, u32)> {
        let caps = self.strict.captures(text)?;
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;
        Some((year, month, day))
    }

    /// Lenient scan: numbers and a possible month name anywhere in the text.
    /// Purely numeric input is day-before-month unless it leads with a
    /// 4-digit year.
    fn parse_fuzzy(&self, text: &str) -> Option<(i32, u32, u32)> {
        let lower = text.to_lowercase();
        let mut numbers: Vec<&str> = Vec::new();
        let mut named_month: Option<u32> = None;

        for token in self.tokens.find_iter(&lower) {
            let s = token.as_str();
            if s.starts_with(|c: char| c.is_ascii_digit()) {
                if s.len() <= 4 {
                    numbers.push(s);
                }
            } else if named_month.is_none() {
                named_month = month_from_name(s);
            }
        }

        if let Some(month) = named_month {
            let day: u32 = numbers.iter().find(|n| n.len() <= 2)?.parse().ok()?;
            let year: i32 = numbers.iter().find(|n| n.len() == 4)?.parse().ok()?;
            return Some((year, month, day));
        }

        if numbers.len() < 3 {
            return None;
        }
        if numbers[0].len() == 4 {
            let year: i32 = numbers[0].parse().ok()?;
            let month: u32 = numbers[1].parse().ok()?;
            let day: u32 = numbers[2].parse().ok()?;
            Some((year, month, day))
        } else if numbers[2].len() == 4 {
            let day: u32 = numbers[0].parse().ok()?;
            let month: u32 = numbers[1].parse().ok()?;
            let year: i32 = numbers[2].parse().ok()?;
            Some((year, month, day))
        } else {
            None
        }
    }
}

fn month_from_name(word: &str) -> Option<u32> {
    for (idx, prefix) in UK_MONTH_PREFIXES.iter().enumerate() {
        if word.starts_with(prefix) {
            return Some(idx as u32 + 1);
        }
    }
    for (idx, prefix) in EN_MONTH_PREFIXES.iter().enumerate() {
        if word.starts_with(prefix) {
            return Some(idx as u32 + 1);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> DateParser {
        DateParser::with_reference_date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    #[test]
    fn test_month_from_name() {
        assert_eq!(month_from_name("листопада"), Some(11));
        assert_eq!(month_from_name("листопад"), Some(11));
        assert_eq!(month_from_name("липня"), Some(7));
        assert_eq!(month_from_name("грудень"), Some(12));
        assert_eq!(month_from_name("november"), Some(11));
        assert_eq!(month_from_name("рік"), None);
    }

    #[test]
    fn test_strict_separators() {
        let p = parser();
        for text in ["1.11.1998", "1-11-1998", "1/11/1998", "  01.11.1998  "] {
            let date = p.parse(text).unwrap();
            assert_eq!((date.year(), date.month(), date.day()), (1998, 11, 1));
        }
    }

    #[test]
    fn test_strict_requires_whole_input() {
        // Embedded text falls through to the fuzzy path instead.
        let p = parser();
        assert!(p.parse_strict("born 1.11.1998").is_none());
        assert!(p.parse("born 1.11.1998").is_ok());
    }

    #[test]
    fn test_fuzzy_numeric_orderings() {
        let p = parser();
        let day_first = p.parse("01 11 1998").unwrap();
        let year_first = p.parse("1998 11 01").unwrap();
        assert_eq!(day_first, year_first);
        assert_eq!(day_first.day(), 1);
        assert_eq!(day_first.month(), 11);
    }

    #[test]
    fn test_rejects_garbage() {
        let p = parser();
        assert!(matches!(
            p.parse("hello world"),
            Err(MatrixError::UnparseableDate { .. })
        ));
        assert!(matches!(
            p.parse("31.02.2000"),
            Err(MatrixError::UnparseableDate { .. })
        ));
    }
}
