use crate::domain::model::{
    AdditionalNumbers, CalendarDate, CountingMode, DerivedIndicators, Indicator, MatrixProfile,
    SectorCounts, TripleTable,
};

/// Pure arithmetic over a validated calendar date. Every operation is total;
/// invalid dates never reach this type.
#[derive(Debug, Clone, Copy)]
pub struct NumerologyEngine {
    counting: CountingMode,
    triples: TripleTable,
}

impl Default for NumerologyEngine {
    fn default() -> Self {
        Self::new(CountingMode::default(), TripleTable::default())
    }
}

impl NumerologyEngine {
    pub fn new(counting: CountingMode, triples: TripleTable) -> Self {
        Self { counting, triples }
    }

    pub fn counting(&self) -> CountingMode {
        self.counting
    }

    pub fn triples(&self) -> TripleTable {
        self.triples
    }

    /// Digits of the zero-padded `DDMMYYYY` string, zeros included. Zeros are
    /// only dropped later, when sectors are counted.
    pub fn base_digits(&self, date: &CalendarDate) -> Vec<u8> {
        format!("{:02}{:02}{}", date.day(), date.month(), date.year())
            .bytes()
            .map(|b| b - b'0')
            .collect()
    }

    /// A1..A4. The day's contribution to A3 is its tens digit, or the unit
    /// digit when the zero-padded day starts with '0' (days 01-09).
    pub fn additional_numbers(&self, date: &CalendarDate) -> AdditionalNumbers {
        let a1: u32 = self.base_digits(date).iter().map(|&d| u32::from(d)).sum();
        let a2 = digit_sum(i64::from(a1)) as u32;

        let tens = (date.day() / 10) as i32;
        let lead = if tens != 0 {
            tens
        } else {
            (date.day() % 10) as i32
        };
        let a3 = a1 as i32 - 2 * lead;
        let a4 = digit_sum(i64::from(a3)) as u32;

        AdditionalNumbers { a1, a2, a3, a4 }
    }

    /// Non-zero base digits, plus the non-zero digits of A1..A4 when the
    /// engine runs in `WithAdditionals` mode. A negative A3 contributes the
    /// digits of its absolute value.
    pub fn sector_counts(&self, date: &CalendarDate) -> SectorCounts {
        let mut counts = SectorCounts::default();
        for &digit in &self.base_digits(date) {
            if digit != 0 {
                counts.bump(digit);
            }
        }

        if self.counting == CountingMode::WithAdditionals {
            let extra = self.additional_numbers(date);
            for n in [
                i64::from(extra.a1),
                i64::from(extra.a2),
                i64::from(extra.a3),
                i64::from(extra.a4),
            ] {
                for digit in digits_of(n) {
                    if digit != 0 {
                        counts.bump(digit);
                    }
                }
            }
        }

        counts
    }

    /// A1 reduced by repeated digit sum until a single digit, except that
    /// A2 == 11 short-circuits to the master number 11. The reduction itself
    /// never stops at 11; only A2 carries the exception.
    pub fn life_path(&self, date: &CalendarDate) -> u32 {
        let extra = self.additional_numbers(date);
        if extra.a2 == 11 {
            return 11;
        }
        reduce_to_digit(i64::from(extra.a1)) as u32
    }

    pub fn derived_indicators(&self, counts: &SectorCounts) -> DerivedIndicators {
        let sum = |indicator: Indicator| -> u32 {
            self.triples
                .triple(indicator)
                .iter()
                .map(|&sector| counts.count(sector))
                .sum()
        };

        DerivedIndicators {
            temperament: sum(Indicator::Temperament),
            family: sum(Indicator::Family),
            household: sum(Indicator::Household),
            habits: sum(Indicator::Habits),
            goal: sum(Indicator::Goal),
        }
    }

    /// One pass over a date: everything the renderer and captions need.
    pub fn profile(&self, date: &CalendarDate) -> MatrixProfile {
        let additionals = self.additional_numbers(date);
        let counts = self.sector_counts(date);
        let life_path = self.life_path(date);
        let indicators = self.derived_indicators(&counts);

        MatrixProfile {
            date: *date,
            additionals,
            counts,
            life_path,
            indicators,
        }
    }
}

/// Base-10 digits of |n|, most significant first.
pub fn digits_of(n: i64) -> Vec<u8> {
    n.abs()
        .to_string()
        .bytes()
        .map(|b| b - b'0')
        .collect()
}

pub fn digit_sum(n: i64) -> i64 {
    digits_of(n).iter().map(|&d| i64::from(d)).sum()
}

/// Repeated digit sum with <= 9 as the only stopping condition.
pub fn reduce_to_digit(mut n: i64) -> i64 {
    while n > 9 {
        n = digit_sum(n);
    }
    n
}
