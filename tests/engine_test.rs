use psychomatrix::core::engine::{digit_sum, reduce_to_digit};
use psychomatrix::{CalendarDate, CountingMode, NumerologyEngine, TripleTable};

fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

fn sample_dates() -> Vec<CalendarDate> {
    let mut dates = Vec::new();
    for year in [1900, 1955, 1969, 1987, 1999, 2000, 2020] {
        for month in 1..=12 {
            for day in [1, 9, 10, 11, 20, 29, 30, 31] {
                if let Some(d) = CalendarDate::new(year, month, day) {
                    dates.push(d);
                }
            }
        }
    }
    dates
}

#[test]
fn test_scenario_01_11_1998() {
    let engine = NumerologyEngine::default();
    let d = date(1998, 11, 1);

    let extra = engine.additional_numbers(&d);
    assert_eq!(extra.a1, 30);
    assert_eq!(extra.a2, 3);
    assert_eq!(extra.a3, 28);
    assert_eq!(extra.a4, 10); // a single digit sum of A3, never reduced further
    assert_eq!(engine.life_path(&d), 3);
}

#[test]
fn test_scenario_29_02_2000() {
    let engine = NumerologyEngine::default();
    let d = date(2000, 2, 29);

    let extra = engine.additional_numbers(&d);
    assert_eq!(extra.a1, 15);
    assert_eq!(extra.a2, 6);
    assert_eq!(extra.a3, 11);
    assert_eq!(extra.a4, 2);
    assert_eq!(engine.life_path(&d), 6);
}

#[test]
fn test_scenario_day_10() {
    let engine = NumerologyEngine::default();
    let d = date(1990, 5, 10);

    let extra = engine.additional_numbers(&d);
    assert_eq!(extra.a1, 25);
    assert_eq!(extra.a3, 23);
}

#[test]
fn test_master_number_via_a2() {
    let engine = NumerologyEngine::default();
    let d = date(1969, 2, 11); // digits sum to 29, whose digit sum is 11

    let extra = engine.additional_numbers(&d);
    assert_eq!(extra.a1, 29);
    assert_eq!(extra.a2, 11);
    assert_eq!(engine.life_path(&d), 11);
}

#[test]
fn test_negative_a3_digits_fold_in() {
    let engine = NumerologyEngine::new(CountingMode::WithAdditionals, TripleTable::V1);
    let d = date(2000, 1, 9);

    let extra = engine.additional_numbers(&d);
    assert_eq!(extra.a1, 12);
    assert_eq!(extra.a3, -6);
    assert_eq!(extra.a4, 6);

    // Base non-zero digits: 9, 1, 2. A1=12 -> 1,2; A2=3; |A3|=6; A4=6.
    let counts = engine.sector_counts(&d);
    assert_eq!(counts.count(6), 2);
    assert_eq!(counts.total(), 3 + 2 + 1 + 1 + 1);
}

#[test]
fn test_counts_sum_matches_digit_pool_in_both_modes() {
    let base = NumerologyEngine::new(CountingMode::BaseOnly, TripleTable::V1);
    let full = NumerologyEngine::new(CountingMode::WithAdditionals, TripleTable::V1);

    for d in sample_dates() {
        let base_nonzero = base
            .base_digits(&d)
            .iter()
            .filter(|&&digit| digit != 0)
            .count() as u32;
        assert_eq!(base.sector_counts(&d).total(), base_nonzero);

        let extra = full.additional_numbers(&d);
        let extra_nonzero: u32 = [
            i64::from(extra.a1),
            i64::from(extra.a2),
            i64::from(extra.a3),
            i64::from(extra.a4),
        ]
        .iter()
        .map(|n| {
            n.abs()
                .to_string()
                .bytes()
                .filter(|&b| b != b'0')
                .count() as u32
        })
        .sum();
        assert_eq!(
            full.sector_counts(&d).total(),
            base_nonzero + extra_nonzero
        );
    }
}

#[test]
fn test_additional_number_digit_sums_hold() {
    let engine = NumerologyEngine::default();
    for d in sample_dates() {
        let extra = engine.additional_numbers(&d);
        assert_eq!(i64::from(extra.a2), digit_sum(i64::from(extra.a1)));
        assert_eq!(i64::from(extra.a4), digit_sum(i64::from(extra.a3)));
    }
}

#[test]
fn test_life_path_range_and_master_rule() {
    let engine = NumerologyEngine::default();
    for d in sample_dates() {
        let extra = engine.additional_numbers(&d);
        let life = engine.life_path(&d);

        assert!((1..=9).contains(&life) || life == 11, "life path {}", life);
        assert_eq!(life == 11, extra.a2 == 11);
        if extra.a2 != 11 {
            assert_eq!(i64::from(life), reduce_to_digit(i64::from(extra.a1)));
        }
    }
}

#[test]
fn test_every_sector_is_always_present() {
    let engine = NumerologyEngine::default();
    let counts = engine.sector_counts(&date(1998, 11, 1));
    let ids: Vec<u8> = counts.iter().map(|(sector, _)| sector).collect();
    assert_eq!(ids, (1..=9).collect::<Vec<u8>>());
}

#[test]
fn test_reduction_is_idempotent() {
    for n in 1..500 {
        assert_eq!(reduce_to_digit(reduce_to_digit(n)), reduce_to_digit(n));
    }
}

#[test]
fn test_triple_tables_diverge_only_where_documented() {
    let d = date(1998, 11, 1);
    let v1 = NumerologyEngine::new(CountingMode::WithAdditionals, TripleTable::V1);
    let v2 = NumerologyEngine::new(CountingMode::WithAdditionals, TripleTable::V2);

    let counts = v1.sector_counts(&d);
    let lines_v1 = v1.derived_indicators(&counts);
    let lines_v2 = v2.derived_indicators(&counts);

    assert_eq!(lines_v1.family, lines_v2.family);
    assert_eq!(lines_v1.household, lines_v2.household);
    assert_eq!(
        lines_v1.temperament,
        counts.count(3) + counts.count(5) + counts.count(7)
    );
    assert_eq!(
        lines_v2.temperament,
        counts.count(1) + counts.count(5) + counts.count(9)
    );
}
