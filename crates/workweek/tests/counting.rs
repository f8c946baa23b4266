use chrono::NaiveDate;
use workcal_workweek::WorkWeek;

const PATTERNS: [(&str, WorkWeek); 5] = [
    ("monday-friday", WorkWeek::MONDAY_FRIDAY),
    ("monday-saturday", WorkWeek::MONDAY_SATURDAY),
    ("sunday-thursday", WorkWeek::SUNDAY_THURSDAY),
    ("saturday-thursday", WorkWeek::SATURDAY_THURSDAY),
    ("sunday-friday", WorkWeek::SUNDAY_FRIDAY),
];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Day-by-day reference count of working days in `[start, end)`.
fn brute_count(week: WorkWeek, start: NaiveDate, end: NaiveDate) -> i64 {
    let mut count = 0;
    let mut current = start;
    while current < end {
        if week.is_working_day(current) {
            count += 1;
        }
        current = current.succ_opt().unwrap();
    }
    count
}

#[test]
fn matches_brute_force_for_all_canonical_patterns() {
    // 2024-01-01 is a Monday; starting offsets 0..14 cover every weekday
    // twice, interval lengths 0..=400 cross a year boundary and every
    // alignment of the 7-day cycle.
    let base = date(2024, 1, 1);
    for (name, week) in PATTERNS {
        for offset in 0..14u64 {
            let start = base + chrono::TimeDelta::days(offset as i64);
            for len in 0..=400i64 {
                let end = start + chrono::TimeDelta::days(len);
                assert_eq!(
                    week.workdays_between(start, end),
                    brute_count(week, start, end),
                    "{name}: start={start}, len={len}"
                );
            }
        }
    }
}

#[test]
fn matches_brute_force_for_custom_patterns() {
    let base = date(2024, 3, 6); // a Wednesday
    for first in [chrono::Weekday::Tue, chrono::Weekday::Fri] {
        for work_len in 1..=6u8 {
            let week = WorkWeek::new(first, work_len).unwrap();
            for offset in 0..7i64 {
                let start = base + chrono::TimeDelta::days(offset);
                for len in 0..=100i64 {
                    let end = start + chrono::TimeDelta::days(len);
                    assert_eq!(
                        week.workdays_between(start, end),
                        brute_count(week, start, end),
                        "first={first}, work_len={work_len}, start={start}, len={len}"
                    );
                }
            }
        }
    }
}

#[test]
fn monotone_in_end_date() {
    let start = date(2024, 1, 3);
    for (name, week) in PATTERNS {
        let mut previous = 0;
        for len in 0..=100i64 {
            let end = start + chrono::TimeDelta::days(len);
            let count = week.workdays_between(start, end);
            assert!(
                count >= previous,
                "{name}: count dropped from {previous} to {count} at len={len}"
            );
            previous = count;
        }
    }
}

#[test]
fn empty_and_reversed_intervals_are_zero() {
    let start = date(2024, 6, 14);
    for (name, week) in PATTERNS {
        assert_eq!(week.workdays_between(start, start), 0, "{name}");
        assert_eq!(
            week.workdays_between(start, start - chrono::TimeDelta::days(30)),
            0,
            "{name}"
        );
    }
}

#[test]
fn full_weeks_count_work_len() {
    for (name, week) in PATTERNS {
        let start = date(2024, 1, 1);
        for weeks in 1..=8i64 {
            let end = start + chrono::TimeDelta::days(7 * weeks);
            assert_eq!(
                week.workdays_between(start, end),
                i64::from(week.work_len()) * weeks,
                "{name}: weeks={weeks}"
            );
        }
    }
}

#[test]
fn membership_complements_rest_days() {
    // Every date is either working or resting; over any 7-day window the
    // split is exactly work_len / rest_len.
    for (name, week) in PATTERNS {
        let mut current = date(2024, 5, 1);
        for _ in 0..7 {
            let in_week = week.workdays_between(current, current + chrono::TimeDelta::days(7));
            assert_eq!(in_week, i64::from(week.work_len()), "{name} at {current}");
            current = current.succ_opt().unwrap();
        }
    }
}
