use crate::clock::{date_key, parse_date};
use crate::models::JournalData;
use chrono::NaiveDate;

/// Consecutive days with at least one entry, ending at `reference` inclusive.
pub fn streak(data: &JournalData, reference: NaiveDate) -> u32 {
    let mut count = 0;
    let mut current = Some(reference);

    while let Some(date) = current {
        let logged = data
            .logs
            .get(&date_key(date))
            .is_some_and(|day| !day.is_empty());
        if !logged {
            break;
        }
        count += 1;
        current = date.pred_opt();
    }

    count
}

pub fn streak_for_key(data: &JournalData, reference: &str) -> u32 {
    parse_date(reference).map_or(0, |date| streak(data, date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{add_food, add_workout, reset_all};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_reference_day_is_zero() {
        let data = add_workout(JournalData::default(), "2024-01-01", "run");
        assert_eq!(streak(&data, day(2024, 1, 2)), 0);
        assert_eq!(streak(&JournalData::default(), day(2024, 1, 2)), 0);
    }

    #[test]
    fn counts_run_until_gap() {
        let mut data = JournalData::default();
        data = add_workout(data, "2024-01-01", "run");
        // 2024-01-02 missing
        data = add_food(data, "2024-01-03", "eggs");
        data = add_workout(data, "2024-01-04", "bike");
        data = add_food(data, "2024-01-05", "rice");
        assert_eq!(streak(&data, day(2024, 1, 5)), 3);
        assert_eq!(streak(&data, day(2024, 1, 3)), 1);
        assert_eq!(streak(&data, day(2024, 1, 1)), 1);
    }

    #[test]
    fn crosses_month_and_year_boundaries() {
        let mut data = JournalData::default();
        for key in ["2023-12-30", "2023-12-31", "2024-01-01", "2024-02-28", "2024-02-29", "2024-03-01"] {
            data = add_workout(data, key, "walk");
        }
        assert_eq!(streak(&data, day(2024, 1, 1)), 3);
        assert_eq!(streak(&data, day(2024, 3, 1)), 3);
    }

    #[test]
    fn emptied_day_breaks_streak() {
        let mut data = add_workout(JournalData::default(), "2024-01-01", "run");
        data = add_workout(data, "2024-01-03", "run");
        data.logs.insert("2024-01-02".into(), Default::default());
        assert_eq!(streak(&data, day(2024, 1, 3)), 1);
    }

    #[test]
    fn reset_clears_streak() {
        let data = add_workout(JournalData::default(), "2024-01-01", "run");
        assert_eq!(streak_for_key(&data, "2024-01-01"), 1);
        assert_eq!(streak_for_key(&reset_all(), "2024-01-01"), 0);
    }

    #[test]
    fn invalid_key_is_zero() {
        let data = add_workout(JournalData::default(), "2024-01-01", "run");
        assert_eq!(streak_for_key(&data, "not-a-date"), 0);
    }
}
