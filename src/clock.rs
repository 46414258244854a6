use chrono::{Local, NaiveDate};
use uuid::Uuid;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn today_string() -> String {
    date_key(today())
}

/// Local wall clock as zero-padded 24-hour `HH:MM`.
pub fn now_hhmm() -> String {
    Local::now().format("%H:%M").to_string()
}

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// e.g. "Monday, January 5, 2026"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
