//! Day-log mutations. Every operation takes the journal by value and hands
//! back the next one; callers rebind and persist.

use crate::clock;
use crate::models::{DayLog, Entry, EntryKind, JournalData};
use tracing::debug;

/// The day at `date`, or an empty one. Never inserts into `data`.
pub fn ensure_day(data: &JournalData, date: &str) -> DayLog {
    data.logs.get(date).cloned().unwrap_or_default()
}

pub fn add_workout(data: JournalData, date: &str, text: &str) -> JournalData {
    add_entry(data, date, EntryKind::Workout, text)
}

pub fn add_food(data: JournalData, date: &str, text: &str) -> JournalData {
    add_entry(data, date, EntryKind::Food, text)
}

pub fn delete_workout(data: JournalData, date: &str, id: &str) -> JournalData {
    delete_entry(data, date, EntryKind::Workout, id)
}

pub fn delete_food(data: JournalData, date: &str, id: &str) -> JournalData {
    delete_entry(data, date, EntryKind::Food, id)
}

pub fn reset_all() -> JournalData {
    JournalData::default()
}

pub fn add_entry(data: JournalData, date: &str, kind: EntryKind, text: &str) -> JournalData {
    add_entry_stamped(data, date, kind, text, clock::new_id(), clock::now_hhmm())
}

/// Like [`add_entry`] with the id and time supplied by the caller. Text is
/// trimmed; blank text leaves the journal as it was.
pub fn add_entry_stamped(
    mut data: JournalData,
    date: &str,
    kind: EntryKind,
    text: &str,
    id: String,
    time: String,
) -> JournalData {
    let text = text.trim();
    if text.is_empty() {
        return data;
    }

    let mut day = ensure_day(&data, date);
    day.entries_mut(kind).insert(
        0,
        Entry {
            id,
            time,
            text: text.to_string(),
        },
    );
    debug!(date, kind = kind.as_str(), "entry added");
    data.logs.insert(date.to_string(), day);
    data
}

pub fn delete_entry(mut data: JournalData, date: &str, kind: EntryKind, id: &str) -> JournalData {
    let Some(day) = data.logs.get_mut(date) else {
        return data;
    };
    let entries = day.entries_mut(kind);
    let before = entries.len();
    entries.retain(|entry| entry.id != id);
    if entries.len() != before {
        debug!(date, kind = kind.as_str(), id, "entry deleted");
    }
    data
}
