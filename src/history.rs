use crate::models::{EntryKind, HistoryItem, JournalData};

/// How many history rows the page renders before asking for a narrower search.
pub const HISTORY_DISPLAY_CAP: usize = 200;

/// Every entry across all days, newest date first and newest time first
/// within a date, optionally narrowed by a case-insensitive query over
/// `"date kind text"`.
///
/// Filtering is lazy, so `take(n)` stops matching once `n` rows are found.
pub fn history(data: &JournalData, query: &str) -> impl Iterator<Item = HistoryItem> {
    let mut items = flatten(data);
    items.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.time.cmp(&a.time)));

    let needle = query.trim().to_lowercase();
    items
        .into_iter()
        .filter(move |item| needle.is_empty() || matches(item, &needle))
}

fn flatten(data: &JournalData) -> Vec<HistoryItem> {
    let mut items = Vec::new();
    for (date, day) in &data.logs {
        for kind in [EntryKind::Workout, EntryKind::Food] {
            items.extend(day.entries(kind).iter().map(|entry| HistoryItem {
                kind,
                date: date.clone(),
                time: entry.time.clone(),
                text: entry.text.clone(),
                id: entry.id.clone(),
            }));
        }
    }
    items
}

fn matches(item: &HistoryItem, needle: &str) -> bool {
    format!("{} {} {}", item.date, item.kind.as_str(), item.text)
        .to_lowercase()
        .contains(needle)
}
