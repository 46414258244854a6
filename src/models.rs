use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub time: String,
    pub text: String,
}

/// One calendar day of entries, newest first in both lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DayLog {
    #[serde(default)]
    pub workouts: Vec<Entry>,
    #[serde(default)]
    pub foods: Vec<Entry>,
}

impl DayLog {
    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty() && self.foods.is_empty()
    }

    pub fn entries(&self, kind: EntryKind) -> &[Entry] {
        match kind {
            EntryKind::Workout => &self.workouts,
            EntryKind::Food => &self.foods,
        }
    }

    pub fn entries_mut(&mut self, kind: EntryKind) -> &mut Vec<Entry> {
        match kind {
            EntryKind::Workout => &mut self.workouts,
            EntryKind::Food => &mut self.foods,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct JournalData {
    pub logs: BTreeMap<String, DayLog>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Workout,
    Food,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Workout => "workout",
            EntryKind::Food => "food",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub kind: EntryKind,
    pub date: String,
    pub time: String,
    pub text: String,
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct AddEntryRequest {
    pub kind: EntryKind,
    pub date: Option<String>,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteEntryRequest {
    pub kind: EntryKind,
    pub date: Option<String>,
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Deserialize, Default)]
pub struct DateQuery {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct HistoryQuery {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PageQuery {
    pub date: Option<String>,
    pub tab: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EntryForm {
    pub date: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    pub date: String,
    pub id: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ResetForm {
    pub confirm: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayResponse {
    pub date: String,
    pub workouts: Vec<Entry>,
    pub foods: Vec<Entry>,
    pub streak: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub total: usize,
    pub entries: Vec<HistoryItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SupportResponse {
    pub date: String,
    pub messages: Vec<String>,
    pub workout_hint: String,
    pub food_hint: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResetResponse {
    pub ok: bool,
}
