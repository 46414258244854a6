use crate::errors::AppError;
use crate::models::JournalData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, warn};

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/journal.json"))
}

/// Reads the journal, falling back to an empty one on any failure.
///
/// A file that exists but does not parse is copied aside to `<path>.corrupt`
/// before the empty journal replaces it on the next save.
pub async fn load_data(path: &Path) -> JournalData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                preserve_corrupt(path, &bytes).await;
                JournalData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => JournalData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            JournalData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &JournalData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data)?;
    fs::write(path, payload).await?;
    Ok(())
}

pub fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".corrupt");
    PathBuf::from(name)
}

async fn preserve_corrupt(path: &Path, bytes: &[u8]) {
    let target = corrupt_path(path);
    match fs::write(&target, bytes).await {
        Ok(()) => warn!("kept unreadable data at {}", target.display()),
        Err(err) => error!("failed to keep unreadable data: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{add_food, add_workout};

    fn temp_path(label: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = env::temp_dir();
        path.push(format!("fitness_journal_{label}_{}_{nanos}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn missing_file_is_empty() {
        let data = load_data(&temp_path("missing")).await;
        assert_eq!(data, JournalData::default());
    }

    #[tokio::test]
    async fn save_then_load_keeps_entries() {
        let path = temp_path("roundtrip");
        let data = add_workout(JournalData::default(), "2024-01-02", "rows");
        let data = add_food(data, "2024-01-02", "soup");
        persist_data(&path, &data).await.unwrap();

        assert_eq!(load_data(&path).await, data);
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn garbage_is_empty_and_kept_aside() {
        let path = temp_path("garbage");
        std::fs::write(&path, b"{not json at all").unwrap();

        assert_eq!(load_data(&path).await, JournalData::default());
        let kept = std::fs::read(corrupt_path(&path)).unwrap();
        assert_eq!(kept, b"{not json at all");

        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_file(corrupt_path(&path));
    }

    #[tokio::test]
    async fn wrong_shape_is_empty() {
        for (label, body) in [
            ("nologs", r#"{"days": {}}"#),
            ("scalar", r#"{"logs": 5}"#),
            ("null", "null"),
        ] {
            let path = temp_path(label);
            std::fs::write(&path, body).unwrap();
            assert_eq!(load_data(&path).await, JournalData::default());
            let _ = std::fs::remove_file(&path);
            let _ = std::fs::remove_file(corrupt_path(&path));
        }
    }

    #[tokio::test]
    async fn day_missing_a_list_loads_it_empty() {
        let path = temp_path("partial");
        std::fs::write(
            &path,
            r#"{"logs": {"2024-01-02": {"workouts": [{"id": "x", "time": "07:00", "text": "run"}]}}}"#,
        )
        .unwrap();

        let data = load_data(&path).await;
        let day = &data.logs["2024-01-02"];
        assert_eq!(day.workouts.len(), 1);
        assert!(day.foods.is_empty());
        let _ = std::fs::remove_file(&path);
    }
}
