use crate::errors::AppError;
use crate::models::JournalData;
use crate::storage::persist_data;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::{Mutex, MutexGuard};

/// The single journal owned by the server, plus where it is saved.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<JournalData>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: JournalData) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
        }
    }

    /// Computes the next journal with `apply`, writes it, and only then
    /// swaps it in. On a failed write the in-memory journal is untouched.
    pub async fn commit<F>(&self, apply: F) -> Result<MutexGuard<'_, JournalData>, AppError>
    where
        F: FnOnce(JournalData) -> JournalData + Send,
    {
        let mut data = self.data.lock().await;
        let next = apply(data.clone());
        persist_data(&self.data_path, &next).await?;
        *data = next;
        Ok(data)
    }
}
