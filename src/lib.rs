pub mod app;
pub mod clock;
pub mod errors;
pub mod handlers;
pub mod history;
pub mod journal;
pub mod models;
pub mod motivation;
pub mod state;
pub mod storage;
pub mod streak;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
