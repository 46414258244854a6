use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/workouts", post(handlers::add_workout))
        .route("/workouts/delete", post(handlers::delete_workout))
        .route("/foods", post(handlers::add_food))
        .route("/foods/delete", post(handlers::delete_food))
        .route("/reset", post(handlers::reset))
        .route("/api/day", get(handlers::get_day))
        .route("/api/entries", post(handlers::add_entry))
        .route("/api/entries/delete", post(handlers::delete_entry))
        .route("/api/history", get(handlers::get_history))
        .route("/api/support", get(handlers::get_support))
        .route("/api/reset", post(handlers::reset_api))
        .with_state(state)
}
