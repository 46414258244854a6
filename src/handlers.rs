use crate::clock;
use crate::errors::AppError;
use crate::history::{history, HISTORY_DISPLAY_CAP};
use crate::journal;
use crate::models::{
    AddEntryRequest, DateQuery, DayResponse, DeleteEntryRequest, DeleteForm, EntryForm, EntryKind,
    HistoryQuery, HistoryResponse, JournalData, PageQuery, ResetForm, ResetRequest, ResetResponse,
    SupportResponse,
};
use crate::motivation;
use crate::state::AppState;
use crate::streak::streak;
use crate::ui::{render_index, PageView, Tab};
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form, Json,
};
use chrono::NaiveDate;
use tracing::info;

pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let date = selected_date(params.date.as_deref())?;
    let key = clock::date_key(date);
    let tab = Tab::parse(params.tab.as_deref());
    let query = params.q.unwrap_or_default();

    let data = state.data.lock().await;
    let day = journal::ensure_day(&data, &key);

    let mut matches = history(&data, &query);
    let shown: Vec<_> = matches.by_ref().take(HISTORY_DISPLAY_CAP).collect();
    let history_truncated = matches.next().is_some();

    let long_date = clock::long_date(date);
    let view = PageView {
        date: &key,
        long_date: &long_date,
        tab,
        streak: streak(&data, date),
        day: &day,
        messages: motivation::daily_messages(&key),
        workout_hint: motivation::workout_hint(&day),
        food_hint: motivation::food_hint(&day),
        query: &query,
        history: &shown,
        history_truncated,
    };

    Ok(Html(render_index(&view)))
}

pub async fn add_workout(
    State(state): State<AppState>,
    Form(form): Form<EntryForm>,
) -> Result<Redirect, AppError> {
    add_from_form(&state, EntryKind::Workout, form).await
}

pub async fn add_food(
    State(state): State<AppState>,
    Form(form): Form<EntryForm>,
) -> Result<Redirect, AppError> {
    add_from_form(&state, EntryKind::Food, form).await
}

pub async fn delete_workout(
    State(state): State<AppState>,
    Form(form): Form<DeleteForm>,
) -> Result<Redirect, AppError> {
    delete_from_form(&state, EntryKind::Workout, form).await
}

pub async fn delete_food(
    State(state): State<AppState>,
    Form(form): Form<DeleteForm>,
) -> Result<Redirect, AppError> {
    delete_from_form(&state, EntryKind::Food, form).await
}

pub async fn reset(
    State(state): State<AppState>,
    Form(form): Form<ResetForm>,
) -> Result<Redirect, AppError> {
    if form.confirm.as_deref() != Some("yes") {
        return Err(AppError::bad_request("reset requires confirmation"));
    }
    apply_reset(&state).await?;
    Ok(Redirect::to("/"))
}

pub async fn get_day(
    State(state): State<AppState>,
    Query(params): Query<DateQuery>,
) -> Result<Json<DayResponse>, AppError> {
    let date = selected_date(params.date.as_deref())?;
    let data = state.data.lock().await;
    Ok(Json(day_response(&data, date)))
}

pub async fn add_entry(
    State(state): State<AppState>,
    Json(payload): Json<AddEntryRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let date = selected_date(payload.date.as_deref())?;
    let key = clock::date_key(date);
    let data = state.commit(|data| {
        journal::add_entry(data, &key, payload.kind, &payload.text)
    })
    .await?;
    Ok(Json(day_response(&data, date)))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Json(payload): Json<DeleteEntryRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let date = selected_date(payload.date.as_deref())?;
    let key = clock::date_key(date);
    let data = state.commit(|data| {
        journal::delete_entry(data, &key, payload.kind, &payload.id)
    })
    .await?;
    Ok(Json(day_response(&data, date)))
}

pub async fn get_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let query = params.q.unwrap_or_default();
    let limit = params.limit.unwrap_or(HISTORY_DISPLAY_CAP);
    let data = state.data.lock().await;

    let mut matches = history(&data, &query);
    let entries: Vec<_> = matches.by_ref().take(limit).collect();
    let total = entries.len() + matches.count();

    Ok(Json(HistoryResponse { total, entries }))
}

pub async fn get_support(
    State(state): State<AppState>,
    Query(params): Query<DateQuery>,
) -> Result<Json<SupportResponse>, AppError> {
    let key = clock::date_key(selected_date(params.date.as_deref())?);
    let data = state.data.lock().await;
    let day = journal::ensure_day(&data, &key);

    Ok(Json(SupportResponse {
        messages: motivation::daily_messages(&key)
            .into_iter()
            .map(str::to_string)
            .collect(),
        workout_hint: motivation::workout_hint(&day).to_string(),
        food_hint: motivation::food_hint(&day).to_string(),
        date: key,
    }))
}

pub async fn reset_api(
    State(state): State<AppState>,
    Json(payload): Json<ResetRequest>,
) -> Result<Json<ResetResponse>, AppError> {
    if !payload.confirm {
        return Err(AppError::bad_request("reset requires confirmation"));
    }
    apply_reset(&state).await?;
    Ok(Json(ResetResponse { ok: true }))
}

async fn add_from_form(
    state: &AppState,
    kind: EntryKind,
    form: EntryForm,
) -> Result<Redirect, AppError> {
    let key = clock::date_key(selected_date(Some(form.date.as_str()))?);
    state.commit(|data| journal::add_entry(data, &key, kind, &form.text)).await?;
    Ok(journal_redirect(&key))
}

async fn delete_from_form(
    state: &AppState,
    kind: EntryKind,
    form: DeleteForm,
) -> Result<Redirect, AppError> {
    let key = clock::date_key(selected_date(Some(form.date.as_str()))?);
    state.commit(|data| journal::delete_entry(data, &key, kind, &form.id)).await?;
    Ok(journal_redirect(&key))
}

async fn apply_reset(state: &AppState) -> Result<(), AppError> {
    state.commit(|_| journal::reset_all()).await?;
    info!("journal reset");
    Ok(())
}

fn day_response(data: &JournalData, date: NaiveDate) -> DayResponse {
    let key = clock::date_key(date);
    let day = journal::ensure_day(data, &key);
    DayResponse {
        streak: streak(data, date),
        workouts: day.workouts,
        foods: day.foods,
        date: key,
    }
}

fn journal_redirect(key: &str) -> Redirect {
    Redirect::to(&format!("/?date={key}&tab=journal"))
}

/// Missing or blank means today; anything else must be `YYYY-MM-DD`.
fn selected_date(raw: Option<&str>) -> Result<NaiveDate, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(clock::today()),
        Some(value) => clock::parse_date(value)
            .ok_or_else(|| AppError::bad_request(format!("invalid date '{value}', expected YYYY-MM-DD"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_date_defaults_to_today() {
        assert_eq!(selected_date(None).unwrap(), clock::today());
        assert_eq!(selected_date(Some("  ")).unwrap(), clock::today());
    }

    #[test]
    fn selected_date_rejects_bad_input() {
        let err = selected_date(Some("02/01/2024")).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn reset_does_not_run_when_save_fails() {
        let seeded = journal::add_food(JournalData::default(), "2024-01-02", "soup");
        let state = AppState::new(std::env::temp_dir(), seeded.clone());

        let err = reset_api(State(state.clone()), Json(ResetRequest { confirm: true }))
            .await
            .unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(*state.data.lock().await, seeded);
    }
}
