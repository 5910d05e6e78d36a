use crate::counter::{decrement, increment, set_target};
use crate::errors::AppError;
use crate::models::{ClickRequest, Snapshot, TargetRequest, TargetResponse};
use crate::snapshot::build_snapshot;
use crate::state::{save, AppState};
use crate::ui::render_index;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Click {
    Add,
    Sub,
}

/// Opening the page starts the day, like a fresh load of the widget.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    state.start_day().await;
    let record = state.record.lock().await;
    Html(render_index(&build_snapshot(&record, state.clock.today())))
}

pub async fn get_state(State(state): State<AppState>) -> Json<Snapshot> {
    let record = state.record.lock().await;
    Json(build_snapshot(&record, state.clock.today()))
}

pub async fn click(
    State(state): State<AppState>,
    Json(payload): Json<ClickRequest>,
) -> Result<Json<Snapshot>, AppError> {
    let action = match payload.action.trim() {
        "add" => Click::Add,
        "sub" => Click::Sub,
        _ => return Err(AppError::bad_request("action must be 'add' or 'sub'")),
    };

    Ok(Json(apply_click(&state, action).await))
}

pub async fn click_add(State(state): State<AppState>) -> Redirect {
    apply_click(&state, Click::Add).await;
    Redirect::to("/")
}

pub async fn click_sub(State(state): State<AppState>) -> Redirect {
    apply_click(&state, Click::Sub).await;
    Redirect::to("/")
}

pub async fn update_target(
    State(state): State<AppState>,
    Json(payload): Json<TargetRequest>,
) -> Json<TargetResponse> {
    let raw = payload.raw();
    let mut record = state.record.lock().await;

    let result = set_target(&mut record, &raw);
    if result.is_ok() {
        save(&state.data_path, &record).await;
    } else {
        debug!("rejected target {raw:?}");
    }

    Json(TargetResponse {
        accepted: result.is_ok(),
        reason: result.err().map(|err| err.to_string()),
        snapshot: build_snapshot(&record, state.clock.today()),
    })
}

async fn apply_click(state: &AppState, action: Click) -> Snapshot {
    let mut record = state.record.lock().await;
    let changed = match action {
        Click::Add => {
            increment(&mut record);
            true
        }
        Click::Sub => decrement(&mut record),
    };

    if changed {
        save(&state.data_path, &record).await;
    }

    build_snapshot(&record, state.clock.today())
}
