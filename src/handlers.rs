use crate::catalog::{catalog, CatalogItem};
use crate::errors::AppError;
use crate::loader::load_dataset;
use crate::logger::{log_entry, LogError, Rejected};
use crate::models::{DailyQuery, DailyReport, Dataset, EntryRequest, LoggedEntry, PageQuery};
use crate::state::AppState;
use crate::stats::{build_report, daily_counts, default_date, parse_date, pick_date};
use crate::store::open_worksheet;
use crate::ui::{render_page, MainView, Notice, NoticeKind};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Redirect},
    Form, Json,
};
use chrono::{Local, NaiveDate, NaiveDateTime};

const SUBMITTED: &str = "submitted";

/// The dashboard. Reopens the store and rereads every row on each render.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let ws = open_worksheet(&state.config, &state.http).await?;
    let mut notices = vec![Notice::new(NoticeKind::Info, "Opened existing spreadsheet")];
    notices.extend(query.notice.as_deref().and_then(submission_notice));

    let dataset = load_dataset(&ws).await?;
    let view = match (
        dataset.date_bounds(),
        pick_date(&dataset, query.date.as_deref(), today()),
    ) {
        (Some((min, max)), Some(picked)) => MainView::Day {
            picked,
            min,
            max,
            counts: daily_counts(&dataset, picked),
        },
        _ => MainView::NoData,
    };

    Ok(Html(render_page(&notices, &view)))
}

/// Sidebar form target. Redirects back to the page with the outcome.
pub async fn log_form(
    State(state): State<AppState>,
    Form(payload): Form<EntryRequest>,
) -> Result<Redirect, AppError> {
    let ws = open_worksheet(&state.config, &state.http).await?;
    let notice = match log_entry(&ws, &payload.mood, &payload.note, now()).await {
        Ok(_) => SUBMITTED,
        Err(LogError::Rejected(rejected)) => rejected.code(),
        Err(LogError::Store(err)) => return Err(err.into()),
    };
    Ok(Redirect::to(&format!("/?notice={notice}")))
}

pub async fn get_moods() -> Json<Vec<CatalogItem>> {
    Json(catalog())
}

pub async fn get_entries(State(state): State<AppState>) -> Result<Json<Dataset>, AppError> {
    let ws = open_worksheet(&state.config, &state.http).await?;
    Ok(Json(load_dataset(&ws).await?))
}

pub async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<EntryRequest>,
) -> Result<(StatusCode, Json<LoggedEntry>), AppError> {
    let ws = open_worksheet(&state.config, &state.http).await?;
    let entry = log_entry(&ws, &payload.mood, &payload.note, now()).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn get_daily(
    State(state): State<AppState>,
    Query(query): Query<DailyQuery>,
) -> Result<Json<DailyReport>, AppError> {
    let requested = match query.date.as_deref() {
        Some(raw) => {
            Some(parse_date(raw).ok_or_else(|| AppError::bad_request("date must be YYYY-MM-DD"))?)
        }
        None => None,
    };

    let ws = open_worksheet(&state.config, &state.http).await?;
    let dataset = load_dataset(&ws).await?;
    let today = today();
    let date = requested
        .or_else(|| default_date(&dataset, today))
        .unwrap_or(today);
    Ok(Json(build_report(&dataset, date)))
}

fn submission_notice(code: &str) -> Option<Notice> {
    if code == SUBMITTED {
        return Some(Notice::new(NoticeKind::Success, "Submitted!"));
    }
    Rejected::from_code(code).map(|rejected| Notice::new(NoticeKind::Warning, rejected.message()))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
