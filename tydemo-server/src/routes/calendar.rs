//! Calendar and event endpoints

use std::collections::BTreeMap;
use std::time::Duration;

use axum::{
    Form, Json, Router,
    extract::{Path, Query, State, rejection::FormRejection},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{delete, get, post},
};
use chrono::{Datelike, Local, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use tydemo_core::calendar::{date_key, month_days, parse_date};
use tydemo_core::preview::{generate_for_date, generate_for_month};
use tydemo_core::{DemoError, DemoResult, Event, EventId, EventStore};

use crate::render;
use crate::routes::{AppError, FragmentError};
use crate::state::AppState;

/// Sent with create/delete responses so month grids can refresh their counts.
const HX_TRIGGER: &str = "hx-trigger";
const EVENTS_CHANGED: &str = "calendar-events-changed";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/calendar/events", get(month_preview_events))
        .route("/api/calendar/events/{id}", delete(delete_event))
        .route("/api/month-events/{year}/{month}", get(month_event_counts))
        .route("/api/day-events/{date}", get(day_event_badge))
        .route("/api/calendar/select-date", post(select_date))
        .route("/api/calendar/create-event", post(create_event))
        .route("/api/date/select", post(record_selected_date))
}

/// A day's agenda: preview events first, then stored events in insertion order.
fn agenda(store: &EventStore, date: NaiveDate) -> Vec<Event> {
    let mut events = generate_for_date(date);
    events.extend(store.list_by_date(date));
    events
}

#[derive(Deserialize)]
pub struct MonthQuery {
    pub year: Option<String>,
    pub month: Option<String>,
}

#[derive(Serialize)]
pub struct MonthEventsResponse {
    pub events: Vec<Event>,
    pub month: u32,
    pub year: i32,
    pub total_count: usize,
}

fn parse_param<T: std::str::FromStr>(name: &str, value: Option<&str>, default: T) -> DemoResult<T> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(default),
        Some(v) => v
            .parse()
            .map_err(|_| DemoError::Validation(format!("Invalid {name} '{v}'"))),
    }
}

/// GET /api/calendar/events?year&month - Preview events for a month as a flat list
async fn month_preview_events(
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthEventsResponse>, AppError> {
    let today = Local::now().date_naive();
    let year = parse_param("year", query.year.as_deref(), today.year())?;
    let month = parse_param("month", query.month.as_deref(), today.month())?;

    let events: Vec<Event> = generate_for_month(year, month)?
        .into_values()
        .flatten()
        .collect();

    Ok(Json(MonthEventsResponse {
        total_count: events.len(),
        events,
        month,
        year,
    }))
}

/// GET /api/month-events/:year/:month - Agenda size per day, for days that have events
///
/// Any failure yields an empty mapping so the grid simply shows no badges.
async fn month_event_counts(
    State(state): State<AppState>,
    Path((year, month)): Path<(String, String)>,
) -> Json<BTreeMap<String, usize>> {
    let days = match (year.parse::<i32>(), month.parse::<u32>()) {
        (Ok(y), Ok(m)) => month_days(y, m),
        _ => Err(DemoError::Parse(format!("{year}-{month}"))),
    };

    let days = match days {
        Ok(days) => days,
        Err(e) => {
            debug!(error = %e, "month counts requested for invalid month");
            return Json(BTreeMap::new());
        }
    };

    let store = state.events.lock().await;
    let counts: BTreeMap<String, usize> = days
        .into_iter()
        .map(|date| (date_key(date), agenda(&store, date).len()))
        .filter(|(_, count)| *count > 0)
        .collect();

    Json(counts)
}

/// GET /api/day-events/:year-:month-:day - Badge for one grid cell, empty when nothing is on
async fn day_event_badge(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Html<String> {
    let Ok(date) = parse_date(&date) else {
        return Html(String::new());
    };

    let store = state.events.lock().await;
    Html(render::day_badge(agenda(&store, date).len()))
}

#[derive(Deserialize)]
pub struct SelectDateForm {
    pub date: Option<String>,
}

/// POST /api/calendar/select-date - Agenda for the clicked date
///
/// Bad or missing input still answers 200 with an empty list and a label
/// saying what went wrong.
async fn select_date(
    State(state): State<AppState>,
    form: Result<Form<SelectDateForm>, FormRejection>,
) -> Html<String> {
    if let Some(range) = state.config.simulated_latency_ms {
        let ms = rand::thread_rng().gen_range(range.min..=range.max);
        debug!(ms, "simulating latency");
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    let raw = form.ok().and_then(|Form(f)| f.date).unwrap_or_default();
    if raw.trim().is_empty() {
        return Html(render::agenda(None, &[], "No date selected"));
    }

    match parse_date(&raw) {
        Ok(date) => {
            let store = state.events.lock().await;
            let events = agenda(&store, date);
            Html(render::agenda(Some(date), &events, &render::date_label(date)))
        }
        Err(e) => {
            debug!(error = %e, "date selection could not be parsed");
            Html(render::agenda(None, &[], "Invalid date"))
        }
    }
}

/// POST /api/date/select - Acknowledge a date picked in a standalone picker
///
/// The value is echoed back as given; only an absent or blank value is rejected.
async fn record_selected_date(
    form: Result<Form<SelectDateForm>, FormRejection>,
) -> Result<Html<String>, (StatusCode, &'static str)> {
    let raw = form.ok().and_then(|Form(f)| f.date).unwrap_or_default();
    let raw = raw.trim();
    if raw.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Invalid date"));
    }

    info!(date = raw, "date selected");
    Ok(Html(render::selected_date(raw)))
}

#[derive(Deserialize)]
pub struct CreateEventForm {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

/// POST /api/calendar/create-event - Create an event and return the day's agenda
async fn create_event(
    State(state): State<AppState>,
    form: Result<Form<CreateEventForm>, FormRejection>,
) -> Result<impl IntoResponse, FragmentError> {
    let Form(form) = form.map_err(|e| DemoError::Validation(e.body_text()))?;

    let mut store = state.events.lock().await;
    let event = store.create(
        form.date.as_deref().unwrap_or_default(),
        form.title.as_deref().unwrap_or_default(),
        form.event_type.as_deref().unwrap_or_default(),
        form.time.as_deref(),
    )?;

    info!(id = ?event.id, date = %event.date, title = %event.title, "created event");

    let events = agenda(&store, event.date);
    let html = render::agenda(Some(event.date), &events, &render::date_label(event.date));

    Ok(([(HX_TRIGGER, EVENTS_CHANGED)], Html(html)))
}

/// DELETE /api/calendar/events/:id - Delete an event and return what is left on its day
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, FragmentError> {
    let id = id
        .parse::<u64>()
        .map(EventId)
        .map_err(|_| DemoError::NotFound(format!("Event {id}")))?;

    let mut store = state.events.lock().await;
    let (date, _remaining) = store.delete(id)?;

    info!(%id, %date, "deleted event");

    let events = agenda(&store, date);
    let html = render::agenda(Some(date), &events, &render::date_label(date));

    Ok(([(HX_TRIGGER, EVENTS_CHANGED)], Html(html)))
}
