use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use tokio::task::JoinSet;
use tower::ServiceExt;

use tydemo_core::calendar::{month_days, parse_date};
use tydemo_core::preview::{generate_for_date, generate_for_month};
use tydemo_core::{EventId, EventStore};
use tydemo_server::config::{LatencyRange, ServerConfig};
use tydemo_server::{app, state::AppState};

fn test_app() -> Router {
    app(AppState::with_store(ServerConfig::default(), EventStore::new()))
}

struct TestResponse {
    status: StatusCode,
    hx_trigger: Option<String>,
    body: String,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("body should be JSON")
    }
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let hx_trigger = response
        .headers()
        .get("hx-trigger")
        .map(|v| v.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        hx_trigger,
        body: String::from_utf8(body.to_vec()).unwrap(),
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_create_event_returns_agenda() {
    let app = test_app();

    let res = send(
        &app,
        post_form(
            "/api/calendar/create-event",
            "title=Dentist&type=personal&date=2025-03-10&time=10%3A30+AM",
        ),
    )
    .await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.hx_trigger.as_deref(), Some("calendar-events-changed"));
    assert!(res.body.contains("Dentist"));
    assert!(res.body.contains("10:30 AM"));
    assert!(res.body.contains(r#"hx-delete="/api/calendar/events/1""#));
    assert!(res.body.contains("Monday, March 10, 2025"));
}

#[tokio::test]
async fn test_create_event_requires_title_and_date() {
    let app = test_app();

    let res = send(
        &app,
        post_form("/api/calendar/create-event", "title=++&type=meeting&date=2025-03-10"),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body.contains("Title is required"));

    let res = send(&app, post_form("/api/calendar/create-event", "title=Standup")).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body.contains("Date is required"));

    let res = send(
        &app,
        post_form("/api/calendar/create-event", "title=Standup&date=2025-02-30"),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body.contains("Invalid date"));
}

#[tokio::test]
async fn test_create_event_escapes_title() {
    let app = test_app();

    let res = send(
        &app,
        post_form(
            "/api/calendar/create-event",
            "title=%3Cscript%3Ex%3C%2Fscript%3E&date=2025-03-10",
        ),
    )
    .await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("&lt;script&gt;x&lt;/script&gt;"));
    assert!(!res.body.contains("<script>"));
}

#[tokio::test]
async fn test_delete_event_then_delete_again() {
    let app = test_app();
    send(
        &app,
        post_form("/api/calendar/create-event", "title=Dentist&type=personal&date=2025-03-10"),
    )
    .await;

    let res = send(&app, delete("/api/calendar/events/1")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.hx_trigger.as_deref(), Some("calendar-events-changed"));
    assert!(!res.body.contains("Dentist"));

    let res = send(&app, delete("/api/calendar/events/1")).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert!(res.body.contains("Event 1 not found"));
}

#[tokio::test]
async fn test_delete_unknown_or_malformed_id_is_not_found() {
    let app = test_app();

    let res = send(&app, delete("/api/calendar/events/999")).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = send(&app, delete("/api/calendar/events/abc")).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_distinct_ids() {
    const N: u64 = 32;

    let state = AppState::with_store(ServerConfig::default(), EventStore::new());
    let app = app(state.clone());

    let mut requests = JoinSet::new();
    for i in 0..N {
        let app = app.clone();
        let day = 10 + i % 2;
        requests.spawn(async move {
            let body = format!("title=Event+{i}&type=meeting&date=2025-03-{day}");
            send(&app, post_form("/api/calendar/create-event", &body)).await.status
        });
    }
    while let Some(status) = requests.join_next().await {
        assert_eq!(status.unwrap(), StatusCode::OK);
    }

    let store = state.events.lock().await;
    assert_eq!(store.len(), N as usize);
    for id in 1..=N {
        assert!(store.get(EventId(id)).is_some(), "missing id {id}");
    }
    assert!(store.get(EventId(N + 1)).is_none());
}

#[tokio::test]
async fn test_select_date_lists_previews_and_stored_events() {
    let app = test_app();
    send(
        &app,
        post_form("/api/calendar/create-event", "title=Gym&type=personal&date=2025-03-10"),
    )
    .await;

    let res = send(
        &app,
        post_form("/api/calendar/select-date", "date=2025-03-10T00%3A00%3A00.000Z"),
    )
    .await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Monday, March 10, 2025"));
    assert!(res.body.contains("Gym"));
    assert!(res.body.contains("Team Meeting"));
    assert!(res.body.contains("Client Call"));

    let previews = generate_for_date(parse_date("2025-03-10").unwrap());
    assert!(!previews.is_empty());
    for preview in previews {
        assert!(res.body.contains(&preview.title));
    }
    // Previews come before stored events.
    assert!(res.body.find("Client Call").unwrap() < res.body.find("Gym").unwrap());
}

#[tokio::test]
async fn test_select_date_with_simulated_latency() {
    let config = ServerConfig {
        simulated_latency_ms: Some(LatencyRange { min: 0, max: 1 }),
        ..ServerConfig::default()
    };
    let app = app(AppState::with_store(config, EventStore::new()));

    let res = send(&app, post_form("/api/calendar/select-date", "date=2025-03-10")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Monday, March 10, 2025"));

    let res = send(&app, post_form("/api/calendar/select-date", "")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("No date selected"));
}

#[tokio::test]
async fn test_standalone_date_selection() {
    let app = test_app();

    let res = send(&app, post_form("/api/date/select", "date=2025-03-10")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Selected date: <strong>2025-03-10</strong>"));

    let res = send(&app, post_form("/api/date/select", "date=%3Cb%3E")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("&lt;b&gt;"));

    let res = send(&app, post_form("/api/date/select", "")).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Invalid date");
}

#[tokio::test]
async fn test_select_date_falls_back_on_bad_input() {
    let app = test_app();

    let res = send(&app, post_form("/api/calendar/select-date", "")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("No date selected"));

    let res = send(&app, post_form("/api/calendar/select-date", "date=someday")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Invalid date"));
    assert!(res.body.contains("No events for this day."));
}

#[tokio::test]
async fn test_month_preview_events_json() {
    let app = test_app();

    let res = send(&app, get("/api/calendar/events?year=2024&month=2")).await;
    assert_eq!(res.status, StatusCode::OK);

    let json = res.json();
    let expected: usize = generate_for_month(2024, 2)
        .unwrap()
        .values()
        .map(Vec::len)
        .sum();
    assert_eq!(json["year"], 2024);
    assert_eq!(json["month"], 2);
    assert_eq!(json["total_count"], expected);
    assert_eq!(json["events"].as_array().unwrap().len(), expected);

    if let Some(first) = json["events"].get(0) {
        assert!(first["id"].is_null());
        assert!(first["formatted_date"].is_string());
        assert!(first["name"].is_string());
    }
}

#[tokio::test]
async fn test_month_preview_events_defaults_and_rejects_bad_month() {
    let app = test_app();

    let res = send(&app, get("/api/calendar/events")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.json()["year"].is_i64());

    let res = send(&app, get("/api/calendar/events?year=2025&month=13")).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.json()["error"].is_string());
}

#[tokio::test]
async fn test_month_event_counts_include_stored_events() {
    let app = test_app();
    send(
        &app,
        post_form("/api/calendar/create-event", "title=Dentist&date=2025-03-10"),
    )
    .await;

    let res = send(&app, get("/api/month-events/2025/3")).await;
    assert_eq!(res.status, StatusCode::OK);

    let json = res.json();
    let counts = json.as_object().unwrap();
    for date in month_days(2025, 3).unwrap() {
        let key = date.format("%Y-%m-%d").to_string();
        let mut expected = generate_for_date(date).len();
        if key == "2025-03-10" {
            expected += 1;
        }
        match counts.get(&key) {
            Some(count) => assert_eq!(count.as_u64().unwrap() as usize, expected),
            None => assert_eq!(expected, 0),
        }
    }
}

#[tokio::test]
async fn test_month_event_counts_empty_on_error() {
    let app = test_app();

    let res = send(&app, get("/api/month-events/2025/14")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, "{}");

    let res = send(&app, get("/api/month-events/next/3")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, "{}");
}

#[tokio::test]
async fn test_day_event_badge() {
    let app = test_app();
    send(
        &app,
        post_form("/api/calendar/create-event", "title=Dentist&date=2025-03-10"),
    )
    .await;

    let expected = generate_for_date(parse_date("2025-03-10").unwrap()).len() + 1;
    let res = send(&app, get("/api/day-events/2025-3-10")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains(&format!(">{expected}<")));

    let res = send(&app, get("/api/day-events/2025-02-30")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, "");

    assert!(generate_for_date(parse_date("2025-03-05").unwrap()).is_empty());
    let res = send(&app, get("/api/day-events/2025-03-05")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, "");
}

#[tokio::test]
async fn test_user_search_and_card() {
    let app = test_app();

    let res = send(&app, get("/api/users/search?q=ALICE")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Alice Johnson"));
    assert!(!res.body.contains("Bob Smith"));

    let res = send(&app, get("/api/users/2")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("bob@example.com"));

    let res = send(&app, get("/api/users/42")).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_task_filter_and_toggle() {
    let app = test_app();

    let res = send(&app, get("/api/tasks/filter?status=pending")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Fix login bug"));
    assert!(!res.body.contains("Update documentation"));

    let res = send(&app, post_form("/api/tasks/2/toggle", "")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("completed"));

    let res = send(&app, get("/api/tasks/filter?status=pending")).await;
    assert!(!res.body.contains("Fix login bug"));

    let res = send(&app, post_form("/api/tasks/99/toggle", "")).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_form_validation_status_depends_on_htmx() {
    let app = test_app();

    let res = send(&app, post_form("/api/form/validate", "name=A&email=nope")).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body.contains("Please enter a valid email address"));

    let mut request = post_form("/api/form/validate", "name=A&email=nope");
    request
        .headers_mut()
        .insert("hx-request", "true".parse().unwrap());
    let res = send(&app, request).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Name must be at least 2 characters"));

    let res = send(
        &app,
        post_form("/api/form/validate", "name=Alice&email=alice%40example.com&age=30"),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Thanks, <strong>Alice</strong>"));

    let res = send(
        &app,
        post_form("/api/form/validate", "name=Alice&email=alice%40example.com&age=%2B30"),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body.contains("Age must be a number"));

    let res = send(&app, post_form("/api/form/validate", "name=A&email=&age=x")).await;
    let email = res.body.find(r#"data-field="email""#).unwrap();
    let name = res.body.find(r#"data-field="name""#).unwrap();
    let age = res.body.find(r#"data-field="age""#).unwrap();
    assert!(email < name && name < age);
}

#[tokio::test]
async fn test_modal_content_and_notifications() {
    let app = test_app();

    let res = send(&app, get("/api/modal/content/user-profile?user_id=3")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Carol Williams"));

    let res = send(&app, get("/api/modal/content/task-details?task_id=4")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Optimize database queries"));

    let res = send(&app, get("/api/modal/content/unknown")).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = send(&app, get("/api/notifications/demo")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("data-kind="));
}

#[tokio::test]
async fn test_debug_check() {
    let res = send(&test_app(), get("/api/test-debug")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Debug test successful!"));
    assert!(res.body.contains("Timestamp: "));
}

#[tokio::test]
async fn test_health() {
    let res = send(&test_app(), get("/health")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["status"], "ok");
}
