//! HTML fragments returned to HTMX swap targets.
//!
//! Every value that can carry user input goes through `escape`.

use std::fmt::Write;

use chrono::NaiveDate;
use tydemo_core::calendar::{date_key, format_long, is_weekend};
use tydemo_core::form::FieldErrors;
use tydemo_core::sample::{Notification, Task, User};
use tydemo_core::Event;

/// Escape text for use in element content and quoted attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Danger-styled message used for every failed fragment request.
pub fn error_fragment(message: &str) -> String {
    format!(
        r#"<div class="ty-bg-danger-soft ty-text-danger p-3 rounded text-sm" role="alert"><ty-icon name="alert-circle" class="inline mr-1"></ty-icon>{}</div>"#,
        escape(message)
    )
}

/// The event list for one day.
///
/// `date` is None when the request carried no usable date; the list is then
/// empty and `label` explains why.
pub fn agenda(date: Option<NaiveDate>, events: &[Event], label: &str) -> String {
    let mut html = String::new();
    let date_attr = date.map(date_key).unwrap_or_default();

    let _ = write!(
        html,
        r#"<div id="event-list" class="space-y-3" data-date="{}"><div class="flex items-center justify-between"><h3 class="font-semibold">{}</h3><ty-tag flavor="neutral" size="sm">{}</ty-tag></div>"#,
        escape(&date_attr),
        escape(label),
        events.len()
    );

    if let Some(date) = date {
        let (flavor, note) = if is_weekend(date) {
            ("warning", "Weekend day! Perfect for relaxation.")
        } else {
            ("info", "Weekday - great for productivity!")
        };
        let _ = write!(
            html,
            r#"<p class="ty-bg-{flavor}-soft rounded-lg p-2 text-xs">{note}</p>"#
        );
    }

    if events.is_empty() {
        html.push_str(r#"<p class="ty-text-neutral-mild text-sm">No events for this day.</p>"#);
    } else {
        html.push_str(r#"<ul class="space-y-2">"#);
        for event in events {
            html.push_str(&event_item(event));
        }
        html.push_str("</ul>");
    }

    html.push_str("</div>");
    html
}

fn event_item(event: &Event) -> String {
    let time = event
        .time
        .as_deref()
        .map(|t| format!(r#"<span class="text-xs ty-text-neutral-mild">{}</span>"#, escape(t)))
        .unwrap_or_default();

    // Only stored events can be deleted.
    let action = match event.id {
        Some(id) => format!(
            r##"<ty-button flavor="danger" size="sm" hx-delete="/api/calendar/events/{id}" hx-target="#event-list" hx-swap="outerHTML" hx-confirm="Delete this event?"><ty-icon name="trash"></ty-icon></ty-button>"##
        ),
        None => r#"<ty-tag flavor="neutral" size="xs">preview</ty-tag>"#.to_string(),
    };

    format!(
        r#"<li class="flex items-center gap-3 ty-bg-{color}-soft rounded-lg p-2" data-event-id="{id}"><ty-icon name="{icon}" class="ty-text-{color}"></ty-icon><div class="flex-1"><div class="font-medium">{title}</div><div class="text-xs">{name} {time}</div></div>{action}</li>"#,
        color = event.color,
        id = event.id.map(|i| i.to_string()).unwrap_or_default(),
        icon = event.icon,
        title = escape(&event.title),
        name = event.event_type.name(),
    )
}

/// Small count badge shown in a month-grid cell. Empty for days without events.
pub fn day_badge(count: usize) -> String {
    if count == 0 {
        return String::new();
    }
    format!(r#"<span class="ty-bg-primary ty-text-primary-soft rounded-full px-1 text-xs">{count}</span>"#)
}

/// Heading used for a parsed date in the agenda.
pub fn date_label(date: NaiveDate) -> String {
    format_long(date)
}

pub fn user_results(users: &[User]) -> String {
    if users.is_empty() {
        return r#"<p class="ty-text-neutral-mild text-sm p-2">No users found</p>"#.to_string();
    }

    let mut html = String::new();
    for user in users {
        let _ = write!(
            html,
            r##"<ty-option value="{id}" hx-get="/api/users/{id}" hx-target="#user-details"><div class="font-medium">{name}</div><div class="text-xs ty-text-neutral-mild">{email}</div></ty-option>"##,
            id = user.id,
            name = escape(&user.name),
            email = escape(&user.email),
        );
    }
    html
}

pub fn user_card(user: &User) -> String {
    format!(
        r#"<div class="ty-elevated p-4 rounded-lg" data-user-id="{id}"><div class="flex items-center gap-3"><ty-icon name="user" class="ty-text-primary"></ty-icon><div><div class="font-semibold">{name}</div><div class="text-sm ty-text-neutral-mild">{email}</div></div><ty-tag flavor="{flavor}" size="sm">{role}</ty-tag></div></div>"#,
        id = user.id,
        name = escape(&user.name),
        email = escape(&user.email),
        role = escape(&user.role),
        flavor = role_flavor(&user.role),
    )
}

pub fn user_profile_modal(user: &User) -> String {
    format!(
        r#"<div class="space-y-3"><h2 class="text-xl font-semibold">{name}</h2><dl class="grid grid-cols-2 gap-2 text-sm"><dt>Email</dt><dd>{email}</dd><dt>Role</dt><dd>{role}</dd><dt>User ID</dt><dd>{id}</dd></dl></div>"#,
        id = user.id,
        name = escape(&user.name),
        email = escape(&user.email),
        role = escape(&user.role),
    )
}

fn role_flavor(role: &str) -> &'static str {
    match role {
        "Admin" => "danger",
        "Editor" => "warning",
        _ => "neutral",
    }
}

pub fn task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return r#"<div id="task-list"><p class="ty-text-neutral-mild text-sm">No tasks match the filter.</p></div>"#
            .to_string();
    }

    let mut html = String::from(r#"<div id="task-list" class="space-y-2">"#);
    for task in tasks {
        html.push_str(&task_item(task));
    }
    html.push_str("</div>");
    html
}

pub fn task_item(task: &Task) -> String {
    let checked = if task.is_completed() { " checked" } else { "" };
    format!(
        r##"<div id="task-{id}" class="flex items-center gap-3 p-2 rounded ty-elevated"><ty-checkbox{checked} hx-post="/api/tasks/{id}/toggle" hx-target="#task-{id}" hx-swap="outerHTML"></ty-checkbox><span class="flex-1">{title}</span><ty-tag flavor="{flavor}" size="sm">{priority}</ty-tag><ty-tag flavor="neutral" size="sm">{status}</ty-tag></div>"##,
        id = task.id,
        title = escape(&task.title),
        priority = escape(&task.priority),
        status = escape(&task.status),
        flavor = priority_flavor(&task.priority),
    )
}

pub fn task_details_modal(task: &Task) -> String {
    format!(
        r#"<div class="space-y-3"><h2 class="text-xl font-semibold">{title}</h2><dl class="grid grid-cols-2 gap-2 text-sm"><dt>Priority</dt><dd>{priority}</dd><dt>Status</dt><dd>{status}</dd><dt>Task ID</dt><dd>{id}</dd></dl></div>"#,
        id = task.id,
        title = escape(&task.title),
        priority = escape(&task.priority),
        status = escape(&task.status),
    )
}

fn priority_flavor(priority: &str) -> &'static str {
    match priority {
        "critical" => "danger",
        "high" => "warning",
        "medium" => "info",
        _ => "neutral",
    }
}

pub fn form_errors(errors: &FieldErrors) -> String {
    let mut html = String::from(
        r#"<div class="ty-bg-danger-soft rounded-lg p-3" role="alert"><p class="font-medium ty-text-danger">Please fix the following:</p><ul class="text-sm list-disc ml-5">"#,
    );
    for (field, message) in errors {
        let _ = write!(
            html,
            r#"<li data-field="{field}">{}</li>"#,
            escape(message)
        );
    }
    html.push_str("</ul></div>");
    html
}

/// Confirmation for a date picked outside the calendar view.
pub fn selected_date(date: &str) -> String {
    format!(
        r#"<div class="ty-bg-primary-soft rounded-lg p-3 text-sm"><ty-icon name="calendar" class="inline mr-1 ty-text-primary"></ty-icon>Selected date: <strong>{}</strong></div>"#,
        escape(date)
    )
}

pub fn debug_check(timestamp: &str) -> String {
    format!(
        r#"<div class="ty-bg-success-soft p-3 rounded text-sm"><ty-icon name="check-circle" class="inline mr-1 ty-text-success"></ty-icon><strong>Debug test successful!</strong> Check console for HTMX logs.<br><small class="ty-text-success-mild">Timestamp: {}</small></div>"#,
        escape(timestamp)
    )
}

pub fn form_success(name: &str) -> String {
    format!(
        r#"<div class="ty-bg-success-soft rounded-lg p-3"><ty-icon name="check-circle" class="inline mr-1 ty-text-success"></ty-icon>Thanks, <strong>{}</strong>! Your form was submitted.</div>"#,
        escape(name.trim())
    )
}

pub fn notification(notification: &Notification) -> String {
    let icon = match notification.kind.as_str() {
        "success" => "check-circle",
        "warning" => "alert-triangle",
        "error" => "x-circle",
        _ => "info",
    };
    let flavor = if notification.kind == "error" {
        "danger"
    } else {
        notification.kind.as_str()
    };

    format!(
        r#"<div class="ty-bg-{flavor}-soft rounded-lg p-3 flex items-center gap-2" data-kind="{kind}"><ty-icon name="{icon}" class="ty-text-{flavor}"></ty-icon><span>{message}</span></div>"#,
        kind = escape(&notification.kind),
        message = escape(&notification.message),
    )
}
