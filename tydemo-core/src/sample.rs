//! Fixed sample data for the non-calendar demo widgets.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    /// low, medium, high or critical
    pub priority: String,
    /// pending, in-progress or completed
    pub status: String,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == "completed"
    }

    /// Flip between completed and pending. Any other status counts as not completed.
    pub fn toggle(&mut self) {
        self.status = if self.is_completed() {
            "pending".to_string()
        } else {
            "completed".to_string()
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// success, warning, info or error
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

const USERS: [(u32, &str, &str, &str); 5] = [
    (1, "Alice Johnson", "alice@example.com", "Admin"),
    (2, "Bob Smith", "bob@example.com", "User"),
    (3, "Carol Williams", "carol@example.com", "Editor"),
    (4, "David Brown", "david@example.com", "User"),
    (5, "Eva Davis", "eva@example.com", "Admin"),
];

const TASKS: [(u32, &str, &str, &str); 4] = [
    (1, "Design new homepage", "high", "in-progress"),
    (2, "Fix login bug", "critical", "pending"),
    (3, "Update documentation", "low", "completed"),
    (4, "Optimize database queries", "medium", "pending"),
];

const NOTIFICATIONS: [(&str, &str); 4] = [
    ("success", "Task completed successfully!"),
    ("warning", "Server maintenance scheduled for tonight."),
    ("info", "New features available in the dashboard."),
    ("error", "Failed to save changes. Please try again."),
];

pub fn users() -> Vec<User> {
    USERS
        .iter()
        .map(|(id, name, email, role)| User {
            id: *id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
        })
        .collect()
}

/// Initial task list; the server owns a mutable copy.
pub fn tasks() -> Vec<Task> {
    TASKS
        .iter()
        .map(|(id, title, priority, status)| Task {
            id: *id,
            title: title.to_string(),
            priority: priority.to_string(),
            status: status.to_string(),
        })
        .collect()
}

pub fn notifications() -> Vec<Notification> {
    NOTIFICATIONS
        .iter()
        .map(|(kind, message)| Notification {
            kind: kind.to_string(),
            message: message.to_string(),
        })
        .collect()
}

/// Case-insensitive substring match on name or email. An empty query matches everyone.
pub fn search_users(query: &str) -> Vec<User> {
    let query = query.trim().to_lowercase();
    users()
        .into_iter()
        .filter(|u| {
            u.name.to_lowercase().contains(&query) || u.email.to_lowercase().contains(&query)
        })
        .collect()
}

pub fn find_user(id: u32) -> Option<User> {
    users().into_iter().find(|u| u.id == id)
}

/// Tasks matching both filters; a missing or empty filter matches everything.
pub fn filter_tasks(tasks: &[Task], status: Option<&str>, priority: Option<&str>) -> Vec<Task> {
    let status = status.filter(|s| !s.is_empty());
    let priority = priority.filter(|p| !p.is_empty());

    tasks
        .iter()
        .filter(|t| status.is_none_or(|s| t.status == s))
        .filter(|t| priority.is_none_or(|p| t.priority == p))
        .cloned()
        .collect()
}
