//! Calendar event types.
//!
//! Stored events come from the `EventStore` and carry an id and a creation
//! timestamp. Preview events come from the `preview` generator and carry
//! neither; they are rebuilt on every request.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::calendar::{date_key, format_long};

/// Identifier of a stored event, unique for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Meeting,
    Deadline,
    #[default]
    Personal,
    Reminder,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::Meeting,
        EventType::Deadline,
        EventType::Personal,
        EventType::Reminder,
    ];

    /// Look up a type by its wire name. Unknown names fall back to `Personal`.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Meeting => "meeting",
            EventType::Deadline => "deadline",
            EventType::Personal => "personal",
            EventType::Reminder => "reminder",
        }
    }

    /// Ty icon name
    pub fn icon(&self) -> &'static str {
        match self {
            EventType::Meeting => "users",
            EventType::Deadline => "alert-circle",
            EventType::Personal => "user",
            EventType::Reminder => "bell",
        }
    }

    /// Ty color tag (`ty-bg-{color}-soft` and friends)
    pub fn color(&self) -> &'static str {
        match self {
            EventType::Meeting => "primary",
            EventType::Deadline => "danger",
            EventType::Personal => "info",
            EventType::Reminder => "warning",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            EventType::Meeting => "Meeting",
            EventType::Deadline => "Deadline",
            EventType::Personal => "Personal",
            EventType::Reminder => "Reminder",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calendar event, either stored or generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// None for preview events
    pub id: Option<EventId>,
    pub title: String,
    pub date: NaiveDate,
    pub event_type: EventType,
    pub icon: &'static str,
    pub color: &'static str,
    /// Free-form time-of-day label, e.g. "09:00 AM"
    pub time: Option<String>,
    /// None for preview events
    pub created_at: Option<DateTime<Utc>>,
}

impl Event {
    /// A stored event; icon and color follow the event type.
    pub fn new(
        id: EventId,
        title: impl Into<String>,
        date: NaiveDate,
        event_type: EventType,
        time: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Event {
            id: Some(id),
            title: title.into(),
            date,
            event_type,
            icon: event_type.icon(),
            color: event_type.color(),
            time,
            created_at: Some(created_at),
        }
    }

    pub fn is_preview(&self) -> bool {
        self.id.is_none()
    }

    pub fn date_key(&self) -> String {
        date_key(self.date)
    }

    pub fn formatted_date(&self) -> String {
        format_long(self.date)
    }
}

/// Wire shape of an event in JSON responses.
#[derive(Serialize)]
struct EventPayload<'a> {
    id: Option<EventId>,
    title: &'a str,
    date: String,
    formatted_date: String,
    #[serde(rename = "type")]
    event_type: EventType,
    icon: &'a str,
    color: &'a str,
    name: &'a str,
    time: Option<&'a str>,
    created_at: Option<DateTime<Utc>>,
}

impl Serialize for Event {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        EventPayload {
            id: self.id,
            title: &self.title,
            date: self.date_key(),
            formatted_date: self.formatted_date(),
            event_type: self.event_type,
            icon: self.icon,
            color: self.color,
            name: self.event_type.name(),
            time: self.time.as_deref(),
            created_at: self.created_at,
        }
        .serialize(serializer)
    }
}
