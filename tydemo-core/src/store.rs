//! In-memory store for user-created calendar events.

use chrono::{Days, NaiveDate, Utc};

use crate::calendar::parse_date;
use crate::error::{DemoError, DemoResult};
use crate::event::{Event, EventId, EventType};

/// Events of one calendar date, in insertion order.
#[derive(Debug, Clone)]
struct Bucket {
    date: NaiveDate,
    events: Vec<Event>,
}

/// Date-bucketed event storage.
///
/// Buckets are kept in the order their dates were first seen. A bucket
/// emptied by `delete` stays in place. Ids come from a counter that only
/// moves forward, so a deleted id is never handed out again.
///
/// The store does no locking of its own; the server keeps it behind a mutex.
#[derive(Debug, Clone)]
pub struct EventStore {
    buckets: Vec<Bucket>,
    next_id: u64,
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore {
    pub fn new() -> Self {
        EventStore {
            buckets: Vec::new(),
            next_id: 1,
        }
    }

    /// A store seeded with the demo dataset: a few events today and tomorrow.
    pub fn with_demo_events(today: NaiveDate) -> Self {
        let mut store = Self::new();
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);

        let seed = [
            (today, "Morning standup", EventType::Meeting, Some("09:30 AM")),
            (today, "Submit expense report", EventType::Deadline, Some("05:00 PM")),
            (tomorrow, "Lunch with Sam", EventType::Personal, Some("12:30 PM")),
            (tomorrow, "Renew library books", EventType::Reminder, None),
        ];

        for (date, title, event_type, time) in seed {
            store.insert(date, title.to_string(), event_type, time.map(String::from));
        }

        store
    }

    /// Validate the raw form input and append a new event to its date's bucket.
    ///
    /// `date` must name a calendar day and `title` must be non-blank. An
    /// unknown `event_type` becomes `personal`.
    pub fn create(
        &mut self,
        date: &str,
        title: &str,
        event_type: &str,
        time: Option<&str>,
    ) -> DemoResult<Event> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DemoError::Validation("Title is required".into()));
        }
        let date = parse_date(date)?;

        let time = time
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from);

        Ok(self.insert(date, title.to_string(), EventType::from_name(event_type), time))
    }

    fn insert(
        &mut self,
        date: NaiveDate,
        title: String,
        event_type: EventType,
        time: Option<String>,
    ) -> Event {
        let id = EventId(self.next_id);
        self.next_id += 1;

        let event = Event::new(id, title, date, event_type, time, Utc::now());

        match self.buckets.iter_mut().find(|b| b.date == date) {
            Some(bucket) => bucket.events.push(event.clone()),
            None => self.buckets.push(Bucket {
                date,
                events: vec![event.clone()],
            }),
        }

        event
    }

    /// Remove the event with `id`, returning its date and what is left on that date.
    pub fn delete(&mut self, id: EventId) -> DemoResult<(NaiveDate, Vec<Event>)> {
        for bucket in &mut self.buckets {
            if let Some(pos) = bucket.events.iter().position(|e| e.id == Some(id)) {
                bucket.events.remove(pos);
                return Ok((bucket.date, bucket.events.clone()));
            }
        }

        Err(DemoError::NotFound(format!("Event {id}")))
    }

    /// Events on `date` in insertion order; empty if the date was never used.
    pub fn list_by_date(&self, date: NaiveDate) -> Vec<Event> {
        self.buckets
            .iter()
            .find(|b| b.date == date)
            .map(|b| b.events.clone())
            .unwrap_or_default()
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.buckets
            .iter()
            .flat_map(|b| b.events.iter())
            .find(|e| e.id == Some(id))
    }

    /// Number of stored events across all dates.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|b| b.events.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of date buckets, including ones emptied by deletes.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}
