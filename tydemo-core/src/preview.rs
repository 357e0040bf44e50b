//! Deterministic preview events for calendar rendering.
//!
//! Preview events fill the month grid and day view with sample content
//! without being stored. The date's ISO key is hashed into a seed, the seed
//! drives a PRNG, and the PRNG picks 0 to 3 templates from a fixed catalog.
//! The same date therefore always shows the same events, across requests
//! and restarts, as long as the hash and PRNG stay the same.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

use crate::calendar::{date_key, month_days};
use crate::error::DemoResult;
use crate::event::{Event, EventType};

/// Upper bound (inclusive) on preview events per day.
pub const MAX_PREVIEW_EVENTS_PER_DAY: u32 = 3;

/// One entry of the preview catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTemplate {
    pub title: &'static str,
    pub event_type: EventType,
    pub icon: &'static str,
    pub color: &'static str,
    pub time: &'static str,
}

pub const CATALOG: [PreviewTemplate; 6] = [
    PreviewTemplate {
        title: "Team Meeting",
        event_type: EventType::Meeting,
        icon: "users",
        color: "primary",
        time: "09:00 AM",
    },
    PreviewTemplate {
        title: "Code Review",
        event_type: EventType::Meeting,
        icon: "code",
        color: "secondary",
        time: "11:00 AM",
    },
    PreviewTemplate {
        title: "Client Call",
        event_type: EventType::Meeting,
        icon: "phone",
        color: "success",
        time: "02:00 PM",
    },
    PreviewTemplate {
        title: "Project Deadline",
        event_type: EventType::Deadline,
        icon: "alert-circle",
        color: "danger",
        time: "05:00 PM",
    },
    PreviewTemplate {
        title: "Workshop",
        event_type: EventType::Personal,
        icon: "book-open",
        color: "info",
        time: "10:00 AM",
    },
    PreviewTemplate {
        title: "Planning Session",
        event_type: EventType::Reminder,
        icon: "calendar",
        color: "warning",
        time: "03:30 PM",
    },
];

impl PreviewTemplate {
    fn instantiate(&self, date: NaiveDate) -> Event {
        Event {
            id: None,
            title: self.title.to_string(),
            date,
            event_type: self.event_type,
            icon: self.icon,
            color: self.color,
            time: Some(self.time.to_string()),
            created_at: None,
        }
    }
}

/// Seed for a date: the first eight bytes (big-endian) of SHA-256 over its ISO key.
pub fn seed_for_date(date: NaiveDate) -> u64 {
    let digest = Sha256::digest(date_key(date).as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(head)
}

/// Preview events for one day.
///
/// Uses ChaCha8, whose output stream is fixed for a given seed, so previews
/// survive `rand` upgrades unchanged.
pub fn generate_for_date(date: NaiveDate) -> Vec<Event> {
    generate_for_date_with::<ChaCha8Rng>(date)
}

/// Preview events for one day using the PRNG `R` seeded from the date.
pub fn generate_for_date_with<R: SeedableRng + RngCore>(date: NaiveDate) -> Vec<Event> {
    let mut rng = R::seed_from_u64(seed_for_date(date));
    let count = rng.gen_range(0..=MAX_PREVIEW_EVENTS_PER_DAY);

    (0..count)
        .map(|_| CATALOG[rng.gen_range(0..CATALOG.len())].instantiate(date))
        .collect()
}

/// Preview events for every day of a month, keyed by date.
///
/// Days without events are present with an empty list.
pub fn generate_for_month(year: i32, month: u32) -> DemoResult<BTreeMap<NaiveDate, Vec<Event>>> {
    Ok(month_days(year, month)?
        .into_iter()
        .map(|date| (date, generate_for_date(date)))
        .collect())
}
