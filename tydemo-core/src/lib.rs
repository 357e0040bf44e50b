//! Core types for the Ty + HTMX demo.
//!
//! This crate holds everything the server renders, independent of HTTP:
//! - `Event`, `EventType` and the `EventStore` for user-created events
//! - `preview` for deterministic, never-stored sample events
//! - `sample` and `form` for the demo's users, tasks and contact form

pub mod calendar;
pub mod error;
pub mod event;
pub mod form;
pub mod preview;
pub mod sample;
pub mod store;

pub use error::{DemoError, DemoResult};
pub use event::*;
pub use store::EventStore;
