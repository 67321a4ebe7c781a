//! Database module: one SQLite file, one actor owning the pool.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `create.rs`: validated inputs for inserts
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `actor.rs`: the actor serializing every query, and its handle

pub mod actor;
pub mod create;
pub mod models;
pub mod schema;

pub use create::{
    AlarmCreate, MAX_TIMER_SECONDS, NoteCreate, QuickLinkCreate, RecordCreate, RecordKind,
    ReminderCreate, TimerCreate,
};
pub use models::{DbAlarm, DbNote, DbQuickLink, DbReminder, DbTimer, RecordCounts};
pub use schema::SQLITE_INIT;

pub use actor::{DbActorHandle, spawn};
