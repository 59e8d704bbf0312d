//! Calendar-driven session browser.
//!
//! A month grid drives a date selection, a filter bar drives an activity
//! type, and every change triggers a session query against the booking
//! endpoint. The newest query's answer is painted into the session list.

pub mod calendar;
pub mod commands;
pub mod components;
pub mod dashboard;
pub mod error;
pub mod services;
pub mod state;
pub mod surface;

pub use calendar::{CalendarCursor, CalendarGrid, CellId, DateCell};
pub use dashboard::{ApplyOutcome, DashboardController, DashboardEvent};
pub use error::{ApiError, ConfigError};
pub use surface::{DashboardSurface, HtmlSurface, Region, TerminalSurface};
