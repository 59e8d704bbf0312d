//! # State Module
//!
//! Client-side state owned by the dashboard:
//! - [`navigation_state`]: the displayed month cursor and the chevron control
//! - [`selection_state`]: the selected date and activity-type filter

pub mod navigation_state;
pub mod selection_state;

pub use navigation_state::{ChevronDirection, NavigationController};
pub use selection_state::{Selection, SelectionState};
