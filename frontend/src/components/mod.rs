pub mod calendar;
pub mod session_list;
pub mod styling;
pub mod terminal_view;

pub use session_list::{render_session_list, SessionListView, SessionRow};
