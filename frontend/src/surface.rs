//! UI surface abstraction.
//!
//! The dashboard never touches a concrete rendering environment. It talks to
//! a [`DashboardSurface`], which can set and read the text regions and replace
//! the calendar grid and the session list. Clicks come back in through
//! [`crate::dashboard::DashboardEvent`].

use std::collections::HashMap;
use std::io::Write;

use maud::{html, Markup, PreEscaped, DOCTYPE};
use shared::ActivityType;
use tracing::warn;

use crate::calendar::CalendarGrid;
use crate::components::calendar::calendar_markup;
use crate::components::session_list::SessionListView;
use crate::components::terminal_view::{calendar_text, session_list_text};

/// Text regions of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Month/year label above the grid
    MonthYear,
    /// Header naming the selected date above the session list
    DateSelected,
}

pub trait DashboardSurface {
    fn set_text(&mut self, region: Region, text: &str);

    fn text(&self, region: Region) -> Option<String>;

    fn replace_grid(&mut self, grid: &CalendarGrid);

    fn replace_session_list(&mut self, view: &SessionListView);
}

/// In-memory HTML rendition of the dashboard
#[derive(Debug, Default)]
pub struct HtmlSurface {
    texts: HashMap<Region, String>,
    grid: Option<Markup>,
    session_list: Option<Markup>,
    session_list_writes: usize,
}

impl HtmlSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid_html(&self) -> Option<String> {
        self.grid.as_ref().map(|markup| markup.0.clone())
    }

    pub fn session_list_html(&self) -> Option<String> {
        self.session_list.as_ref().map(|markup| markup.0.clone())
    }

    /// How many times the session list has been replaced
    pub fn session_list_writes(&self) -> usize {
        self.session_list_writes
    }

    /// Complete page with the calendar, filter buttons and session container
    pub fn document(&self) -> String {
        let text = |region: Region| self.texts.get(&region).cloned().unwrap_or_default();
        let fragment = |markup: &Option<Markup>| {
            PreEscaped(markup.as_ref().map(|m| m.0.clone()).unwrap_or_default())
        };

        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    title { "Sessions" }
                }
                body {
                    div class="calendar" {
                        header {
                            p class="month-year" { (text(Region::MonthYear)) }
                            i class="bx bx-chevron bx-chevron-right" {}
                        }
                        (fragment(&self.grid))
                    }
                    div class="sessions" {
                        h4 id="date-selected" { (text(Region::DateSelected)) }
                        div class="btn-group" {
                            @for activity_type in ActivityType::ALL {
                                button class="btn typeToParse" id=(activity_type) { (activity_type) }
                            }
                        }
                        div class="session-container" { (fragment(&self.session_list)) }
                    }
                }
            }
        }
        .into_string()
    }
}

impl DashboardSurface for HtmlSurface {
    fn set_text(&mut self, region: Region, text: &str) {
        self.texts.insert(region, text.to_string());
    }

    fn text(&self, region: Region) -> Option<String> {
        self.texts.get(&region).cloned()
    }

    fn replace_grid(&mut self, grid: &CalendarGrid) {
        self.grid = Some(calendar_markup(grid));
    }

    fn replace_session_list(&mut self, view: &SessionListView) {
        self.session_list = Some(view.to_markup());
        self.session_list_writes += 1;
    }
}

/// Writes each update as plain text to `out`
pub struct TerminalSurface<W: Write> {
    out: W,
    texts: HashMap<Region, String>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            texts: HashMap::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            warn!("failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> DashboardSurface for TerminalSurface<W> {
    fn set_text(&mut self, region: Region, text: &str) {
        self.texts.insert(region, text.to_string());
        if region == Region::DateSelected {
            self.emit(&format!("\n== {} ==\n", text));
        }
    }

    fn text(&self, region: Region) -> Option<String> {
        self.texts.get(&region).cloned()
    }

    fn replace_grid(&mut self, grid: &CalendarGrid) {
        // The grid text carries the month/year label itself
        self.emit(&format!("\n{}", calendar_text(grid)));
    }

    fn replace_session_list(&mut self, view: &SessionListView) {
        let header = self.texts.get(&Region::DateSelected).cloned().unwrap_or_default();
        self.emit(&format!("\nSessions for {}:\n{}", header, session_list_text(view)));
    }
}
