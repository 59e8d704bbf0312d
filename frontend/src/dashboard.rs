//! # Dashboard Controller
//!
//! Wires user events to state changes, repaints, and session queries.
//!
//! ## Flow
//!
//! ```text
//! Chevron        -> navigation -> grid recompute -> query (selection unchanged)
//! DateCell(id)   -> select date -> grid recompute + header -> query
//! Filter(id)     -> select type -> query
//! QueryCompletion -> applied only if it answers the latest query
//! ```
//!
//! Events reach the controller through one entry point keyed by cell
//! identity, so nothing has to be rebound when the grid is recreated.
//! Fetching is split from applying: [`DashboardController::handle`] returns
//! the query to run, [`DashboardController::fetch`] produces a future the
//! caller can drive however it likes, and [`DashboardController::apply`]
//! paints the result unless a newer query has been issued in the meantime.

use std::future::Future;
use std::sync::Arc;

use shared::ActivityType;
use tracing::{debug, error, info, warn};

use crate::calendar::{CalendarCursor, CalendarGrid, CellId};
use crate::components::session_list::render_session_list;
use crate::services::api::SessionSource;
use crate::services::date_utils::Clock;
use crate::services::session_query::{PendingQuery, QueryCompletion, SessionQueryClient};
use crate::state::{NavigationController, Selection, SelectionState};
use crate::surface::{DashboardSurface, Region};

/// User interactions the dashboard reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Month chevron clicked
    Chevron,
    /// A date cell clicked, identified by its cell id
    DateCell(CellId),
    /// A filter button clicked, identified by its element id
    Filter(String),
}

/// What happened to a query completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Session list repainted with this many rows
    Rendered(usize),
    /// A newer query was issued; the response was dropped
    Stale,
    /// The query failed; the session list was left as it was
    Failed,
}

pub struct DashboardController<S: DashboardSurface> {
    navigation: NavigationController,
    selection: SelectionState,
    query: SessionQueryClient,
    grid: CalendarGrid,
    surface: S,
}

impl<S: DashboardSurface> DashboardController<S> {
    /// Create a dashboard showing today's month with today selected
    pub fn new(clock: Arc<dyn Clock>, source: Arc<dyn SessionSource>, surface: S) -> Self {
        let selection = SelectionState::new(Selection::today(clock.as_ref()));
        let navigation = NavigationController::new(clock);
        let grid = CalendarGrid::compute(navigation.cursor(), selection.current());

        Self {
            navigation,
            selection,
            query: SessionQueryClient::new(source),
            grid,
            surface,
        }
    }

    pub fn selection(&self) -> &Selection {
        self.selection.current()
    }

    pub fn cursor(&self) -> CalendarCursor {
        self.navigation.cursor()
    }

    pub fn grid(&self) -> &CalendarGrid {
        &self.grid
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Paint the initial calendar and header, and issue the query for today
    pub fn start(&mut self) -> PendingQuery {
        self.paint_calendar();
        self.paint_header();
        info!("🗓️ Dashboard started on {}", self.grid.label());
        self.query.issue(self.selection.current())
    }

    /// Apply an event to the dashboard state, returning the query it triggers
    pub fn handle(&mut self, event: DashboardEvent) -> Option<PendingQuery> {
        match event {
            DashboardEvent::Chevron => {
                self.navigation.chevron_click();
                self.paint_calendar();
            }
            DashboardEvent::DateCell(id) => {
                let Some(cell) = self.grid.find(&id).copied() else {
                    warn!(cell = %id, "click on a cell that is not in the current grid, ignoring");
                    return None;
                };
                self.selection.select_date(&cell);
                self.paint_calendar();
                self.paint_header();
            }
            DashboardEvent::Filter(id) => match id.parse::<ActivityType>() {
                Ok(activity_type) => {
                    self.selection.select_type(activity_type);
                }
                Err(e) => {
                    warn!("ignoring filter click: {}", e);
                    return None;
                }
            },
        }

        Some(self.query.issue(self.selection.current()))
    }

    /// Future fetching the sessions for `pending`
    pub fn fetch(&self, pending: PendingQuery) -> impl Future<Output = QueryCompletion> + Send + 'static {
        self.query.fetch(pending)
    }

    /// Paint a query result if it answers the latest query
    pub fn apply(&mut self, completion: QueryCompletion) -> ApplyOutcome {
        let QueryCompletion { pending, result } = completion;

        if !self.query.is_current(&pending) {
            debug!(
                generation = pending.generation,
                latest = self.query.latest_generation(),
                key = %pending.key,
                "dropping stale session response"
            );
            return ApplyOutcome::Stale;
        }

        match result {
            Ok(buckets) => {
                let view = render_session_list(&buckets, self.selection.current().activity_type);
                self.surface.replace_session_list(&view);
                debug!(key = %pending.key, rows = view.rows.len(), "session list painted");
                ApplyOutcome::Rendered(view.rows.len())
            }
            Err(e) => {
                error!(key = %pending.key, "Failed to fetch sessions: {}", e);
                ApplyOutcome::Failed
            }
        }
    }

    /// Start the dashboard and wait for the first session list
    pub async fn load(&mut self) -> ApplyOutcome {
        let pending = self.start();
        let completion = self.fetch(pending).await;
        self.apply(completion)
    }

    /// Handle an event and wait for the query it triggers
    pub async fn dispatch(&mut self, event: DashboardEvent) -> Option<ApplyOutcome> {
        let pending = self.handle(event)?;
        let completion = self.fetch(pending).await;
        Some(self.apply(completion))
    }

    fn paint_calendar(&mut self) {
        self.grid = CalendarGrid::compute(self.navigation.cursor(), self.selection.current());
        self.surface.set_text(Region::MonthYear, &self.grid.label());
        self.surface.replace_grid(&self.grid);
    }

    fn paint_header(&mut self) {
        let header = self.selection.current().header_text();
        self.surface.set_text(Region::DateSelected, &header);
    }
}
