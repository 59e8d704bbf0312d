//! Line commands accepted by the interactive terminal driver.

use std::io::Write;

use futures::stream::{FuturesUnordered, StreamExt};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::calendar::{CalendarGrid, CellId};
use crate::dashboard::{DashboardController, DashboardEvent};
use crate::surface::DashboardSurface;

pub const HELP: &str = "\
commands:
  c            click the month chevron
  d <day>      select a day of the displayed month
  cell <id>    click a cell by id, e.g. Sunday-27-9-2026
  t <type>     filter by general, class, team or all
  h            show this help
  q            quit
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(DashboardEvent),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?}, type h for help")]
    Unknown(String),

    #[error("{0} needs an argument")]
    MissingArgument(&'static str),

    #[error("{0:?} is not a day of {1}")]
    NoSuchDay(String, String),

    #[error(transparent)]
    Cell(#[from] crate::calendar::InvalidCellId),
}

/// Parse one input line against the grid currently on display
pub fn parse_command(line: &str, grid: &CalendarGrid) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(Command::Help);
    };
    let argument = words.next();

    match verb {
        "c" => Ok(Command::Event(DashboardEvent::Chevron)),
        "q" | "quit" => Ok(Command::Quit),
        "h" | "help" => Ok(Command::Help),
        "d" => {
            let day = argument.ok_or(CommandError::MissingArgument("d"))?;
            let cell = day
                .parse::<u32>()
                .ok()
                .and_then(|day| grid.active_cell(day))
                .ok_or_else(|| CommandError::NoSuchDay(day.to_string(), grid.label()))?;
            Ok(Command::Event(DashboardEvent::DateCell(cell.id())))
        }
        "cell" => {
            let id: CellId = argument.ok_or(CommandError::MissingArgument("cell"))?.parse()?;
            Ok(Command::Event(DashboardEvent::DateCell(id)))
        }
        "t" => {
            let filter = argument.ok_or(CommandError::MissingArgument("t"))?;
            Ok(Command::Event(DashboardEvent::Filter(filter.to_string())))
        }
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// Drive `dashboard` from line commands read from `input`.
///
/// Fetches run while further commands are read. When `input` ends, every
/// query still in flight is awaited and applied before returning; `q` returns
/// at once. Help text and command errors go to `out`.
pub async fn run_commands<S, R, W>(
    dashboard: &mut DashboardController<S>,
    input: R,
    out: &mut W,
) -> std::io::Result<()>
where
    S: DashboardSurface,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut in_flight = FuturesUnordered::new();

    let initial = dashboard.start();
    in_flight.push(dashboard.fetch(initial));

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_command(&line, dashboard.grid()) {
                    Ok(Command::Event(event)) => {
                        if let Some(pending) = dashboard.handle(event) {
                            in_flight.push(dashboard.fetch(pending));
                        }
                    }
                    Ok(Command::Help) => write!(out, "{}", HELP)?,
                    Ok(Command::Quit) => return Ok(()),
                    Err(e) => writeln!(out, "{}", e)?,
                }
            }
            Some(completion) = in_flight.next(), if !in_flight.is_empty() => {
                dashboard.apply(completion);
            }
        }
    }

    debug!(pending = in_flight.len(), "input closed, waiting for queries in flight");
    while let Some(completion) = in_flight.next().await {
        dashboard.apply(completion);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarCursor;
    use crate::services::date_utils::FixedClock;
    use crate::state::Selection;
    use chrono::NaiveDate;

    fn october() -> CalendarGrid {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        CalendarGrid::compute(CalendarCursor::new(2026, 9), &Selection::today(&clock))
    }

    #[test]
    fn test_day_resolves_to_active_cell() {
        let command = parse_command("d 21", &october()).unwrap();
        assert_eq!(
            command,
            Command::Event(DashboardEvent::DateCell("Wednesday-21-10-2026".parse().unwrap()))
        );
    }

    #[test]
    fn test_day_outside_month_is_rejected() {
        assert_eq!(
            parse_command("d 32", &october()),
            Err(CommandError::NoSuchDay("32".to_string(), "October 2026".to_string()))
        );
        assert!(matches!(
            parse_command("d x", &october()),
            Err(CommandError::NoSuchDay(..))
        ));
        assert_eq!(
            parse_command("d", &october()),
            Err(CommandError::MissingArgument("d"))
        );
    }

    #[test]
    fn test_cell_and_filter_commands() {
        let grid = october();
        assert_eq!(
            parse_command("cell Sunday-27-9-2026", &grid).unwrap(),
            Command::Event(DashboardEvent::DateCell("Sunday-27-9-2026".parse().unwrap()))
        );
        assert!(matches!(parse_command("cell 27", &grid), Err(CommandError::Cell(_))));

        // Filter names are passed through; the dashboard decides what is known
        assert_eq!(
            parse_command("t squash", &grid).unwrap(),
            Command::Event(DashboardEvent::Filter("squash".to_string()))
        );
    }

    #[test]
    fn test_simple_commands() {
        let grid = october();
        assert_eq!(parse_command("c", &grid).unwrap(), Command::Event(DashboardEvent::Chevron));
        assert_eq!(parse_command("  q ", &grid).unwrap(), Command::Quit);
        assert_eq!(parse_command("", &grid).unwrap(), Command::Help);
        assert_eq!(
            parse_command("jump", &grid),
            Err(CommandError::Unknown("jump".to_string()))
        );
    }

    mod driver {
        use super::super::*;
        use crate::error::ApiError;
        use crate::services::api::SessionSource;
        use crate::services::date_utils::FixedClock;
        use crate::surface::HtmlSurface;
        use async_trait::async_trait;
        use chrono::NaiveDate;
        use shared::{SessionBucket, SessionQueryKey};
        use std::sync::Arc;
        use std::time::Duration;

        /// Answers every query after a short delay with one bucket named after the key
        struct SlowSource;

        #[async_trait]
        impl SessionSource for SlowSource {
            async fn get_sessions(
                &self,
                key: &SessionQueryKey,
            ) -> Result<Vec<SessionBucket>, ApiError> {
                tokio::time::sleep(Duration::from_millis(30)).await;
                Ok(vec![SessionBucket {
                    id: None,
                    date: None,
                    facility: "Climbing Wall".to_string(),
                    activity: format!("Slot {}", key),
                    start_time: "18:00".to_string(),
                    end_time: "19:00".to_string(),
                    sessions: vec![serde_json::json!({})],
                }])
            }
        }

        fn dashboard() -> DashboardController<HtmlSurface> {
            let clock = Arc::new(FixedClock(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()));
            DashboardController::new(clock, Arc::new(SlowSource), HtmlSurface::new())
        }

        #[tokio::test]
        async fn test_closed_input_waits_for_queries_in_flight() {
            let mut dashboard = dashboard();
            let mut out = Vec::new();

            run_commands(&mut dashboard, &b"d 21\n"[..], &mut out).await.unwrap();

            let html = dashboard.surface().session_list_html().unwrap_or_default();
            assert!(html.contains("Slot 2026-10-21-general"));
            assert!(!html.contains("Slot 2026-10-18-general"));
            assert_eq!(dashboard.selection().date, 21);
        }

        #[tokio::test]
        async fn test_empty_input_still_paints_today() {
            let mut dashboard = dashboard();
            let mut out = Vec::new();

            run_commands(&mut dashboard, &b""[..], &mut out).await.unwrap();

            let html = dashboard.surface().session_list_html().unwrap_or_default();
            assert!(html.contains("Slot 2026-10-18-general"));
        }

        #[tokio::test]
        async fn test_quit_returns_immediately() {
            let mut dashboard = dashboard();
            let mut out = Vec::new();

            run_commands(&mut dashboard, &b"q\nd 21\n"[..], &mut out).await.unwrap();

            assert_eq!(dashboard.surface().session_list_writes(), 0);
            assert_eq!(dashboard.selection().date, 18);
        }

        #[tokio::test]
        async fn test_help_and_errors_are_written_out() {
            let mut dashboard = dashboard();
            let mut out = Vec::new();

            run_commands(&mut dashboard, &b"h\njump\n"[..], &mut out).await.unwrap();

            let text = String::from_utf8(out).unwrap();
            assert!(text.contains("click the month chevron"));
            assert!(text.contains("unknown command \"jump\""));
        }
    }
}
