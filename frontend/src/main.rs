use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tokio::io::BufReader;
use tracing::{info, warn};

use session_dashboard_frontend::commands::{run_commands, HELP};
use session_dashboard_frontend::services::api::{ApiClient, SessionSource};
use session_dashboard_frontend::services::config::DashboardConfig;
use session_dashboard_frontend::services::date_utils::{Clock, SystemClock};
use session_dashboard_frontend::services::logging::{init_tracing, verbosity_filter};
use session_dashboard_frontend::{ApplyOutcome, DashboardController, HtmlSurface, TerminalSurface};

/// Browse bookable facility sessions by date and activity type
#[derive(Debug, Parser)]
#[command(name = "session-dashboard", version)]
struct Cli {
    /// YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Booking site origin, overrides config and environment
    #[arg(long)]
    base_url: Option<String>,

    /// Load today's sessions once and write the dashboard page to this file
    #[arg(long, value_name = "PATH")]
    html: Option<PathBuf>,

    /// Load today's sessions once, print them and exit
    #[arg(long)]
    once: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = DashboardConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    let filter = verbosity_filter(cli.verbose).unwrap_or(config.log_filter.as_str());
    init_tracing(filter)?;

    let client = ApiClient::new(config.base_url.clone(), config.request_timeout())
        .context("Failed to create session API client")?;
    info!("🚀 Session dashboard using {}", client.base_url());

    let source: Arc<dyn SessionSource> = Arc::new(client);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    if let Some(path) = cli.html {
        let mut dashboard = DashboardController::new(clock, source, HtmlSurface::new());
        report(dashboard.load().await);
        std::fs::write(&path, dashboard.surface().document())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("📄 Dashboard written to {}", path.display());
        return Ok(());
    }

    let dashboard = DashboardController::new(clock, source, TerminalSurface::new(io::stdout()));
    if cli.once {
        let mut dashboard = dashboard;
        report(dashboard.load().await);
        return Ok(());
    }

    run_interactive(dashboard).await
}

fn report(outcome: ApplyOutcome) {
    if outcome == ApplyOutcome::Failed {
        warn!("Sessions could not be loaded, see the error above");
    }
}

async fn run_interactive(
    mut dashboard: DashboardController<TerminalSurface<Stdout>>,
) -> anyhow::Result<()> {
    let mut out = io::stdout();
    println!("{}", HELP);

    run_commands(&mut dashboard, BufReader::new(tokio::io::stdin()), &mut out)
        .await
        .context("Failed to run interactive session")?;

    info!("👋 Session dashboard closed");
    Ok(())
}
