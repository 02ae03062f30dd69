//! `eom-check`: run the month-end business day check once.
//!
//! Meant to be triggered daily by a scheduler. Holidays are read from the
//! JSON file given by `--holidays` or `EOM_HOLIDAYS_PATH`; without one only
//! weekends are excluded. Actions are logged rather than delivered.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, FixedOffset, Utc};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use eom::actions::adapters::{JsonFileHolidaySource, LogEventCreator, LogNotifier, StaticHolidaySource};
use eom::actions::{ActionExecutor, CheckOutcome, Config, HolidaySource, MonthlyEndCheck};
use eom::time::Date;

#[derive(Parser, Debug)]
#[command(name = "eom-check", version, about = "Check whether today is the month's last business day")]
struct Cli {
    /// Day to check (YYYY-MM-DD) instead of the current Asia/Tokyo date
    #[arg(long, conflicts_with = "at")]
    date: Option<Date>,

    /// Execution instant (RFC 3339), e.g. the scheduler's trigger time
    #[arg(long)]
    at: Option<DateTime<FixedOffset>>,

    /// JSON file of holiday events; overrides EOM_HOLIDAYS_PATH
    #[arg(long)]
    holidays: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(json_logs: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("eom=info,eom_actions=info,eom_check=info"));
    let subscriber = tracing_subscriber::registry().with(filter);

    if json_logs {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn holiday_source(path: Option<PathBuf>) -> Arc<dyn HolidaySource> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "reading holidays from file");
            Arc::new(JsonFileHolidaySource::new(path))
        }
        None => {
            tracing::warn!("no holiday source configured, only weekends are excluded");
            Arc::new(StaticHolidaySource::default())
        }
    }
}

fn report(outcome: &CheckOutcome) {
    let verdict = if outcome.is_last_business_day() {
        "is"
    } else {
        "is not"
    };
    println!(
        "{} {verdict} the last business day of its month (last business day: {}, holidays: {})",
        outcome.date, outcome.last_business_day, outcome.holiday_count
    );
    if let Some(event) = &outcome.created_event {
        println!("created event {}", event.id);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = Config::from_env().context("invalid configuration")?;
    tracing::debug!(?config, "configuration loaded");

    let holidays = holiday_source(cli.holidays.or(config.holidays_path));
    let executor = ActionExecutor::with_settings(
        Arc::new(LogNotifier),
        Arc::new(LogEventCreator),
        config.calendar_id,
        config.actions,
    );
    let check = MonthlyEndCheck::new(holidays, executor);

    let outcome = match (cli.date, cli.at) {
        (Some(date), _) => check.run_for_date(date).await,
        (None, Some(at)) => check.run(at).await,
        (None, None) => check.run(Utc::now()).await,
    }
    .context("month-end check failed")?;

    report(&outcome);
    Ok(())
}
