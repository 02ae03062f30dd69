//! The month-end check pipeline.
//!
//! fetch holidays for the month → build a resolver → decide → run the
//! actions when the date is the month's last business day. Steps run
//! sequentially; any collaborator failure ends the run with an error.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, TimeZone};
use tracing::Instrument;

use eom_time::{month_window, zone, BusinessDayResolver, Date};

use crate::error::Result;
use crate::event::CreatedEvent;
use crate::executor::ActionExecutor;
use crate::ports::HolidaySource;

/// Result of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Business-zone day that was checked.
    pub date: Date,
    /// Last business day of that day's month.
    pub last_business_day: Date,
    /// Holidays the source returned for the month.
    pub holiday_count: usize,
    /// The event created by the actions, if they ran.
    pub created_event: Option<CreatedEvent>,
}

impl CheckOutcome {
    /// Whether the checked day closed its month.
    pub fn is_last_business_day(&self) -> bool {
        self.date == self.last_business_day
    }

    /// Whether the notification and event were both sent.
    pub fn actions_executed(&self) -> bool {
        self.created_event.is_some()
    }
}

/// Decides whether today is the month's last business day and acts on it.
pub struct MonthlyEndCheck {
    holidays: Arc<dyn HolidaySource>,
    executor: ActionExecutor,
}

impl std::fmt::Debug for MonthlyEndCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonthlyEndCheck")
            .field("executor", &self.executor)
            .finish_non_exhaustive()
    }
}

impl MonthlyEndCheck {
    /// Pipeline reading holidays from `holidays`.
    pub fn new(holidays: Arc<dyn HolidaySource>, executor: ActionExecutor) -> Self {
        Self { holidays, executor }
    }

    /// Check the business-zone day containing `execution_time`.
    pub async fn run<Z>(&self, execution_time: DateTime<Z>) -> Result<CheckOutcome>
    where
        Z: TimeZone,
        Z::Offset: std::fmt::Display,
    {
        let date = zone::date_of(&execution_time);
        let span = tracing::info_span!(
            "monthly_end_check",
            execution_time = %execution_time.to_rfc3339(),
            %date
        );
        self.run_logged(date).instrument(span).await
    }

    /// Check `date` directly.
    pub async fn run_for_date(&self, date: Date) -> Result<CheckOutcome> {
        let span = tracing::info_span!("monthly_end_check", %date);
        self.run_logged(date).instrument(span).await
    }

    async fn run_logged(&self, date: Date) -> Result<CheckOutcome> {
        let started = Instant::now();
        tracing::info!("month-end business day check started");

        let result = self.check(date).await;

        let processing_time_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(outcome) => tracing::info!(
                processing_time_ms,
                is_last_business_day = outcome.is_last_business_day(),
                actions_executed = outcome.actions_executed(),
                "month-end business day check finished"
            ),
            Err(error) => tracing::error!(
                processing_time_ms,
                %error,
                "month-end business day check failed"
            ),
        }
        result
    }

    async fn check(&self, date: Date) -> Result<CheckOutcome> {
        let window = month_window(date);
        let holidays = self.holidays.fetch_holidays(&window).await?;
        let holiday_count = holidays.len();
        tracing::info!(holiday_count, "holidays fetched");

        let resolver = BusinessDayResolver::new(holidays);
        let last_business_day = resolver.last_business_day_of_month(date);
        let is_last = resolver.is_last_business_day(date);
        tracing::info!(
            %last_business_day,
            is_last_business_day = is_last,
            "last business day resolved"
        );

        let created_event = if is_last {
            tracing::info!("last business day of the month, running actions");
            match self.executor.execute_monthly_end_actions(date).await {
                Ok(created) => Some(created),
                Err(error) => {
                    tracing::error!(%error, "month-end actions failed");
                    return Err(error);
                }
            }
        } else {
            tracing::info!("not the last business day, skipping actions");
            None
        };

        Ok(CheckOutcome {
            date,
            last_business_day,
            holiday_count,
            created_event,
        })
    }
}
