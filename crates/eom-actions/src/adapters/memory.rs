use async_trait::async_trait;

use eom_time::{HolidayInterval, HolidayWindow};

use crate::error::Result;
use crate::ports::HolidaySource;

/// A fixed, in-memory list of holidays.
#[derive(Debug, Clone, Default)]
pub struct StaticHolidaySource {
    holidays: Vec<HolidayInterval>,
}

impl StaticHolidaySource {
    /// Source returning `holidays`, filtered per window.
    pub fn new(holidays: impl IntoIterator<Item = HolidayInterval>) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }
}

#[async_trait]
impl HolidaySource for StaticHolidaySource {
    async fn fetch_holidays(&self, window: &HolidayWindow) -> Result<Vec<HolidayInterval>> {
        Ok(self
            .holidays
            .iter()
            .filter(|h| h.intersects(window))
            .copied()
            .collect())
    }
}
