// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Calendar-month billing window.
//!
//! "This month" is evaluated in a fixed reference offset (Asia/Tokyo by
//! default) so the window is the same no matter where the job runs.

use std::fmt;

use chrono::{DateTime, Datelike, Days, FixedOffset, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BillcastError;

/// Date format expected by the billing API.
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// The first and last calendar day of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl BillingWindow {
    /// Window for the month containing `date`.
    ///
    /// `end` is `start + 1 month - 1 day`.
    pub fn containing(date: NaiveDate) -> Result<Self, BillcastError> {
        let start = date
            .with_day(1)
            .ok_or_else(|| BillcastError::Internal(format!("no first day for {date}")))?;
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.checked_sub_days(Days::new(1)))
            .ok_or_else(|| {
                BillcastError::Internal(format!("month after {start} is out of range"))
            })?;
        Ok(Self { start, end })
    }

    /// Window for the month that `now` falls in at the given UTC offset.
    pub fn current(now: DateTime<Utc>, offset: FixedOffset) -> Result<Self, BillcastError> {
        Self::containing(now.with_timezone(&offset).date_naive())
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Start date formatted for the billing API (`YYYY-MM-DD`).
    pub fn start_param(&self) -> String {
        self.start.format(API_DATE_FORMAT).to_string()
    }

    /// End date formatted for the billing API (`YYYY-MM-DD`).
    pub fn end_param(&self) -> String {
        self.end.format(API_DATE_FORMAT).to_string()
    }
}

impl fmt::Display for BillingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start_param(), self.end_param())
    }
}
