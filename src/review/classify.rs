//! Due-date classification in Japan Standard Time

use chrono::{DateTime, Days, FixedOffset, NaiveDate, Utc};

use super::model::{ReviewSnapshot, ReviewTask, SnapshotMeta};

const JST_OFFSET_SECS: i32 = 9 * 3600;

/// UTC+9, independent of the host timezone
pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECS).expect("UTC+9 is a valid offset")
}

/// Source of the current instant
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock, expressed in UTC+9
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&jst())
    }
}

/// A clock stuck at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// The dates tasks are compared against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDates {
    pub generated_at: DateTime<FixedOffset>,
    pub today: String,
    pub tomorrow: String,
}

impl ReferenceDates {
    /// Reference dates for the UTC+9 calendar day containing `now`
    pub fn at(now: DateTime<FixedOffset>) -> Self {
        let today = now.with_timezone(&jst()).date_naive();
        Self::for_day(now, today)
    }

    /// Reference dates for an explicit day, stamped with `generated_at`
    pub fn for_day(generated_at: DateTime<FixedOffset>, today: NaiveDate) -> Self {
        // Only NaiveDate::MAX has no successor; the CLI rejects it as a reference date.
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
        Self {
            generated_at,
            today: today.format("%Y-%m-%d").to_string(),
            tomorrow: tomorrow.format("%Y-%m-%d").to_string(),
        }
    }
}

/// All three buckets. Only `today` and `tomorrow` end up in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub today: Vec<ReviewTask>,
    pub tomorrow: Vec<ReviewTask>,
    pub others: Vec<ReviewTask>,
    pub reference: ReferenceDates,
}

impl Classification {
    pub fn into_snapshot(self) -> ReviewSnapshot {
        ReviewSnapshot {
            today: self.today,
            tomorrow: self.tomorrow,
            meta: SnapshotMeta {
                generated_at: self.reference.generated_at,
                today: self.reference.today,
                tomorrow: self.reference.tomorrow,
            },
        }
    }
}

/// Split tasks by exact match of their written due date against the reference dates.
pub fn classify(tasks: Vec<ReviewTask>, reference: ReferenceDates) -> Classification {
    let mut today = Vec::new();
    let mut tomorrow = Vec::new();
    let mut others = Vec::new();

    for task in tasks {
        if task.due_date == reference.today {
            today.push(task);
        } else if task.due_date == reference.tomorrow {
            tomorrow.push(task);
        } else {
            others.push(task);
        }
    }

    Classification {
        today,
        tomorrow,
        others,
        reference,
    }
}
