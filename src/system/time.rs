//! Time keeping module for PineTime

use chrono::{DateTime, NaiveDateTime};
use embassy_time::Instant;

pub struct TimeReference {
    /// Local clock time
    time: NaiveDateTime,
    /// Related system time
    instant: Instant,
}

impl TimeReference {
    /// Create new time reference from a UTC epoch and a timezone offset
    pub fn from_epoch(epoch: i64, offset: i32) -> Self {
        let time = DateTime::from_timestamp(epoch + offset as i64, 0)
            .map(|utc| utc.naive_utc())
            .unwrap_or_default();
        Self {
            time,
            instant: Instant::now(),
        }
    }
}

pub struct TimeManager {
    reference: TimeReference,
}

impl TimeManager {
    /// Initialize time measurement on boot
    pub fn init(epoch: i64, offset: i32) -> Self {
        Self {
            reference: TimeReference::from_epoch(epoch, offset),
        }
    }

    /// Get current local time
    pub fn get_time(&self) -> NaiveDateTime {
        let elapsed = Instant::now().duration_since(self.reference.instant);
        self.reference.time + chrono::Duration::seconds(elapsed.as_secs() as i64)
    }
}
