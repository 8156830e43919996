// ClockingActivity is the display-ready record of a technician's start/stop
// window against a work order. It is derived state: safe to discard and
// recompute from the order set, except for activities authored directly by an
// ad-hoc clock-in.

use chrono::{DateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Wall-clock position within a day, minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    /// Hour and minute (UTC) of an epoch-millisecond timestamp.
    pub fn from_epoch_ms(timestamp_ms: i64) -> Self {
        let moment = DateTime::from_timestamp_millis(timestamp_ms).unwrap_or_default();
        Self {
            hour: moment.hour(),
            minute: moment.minute(),
        }
    }

    pub fn from_total_minutes(total: u32) -> Self {
        Self {
            hour: total / 60,
            minute: total % 60,
        }
    }

    pub fn total_minutes(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityStatus {
    Active,
    Completed,
    /// Reserved placeholder, never produced by the projection.
    Break,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockingActivity {
    pub id: String,
    pub technician_id: String,
    pub technician_name: String,
    pub order_id: String,
    pub description: String,
    pub clock_in: ClockTime,
    pub clock_out: Option<ClockTime>,
    pub is_scheduled: bool,
    pub status: ActivityStatus,
}
