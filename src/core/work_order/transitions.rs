// Pure transitions over a single work order.
//
// Purpose
// - Define deterministic start/stop/tick transitions without side effects.
//
// Boundaries
// - No input or output. The caller supplies the current time.
//
// Accounting rule
// - `stop` commits the open span into `baseline_hours`.
// - `tick` publishes a live estimate: baseline plus the open span.
//   One rule, so hours accumulate across sessions and still grow live
//   during the current one.

use crate::core::work_order::state::{WorkOrder, WorkOrderStatus};

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Round to two decimal places, the precision all reported hours carry.
pub fn round2(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

fn open_span_hours(start_ms: i64, now_ms: i64) -> f64 {
    (now_ms - start_ms).max(0) as f64 / MS_PER_HOUR
}

/// Transition into `InProgress`, stamping a fresh `start_time`.
///
/// A start on an already running order first commits the open span, so no
/// worked time is lost by re-stamping.
pub fn start(order: &WorkOrder, now_ms: i64) -> WorkOrder {
    let mut next = order.clone();
    if let Some(started) = next.start_time {
        next.baseline_hours += open_span_hours(started, now_ms);
        next.actual_hours = round2(next.baseline_hours);
    }
    next.status = WorkOrderStatus::InProgress;
    next.start_time = Some(now_ms);
    next
}

/// Commit the open span and transition into `Completed`.
///
/// A stop without an open span is a no-op clone.
pub fn stop(order: &WorkOrder, now_ms: i64) -> WorkOrder {
    let mut next = order.clone();
    let Some(started) = next.start_time else {
        return next;
    };
    next.baseline_hours += open_span_hours(started, now_ms);
    next.actual_hours = round2(next.baseline_hours);
    next.status = WorkOrderStatus::Completed;
    next.start_time = None;
    next
}

/// Refresh the live `actual_hours` estimate of a running order.
///
/// Anything not `InProgress` is returned unchanged.
pub fn tick(order: &WorkOrder, now_ms: i64) -> WorkOrder {
    let mut next = order.clone();
    if let (WorkOrderStatus::InProgress, Some(started)) = (next.status, next.start_time) {
        next.actual_hours = round2(next.baseline_hours + open_span_hours(started, now_ms));
    }
    next
}
