// Pure projection from the order set to a day timeline.
//
// Purpose
// - Lay out one activity per non-pending order so a technician's completed
//   sessions never overlap on screen.
//
// Boundaries
// - No input or output. Randomness comes in through the JitterSource port;
//   with jitter pinned the projection is a pure function of the order list.

use std::collections::HashMap;

use crate::core::activity::model::{ActivityStatus, ClockTime, ClockingActivity};
use crate::core::ports::JitterSource;
use crate::core::work_order::state::{WorkOrder, WorkOrderStatus};

/// Gap kept between a technician's consecutive completed sessions.
pub const SLOT_BUFFER_MINUTES: u32 = 30;

/// Derive the timeline for the current order set.
///
/// Running orders keep their real clock-in; completed orders are placed on a
/// synthetic timeline starting at `workday_start_hour`, each technician
/// tracked by an independent cursor. Orders are processed in slice order, so
/// earlier-added orders claim earlier slots. This is a display heuristic, not
/// a scheduling guarantee.
pub fn project_activities(
    orders: &[WorkOrder],
    jitter: &dyn JitterSource,
    workday_start_hour: u32,
) -> Vec<ClockingActivity> {
    let mut cursors: HashMap<&str, u32> = HashMap::new();
    let mut activities = Vec::new();

    for order in orders {
        match order.status {
            WorkOrderStatus::Pending => continue,
            WorkOrderStatus::InProgress => {
                let Some(start_ms) = order.start_time else {
                    continue;
                };
                activities.push(activity_for(
                    order,
                    ClockTime::from_epoch_ms(start_ms),
                    None,
                    ActivityStatus::Active,
                ));
            }
            WorkOrderStatus::Completed => {
                let cursor = cursors
                    .entry(order.technician_id.as_str())
                    .or_insert(workday_start_hour * 60);
                let clock_in = *cursor + jitter.minute_offset().min(29);
                let clock_out = clock_in + (order.actual_hours * 60.0).round() as u32;
                *cursor = clock_out + SLOT_BUFFER_MINUTES;
                activities.push(activity_for(
                    order,
                    ClockTime::from_total_minutes(clock_in),
                    Some(ClockTime::from_total_minutes(clock_out)),
                    ActivityStatus::Completed,
                ));
            }
        }
    }

    activities
}

fn activity_for(
    order: &WorkOrder,
    clock_in: ClockTime,
    clock_out: Option<ClockTime>,
    status: ActivityStatus,
) -> ClockingActivity {
    ClockingActivity {
        // Deterministic id so re-projection yields identical output.
        id: format!("wo-{}", order.id),
        technician_id: order.technician_id.clone(),
        technician_name: order.technician_name.clone(),
        order_id: order.id.clone(),
        description: order.description.clone(),
        clock_in,
        clock_out,
        is_scheduled: order.scheduled,
        status,
    }
}
