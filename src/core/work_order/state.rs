// WorkOrder is the canonical domain record for a unit of assigned labor.
//
// Notes
// - All i64 time values are epoch milliseconds.
// - `baseline_hours` carries hours committed by earlier start/stop cycles; it
//   combines with `start_time` to compute the live `actual_hours` estimate.
// - Invariant: `start_time` is Some if and only if `status == InProgress`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorkOrderStatus {
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    pub id: String,
    pub customer: String,
    pub machine: String,
    pub description: String,
    pub status: WorkOrderStatus,
    pub planned_hours: f64,
    pub actual_hours: f64,
    /// Hours committed by earlier running windows; combines with `start_time`
    /// to compute the live actual duration.
    #[serde(skip)]
    pub baseline_hours: f64,
    pub start_time: Option<i64>,
    pub scheduled: bool,
    pub technician_id: String,
    pub technician_name: String,
}

/// Creation input for a work order. Lifecycle fields (`status`,
/// `actual_hours`, `start_time`) are owned by the store and not supplied here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderDraft {
    pub id: String,
    pub customer: String,
    pub machine: String,
    pub description: String,
    pub planned_hours: f64,
    pub scheduled: bool,
    pub technician_id: String,
    pub technician_name: String,
}

impl WorkOrder {
    pub fn from_draft(draft: WorkOrderDraft) -> Self {
        Self {
            id: draft.id,
            customer: draft.customer,
            machine: draft.machine,
            description: draft.description,
            status: WorkOrderStatus::Pending,
            planned_hours: draft.planned_hours,
            actual_hours: 0.0,
            baseline_hours: 0.0,
            start_time: None,
            scheduled: draft.scheduled,
            technician_id: draft.technician_id,
            technician_name: draft.technician_name,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == WorkOrderStatus::InProgress
    }
}
