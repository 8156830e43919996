// Read side of the engine: per-technician activity queries.
//
// Purpose
// - Abstract read access behind a trait so consumers (rendering layers,
//   tests) do not depend on the concrete store.

use async_trait::async_trait;

use crate::application::store::WorkOrderStore;
use crate::core::activity::model::{ActivityStatus, ClockingActivity};

#[async_trait]
pub trait ActivityQueries {
    /// All activities for a technician, derived and authored, in store order.
    async fn activities_for_technician(&self, technician_id: &str) -> Vec<ClockingActivity>;

    /// The first active activity for a technician, if any. The store enforces
    /// at most one active authored clocking per technician, but callers must
    /// not assume structural uniqueness across derived activities.
    async fn active_activity(&self, technician_id: &str) -> Option<ClockingActivity>;
}

#[async_trait]
impl ActivityQueries for WorkOrderStore {
    async fn activities_for_technician(&self, technician_id: &str) -> Vec<ClockingActivity> {
        self.activities()
            .await
            .into_iter()
            .filter(|activity| activity.technician_id == technician_id)
            .collect()
    }

    async fn active_activity(&self, technician_id: &str) -> Option<ClockingActivity> {
        self.activities()
            .await
            .into_iter()
            .find(|activity| {
                activity.technician_id == technician_id
                    && activity.status == ActivityStatus::Active
            })
    }
}
