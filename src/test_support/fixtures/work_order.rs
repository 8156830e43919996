// Shared test fixture for work order drafts.

use crate::core::work_order::state::WorkOrderDraft;

pub struct WorkOrderDraftBuilder {
    inner: WorkOrderDraft,
}

impl Default for WorkOrderDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl WorkOrderDraftBuilder {
    pub fn new() -> Self {
        Self {
            inner: WorkOrderDraft {
                id: "WO-1001".to_string(),
                customer: "Van Dijk Dairy".to_string(),
                machine: "Milking robot A3".to_string(),
                description: "Replace worn vacuum pump".to_string(),
                planned_hours: 4.0,
                scheduled: true,
                technician_id: "tech-0001".to_string(),
                technician_name: "Jan Visser".to_string(),
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn customer(mut self, v: impl Into<String>) -> Self {
        self.inner.customer = v.into();
        self
    }

    pub fn machine(mut self, v: impl Into<String>) -> Self {
        self.inner.machine = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn planned_hours(mut self, v: f64) -> Self {
        self.inner.planned_hours = v;
        self
    }

    pub fn scheduled(mut self, v: bool) -> Self {
        self.inner.scheduled = v;
        self
    }

    pub fn technician_id(mut self, v: impl Into<String>) -> Self {
        self.inner.technician_id = v.into();
        self
    }

    pub fn technician_name(mut self, v: impl Into<String>) -> Self {
        self.inner.technician_name = v.into();
        self
    }

    pub fn build(self) -> WorkOrderDraft {
        self.inner
    }
}
