// Shared test fixture for ad-hoc clock-in requests.

use crate::application::store::ClockInRequest;

pub struct ClockInRequestBuilder {
    inner: ClockInRequest,
}

impl Default for ClockInRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ClockInRequestBuilder {
    pub fn new() -> Self {
        Self {
            inner: ClockInRequest {
                order_id: "AD-1001".to_string(),
                technician_id: "tech-0001".to_string(),
                technician_name: "Jan Visser".to_string(),
                description: "Unscheduled inspection".to_string(),
                scheduled: false,
                machine: None,
                customer: None,
            },
        }
    }

    pub fn order_id(mut self, v: impl Into<String>) -> Self {
        self.inner.order_id = v.into();
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

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn scheduled(mut self, v: bool) -> Self {
        self.inner.scheduled = v;
        self
    }

    pub fn machine(mut self, v: impl Into<String>) -> Self {
        self.inner.machine = Some(v.into());
        self
    }

    pub fn customer(mut self, v: impl Into<String>) -> Self {
        self.inner.customer = Some(v.into());
        self
    }

    pub fn build(self) -> ClockInRequest {
        self.inner
    }
}
