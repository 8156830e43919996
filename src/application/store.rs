// WorkOrderStore owns the canonical order list and its time accounting.
//
// Responsibilities
// - Apply the pure work order transitions on behalf of callers.
// - Keep the derived activity timeline in sync with the order set.
// - Hold directly authored ad-hoc activities and mutate them on clock-out.
// - Broadcast a store event after every observed change.
//
// Concurrency
// - All state sits behind one RwLock, so every mutation is a single
//   read-modify-write section. No global singletons: the store is an owned
//   value handed around behind an Arc.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{RwLock, broadcast};
use tracing::{debug, info};
use uuid::Uuid;

use crate::application::errors::ClockInError;
use crate::core::activity::model::{ActivityStatus, ClockTime, ClockingActivity};
use crate::core::activity::project::project_activities;
use crate::core::ports::{Clock, JitterSource};
use crate::core::work_order::state::{WorkOrder, WorkOrderDraft, WorkOrderStatus};
use crate::core::work_order::transitions;

const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    Start,
    Stop,
}

/// Notification fanned out to subscribers after a store mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    OrdersChanged,
    ActivitiesChanged,
    Ticked,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Hour at which the projected day timeline starts.
    pub workday_start_hour: u32,
    /// Interval between live recomputations of running orders.
    pub tick_interval: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            workday_start_hour: 8,
            tick_interval: Duration::from_secs(60),
        }
    }
}

/// Input for an ad-hoc clock-in. The order referenced by `order_id` is
/// created on the fly when it does not exist yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockInRequest {
    pub order_id: String,
    pub technician_id: String,
    pub technician_name: String,
    pub description: String,
    pub scheduled: bool,
    pub machine: Option<String>,
    pub customer: Option<String>,
}

#[derive(Default)]
struct StoreInner {
    orders: Vec<WorkOrder>,
    derived: Vec<ClockingActivity>,
    authored: Vec<ClockingActivity>,
}

pub struct WorkOrderStore {
    inner: RwLock<StoreInner>,
    clock: Arc<dyn Clock>,
    jitter: Arc<dyn JitterSource>,
    config: StoreConfig,
    events: broadcast::Sender<StoreEvent>,
}

impl WorkOrderStore {
    pub fn new(clock: Arc<dyn Clock>, jitter: Arc<dyn JitterSource>, config: StoreConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: RwLock::new(StoreInner::default()),
            clock,
            jitter,
            config,
            events,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Register a new order. It enters the store as `Pending` with zero
    /// actual hours; duplicate ids are accepted as-is.
    pub async fn add_work_order(&self, draft: WorkOrderDraft) -> WorkOrder {
        let order = WorkOrder::from_draft(draft);
        let mut inner = self.inner.write().await;
        inner.orders.push(order.clone());
        self.reproject(&mut inner);
        drop(inner);
        info!(order_id = %order.id, "work order added");
        self.notify(StoreEvent::OrdersChanged);
        order
    }

    /// Apply a start or stop action to the matching order.
    ///
    /// An unknown id and a stop without an open span are absorbed as no-ops;
    /// both are logged, neither is an error.
    pub async fn update_work_order_status(&self, order_id: &str, action: OrderAction) {
        let now = self.clock.now_ms();
        let mut inner = self.inner.write().await;
        let Some(position) = inner.orders.iter().position(|order| order.id == order_id) else {
            debug!(order_id, ?action, "ignoring action for unknown order");
            return;
        };
        let next = match action {
            OrderAction::Start => transitions::start(&inner.orders[position], now),
            OrderAction::Stop => transitions::stop(&inner.orders[position], now),
        };
        if next == inner.orders[position] {
            debug!(order_id, ?action, "action had no effect");
            return;
        }
        info!(order_id, ?action, status = ?next.status, actual_hours = next.actual_hours, "work order updated");
        inner.orders[position] = next;
        self.reproject(&mut inner);
        drop(inner);
        self.notify(StoreEvent::OrdersChanged);
    }

    /// Start unscheduled work for a technician.
    ///
    /// Appends an active authored activity and upserts the backing order:
    /// an existing order is started, an unknown one is created with zero
    /// planned hours. At most one active clocking per technician is
    /// enforced here.
    pub async fn clock_in(
        &self,
        request: ClockInRequest,
    ) -> Result<ClockingActivity, ClockInError> {
        let now = self.clock.now_ms();
        let mut inner = self.inner.write().await;

        let already_active = inner
            .authored
            .iter()
            .chain(inner.derived.iter())
            .any(|activity| {
                activity.technician_id == request.technician_id
                    && activity.status == ActivityStatus::Active
            });
        if already_active {
            return Err(ClockInError::TechnicianAlreadyActive {
                technician_id: request.technician_id,
            });
        }

        let activity = ClockingActivity {
            id: Uuid::now_v7().to_string(),
            technician_id: request.technician_id.clone(),
            technician_name: request.technician_name.clone(),
            order_id: request.order_id.clone(),
            description: request.description.clone(),
            clock_in: ClockTime::from_epoch_ms(now),
            clock_out: None,
            is_scheduled: request.scheduled,
            status: ActivityStatus::Active,
        };
        inner.authored.push(activity.clone());

        match inner
            .orders
            .iter()
            .position(|order| order.id == request.order_id)
        {
            Some(position) => {
                let mut next = transitions::start(&inner.orders[position], now);
                next.technician_id = request.technician_id.clone();
                next.technician_name = request.technician_name.clone();
                inner.orders[position] = next;
            }
            None => inner.orders.push(WorkOrder {
                id: request.order_id.clone(),
                customer: request.customer.unwrap_or_default(),
                machine: request.machine.unwrap_or_default(),
                description: request.description,
                status: WorkOrderStatus::InProgress,
                planned_hours: 0.0,
                actual_hours: 0.0,
                baseline_hours: 0.0,
                start_time: Some(now),
                scheduled: request.scheduled,
                technician_id: request.technician_id,
                technician_name: request.technician_name,
            }),
        }

        self.reproject(&mut inner);
        drop(inner);
        info!(order_id = %request.order_id, activity_id = %activity.id, "clocked in");
        self.notify(StoreEvent::ActivitiesChanged);
        Ok(activity)
    }

    /// Close an authored activity and commit the hours of its backing order.
    ///
    /// An unknown or already completed activity id is a logged no-op.
    pub async fn clock_out(&self, activity_id: &str) {
        let now = self.clock.now_ms();
        let mut inner = self.inner.write().await;
        let Some(position) = inner.authored.iter().position(|activity| {
            activity.id == activity_id && activity.status == ActivityStatus::Active
        }) else {
            debug!(activity_id, "ignoring clock-out for unknown or closed activity");
            return;
        };

        inner.authored[position].status = ActivityStatus::Completed;
        inner.authored[position].clock_out = Some(ClockTime::from_epoch_ms(now));
        let order_id = inner.authored[position].order_id.clone();

        if let Some(order_position) = inner
            .orders
            .iter()
            .position(|order| order.id == order_id && order.start_time.is_some())
        {
            let stopped = transitions::stop(&inner.orders[order_position], now);
            inner.orders[order_position] = stopped;
        }

        self.reproject(&mut inner);
        drop(inner);
        info!(activity_id, order_id = %order_id, "clocked out");
        self.notify(StoreEvent::ActivitiesChanged);
    }

    /// Refresh the live hour estimate of every running order.
    pub async fn tick(&self) {
        let now = self.clock.now_ms();
        let mut inner = self.inner.write().await;
        for order in inner.orders.iter_mut() {
            let refreshed = transitions::tick(order, now);
            *order = refreshed;
        }
        drop(inner);
        self.notify(StoreEvent::Ticked);
    }

    pub async fn orders(&self) -> Vec<WorkOrder> {
        self.inner.read().await.orders.clone()
    }

    /// Derived then authored activities, each in store order.
    pub async fn activities(&self) -> Vec<ClockingActivity> {
        let inner = self.inner.read().await;
        inner
            .derived
            .iter()
            .chain(inner.authored.iter())
            .cloned()
            .collect()
    }

    /// Recompute the derived timeline. Orders already represented by an
    /// authored activity are left to that record, so ad-hoc work is not
    /// emitted twice.
    fn reproject(&self, inner: &mut StoreInner) {
        let visible: Vec<WorkOrder> = inner
            .orders
            .iter()
            .filter(|order| {
                !inner
                    .authored
                    .iter()
                    .any(|activity| activity.order_id == order.id)
            })
            .cloned()
            .collect();
        inner.derived =
            project_activities(&visible, &*self.jitter, self.config.workday_start_hour);
    }

    fn notify(&self, event: StoreEvent) {
        // Nobody listening is fine.
        let _ = self.events.send(event);
    }
}
