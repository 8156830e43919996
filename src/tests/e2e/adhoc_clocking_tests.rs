// End to end flow for ad-hoc (unscheduled) clocking through the store.

use std::sync::Arc;

use rstest::{fixture, rstest};

use crate::application::queries::ActivityQueries;
use crate::application::store::{StoreConfig, WorkOrderStore};
use crate::core::activity::model::ActivityStatus;
use crate::core::ports::{Clock, FixedJitter};
use crate::core::work_order::state::WorkOrderStatus;
use crate::test_support::fixtures::clock_in::ClockInRequestBuilder;
use crate::test_support::fixtures::manual_clock::ManualClock;

#[fixture]
fn before_each() -> (Arc<ManualClock>, WorkOrderStore) {
    let clock = Arc::new(ManualClock::new(1_700_000_000_000));
    let store = WorkOrderStore::new(
        clock.clone(),
        Arc::new(FixedJitter(5)),
        StoreConfig::default(),
    );
    (clock, store)
}

#[rstest]
#[tokio::test]
async fn it_should_create_an_active_activity_and_a_running_order(
    before_each: (Arc<ManualClock>, WorkOrderStore),
) {
    let (clock, store) = before_each;
    let request = ClockInRequestBuilder::new()
        .order_id("AD-1")
        .technician_id("tech-9")
        .technician_name("Test Tech")
        .description("Inspection")
        .build();

    let activity = store.clock_in(request).await.expect("clock-in failed");

    assert_eq!(activity.status, ActivityStatus::Active);
    assert_eq!(activity.clock_out, None);
    assert!(!activity.is_scheduled);

    let orders = store.orders().await;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, "AD-1");
    assert_eq!(orders[0].status, WorkOrderStatus::InProgress);
    assert_eq!(orders[0].planned_hours, 0.0);
    assert_eq!(orders[0].start_time, Some(clock.now_ms()));
    assert!(!orders[0].scheduled);
}

#[rstest]
#[tokio::test]
async fn it_should_complete_activity_and_order_on_clock_out(
    before_each: (Arc<ManualClock>, WorkOrderStore),
) {
    let (clock, store) = before_each;
    let activity = store
        .clock_in(
            ClockInRequestBuilder::new()
                .order_id("AD-1")
                .technician_id("tech-9")
                .build(),
        )
        .await
        .expect("clock-in failed");

    clock.advance_minutes(75);
    store.clock_out(&activity.id).await;

    let closed = store
        .activities_for_technician("tech-9")
        .await
        .into_iter()
        .find(|candidate| candidate.id == activity.id)
        .expect("activity disappeared");
    assert_eq!(closed.status, ActivityStatus::Completed);
    assert!(closed.clock_out.is_some());

    let order = store.orders().await.remove(0);
    assert_eq!(order.status, WorkOrderStatus::Completed);
    assert!(order.actual_hours > 0.0);
    assert_eq!(order.actual_hours, 1.25);
    assert_eq!(order.start_time, None);

    assert_eq!(store.active_activity("tech-9").await, None);
}

#[rstest]
#[tokio::test]
async fn it_should_start_an_existing_order_when_clocking_in_on_it(
    before_each: (Arc<ManualClock>, WorkOrderStore),
) {
    let (clock, store) = before_each;
    store
        .add_work_order(
            crate::test_support::fixtures::work_order::WorkOrderDraftBuilder::new()
                .id("WO-55")
                .technician_id("tech-2")
                .build(),
        )
        .await;

    store
        .clock_in(
            ClockInRequestBuilder::new()
                .order_id("WO-55")
                .technician_id("tech-9")
                .technician_name("Test Tech")
                .build(),
        )
        .await
        .expect("clock-in failed");

    let orders = store.orders().await;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].status, WorkOrderStatus::InProgress);
    assert_eq!(orders[0].start_time, Some(clock.now_ms()));
    // The order follows the technician who actually clocked in.
    assert_eq!(orders[0].technician_id, "tech-9");
}
