// End to end flow for a technician's day: scheduled orders worked through the
// store and read back as a non-overlapping timeline.

use std::sync::Arc;

use rstest::{fixture, rstest};

use crate::application::queries::ActivityQueries;
use crate::application::store::{OrderAction, StoreConfig, WorkOrderStore};
use crate::core::activity::model::ActivityStatus;
use crate::core::activity::project::SLOT_BUFFER_MINUTES;
use crate::core::ports::FixedJitter;
use crate::test_support::fixtures::manual_clock::ManualClock;
use crate::test_support::fixtures::work_order::WorkOrderDraftBuilder;

#[fixture]
fn before_each() -> (Arc<ManualClock>, WorkOrderStore) {
    let clock = Arc::new(ManualClock::new(1_700_000_000_000));
    let store = WorkOrderStore::new(
        clock.clone(),
        Arc::new(FixedJitter(15)),
        StoreConfig::default(),
    );
    (clock, store)
}

#[rstest]
#[tokio::test]
async fn it_should_lay_out_completed_orders_without_overlap(
    before_each: (Arc<ManualClock>, WorkOrderStore),
) {
    let (clock, store) = before_each;
    for (id, minutes) in [("WO-A", 120), ("WO-B", 60)] {
        store
            .add_work_order(WorkOrderDraftBuilder::new().id(id).build())
            .await;
        store.update_work_order_status(id, OrderAction::Start).await;
        clock.advance_minutes(minutes);
        store.update_work_order_status(id, OrderAction::Stop).await;
    }

    let timeline = store.activities_for_technician("tech-0001").await;
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline[0].order_id, "WO-A");
    assert_eq!(timeline[1].order_id, "WO-B");

    let first_out = timeline[0].clock_out.expect("missing clock-out");
    let second_in = timeline[1].clock_in;
    assert!(second_in.total_minutes() >= first_out.total_minutes() + SLOT_BUFFER_MINUTES);
}

#[rstest]
#[tokio::test]
async fn it_should_mix_completed_and_active_orders_in_one_timeline(
    before_each: (Arc<ManualClock>, WorkOrderStore),
) {
    let (clock, store) = before_each;
    store
        .add_work_order(WorkOrderDraftBuilder::new().id("WO-A").build())
        .await;
    store
        .add_work_order(WorkOrderDraftBuilder::new().id("WO-B").build())
        .await;
    store
        .add_work_order(WorkOrderDraftBuilder::new().id("WO-C").build())
        .await;

    store.update_work_order_status("WO-A", OrderAction::Start).await;
    clock.advance_minutes(90);
    store.update_work_order_status("WO-A", OrderAction::Stop).await;
    store.update_work_order_status("WO-B", OrderAction::Start).await;

    let timeline = store.activities_for_technician("tech-0001").await;
    // WO-C is still pending and produces no activity.
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline[0].status, ActivityStatus::Completed);
    assert_eq!(timeline[1].status, ActivityStatus::Active);

    let active = store.active_activity("tech-0001").await.expect("no active");
    assert_eq!(active.order_id, "WO-B");
}

#[rstest]
#[tokio::test]
async fn it_should_rebuild_the_same_timeline_when_nothing_changed(
    before_each: (Arc<ManualClock>, WorkOrderStore),
) {
    let (clock, store) = before_each;
    store
        .add_work_order(WorkOrderDraftBuilder::new().id("WO-A").build())
        .await;
    store.update_work_order_status("WO-A", OrderAction::Start).await;
    clock.advance_minutes(30);
    store.update_work_order_status("WO-A", OrderAction::Stop).await;

    let first = store.activities().await;
    let second = store.activities().await;
    assert_eq!(first, second);
}
