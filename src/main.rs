use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use work_orders::application::context::EngineContext;
use work_orders::application::queries::ActivityQueries;
use work_orders::application::store::{ClockInRequest, OrderAction, StoreConfig, WorkOrderStore};
use work_orders::application::ticker::Ticker;
use work_orders::core::ports::{SystemClock, ThreadRngJitter};
use work_orders::core::work_order::state::WorkOrderDraft;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let store = Arc::new(WorkOrderStore::new(
        Arc::new(SystemClock),
        Arc::new(ThreadRngJitter),
        StoreConfig {
            tick_interval: Duration::from_secs(1),
            ..StoreConfig::default()
        },
    ));
    let context = EngineContext::new();
    context.init(store.clone())?;

    let ticker = Ticker::new();
    ticker.start(store.clone());

    let store = context.store()?;
    store
        .add_work_order(WorkOrderDraft {
            id: "WO-1".to_string(),
            customer: "Van Dijk Dairy".to_string(),
            machine: "Milking robot A3".to_string(),
            description: "Replace worn vacuum pump".to_string(),
            planned_hours: 4.0,
            scheduled: true,
            technician_id: "tech-1".to_string(),
            technician_name: "Jan Visser".to_string(),
        })
        .await;
    store.update_work_order_status("WO-1", OrderAction::Start).await;

    let activity = store
        .clock_in(ClockInRequest {
            order_id: "AD-1".to_string(),
            technician_id: "tech-9".to_string(),
            technician_name: "Test Tech".to_string(),
            description: "Unscheduled inspection".to_string(),
            scheduled: false,
            machine: None,
            customer: None,
        })
        .await?;

    // Let a few live recomputations land before closing the day.
    tokio::time::sleep(Duration::from_secs(3)).await;
    store.update_work_order_status("WO-1", OrderAction::Stop).await;
    store.clock_out(&activity.id).await;
    ticker.stop();

    println!("{}", serde_json::to_string_pretty(&store.orders().await)?);
    println!(
        "{}",
        serde_json::to_string_pretty(&store.activities_for_technician("tech-9").await)?
    );
    Ok(())
}
