//! # Basic bus example
//!
//! Shows how to wire listeners into an [`EventBus`] and fire events both ways.
//!
//! The example:
//! - counts orders with a custom listener
//! - logs every event through `LogListener`
//! - fires concurrently, then sequentially, then after clearing
//!
//! ## Run
//! ```bash
//! cargo run --example basic --features logging
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use eventvisor::{
    BusConfig, BusError, EventBus, FailurePolicy, Listener, ListenerRef, LogListener, NamedEvent,
};

type OrderEvent = NamedEvent<u64>;

struct OrderMetrics {
    orders: AtomicU64,
    cents: AtomicU64,
}

impl OrderMetrics {
    fn new() -> Self {
        Self {
            orders: AtomicU64::new(0),
            cents: AtomicU64::new(0),
        }
    }

    fn print_stats(&self) {
        println!();
        println!("Metrics:");
        println!(" ├─► Orders: {}", self.orders.load(Ordering::Relaxed));
        println!(" └─► Cents:  {}", self.cents.load(Ordering::Relaxed));
    }
}

#[async_trait]
impl Listener<OrderEvent> for OrderMetrics {
    async fn handle(&self, event: &OrderEvent) {
        tokio::time::sleep(Duration::from_millis(50)).await;
        self.orders.fetch_add(1, Ordering::Relaxed);
        self.cents.fetch_add(*event.payload(), Ordering::Relaxed);
    }

    fn name(&self) -> &str {
        "order-metrics"
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let metrics = Arc::new(OrderMetrics::new());
    let cfg = BusConfig::default().with_failure(FailurePolicy::Isolate);

    let bus = EventBus::builder(cfg)
        .with_listener("order_paid", Arc::clone(&metrics) as ListenerRef<OrderEvent>)
        .with_listener("order_paid", Arc::new(LogListener))
        .with_listener("order_refunded", Arc::new(LogListener))
        .build()?;

    println!("registered events: {:?}", bus.names());

    bus.fire_concurrent(NamedEvent::new("order_paid", 1250)).await?;
    bus.fire_sequential(&NamedEvent::new("order_paid", 990)).await?;
    bus.fire(NamedEvent::new("order_refunded", 990)).await?;

    bus.clear_all();
    match bus.fire(NamedEvent::new("order_paid", 1)).await {
        Err(BusError::NoListeners { event }) => {
            println!("after clear_all: no listeners for {event}")
        }
        other => println!("unexpected: {other:?}"),
    }

    metrics.print_stats();
    Ok(())
}
