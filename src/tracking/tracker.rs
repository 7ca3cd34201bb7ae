//! Drives a [`TrackingState`] with Tokio timers for one order.

use super::simulator::{Tick, TrackingSettings, TrackingSnapshot, TrackingState};
use crate::clients::OrderClient;
use crate::model::{DeliveryStage, OrderId};
use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{info, warn, Instrument};

/// A running tracker. Dropping the handle does not stop the task; call
/// [`TrackerHandle::abort`] or wait for delivery.
pub struct TrackerHandle {
    pub order_id: OrderId,
    snapshots: watch::Receiver<TrackingSnapshot>,
    task: JoinHandle<()>,
}

impl TrackerHandle {
    pub fn subscribe(&self) -> watch::Receiver<TrackingSnapshot> {
        self.snapshots.clone()
    }

    pub fn current(&self) -> TrackingSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn abort(&self) {
        self.task.abort();
    }

    pub fn abort_handle(&self) -> AbortHandle {
        self.task.abort_handle()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the tracker to reach `Delivered` (or be aborted).
    pub async fn finished(self) {
        let _ = self.task.await;
    }
}

/// Starts tracking `order_id`. Each new stage is recorded on the order through `orders`.
pub fn spawn_tracker(
    order_id: OrderId,
    settings: TrackingSettings,
    orders: OrderClient,
) -> TrackerHandle {
    let mut state = TrackingState::new(settings.initial_minutes);
    let (tx, rx) = watch::channel(state.snapshot(order_id));
    let span = tracing::info_span!("tracking", %order_id);

    let task = tokio::spawn(
        async move {
            info!(stage = %state.stage(), minutes = state.minutes_remaining(), "Tracking started");
            let start = Instant::now();
            let mut stage_clock = interval_at(start + settings.stage_interval, settings.stage_interval);
            let mut minute_clock = interval_at(start + settings.minute_interval, settings.minute_interval);
            stage_clock.set_missed_tick_behavior(MissedTickBehavior::Delay);
            minute_clock.set_missed_tick_behavior(MissedTickBehavior::Delay);

            while !state.is_complete() {
                let tick = tokio::select! {
                    _ = stage_clock.tick() => state.stage_tick(),
                    _ = minute_clock.tick() => state.minute_tick(),
                };
                if let Tick::StageAdvanced(stage) = tick {
                    stage_clock.reset();
                    info!(%stage, minutes = state.minutes_remaining(), "Stage advanced");
                    record(&orders, order_id, stage).await;
                }
                tx.send_replace(state.snapshot(order_id));
            }
            info!("Delivered");
        }
        .instrument(span),
    );

    TrackerHandle {
        order_id,
        snapshots: rx,
        task,
    }
}

async fn record(orders: &OrderClient, order_id: OrderId, stage: DeliveryStage) {
    if let Err(e) = orders.record_stage(order_id, stage).await {
        warn!(%order_id, %stage, error = %e, "Failed to record stage");
    }
}
