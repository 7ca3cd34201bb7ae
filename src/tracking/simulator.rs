//! The tracking state machine, without timers.
//!
//! Two clocks drive it. The stage clock moves the order one stage forward; each move
//! takes five minutes off the estimate. The minute clock counts the estimate down; if
//! it reaches zero before delivery the order moves forward at once and the estimate
//! starts over. Nothing changes after `Delivered`.

use crate::model::{DeliveryStage, OrderId};
use serde::Serialize;
use std::time::Duration;

/// Minutes taken off the estimate by each stage advance.
pub const MINUTES_PER_STAGE: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackingSettings {
    pub stage_interval: Duration,
    pub minute_interval: Duration,
    pub initial_minutes: u32,
}

impl Default for TrackingSettings {
    fn default() -> Self {
        Self {
            stage_interval: Duration::from_secs(10),
            minute_interval: Duration::from_secs(60),
            initial_minutes: 20,
        }
    }
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Already delivered.
    Idle,
    MinuteElapsed,
    StageAdvanced(DeliveryStage),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingState {
    stage: DeliveryStage,
    minutes_remaining: u32,
    initial_minutes: u32,
}

impl TrackingState {
    pub fn new(initial_minutes: u32) -> Self {
        Self {
            stage: DeliveryStage::Accepted,
            minutes_remaining: initial_minutes,
            initial_minutes,
        }
    }

    pub fn stage(&self) -> DeliveryStage {
        self.stage
    }

    pub fn minutes_remaining(&self) -> u32 {
        self.minutes_remaining
    }

    pub fn is_complete(&self) -> bool {
        self.stage.is_terminal()
    }

    fn advance(&mut self) -> DeliveryStage {
        self.stage = self.stage.next();
        if self.stage.is_terminal() {
            self.minutes_remaining = 0;
        }
        self.stage
    }

    /// The stage clock fired.
    pub fn stage_tick(&mut self) -> Tick {
        if self.is_complete() {
            return Tick::Idle;
        }
        self.minutes_remaining = self.minutes_remaining.saturating_sub(MINUTES_PER_STAGE);
        Tick::StageAdvanced(self.advance())
    }

    /// The minute clock fired.
    pub fn minute_tick(&mut self) -> Tick {
        if self.is_complete() {
            return Tick::Idle;
        }
        self.minutes_remaining = self.minutes_remaining.saturating_sub(1);
        if self.minutes_remaining > 0 {
            return Tick::MinuteElapsed;
        }
        self.minutes_remaining = self.initial_minutes;
        Tick::StageAdvanced(self.advance())
    }

    pub fn snapshot(&self, order_id: OrderId) -> TrackingSnapshot {
        TrackingSnapshot {
            order_id,
            stage: self.stage,
            stage_index: self.stage.index(),
            label: self.stage.label(),
            minutes_remaining: self.minutes_remaining,
            completed: self.is_complete(),
        }
    }
}

/// What the tracking page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingSnapshot {
    pub order_id: OrderId,
    pub stage: DeliveryStage,
    pub stage_index: usize,
    pub label: &'static str,
    pub minutes_remaining: u32,
    pub completed: bool,
}
