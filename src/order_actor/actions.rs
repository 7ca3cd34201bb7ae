//! Custom actions for the Order actor.

use crate::model::DeliveryStage;

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order to `stage`. Repeating the current stage is a no-op; going back
    /// is rejected.
    RecordStage(DeliveryStage),
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    /// The stage now recorded on the order.
    RecordStage(DeliveryStage),
}
