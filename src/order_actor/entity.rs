//! [`ActorEntity`] implementation for [`Order`].
//!
//! Creating an order is checkout: `on_create` reads the cart through the
//! [`CartClient`] in its context, refuses an empty cart, prices the lines, waits out
//! the simulated payment processing and finally releases the lines it took from the
//! cart. Lines added while payment is processing stay in the cart. If any step fails
//! the order is never stored and the cart is left as it was.

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::checkout::CheckoutPolicy;
use crate::clients::CartClient;
use crate::framework::ActorEntity;
use crate::model::{DeliveryStage, Order, OrderCreate, OrderId};
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tracing::{debug, info};

/// Dependencies injected into the Order actor at `run()` time.
#[derive(Clone)]
pub struct OrderContext {
    pub carts: CartClient,
    pub checkout: CheckoutPolicy,
    /// Simulated payment processing time.
    pub processing_delay: Duration,
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Order::pending(id, params))
    }

    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        let summary = ctx.carts.summary(self.cart_id).await?;
        if summary.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let quote = ctx
            .checkout
            .quote(summary.subtotal, self.promo_code.as_deref());
        debug!(order_id = %self.id, ?quote, "Quoted");

        tokio::time::sleep(ctx.processing_delay).await;
        ctx.carts
            .release(self.cart_id, summary.lines.clone())
            .await?;

        self.lines = summary.lines;
        self.quote = Some(quote);
        self.stage = DeliveryStage::Accepted;
        self.placed_at = Utc::now();
        info!(order_id = %self.id, total = quote.total, "Checked out");
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &OrderContext) -> Result<(), OrderError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &OrderContext,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::RecordStage(stage) => {
                if stage < self.stage {
                    return Err(OrderError::StageRegression {
                        current: self.stage,
                        requested: stage,
                    });
                }
                self.stage = stage;
                Ok(OrderActionResult::RecordStage(stage))
            }
        }
    }
}
