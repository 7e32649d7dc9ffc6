//! Checkout: payment selection, UPI verification and the simulated payment.
//!
//! Placing an order runs three timed steps: the payment delay, the redirect
//! delay, then the order tracker opens.

use futures::FutureExt;

use super::tracking::begin_ticking;
use super::{HandlerContext, HandlerError};
use crate::domain::checkout::{
    Checkout, CheckoutError, CheckoutTab, PaymentMethod, PendingOrder, Wallet,
};
use crate::domain::foundation::SessionId;
use crate::domain::notification::Toast;
use crate::ports::{TimerKey, TimerKind};

pub const UPI_VERIFIED_MESSAGE: &str = "UPI ID verified successfully!";
pub const REDIRECTING_MESSAGE: &str = "Redirecting to checkout...";
pub const ORDER_PLACED_MESSAGE: &str = "Order placed successfully! 🎉";

pub struct CheckoutHandler {
    ctx: HandlerContext,
}

impl CheckoutHandler {
    pub fn new(ctx: HandlerContext) -> Self {
        Self { ctx }
    }

    pub async fn view(&self, id: &SessionId) -> Result<Checkout, HandlerError> {
        Ok(self.ctx.lock_session(id).await?.checkout.clone())
    }

    pub async fn select_tab(&self, id: &SessionId, tab: CheckoutTab) -> Result<Checkout, HandlerError> {
        let mut session = self.ctx.lock_session(id).await?;
        session.checkout.select_tab(tab);
        Ok(session.checkout.clone())
    }

    pub async fn select_payment_method(
        &self,
        id: &SessionId,
        method: PaymentMethod,
    ) -> Result<Checkout, HandlerError> {
        let mut session = self.ctx.lock_session(id).await?;
        session.checkout.select_payment_method(method);
        Ok(session.checkout.clone())
    }

    pub async fn select_wallet(&self, id: &SessionId, wallet: Wallet) -> Result<Checkout, HandlerError> {
        let mut session = self.ctx.lock_session(id).await?;
        session.checkout.select_wallet(wallet);
        Ok(session.checkout.clone())
    }

    /// Stores the UPI id and starts verifying it.
    ///
    /// A blank id is reported as an error toast and changes nothing.
    ///
    /// # Errors
    ///
    /// - `Checkout(OperationPending)` while a verification or payment runs
    pub async fn verify_upi(&self, id: &SessionId, upi_id: &str) -> Result<Checkout, HandlerError> {
        let mut session = self.ctx.lock_session(id).await?;
        if upi_id.trim().is_empty() {
            self.ctx
                .toast(*id, Toast::error(CheckoutError::UpiIdRequired.message()))
                .await;
            return Ok(session.checkout.clone());
        }

        if session.checkout.is_processing() {
            return Err(CheckoutError::OperationPending.into());
        }
        session.checkout.set_upi_id(upi_id);
        session.checkout.begin_upi_verification()?;

        let ctx = self.ctx.clone();
        let session_id = *id;
        self.ctx.timers.schedule(
            TimerKey::new(session_id, TimerKind::UpiVerification),
            self.ctx.delays.upi_verification(),
            async move {
                let Some(mut session) = ctx.lock_for_timer(&session_id).await else {
                    return;
                };
                if session.checkout.complete_upi_verification().is_ok() {
                    ctx.toast(session_id, Toast::success(UPI_VERIFIED_MESSAGE)).await;
                }
            }
            .boxed(),
        );
        Ok(session.checkout.clone())
    }

    /// Starts the simulated payment for the current cart.
    ///
    /// # Errors
    ///
    /// - `Checkout(EmptyCart)` if there is nothing to order
    /// - `Checkout(NotReady)` if the payment selections are incomplete
    pub async fn place_order(&self, id: &SessionId) -> Result<PendingOrder, HandlerError> {
        let mut session = self.ctx.lock_session(id).await?;
        let cart = session.cart.clone();
        let order = session.checkout.place_order(&cart)?;
        tracing::info!(
            session_id = %id,
            method = order.method.as_str(),
            total = %order.total,
            items = order.item_count,
            "order placed"
        );

        let ctx = self.ctx.clone();
        let session_id = *id;
        self.ctx.timers.schedule(
            TimerKey::new(session_id, TimerKind::PaymentProcessing),
            self.ctx.delays.payment_processing(),
            async move { finish_payment(ctx, session_id).await }.boxed(),
        );
        Ok(order)
    }
}

async fn finish_payment(ctx: HandlerContext, id: SessionId) {
    let Some(mut session) = ctx.lock_for_timer(&id).await else {
        return;
    };
    let order = match session.checkout.complete_payment() {
        Ok(order) => order,
        Err(err) => {
            tracing::warn!(session_id = %id, error = %err, "payment completion out of order");
            return;
        }
    };
    ctx.toast(id, Toast::success(order.confirmation_message())).await;
    ctx.toast(id, Toast::success(REDIRECTING_MESSAGE)).await;

    let redirect_ctx = ctx.clone();
    ctx.timers.schedule(
        TimerKey::new(id, TimerKind::CheckoutRedirect),
        ctx.delays.checkout_redirect(),
        async move {
            let Some(mut session) = redirect_ctx.lock_for_timer(&id).await else {
                return;
            };
            session.start_tracking();
            begin_ticking(&redirect_ctx, id);
            redirect_ctx
                .toast(id, Toast::success(ORDER_PLACED_MESSAGE))
                .await;
        }
        .boxed(),
    );
}
