//! Checkout view state.
//!
//! Holds the payment tab selections and the two simulated steps (UPI
//! verification and payment processing). Timers live outside the domain;
//! the application layer calls the `complete_*` methods when a delay ends.

use serde::{Deserialize, Serialize};

use super::{CheckoutError, CheckoutTab, NotReadyReason, PaymentMethod, PendingOrder, Wallet};
use crate::domain::cart::Cart;
use crate::domain::foundation::OperationStatus;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkout {
    active_tab: CheckoutTab,
    payment_method: PaymentMethod,
    selected_wallet: Option<Wallet>,
    upi_id: String,
    upi_verification: OperationStatus,
    payment: OperationStatus,
    pending_order: Option<PendingOrder>,
}

impl Checkout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> CheckoutTab {
        self.active_tab
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn selected_wallet(&self) -> Option<Wallet> {
        self.selected_wallet
    }

    pub fn upi_id(&self) -> &str {
        &self.upi_id
    }

    pub fn upi_verification(&self) -> OperationStatus {
        self.upi_verification
    }

    pub fn payment(&self) -> OperationStatus {
        self.payment
    }

    pub fn is_upi_verified(&self) -> bool {
        self.upi_verification.is_done()
    }

    /// True while either simulated step is running.
    pub fn is_processing(&self) -> bool {
        self.payment.is_pending() || self.upi_verification.is_pending()
    }

    pub fn pending_order(&self) -> Option<&PendingOrder> {
        self.pending_order.as_ref()
    }

    pub fn proceed_to_payment(&mut self) {
        self.active_tab = CheckoutTab::Payment;
    }

    pub fn back_to_cart(&mut self) {
        self.active_tab = CheckoutTab::Cart;
    }

    pub fn select_tab(&mut self, tab: CheckoutTab) {
        self.active_tab = tab;
    }

    pub fn select_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    pub fn select_wallet(&mut self, wallet: Wallet) {
        self.selected_wallet = Some(wallet);
    }

    pub fn set_upi_id(&mut self, upi_id: impl Into<String>) {
        self.upi_id = upi_id.into();
    }

    /// Starts UPI verification. The id must be non-blank.
    pub fn begin_upi_verification(&mut self) -> Result<(), CheckoutError> {
        if self.upi_id.trim().is_empty() {
            return Err(CheckoutError::UpiIdRequired);
        }
        if self.is_processing() {
            return Err(CheckoutError::OperationPending);
        }
        self.upi_verification = self.upi_verification.begin()?;
        Ok(())
    }

    /// Verification always succeeds once its delay elapses.
    pub fn complete_upi_verification(&mut self) -> Result<(), CheckoutError> {
        self.upi_verification = self.upi_verification.complete()?;
        Ok(())
    }

    /// The first reason an order cannot be placed right now, if any.
    pub fn blocking_reason(&self) -> Option<NotReadyReason> {
        if self.payment.is_pending() {
            return Some(NotReadyReason::PaymentInProgress);
        }
        if self.upi_verification.is_pending() {
            return Some(NotReadyReason::VerificationInProgress);
        }
        if self.payment_method == PaymentMethod::Wallet {
            match self.selected_wallet {
                None => return Some(NotReadyReason::WalletNotSelected),
                Some(wallet) if wallet.requires_verification() && !self.is_upi_verified() => {
                    return Some(NotReadyReason::UpiNotVerified)
                }
                Some(_) => {}
            }
        }
        None
    }

    pub fn can_place_order(&self) -> bool {
        self.blocking_reason().is_none()
    }

    /// Starts the simulated payment for the given cart and freezes its total.
    pub fn place_order(&mut self, cart: &Cart) -> Result<PendingOrder, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        if let Some(reason) = self.blocking_reason() {
            return Err(CheckoutError::not_ready(reason));
        }

        let wallet = match self.payment_method {
            PaymentMethod::Wallet => self.selected_wallet,
            PaymentMethod::Card | PaymentMethod::Cod => None,
        };
        let order = PendingOrder::new(
            self.payment_method,
            wallet,
            cart.price_summary().total,
            cart.item_count(),
        );

        self.payment = self.payment.begin()?;
        self.pending_order = Some(order.clone());
        Ok(order)
    }

    /// Finishes the simulated payment and resets the payment view.
    ///
    /// The chosen payment method survives the reset; everything else returns
    /// to its initial value.
    pub fn complete_payment(&mut self) -> Result<PendingOrder, CheckoutError> {
        self.payment.complete()?;
        let order = self
            .pending_order
            .take()
            .ok_or(CheckoutError::OperationPending)?;

        self.active_tab = CheckoutTab::Cart;
        self.selected_wallet = None;
        self.upi_id.clear();
        self.upi_verification = self.upi_verification.reset();
        self.payment = self.payment.reset();
        Ok(order)
    }
}
