//! Scripted order stages.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStage {
    #[default]
    Preparing,
    Ready,
    OutForDelivery,
    Delivered,
}

impl OrderStage {
    pub fn all() -> &'static [OrderStage] {
        &[
            OrderStage::Preparing,
            OrderStage::Ready,
            OrderStage::OutForDelivery,
            OrderStage::Delivered,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            OrderStage::Preparing => "preparing",
            OrderStage::Ready => "ready",
            OrderStage::OutForDelivery => "out-for-delivery",
            OrderStage::Delivered => "delivered",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            OrderStage::Preparing => "Order Received",
            OrderStage::Ready => "Order Ready",
            OrderStage::OutForDelivery => "Out for Delivery",
            OrderStage::Delivered => "Delivered",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OrderStage::Preparing => "Our chefs are preparing your delicious meal",
            OrderStage::Ready => "Your order is ready for pickup/delivery",
            OrderStage::OutForDelivery => "Your order is on its way to you",
            OrderStage::Delivered => "Enjoy your meal!",
        }
    }

    /// Seconds spent in this stage before advancing.
    pub fn duration_secs(&self) -> u32 {
        match self {
            OrderStage::Preparing => 8,
            OrderStage::Ready => 3,
            OrderStage::OutForDelivery => 10,
            OrderStage::Delivered => 0,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            OrderStage::Preparing => 0,
            OrderStage::Ready => 1,
            OrderStage::OutForDelivery => 2,
            OrderStage::Delivered => 3,
        }
    }

    pub fn next(&self) -> Option<OrderStage> {
        match self {
            OrderStage::Preparing => Some(OrderStage::Ready),
            OrderStage::Ready => Some(OrderStage::OutForDelivery),
            OrderStage::OutForDelivery => Some(OrderStage::Delivered),
            OrderStage::Delivered => None,
        }
    }
}

impl StateMachine for OrderStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.next() == Some(*target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        self.next().into_iter().collect()
    }
}
