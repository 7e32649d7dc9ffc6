//! Simulated-delay configuration
//!
//! Every fake asynchronous step on the site waits a fixed time. Defaults are
//! the storefront's real timings; tests and demos may shorten them.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound for any single delay.
pub const MAX_DELAY_MS: u64 = 60_000;

/// Delays in milliseconds
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SimulationConfig {
    pub upi_verification_ms: u64,
    pub payment_processing_ms: u64,
    pub checkout_redirect_ms: u64,
    /// One order-tracker "second"
    pub order_tick_ms: u64,
    pub tracker_auto_close_ms: u64,
    pub chat_welcome_ms: u64,
    pub chat_reply_ms: u64,
    /// Reply delay once a human agent has joined
    pub chat_agent_reply_ms: u64,
    pub chat_handoff_connect_ms: u64,
    pub chat_handoff_agent_ms: u64,
    pub promo_copied_reset_ms: u64,
    pub featured_rotation_ms: u64,
    /// Extra wait before the testimonials carousel starts rotating
    pub testimonials_start_ms: u64,
    pub testimonials_rotation_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            upi_verification_ms: 2000,
            payment_processing_ms: 2000,
            checkout_redirect_ms: 2000,
            order_tick_ms: 1000,
            tracker_auto_close_ms: 5000,
            chat_welcome_ms: 500,
            chat_reply_ms: 1500,
            chat_agent_reply_ms: 500,
            chat_handoff_connect_ms: 1000,
            chat_handoff_agent_ms: 3000,
            promo_copied_reset_ms: 2000,
            featured_rotation_ms: 5000,
            testimonials_start_ms: 3000,
            testimonials_rotation_ms: 5000,
        }
    }
}

impl SimulationConfig {
    fn delays(&self) -> [(&'static str, u64); 14] {
        [
            ("upi_verification_ms", self.upi_verification_ms),
            ("payment_processing_ms", self.payment_processing_ms),
            ("checkout_redirect_ms", self.checkout_redirect_ms),
            ("order_tick_ms", self.order_tick_ms),
            ("tracker_auto_close_ms", self.tracker_auto_close_ms),
            ("chat_welcome_ms", self.chat_welcome_ms),
            ("chat_reply_ms", self.chat_reply_ms),
            ("chat_agent_reply_ms", self.chat_agent_reply_ms),
            ("chat_handoff_connect_ms", self.chat_handoff_connect_ms),
            ("chat_handoff_agent_ms", self.chat_handoff_agent_ms),
            ("promo_copied_reset_ms", self.promo_copied_reset_ms),
            ("featured_rotation_ms", self.featured_rotation_ms),
            ("testimonials_start_ms", self.testimonials_start_ms),
            ("testimonials_rotation_ms", self.testimonials_rotation_ms),
        ]
    }

    /// Validate simulation delays
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some((name, _)) = self.delays().into_iter().find(|(_, ms)| *ms > MAX_DELAY_MS) {
            return Err(ValidationError::DelayTooLong {
                name,
                max_ms: MAX_DELAY_MS,
            });
        }
        if self.order_tick_ms == 0 {
            return Err(ValidationError::InvalidOrderTick);
        }
        if self.featured_rotation_ms == 0 || self.testimonials_rotation_ms == 0 {
            return Err(ValidationError::InvalidRotationPeriod);
        }
        Ok(())
    }

    pub fn upi_verification(&self) -> Duration {
        Duration::from_millis(self.upi_verification_ms)
    }

    pub fn payment_processing(&self) -> Duration {
        Duration::from_millis(self.payment_processing_ms)
    }

    pub fn checkout_redirect(&self) -> Duration {
        Duration::from_millis(self.checkout_redirect_ms)
    }

    pub fn order_tick(&self) -> Duration {
        Duration::from_millis(self.order_tick_ms)
    }

    pub fn tracker_auto_close(&self) -> Duration {
        Duration::from_millis(self.tracker_auto_close_ms)
    }

    pub fn chat_welcome(&self) -> Duration {
        Duration::from_millis(self.chat_welcome_ms)
    }

    /// Typing delay before a canned answer.
    pub fn chat_reply(&self, agent_connected: bool) -> Duration {
        if agent_connected {
            Duration::from_millis(self.chat_agent_reply_ms)
        } else {
            Duration::from_millis(self.chat_reply_ms)
        }
    }

    pub fn chat_handoff_connect(&self) -> Duration {
        Duration::from_millis(self.chat_handoff_connect_ms)
    }

    pub fn chat_handoff_agent(&self) -> Duration {
        Duration::from_millis(self.chat_handoff_agent_ms)
    }

    pub fn promo_copied_reset(&self) -> Duration {
        Duration::from_millis(self.promo_copied_reset_ms)
    }

    pub fn featured_rotation(&self) -> Duration {
        Duration::from_millis(self.featured_rotation_ms)
    }

    /// Time until the first testimonials rotation.
    pub fn testimonials_first_rotation(&self) -> Duration {
        Duration::from_millis(self.testimonials_start_ms + self.testimonials_rotation_ms)
    }

    pub fn testimonials_rotation(&self) -> Duration {
        Duration::from_millis(self.testimonials_rotation_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_storefront_timings() {
        let sim = SimulationConfig::default();
        assert_eq!(sim.upi_verification(), Duration::from_secs(2));
        assert_eq!(sim.order_tick(), Duration::from_secs(1));
        assert_eq!(sim.tracker_auto_close(), Duration::from_secs(5));
        assert_eq!(sim.chat_reply(false), Duration::from_millis(1500));
        assert_eq!(sim.chat_reply(true), Duration::from_millis(500));
        assert_eq!(sim.testimonials_first_rotation(), Duration::from_secs(8));
        assert!(sim.validate().is_ok());
    }

    #[test]
    fn overly_long_delay_is_rejected_by_name() {
        let sim = SimulationConfig {
            chat_handoff_agent_ms: MAX_DELAY_MS + 1,
            ..Default::default()
        };
        assert_eq!(
            sim.validate(),
            Err(ValidationError::DelayTooLong {
                name: "chat_handoff_agent_ms",
                max_ms: MAX_DELAY_MS
            })
        );
    }

    #[test]
    fn zero_order_tick_is_rejected() {
        let sim = SimulationConfig {
            order_tick_ms: 0,
            ..Default::default()
        };
        assert_eq!(sim.validate(), Err(ValidationError::InvalidOrderTick));
    }

    #[test]
    fn zero_delays_are_allowed_for_one_shot_steps() {
        let sim = SimulationConfig {
            upi_verification_ms: 0,
            payment_processing_ms: 0,
            chat_reply_ms: 0,
            ..Default::default()
        };
        assert!(sim.validate().is_ok());
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let sim: SimulationConfig =
            serde_json::from_str(r#"{ "order_tick_ms": 10 }"#).unwrap();
        assert_eq!(sim.order_tick_ms, 10);
        assert_eq!(sim.payment_processing_ms, 2000);
    }
}
