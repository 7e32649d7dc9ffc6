//! Membership programme and the signup wizard.

use super::{HandlerContext, HandlerError};
use crate::domain::foundation::SessionId;
use crate::domain::membership::{
    Benefit, MembershipProgram, MembershipSignup, MembershipTier, SignupFormUpdate, TierDetails,
    DOWNLOAD_APP_MESSAGE,
};
use crate::domain::notification::Toast;

pub struct MembershipHandler {
    ctx: HandlerContext,
    program: &'static MembershipProgram,
}

impl MembershipHandler {
    pub fn new(ctx: HandlerContext) -> Self {
        Self {
            ctx,
            program: MembershipProgram::standard(),
        }
    }

    pub fn tiers(&self) -> &'static [TierDetails] {
        self.program.tiers()
    }

    pub fn benefits(&self) -> &'static [Benefit] {
        self.program.benefits()
    }

    pub async fn view(&self, id: &SessionId) -> Result<MembershipSignup, HandlerError> {
        Ok(self.ctx.lock_session(id).await?.membership.clone())
    }

    pub async fn choose_tier(
        &self,
        id: &SessionId,
        tier: MembershipTier,
    ) -> Result<MembershipSignup, HandlerError> {
        let mut session = self.ctx.lock_session(id).await?;
        session.membership.choose_tier(tier);
        Ok(session.membership.clone())
    }

    pub async fn start_free_trial(&self, id: &SessionId) -> Result<MembershipSignup, HandlerError> {
        let mut session = self.ctx.lock_session(id).await?;
        session.membership.start_free_trial();
        Ok(session.membership.clone())
    }

    pub async fn update_form(
        &self,
        id: &SessionId,
        update: SignupFormUpdate,
    ) -> Result<MembershipSignup, HandlerError> {
        let mut session = self.ctx.lock_session(id).await?;
        session.membership.update_form(update);
        Ok(session.membership.clone())
    }

    /// Submits the current step. Validation failures become error toasts.
    pub async fn submit(&self, id: &SessionId) -> Result<MembershipSignup, HandlerError> {
        let mut session = self.ctx.lock_session(id).await?;
        match session.membership.submit(self.program) {
            Ok(outcome) => {
                if let Some(message) = outcome.welcome_message() {
                    tracing::info!(session_id = %id, ?outcome, "membership signup completed");
                    self.ctx.toast(*id, Toast::success(message)).await;
                }
            }
            Err(err) => self.ctx.toast(*id, Toast::error(err.to_string())).await,
        }
        Ok(session.membership.clone())
    }

    pub async fn back(&self, id: &SessionId) -> Result<MembershipSignup, HandlerError> {
        let mut session = self.ctx.lock_session(id).await?;
        session.membership.back();
        Ok(session.membership.clone())
    }

    pub async fn cancel(&self, id: &SessionId) -> Result<MembershipSignup, HandlerError> {
        let mut session = self.ctx.lock_session(id).await?;
        session.membership.cancel();
        Ok(session.membership.clone())
    }

    pub async fn download_app(&self, id: &SessionId) -> Result<(), HandlerError> {
        drop(self.ctx.lock_session(id).await?);
        self.ctx.toast(*id, Toast::info(DOWNLOAD_APP_MESSAGE)).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::context::test_support::*;
    use super::*;
    use crate::domain::membership::SignupStep;
    use crate::domain::notification::ToastKind;

    fn details() -> SignupFormUpdate {
        SignupFormUpdate {
            name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn paid_tier_needs_payment_details() {
        let ctx = context();
        let handler = MembershipHandler::new(ctx.clone());
        let id = new_session(&ctx).await;

        handler.choose_tier(&id, MembershipTier::Platinum).await.unwrap();
        handler.update_form(&id, details()).await.unwrap();
        let signup = handler.submit(&id).await.unwrap();
        assert_eq!(signup.step(), SignupStep::Payment);

        let signup = handler.submit(&id).await.unwrap();
        assert_eq!(signup.step(), SignupStep::Payment);
        assert_eq!(
            toasts(&ctx, &id).await,
            vec![(ToastKind::Error, "Please fill in all payment details".to_string())]
        );

        handler
            .update_form(
                &id,
                SignupFormUpdate {
                    card_number: Some("4242 4242 4242 4242".into()),
                    expiry_date: Some("12/27".into()),
                    cvv: Some("123".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let signup = handler.submit(&id).await.unwrap();
        assert!(!signup.is_open());
        assert_eq!(
            toasts(&ctx, &id).await,
            vec![(
                ToastKind::Success,
                "🎉 Welcome to CRISPY ELITE Platinum Elite! Check your email for your digital membership card."
                    .to_string()
            )]
        );
    }

    #[tokio::test]
    async fn missing_details_keep_the_wizard_on_step_two() {
        let ctx = context();
        let handler = MembershipHandler::new(ctx.clone());
        let id = new_session(&ctx).await;

        handler.start_free_trial(&id).await.unwrap();
        let signup = handler.submit(&id).await.unwrap();
        assert_eq!(signup.step(), SignupStep::Details);
        assert_eq!(signup.selected_tier(), Some(MembershipTier::Gold));
        assert_eq!(
            toasts(&ctx, &id).await,
            vec![(ToastKind::Error, "Please fill in all required fields".to_string())]
        );
    }

    #[tokio::test]
    async fn free_tier_completes_without_payment() {
        let ctx = context();
        let handler = MembershipHandler::new(ctx.clone());
        let id = new_session(&ctx).await;

        handler.choose_tier(&id, MembershipTier::Bronze).await.unwrap();
        handler.update_form(&id, details()).await.unwrap();
        handler.submit(&id).await.unwrap();
        let signup = handler.submit(&id).await.unwrap();

        assert!(!signup.is_open());
        let toasts = toasts(&ctx, &id).await;
        assert_eq!(toasts.len(), 1);
        assert!(toasts[0].1.contains("Crispy Starter"));
    }

    #[tokio::test]
    async fn download_app_is_an_info_toast() {
        let ctx = context();
        let handler = MembershipHandler::new(ctx.clone());
        let id = new_session(&ctx).await;

        handler.download_app(&id).await.unwrap();
        assert_eq!(
            toasts(&ctx, &id).await,
            vec![(ToastKind::Info, DOWNLOAD_APP_MESSAGE.to_string())]
        );
    }

    #[test]
    fn programme_lists_three_tiers() {
        let handler = MembershipHandler::new(context());
        assert_eq!(handler.tiers().len(), 3);
        assert_eq!(handler.benefits().len(), 4);
    }
}
