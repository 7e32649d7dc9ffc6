//! Offers, contact forms, footer actions and the static site content.

use futures::FutureExt;

use super::{HandlerContext, HandlerError};
use crate::domain::content::{
    faqs, featured_dishes, testimonials, AboutSection, Faq, FeaturedDish, Footer,
    FranchiseInquiry, InfoAction, LegalDocument, LocationRequest, NewsletterSignup, Offer,
    OfferBook, SiteInfo, Stat, Testimonial,
};
use crate::domain::content::FormError;
use crate::domain::foundation::SessionId;
use crate::domain::notification::Toast;
use crate::ports::{TimerKey, TimerKind};

/// Turns a form validation result into the toast the visitor sees.
fn form_toast(result: Result<&'static str, FormError>) -> Toast {
    match result {
        Ok(message) => Toast::success(message),
        Err(err) => Toast::error(err.to_string()),
    }
}

pub struct ContentHandler {
    ctx: HandlerContext,
    offers: &'static OfferBook,
    site: &'static SiteInfo,
}

impl ContentHandler {
    pub fn new(ctx: HandlerContext) -> Self {
        Self {
            ctx,
            offers: OfferBook::standard(),
            site: SiteInfo::standard(),
        }
    }

    // ════════════════════════════════════════════════════════════════════
    // Static content
    // ════════════════════════════════════════════════════════════════════

    pub fn offers(&self) -> &'static [Offer] {
        self.offers.offers()
    }

    pub fn faqs(&self) -> &'static [Faq] {
        faqs()
    }

    pub fn about(&self) -> &'static AboutSection {
        &self.site.about
    }

    pub fn hero_stats(&self) -> &'static [Stat] {
        &self.site.hero_stats
    }

    pub fn footer(&self) -> (&'static Footer, &'static [InfoAction]) {
        (&self.site.footer, &self.site.actions)
    }

    pub fn featured(&self) -> &'static [FeaturedDish] {
        featured_dishes()
    }

    pub fn testimonials(&self) -> &'static [Testimonial] {
        testimonials()
    }

    pub fn legal(&self, slug: &str) -> Result<LegalDocument, HandlerError> {
        slug.parse().map_err(HandlerError::InvalidInput)
    }

    // ════════════════════════════════════════════════════════════════════
    // Offers
    // ════════════════════════════════════════════════════════════════════

    /// Copies a promo code. The copied indicator clears itself after a
    /// short delay; the cart is never touched.
    ///
    /// # Errors
    ///
    /// - `OfferNotFound` if no offer carries the code
    pub async fn copy_code(&self, id: &SessionId, code: &str) -> Result<Offer, HandlerError> {
        let offer = self
            .offers
            .find_by_code(code)
            .ok_or_else(|| HandlerError::OfferNotFound(code.to_string()))?;

        let mut session = self.ctx.lock_session(id).await?;
        session.copied_code = Some(offer.code.clone());
        self.ctx.toast(*id, Toast::success(offer.copied_message())).await;

        let ctx = self.ctx.clone();
        let session_id = *id;
        self.ctx.timers.schedule(
            TimerKey::new(session_id, TimerKind::PromoCopiedReset),
            self.ctx.delays.promo_copied_reset(),
            async move {
                if let Some(mut session) = ctx.lock_for_timer(&session_id).await {
                    session.copied_code = None;
                }
            }
            .boxed(),
        );
        Ok(offer.clone())
    }

    pub async fn copied_code(&self, id: &SessionId) -> Result<Option<String>, HandlerError> {
        Ok(self.ctx.lock_session(id).await?.copied_code.clone())
    }

    /// "Order now" on an offer jumps the menu to the offer's category.
    pub async fn order_now(&self, id: &SessionId, offer_id: &str) -> Result<Offer, HandlerError> {
        let offer = self
            .offers
            .find(offer_id)
            .ok_or_else(|| HandlerError::OfferNotFound(offer_id.to_string()))?;

        let mut session = self.ctx.lock_session(id).await?;
        session.active_category = offer.category;
        self.ctx.toast(*id, Toast::success(offer.order_now_message())).await;
        Ok(offer.clone())
    }

    // ════════════════════════════════════════════════════════════════════
    // Forms and footer actions
    // ════════════════════════════════════════════════════════════════════

    pub fn subscribe(&self, form: &NewsletterSignup) -> Toast {
        form_toast(form.validate())
    }

    pub fn request_location(&self, form: &LocationRequest) -> Toast {
        form_toast(form.validate())
    }

    pub fn franchise_inquiry(&self, form: &FranchiseInquiry) -> Toast {
        form_toast(form.validate())
    }

    /// Triggers a footer or help-centre action and queues its toast.
    pub async fn perform_action(
        &self,
        id: &SessionId,
        action_id: &str,
    ) -> Result<InfoAction, HandlerError> {
        let action = self
            .site
            .action(action_id)
            .ok_or_else(|| HandlerError::ActionNotFound(action_id.to_string()))?;
        drop(self.ctx.lock_session(id).await?);
        self.ctx.toast(*id, action.toast()).await;
        Ok(action.clone())
    }
}
