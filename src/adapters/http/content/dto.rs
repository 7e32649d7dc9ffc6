//! HTTP DTOs for site content.

use serde::Serialize;

use crate::domain::content::{
    ActionGroup, Faq, FeaturedDish, Footer, InfoAction, LegalDocument, Offer, Stat,
};
use crate::domain::menu::MenuCategory;

#[derive(Debug, Clone, Serialize)]
pub struct OfferResponse {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub code: String,
    pub category: MenuCategory,
    pub image: String,
    pub valid_until: String,
}

impl From<&Offer> for OfferResponse {
    fn from(offer: &Offer) -> Self {
        Self {
            id: offer.id.clone(),
            title: offer.title.clone(),
            subtitle: offer.subtitle.clone(),
            description: offer.description.clone(),
            code: offer.code.clone(),
            category: offer.category,
            image: offer.image.clone(),
            valid_until: offer.valid_until.clone(),
        }
    }
}

/// The promo code currently showing its "copied" indicator, if any.
#[derive(Debug, Clone, Serialize)]
pub struct CopiedCodeResponse {
    pub copied_code: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeaturedDishResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub rating: f32,
    pub cook_time: String,
    pub is_special: bool,
}

impl From<&FeaturedDish> for FeaturedDishResponse {
    fn from(dish: &FeaturedDish) -> Self {
        Self {
            id: dish.id.clone(),
            name: dish.name.clone(),
            description: dish.description.clone(),
            price: dish.price.to_string(),
            image: dish.image.clone(),
            rating: dish.rating,
            cook_time: dish.cook_time.clone(),
            is_special: dish.is_special,
        }
    }
}

/// Hero section statistics.
#[derive(Debug, Clone, Serialize)]
pub struct HomeResponse {
    pub hero_stats: Vec<Stat>,
}

/// FAQ accordion plus the help-centre quick actions.
#[derive(Debug, Clone, Serialize)]
pub struct HelpCentreResponse {
    pub faqs: Vec<Faq>,
    pub actions: Vec<InfoAction>,
}

impl HelpCentreResponse {
    pub fn new(faqs: &[Faq], actions: &[InfoAction]) -> Self {
        Self {
            faqs: faqs.to_vec(),
            actions: actions
                .iter()
                .filter(|action| action.group == ActionGroup::Help)
                .cloned()
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterResponse {
    pub tagline: String,
    pub copyright: String,
    pub customer_service: Vec<InfoAction>,
    pub contact: Vec<InfoAction>,
    pub social: Vec<InfoAction>,
    pub legal: Vec<LegalSummaryResponse>,
}

impl FooterResponse {
    pub fn new(footer: &Footer, actions: &[InfoAction]) -> Self {
        let in_group = |group: ActionGroup| {
            actions
                .iter()
                .filter(|action| action.group == group)
                .cloned()
                .collect::<Vec<_>>()
        };
        Self {
            tagline: footer.tagline.clone(),
            copyright: footer.copyright.clone(),
            customer_service: in_group(ActionGroup::CustomerService),
            contact: in_group(ActionGroup::Contact),
            social: in_group(ActionGroup::Social),
            legal: LegalDocument::all()
                .iter()
                .map(|doc| LegalSummaryResponse::from(*doc))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LegalSummaryResponse {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

impl From<LegalDocument> for LegalSummaryResponse {
    fn from(doc: LegalDocument) -> Self {
        Self {
            slug: doc.slug(),
            title: doc.title(),
            summary: doc.summary(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LegalDocumentResponse {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub body: &'static str,
}

impl From<LegalDocument> for LegalDocumentResponse {
    fn from(doc: LegalDocument) -> Self {
        Self {
            slug: doc.slug(),
            title: doc.title(),
            summary: doc.summary(),
            body: doc.body(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{OfferBook, SiteInfo};

    #[test]
    fn footer_splits_actions_by_group() {
        let site = SiteInfo::standard();
        let footer = FooterResponse::new(&site.footer, &site.actions);
        assert!(footer
            .customer_service
            .iter()
            .any(|a| a.id == "order-tracking"));
        assert!(footer.contact.iter().all(|a| a.group == ActionGroup::Contact));
        assert_eq!(footer.legal.len(), LegalDocument::all().len());
    }

    #[test]
    fn offer_response_keeps_the_code() {
        let offer = OfferBook::standard().find("1").unwrap();
        let response = OfferResponse::from(offer);
        assert_eq!(response.code, "FAMILY50");
        assert_eq!(response.category, MenuCategory::Combos);
    }
}
