//! Content domain module.
//!
//! - `offers` - promo offers and codes
//! - `carousel` - generic wrap-around Carousel
//! - `showcase` - featured dishes and testimonials
//! - `info` - FAQs, legal documents, about, footer actions
//! - `forms` - newsletter, location request, franchise inquiry

mod carousel;
mod forms;
mod info;
mod offers;
mod showcase;

pub use carousel::Carousel;
pub use forms::{
    FormError, FranchiseInquiry, LocationRequest, NewsletterSignup, FRANCHISE_INQUIRY_SUCCESS,
    LOCATION_REQUEST_SUCCESS, NEWSLETTER_SUCCESS,
};
pub use info::{
    faqs, AboutSection, ActionGroup, CompanyValue, Faq, Footer, InfoAction, LegalDocument,
    SiteInfo, Stat,
};
pub use offers::{Offer, OfferBook};
pub use showcase::{featured_dishes, testimonials, FeaturedDish, Testimonial};
