//! HTTP adapter for offers, site content, contact forms and footer actions.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CopiedCodeResponse, FeaturedDishResponse, FooterResponse, HelpCentreResponse, HomeResponse,
    LegalDocumentResponse, LegalSummaryResponse, OfferResponse,
};
pub use routes::content_routes;
