//! HTTP handlers for site content, offers, forms and footer actions.

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{
    CopiedCodeResponse, FeaturedDishResponse, FooterResponse, HelpCentreResponse, HomeResponse,
    LegalDocumentResponse, LegalSummaryResponse, OfferResponse,
};
use crate::adapters::http::error::{parse_session_id, ApiResult};
use crate::adapters::http::session::ToastResponse;
use crate::adapters::http::AppState;
use crate::domain::content::{
    AboutSection, FranchiseInquiry, InfoAction, LegalDocument, LocationRequest, NewsletterSignup,
    Testimonial,
};

// ════════════════════════════════════════════════════════════════════════════
// Static content
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/home - Hero statistics
pub async fn get_home(State(state): State<AppState>) -> Json<HomeResponse> {
    Json(HomeResponse {
        hero_stats: state.content.hero_stats().to_vec(),
    })
}

/// GET /api/offers
pub async fn list_offers(State(state): State<AppState>) -> Json<Vec<OfferResponse>> {
    Json(
        state
            .content
            .offers()
            .iter()
            .map(OfferResponse::from)
            .collect(),
    )
}

/// GET /api/featured - Dishes in the featured carousel
pub async fn list_featured(State(state): State<AppState>) -> Json<Vec<FeaturedDishResponse>> {
    Json(
        state
            .content
            .featured()
            .iter()
            .map(FeaturedDishResponse::from)
            .collect(),
    )
}

/// GET /api/testimonials
pub async fn list_testimonials(State(state): State<AppState>) -> Json<Vec<Testimonial>> {
    Json(state.content.testimonials().to_vec())
}

/// GET /api/faqs - FAQ accordion and help-centre actions
pub async fn get_help_centre(State(state): State<AppState>) -> Json<HelpCentreResponse> {
    let (_, actions) = state.content.footer();
    Json(HelpCentreResponse::new(state.content.faqs(), actions))
}

/// GET /api/about
pub async fn get_about(State(state): State<AppState>) -> Json<AboutSection> {
    Json(state.content.about().clone())
}

/// GET /api/footer
pub async fn get_footer(State(state): State<AppState>) -> Json<FooterResponse> {
    let (footer, actions) = state.content.footer();
    Json(FooterResponse::new(footer, actions))
}

/// GET /api/legal - Titles and summaries of every legal page
pub async fn list_legal() -> Json<Vec<LegalSummaryResponse>> {
    Json(
        LegalDocument::all()
            .iter()
            .map(|doc| LegalSummaryResponse::from(*doc))
            .collect(),
    )
}

/// GET /api/legal/:document - `privacy`, `terms`, `cookies` or `accessibility`
pub async fn get_legal(
    State(state): State<AppState>,
    Path(document): Path<String>,
) -> ApiResult<Json<LegalDocumentResponse>> {
    let doc = state.content.legal(&document)?;
    Ok(Json(doc.into()))
}

// ════════════════════════════════════════════════════════════════════════════
// Offers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions/:id/promo-codes/:code/copy
pub async fn copy_code(
    State(state): State<AppState>,
    Path((session_id, code)): Path<(String, String)>,
) -> ApiResult<Json<OfferResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let offer = state.content.copy_code(&session_id, &code).await?;
    Ok(Json((&offer).into()))
}

/// GET /api/sessions/:id/promo-codes/copied
pub async fn get_copied_code(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<CopiedCodeResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let copied_code = state.content.copied_code(&session_id).await?;
    Ok(Json(CopiedCodeResponse { copied_code }))
}

/// POST /api/sessions/:id/offers/:offer_id/order - Jump to the offer's menu tab
pub async fn order_offer(
    State(state): State<AppState>,
    Path((session_id, offer_id)): Path<(String, String)>,
) -> ApiResult<Json<OfferResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let offer = state.content.order_now(&session_id, &offer_id).await?;
    Ok(Json((&offer).into()))
}

// ════════════════════════════════════════════════════════════════════════════
// Forms and actions
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/newsletter
pub async fn subscribe(
    State(state): State<AppState>,
    Json(form): Json<NewsletterSignup>,
) -> Json<ToastResponse> {
    Json(state.content.subscribe(&form).into())
}

/// POST /api/location-requests
pub async fn request_location(
    State(state): State<AppState>,
    Json(form): Json<LocationRequest>,
) -> Json<ToastResponse> {
    Json(state.content.request_location(&form).into())
}

/// POST /api/franchise-inquiries
pub async fn franchise_inquiry(
    State(state): State<AppState>,
    Json(form): Json<FranchiseInquiry>,
) -> Json<ToastResponse> {
    Json(state.content.franchise_inquiry(&form).into())
}

/// POST /api/sessions/:id/actions/:action_id - Footer or help-centre click
pub async fn perform_action(
    State(state): State<AppState>,
    Path((session_id, action_id)): Path<(String, String)>,
) -> ApiResult<Json<InfoAction>> {
    let session_id = parse_session_id(&session_id)?;
    let action = state.content.perform_action(&session_id, &action_id).await?;
    Ok(Json(action))
}
