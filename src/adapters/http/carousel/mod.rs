//! HTTP adapter for the featured-dish and testimonial carousels.

mod dto;
mod handlers;
mod routes;

pub use dto::CarouselResponse;
pub use routes::carousel_routes;
