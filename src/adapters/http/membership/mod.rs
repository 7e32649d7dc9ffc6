//! HTTP adapter for the membership programme and signup wizard.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChooseTierRequest, SignupResponse};
pub use routes::membership_routes;
