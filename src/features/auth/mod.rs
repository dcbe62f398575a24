//! Bearer-token authentication.
//!
//! Tokens are HS256 JWTs signed with the shared `JWT_SECRET`. The middleware in
//! `core::middleware` attaches an [`model::AuthenticatedUser`] to the request
//! and [`guards`] enforce roles per handler.

mod validator;

pub mod guards;
pub mod model;

pub use validator::JwtValidator;
