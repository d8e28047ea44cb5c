//! Authentication and session management for the Tableau API.
//!
//! Sign-in exchanges a personal access token (a long-lived name + secret
//! pair) for a short-lived session bearer token and the resolved site
//! identifier. The exchange happens once, inside
//! [`TableauClient::connect`](crate::TableauClient::connect); afterwards
//! the session is read-only and every request carries the token in the
//! `X-Tableau-Auth` header.
//!
//! There is no token refresh: when the server expires the session, the
//! next call fails with the vendor's authentication error and the caller
//! constructs a new client.

mod session;

pub use session::Session;
pub(crate) use session::X_TABLEAU_AUTH;
