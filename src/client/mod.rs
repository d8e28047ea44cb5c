//! HTTP client and transport layer for the Tableau API.
//!
//! This module provides the main entry point [`TableauClient`] along with
//! its configuration and the query options used by list operations.
//!
//! # Example
//!
//! ```no_run
//! use tableau_rs::{TableauClient, with_page_size};
//!
//! # async fn example() -> tableau_rs::Result<()> {
//! let client = TableauClient::connect(
//!     "https://tableau.example.com",
//!     "ci-token",
//!     "top-secret-value",
//!     "acme",
//! ).await?;
//!
//! let first_page = client.projects().query(&[with_page_size(25)]).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod query;
mod response;

pub use config::{ClientConfig, DEFAULT_API_VERSION};
pub use http::TableauClient;
pub(crate) use http::{ClientInner, Transport};
