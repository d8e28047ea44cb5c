//! # tableau-rs
//!
//! A Rust client for the Tableau REST API.
//!
//! This crate covers project and data-source management on a Tableau
//! site, authenticated with a personal access token. The heavy lifting
//! (sign-in, request construction, response decoding and error mapping)
//! lives in the shared client plumbing; resource services are thin typed
//! wrappers over it.
//!
//! ## Features
//!
//! - **Authentication**: personal access token sign-in, with the session
//!   token attached to every request
//! - **Projects**: query, create, update, delete
//! - **Data Sources**: get, delete
//! - **Typed errors**: vendor error bodies are surfaced with their code
//!   and message; malformed responses carry diagnostic metadata
//! - **Async-first**: built on reqwest/Tokio
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tableau_rs::{TableauClient, CreateProjectRequest};
//!
//! #[tokio::main]
//! async fn main() -> tableau_rs::Result<()> {
//!     // Sign in with a personal access token
//!     let client = TableauClient::connect(
//!         "https://tableau.example.com",
//!         "ci-token",
//!         "top-secret-value",
//!         "acme",
//!     ).await?;
//!
//!     // List projects
//!     let projects = client.projects().query(&[]).await?;
//!     println!("found {} projects", projects.len());
//!
//!     // Create one
//!     let created = client.projects().create(&CreateProjectRequest {
//!         name: "Analytics".to_string(),
//!         ..Default::default()
//!     }).await?;
//!     if let Some(project) = created {
//!         println!("created project {}", project.id);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Query options
//!
//! List operations take an ordered slice of options; each sets at most
//! one URL parameter, and an option with a default value sets nothing:
//!
//! ```rust,no_run
//! use tableau_rs::{with_filter_expression, with_page_number, with_page_size};
//!
//! # async fn example(client: tableau_rs::TableauClient) -> tableau_rs::Result<()> {
//! let projects = client.projects().query(&[
//!     with_page_size(25),
//!     with_page_number(2),
//!     with_filter_expression("name:eq:Operations"),
//! ]).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::Session;
pub use client::query::{
    with_filter_expression, with_page_number, with_page_size, with_sort_expression,
    QueryOption, QueryOptions,
};
pub use client::{ClientConfig, TableauClient};
pub use error::{Error, Result, ERR_CODE_INTERNAL};
pub use models::{
    ContentPermissions, CreateProjectRequest, DataSource, DataSourceId, Pagination,
    Project, ProjectId, SiteId, UpdateProjectRequest,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use tableau_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::Session;
    pub use crate::client::query::{
        with_filter_expression, with_page_number, with_page_size, with_sort_expression,
        QueryOption,
    };
    pub use crate::client::{ClientConfig, TableauClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        ContentCounts, ContentPermissions, CreateProjectRequest, DataSource,
        DataSourceId, Project, ProjectId, ProjectOwner, SiteId, UpdateProjectRequest,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user_agent_is_versioned() {
        let config = ClientConfig::default();
        assert_eq!(
            config.user_agent,
            format!("tableau-rs/{}", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn test_id_newtypes_display() {
        assert_eq!(SiteId::new("s-1").to_string(), "s-1");
        assert_eq!(ProjectId::new("p-1").to_string(), "p-1");
        assert_eq!(DataSourceId::new("ds-1").to_string(), "ds-1");
    }
}
