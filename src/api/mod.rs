//! API service modules for Tableau endpoints.
//!
//! Each service is a thin wrapper over the shared client plumbing: it
//! builds a path from the signed-in site, issues the request, and returns
//! the decoded resource or the propagated error.

mod datasources;
mod projects;

pub use datasources::DataSourcesService;
pub use projects::ProjectsService;
