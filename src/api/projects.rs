//! Projects service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::client::query::{QueryOption, QueryOptions};
use crate::client::ClientInner;
use crate::models::{
    CreateProjectRequest, Pagination, Project, ProjectId, UpdateProjectRequest,
};
use crate::Result;

/// Service for project operations.
///
/// # Example
///
/// ```no_run
/// use tableau_rs::{with_filter_expression, with_page_size};
///
/// # async fn example(client: tableau_rs::TableauClient) -> tableau_rs::Result<()> {
/// let projects = client
///     .projects()
///     .query(&[with_page_size(25), with_filter_expression("name:eq:Operations")])
///     .await?;
///
/// for project in projects {
///     println!("{}: {}", project.id, project.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ProjectsService {
    inner: Arc<ClientInner>,
}

impl ProjectsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List projects on the site.
    ///
    /// Options are applied in order and each contributes at most one URL
    /// parameter; pass an empty slice for the server defaults.
    pub async fn query(&self, opts: &[QueryOption]) -> Result<Vec<Project>> {
        let path = QueryOptions::apply(opts)
            .append_to(&format!("sites/{}/projects", self.inner.site_id()));

        let response: Option<QueryProjectsResponse> = self.inner.get(&path).await?;
        Ok(response.map(|r| r.projects.project).unwrap_or_default())
    }

    /// Create a project.
    ///
    /// Returns `None` in the unusual case of the server answering with no
    /// content.
    pub async fn create(&self, request: &CreateProjectRequest) -> Result<Option<Project>> {
        let path = format!("sites/{}/projects", self.inner.site_id());
        let body = ProjectEnvelope { project: request };

        let response: Option<ProjectResponse> = self.inner.post(&path, &body).await?;
        Ok(response.and_then(|r| r.project))
    }

    /// Update a project.
    pub async fn update(
        &self,
        id: &ProjectId,
        request: &UpdateProjectRequest,
    ) -> Result<Option<Project>> {
        let path = format!("sites/{}/projects/{}", self.inner.site_id(), id);
        let body = ProjectEnvelope { project: request };

        let response: Option<ProjectResponse> = self.inner.put(&path, &body).await?;
        Ok(response.and_then(|r| r.project))
    }

    /// Delete a project.
    ///
    /// The server normally answers 204, so `Ok(None)` is the common
    /// success.
    pub async fn delete(&self, id: &ProjectId) -> Result<Option<Project>> {
        let path = format!("sites/{}/projects/{}", self.inner.site_id(), id);

        let response: Option<ProjectResponse> = self.inner.delete(&path).await?;
        Ok(response.and_then(|r| r.project))
    }
}

/// Request payloads travel under the `"project"` envelope key.
#[derive(Serialize)]
struct ProjectEnvelope<'a, P: Serialize> {
    project: &'a P,
}

#[derive(Deserialize)]
struct ProjectResponse {
    #[serde(default)]
    project: Option<Project>,
}

#[derive(Deserialize)]
struct QueryProjectsResponse {
    #[serde(default)]
    #[allow(dead_code)]
    pagination: Option<Pagination>,
    #[serde(default)]
    projects: ProjectList,
}

#[derive(Default, Deserialize)]
struct ProjectList {
    #[serde(default)]
    project: Vec<Project>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_body_wraps_payload() {
        let request = CreateProjectRequest {
            name: "Analytics".to_string(),
            ..Default::default()
        };
        let body = ProjectEnvelope { project: &request };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"project": {"name": "Analytics"}}));
    }

    #[test]
    fn test_query_response_decode() {
        let json = r#"{
            "pagination": {"pageSize": "100", "pageNumber": "1", "totalAvailable": "2"},
            "projects": {"project": [
                {"id": "p-1", "name": "Default"},
                {"id": "p-2", "name": "Operations"}
            ]}
        }"#;

        let response: QueryProjectsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.projects.project.len(), 2);
        assert_eq!(response.projects.project[1].name, "Operations");
    }

    #[test]
    fn test_query_response_tolerates_missing_blocks() {
        let response: QueryProjectsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.projects.project.is_empty());
    }
}
