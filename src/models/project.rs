//! Project models and request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ProjectId;

/// Content permission policy for a project.
///
/// Controls whether the permission settings of content inside the project
/// are locked to the project, locked without applying to nested projects,
/// or managed by the individual content owners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentPermissions {
    /// Permissions are locked to the project and apply to nested projects
    LockedToProject,
    /// Content owners manage permissions for their own items
    ManagedByOwner,
    /// Permissions are locked to the project but not to nested projects
    LockedToProjectWithoutNested,
}

/// A Tableau project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique project identifier
    pub id: ProjectId,
    /// Parent project, absent for top-level projects
    #[serde(default)]
    pub parent_project_id: Option<ProjectId>,
    /// Project name
    pub name: String,
    /// Project description
    #[serde(default)]
    pub description: String,
    /// Content permission policy
    #[serde(default)]
    pub content_permissions: Option<ContentPermissions>,
    /// Project whose locked permissions govern this one, if any
    #[serde(default)]
    pub controlling_permissions_project_id: Option<ProjectId>,
    /// Whether the signed-in user may write to the project
    #[serde(default)]
    pub writeable: bool,
    /// Whether this is a top-level project
    #[serde(default)]
    pub top_level_project: bool,
    /// Project owner
    #[serde(default)]
    pub owner: Option<ProjectOwner>,
    /// Counts of content held by the project
    #[serde(default)]
    pub content_counts: Option<ContentCounts>,
    /// When the project was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the project was last updated
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Owner block embedded in a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOwner {
    /// User identifier
    pub id: String,
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// Username
    #[serde(default)]
    pub name: String,
    /// Display name
    #[serde(default)]
    pub full_name: String,
    /// Site role, e.g. "SiteAdministratorCreator"
    #[serde(default)]
    pub site_role: String,
    /// Last sign-in time
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

/// Counts of content held by a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCounts {
    /// Number of nested projects
    #[serde(default)]
    pub project_count: u32,
    /// Number of workbooks
    #[serde(default)]
    pub workbook_count: u32,
    /// Number of views
    #[serde(default)]
    pub view_count: u32,
    /// Number of data sources
    #[serde(default)]
    pub datasource_count: u32,
}

/// Pagination block returned with list responses.
///
/// The server sends these values as quoted numbers; they are kept as
/// strings. Iterating pages is the caller's job; pass page parameters
/// through query options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    /// Items per page
    pub page_size: String,
    /// Current page number
    pub page_number: String,
    /// Total items available across pages
    pub total_available: String,
}

/// Request payload for creating a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateProjectRequest {
    /// Parent project for the new project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_project_id: Option<ProjectId>,
    /// Project name
    pub name: String,
    /// Project description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Content permission policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_permissions: Option<ContentPermissions>,
}

/// Request payload for updating a project.
///
/// The target project is addressed by id in the request path, not in the
/// payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProjectRequest {
    /// New parent project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_project_id: Option<ProjectId>,
    /// New project name
    pub name: String,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New content permission policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_permissions: Option<ContentPermissions>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_project() {
        let json = r#"{
            "id": "p-1",
            "parentProjectId": "p-0",
            "name": "Operations",
            "description": "Ops dashboards",
            "contentPermissions": "LockedToProject",
            "writeable": true,
            "topLevelProject": false,
            "owner": {
                "id": "u-1",
                "name": "ops-admin",
                "siteRole": "SiteAdministratorCreator"
            },
            "contentCounts": {
                "projectCount": 2,
                "workbookCount": 14,
                "viewCount": 80,
                "datasourceCount": 5
            },
            "createdAt": "2024-03-01T09:00:00Z",
            "updatedAt": "2024-06-15T16:30:00Z"
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id.as_str(), "p-1");
        assert_eq!(project.name, "Operations");
        assert_eq!(
            project.content_permissions,
            Some(ContentPermissions::LockedToProject)
        );
        assert!(project.writeable);
        assert_eq!(project.content_counts.unwrap().workbook_count, 14);
        assert_eq!(project.owner.unwrap().name, "ops-admin");
    }

    #[test]
    fn test_deserialize_sparse_project() {
        // Query responses omit most blocks
        let project: Project =
            serde_json::from_str(r#"{"id": "p-2", "name": "Default"}"#).unwrap();
        assert_eq!(project.description, "");
        assert!(project.owner.is_none());
        assert!(project.created_at.is_none());
    }

    #[test]
    fn test_create_request_omits_empty_optionals() {
        let request = CreateProjectRequest {
            name: "Analytics".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Analytics"}));
    }

    #[test]
    fn test_create_request_round_trip() {
        let request = CreateProjectRequest {
            parent_project_id: Some(ProjectId::new("p-0")),
            name: "Analytics".to_string(),
            description: Some("Team sandbox".to_string()),
            content_permissions: Some(ContentPermissions::ManagedByOwner),
        };

        let encoded = serde_json::to_string(&request).unwrap();
        let decoded: CreateProjectRequest = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.name, request.name);
        assert_eq!(decoded.description, request.description);
        assert_eq!(decoded.content_permissions, request.content_permissions);
        assert_eq!(decoded.parent_project_id, request.parent_project_id);
    }

    #[test]
    fn test_content_permissions_wire_names() {
        assert_eq!(
            serde_json::to_string(&ContentPermissions::LockedToProjectWithoutNested)
                .unwrap(),
            "\"LockedToProjectWithoutNested\""
        );
    }

    #[test]
    fn test_pagination_string_fields() {
        let pagination: Pagination = serde_json::from_str(
            r#"{"pageSize": "100", "pageNumber": "1", "totalAvailable": "233"}"#,
        )
        .unwrap();
        assert_eq!(pagination.page_size, "100");
        assert_eq!(pagination.total_available, "233");
    }
}
