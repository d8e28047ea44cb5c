//! Data source models.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DataSourceId;

/// A Tableau data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    /// Unique data source identifier
    pub id: DataSourceId,
    /// Data source name
    pub name: String,
    /// Note attached when the data source was certified
    #[serde(default)]
    pub certification_note: String,
    /// Content URL slug
    #[serde(default)]
    pub content_url: String,
    /// Whether extracts are encrypted at rest
    #[serde(default)]
    pub encrypt_extracts: String,
    /// Data source description
    #[serde(default)]
    pub description: String,
    /// External webpage associated with the data source
    #[serde(default)]
    pub webpage_url: String,
    /// Whether the data source is certified
    #[serde(default)]
    pub is_certified: bool,
    /// Whether queries run through a remote query agent
    #[serde(default)]
    pub use_remote_query_agent: bool,
    /// Connection type, e.g. "postgres"
    #[serde(rename = "type", default)]
    pub datasource_type: String,
    /// Tags attached to the data source
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    /// Owning user
    #[serde(default)]
    pub owner: Option<OwnerRef>,
    /// Containing project
    #[serde(default)]
    pub project: Option<ProjectRef>,
    /// When the data source was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the data source was last updated
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Reference to the user owning a data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerRef {
    /// User identifier
    pub id: String,
}

/// Reference to the project containing a data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRef {
    /// Project identifier
    pub id: String,
    /// Project name
    #[serde(default)]
    pub name: String,
}
