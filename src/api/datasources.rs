//! Data sources service.

use std::sync::Arc;

use serde::Deserialize;

use crate::client::ClientInner;
use crate::models::{DataSource, DataSourceId};
use crate::Result;

/// Service for data source operations.
///
/// # Example
///
/// ```no_run
/// use tableau_rs::DataSourceId;
///
/// # async fn example(client: tableau_rs::TableauClient) -> tableau_rs::Result<()> {
/// let id = DataSourceId::new("ds-1");
///
/// if let Some(ds) = client.datasources().get(&id).await? {
///     println!("{} ({})", ds.name, ds.datasource_type);
/// }
///
/// client.datasources().delete(&id).await?;
/// # Ok(())
/// # }
/// ```
pub struct DataSourcesService {
    inner: Arc<ClientInner>,
}

impl DataSourcesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a single data source.
    pub async fn get(&self, id: &DataSourceId) -> Result<Option<DataSource>> {
        let path = format!("sites/{}/datasources/{}", self.inner.site_id(), id);

        let response: Option<DataSourceResponse> = self.inner.get(&path).await?;
        Ok(response.and_then(|r| r.data_source))
    }

    /// Delete a data source.
    pub async fn delete(&self, id: &DataSourceId) -> Result<()> {
        let path = format!("sites/{}/datasources/{}", self.inner.site_id(), id);
        self.inner.delete_discard(&path).await
    }
}

#[derive(Deserialize)]
struct DataSourceResponse {
    #[serde(rename = "dataSource", default)]
    data_source: Option<DataSource>,
}
