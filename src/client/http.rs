//! HTTP transport and the main Tableau client.

use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::api::{DataSourcesService, ProjectsService};
use crate::auth::{Session, X_TABLEAU_AUTH};
use crate::models::SiteId;
use crate::Result;

use super::config::ClientConfig;
use super::response;

const JSON_MEDIA_TYPE: &str = "application/json";

/// The main client for interacting with the Tableau API.
///
/// A client signs in once during construction; the resulting session token
/// and site identifier are attached to every subsequent request. Resource
/// operations are reached through service accessors.
///
/// # Example
///
/// ```no_run
/// use tableau_rs::TableauClient;
///
/// # async fn example() -> tableau_rs::Result<()> {
/// let client = TableauClient::connect(
///     "https://tableau.example.com",
///     "ci-token",
///     "top-secret-value",
///     "acme",
/// ).await?;
///
/// let projects = client.projects().query(&[]).await?;
/// println!("site {} has {} projects", client.site_id(), projects.len());
/// # Ok(())
/// # }
/// ```
pub struct TableauClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) transport: Transport,
    pub(crate) session: Session,
    pub(crate) config: ClientConfig,
}

/// Request construction and dispatch against a fixed base URL.
///
/// The header set holds session-scoped headers. It is populated once,
/// between sign-in and the client being handed to the caller, and read
/// only afterwards.
pub(crate) struct Transport {
    http: reqwest::Client,
    base_url: Url,
    user_agent: String,
    headers: reqwest::header::HeaderMap,
}

impl Transport {
    pub(crate) fn new(server_addr: &str, config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&format!(
            "{}/api/{}/",
            server_addr.trim_end_matches('/'),
            config.api_version
        ))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url,
            user_agent: config.user_agent.clone(),
            headers: reqwest::header::HeaderMap::new(),
        })
    }

    pub(crate) fn insert_session_header(
        &mut self,
        name: reqwest::header::HeaderName,
        value: reqwest::header::HeaderValue,
    ) {
        self.headers.insert(name, value);
    }

    /// Build a request for `path` resolved against the base URL.
    ///
    /// GET requests never carry a body. For other verbs a `None` body
    /// produces an empty payload with no serialization attempted.
    pub(crate) fn build_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Request>
    where
        B: Serialize + ?Sized,
    {
        let url = self.base_url.join(path)?;
        let has_body = method != Method::GET;

        let mut builder = self
            .http
            .request(method, url)
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .header(USER_AGENT, &self.user_agent);

        if has_body {
            let payload = match body {
                Some(body) => serde_json::to_vec(body)?,
                None => Vec::new(),
            };
            builder = builder.header(CONTENT_TYPE, JSON_MEDIA_TYPE).body(payload);
        }

        let mut request = builder.build()?;
        for (name, value) in &self.headers {
            request.headers_mut().insert(name, value.clone());
        }

        Ok(request)
    }

    /// Dispatch one request and decode the response into `T`.
    pub(crate) async fn execute<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.build_request(method, path, body)?;
        tracing::debug!(method = %request.method(), url = %request.url(), "dispatching request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        response::decode_response(status, &bytes)
    }

    /// Dispatch one request whose response body the caller discards.
    pub(crate) async fn execute_discard<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let request = self.build_request(method, path, body)?;
        tracing::debug!(method = %request.method(), url = %request.url(), "dispatching request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        response::check_response(status, &bytes)
    }
}

impl TableauClient {
    /// Connect to a Tableau server with personal access token credentials.
    ///
    /// Signs in against `auth/signin` before returning; the returned
    /// client carries the session token on every request.
    pub async fn connect(
        server_addr: &str,
        token_name: &str,
        token_secret: &str,
        site_name: &str,
    ) -> Result<Self> {
        Self::connect_with_config(
            server_addr,
            token_name,
            token_secret,
            site_name,
            ClientConfig::default(),
        )
        .await
    }

    /// Connect with a custom [`ClientConfig`].
    pub async fn connect_with_config(
        server_addr: &str,
        token_name: &str,
        token_secret: &str,
        site_name: &str,
        config: ClientConfig,
    ) -> Result<Self> {
        let mut transport = Transport::new(server_addr, &config)?;
        let session =
            Session::sign_in(&transport, token_name, token_secret, site_name).await?;
        transport.insert_session_header(X_TABLEAU_AUTH, session.auth_header_value()?);

        Ok(Self {
            inner: Arc::new(ClientInner {
                transport,
                session,
                config,
            }),
        })
    }

    /// Get the projects service.
    pub fn projects(&self) -> ProjectsService {
        ProjectsService::new(self.inner.clone())
    }

    /// Get the data sources service.
    pub fn datasources(&self) -> DataSourcesService {
        DataSourcesService::new(self.inner.clone())
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// The site this client signed in to.
    pub fn site_id(&self) -> &SiteId {
        self.inner.session.site_id()
    }

    /// Invalidate the server-side session.
    ///
    /// The client holds no refresh credentials, so a signed-out client
    /// cannot be revived; construct a new one instead.
    pub async fn sign_out(&self) -> Result<()> {
        self.inner
            .transport
            .execute_discard(Method::POST, "auth/signout", None::<&()>)
            .await
    }
}

impl ClientInner {
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        self.transport.execute(Method::GET, path, None::<&()>).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        self.transport.execute(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        self.transport.execute(Method::PUT, path, Some(body)).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        self.transport
            .execute(Method::DELETE, path, None::<&()>)
            .await
    }

    pub(crate) async fn delete_discard(&self, path: &str) -> Result<()> {
        self.transport
            .execute_discard(Method::DELETE, path, None::<&()>)
            .await
    }

    pub(crate) fn site_id(&self) -> &SiteId {
        self.session.site_id()
    }
}

impl Clone for TableauClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for TableauClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableauClient")
            .field("config", &self.inner.config)
            .finish()
    }
}
