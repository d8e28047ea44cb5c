//! Session management for Tableau API authentication.

use std::collections::BTreeMap;

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::client::Transport;
use crate::models::SiteId;
use crate::{Error, Result};

/// Header carrying the session bearer token on every request.
pub(crate) const X_TABLEAU_AUTH: HeaderName = HeaderName::from_static("x-tableau-auth");

/// Authenticated session state for a Tableau client.
///
/// A session is created exactly once, by exchanging a personal access
/// token for a bearer token during client construction, and is immutable
/// afterwards. The server reports an estimated time to expiration with the
/// token; it is stored and exposed but the client never acts on it.
/// Expiry is a server-side concern, and an expired session surfaces as an
/// API error on the next call.
pub struct Session {
    token: SecretString,
    site_id: SiteId,
    estimated_time_to_expiration: Option<String>,
}

impl Session {
    /// Exchange personal access token credentials for a session.
    ///
    /// Submits `POST auth/signin` through the given transport. Any error
    /// from the exchange is propagated unchanged; there is no retry.
    pub(crate) async fn sign_in(
        transport: &Transport,
        token_name: &str,
        token_secret: &str,
        site_name: &str,
    ) -> Result<Self> {
        let request = SignInRequest {
            credentials: RequestCredentials {
                personal_access_token_name: token_name,
                personal_access_token_secret: token_secret,
                site: SiteRef {
                    content_url: site_name,
                },
            },
        };

        let response: Option<SignInResponse> = transport
            .execute(Method::POST, "auth/signin", Some(&request))
            .await?;

        let Some(SignInResponse { credentials }) = response else {
            return Err(Error::internal(
                "sign-in response contained no credentials",
                BTreeMap::new(),
            ));
        };

        tracing::info!(site_id = %credentials.site.id, "signed in");

        Ok(Self {
            token: SecretString::from(credentials.token),
            site_id: SiteId::new(credentials.site.id),
            estimated_time_to_expiration: credentials.estimated_time_to_expiration,
        })
    }

    /// The site resolved during sign-in.
    pub fn site_id(&self) -> &SiteId {
        &self.site_id
    }

    /// Estimated session lifetime as reported by the server, e.g.
    /// `"364:23:59"`. Informational only; the client never refreshes.
    pub fn estimated_time_to_expiration(&self) -> Option<&str> {
        self.estimated_time_to_expiration.as_deref()
    }

    pub(crate) fn auth_header_value(&self) -> Result<HeaderValue> {
        HeaderValue::from_str(self.token.expose_secret()).map_err(|_| {
            Error::InvalidInput("session token is not a valid header value".to_string())
        })
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .field("site_id", &self.site_id)
            .field(
                "estimated_time_to_expiration",
                &self.estimated_time_to_expiration,
            )
            .finish()
    }
}

#[derive(Serialize)]
struct SignInRequest<'a> {
    credentials: RequestCredentials<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestCredentials<'a> {
    personal_access_token_name: &'a str,
    personal_access_token_secret: &'a str,
    site: SiteRef<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SiteRef<'a> {
    content_url: &'a str,
}

#[derive(Deserialize)]
struct SignInResponse {
    credentials: ResponseCredentials,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseCredentials {
    site: SiteInfo,
    token: String,
    #[serde(default)]
    estimated_time_to_expiration: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SiteInfo {
    id: String,
}
