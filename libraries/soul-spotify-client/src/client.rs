//! Main Spotify Web API client and the request pipeline.

use crate::config::ClientConfig;
use crate::error::{Result, SpotifyError};
use crate::request::{Operation, Options};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Client for the Spotify Web API.
///
/// Holds the HTTP connection pool and the bearer token. The token is set
/// through [`SpotifyClient::set_access_token`], which needs `&mut self`;
/// all requests only borrow the client, so in-flight calls always see a
/// stable token.
///
/// # Example
///
/// ```ignore
/// use soul_spotify_client::{ClientConfig, Options, SpotifyClient};
///
/// let mut client = SpotifyClient::new(ClientConfig::default())?;
/// client.set_access_token(token);
///
/// let me = client.get_me().await?;
/// let saved = client
///     .get_my_saved_tracks(Some(Options::new().limit(50)))
///     .await?;
/// println!("{} has {} saved tracks", me.id, saved.total);
/// ```
#[derive(Clone)]
pub struct SpotifyClient {
    http: Client,
    base_url: String,
    access_token: Option<String>,
}

impl SpotifyClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(SpotifyError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(SpotifyError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        url::Url::parse(&base_url).map_err(|e| SpotifyError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .user_agent(format!("SoulPlayer/{} (Spotify)", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            access_token: config.access_token,
        })
    }

    /// Base URL all endpoint paths are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The access token in use, if any.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Set the access token sent with every subsequent request.
    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.access_token = Some(access_token.into());
    }

    /// Stop sending an `Authorization` header.
    pub fn clear_access_token(&mut self) {
        self.access_token = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Absolute URL for an API path such as `/me/tracks`.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn an operation into a ready-to-send request.
    pub(crate) fn prepare(&self, operation: &Operation) -> Result<reqwest::Request> {
        let mut builder = self
            .http
            .request(operation.method.clone(), operation.full_url());

        if let Some(token) = &self.access_token {
            builder = builder.bearer_auth(token);
        }

        if let Some(body) = operation.json_body() {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        Ok(builder.build()?)
    }

    /// Run an operation through the request pipeline.
    ///
    /// `options` are merged into the operation first (see
    /// [`Operation::merge_options`]). A 200 response is deserialized into
    /// `T`; any other status becomes [`SpotifyError::Api`] carrying the
    /// parsed body.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        mut operation: Operation,
        options: Option<Options>,
        always_into_params: bool,
    ) -> Result<T> {
        if let Some(options) = options {
            operation.merge_options(options, always_into_params);
        }

        let request = self.prepare(&operation)?;
        debug!(
            method = %operation.method,
            url = %request.url(),
            authenticated = self.access_token.is_some(),
            "Sending request"
        );

        let response = self.http.execute(request).await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let payload = parse_payload(&bytes)?;

        debug!(status = status.as_u16(), url = %operation.url, "Received response");

        if status == StatusCode::OK {
            Ok(serde_json::from_value(payload)?)
        } else {
            Err(SpotifyError::Api {
                status: status.as_u16(),
                body: payload,
            })
        }
    }

    /// Run an operation whose successful response carries nothing useful.
    pub(crate) async fn execute_unit(
        &self,
        operation: Operation,
        options: Option<Options>,
    ) -> Result<()> {
        self.execute::<IgnoredAny>(operation, options, false)
            .await
            .map(|_| ())
    }

    /// Fetch any API resource by absolute URL, e.g. the `next` link of a
    /// page.
    pub async fn get_generic<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.execute(Operation::get(url), None, false).await
    }
}

impl fmt::Debug for SpotifyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.access_token.is_some())
            .finish()
    }
}

/// Parse a response body as JSON.
///
/// An empty or whitespace-only body is the one non-JSON body accepted: it
/// becomes `null`, so unit endpoints answering with nothing still resolve.
/// Any other non-JSON body is [`SpotifyError::Parse`].
fn parse_payload(bytes: &[u8]) -> Result<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(bytes)?)
}
