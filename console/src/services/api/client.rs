//! # API Client
//!
//! HTTP client shared by every endpoint module.
//!
//! Each request carries the bearer token and the selected shop from the
//! [`SessionStore`], plus a fresh `X-Request-Id`. Responses are unwrapped from
//! the `{code, message, data}` envelope; failures are classified into a
//! [`ConsoleError`], announced through the [`Notifier`], and a 401 also clears
//! the credentials and sends the console back to the login route.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use shared::{ApiEnvelope, ErrorResponse, LoginRequest, LoginResponse, ShopSummary};
use uuid::Uuid;

use crate::core::config::ConsoleConfig;
use crate::core::error::{ConsoleError, Result};
use crate::core::service::{AuthService, NoticeLevel, Navigator, Notifier, ShopDirectory};
use crate::router::routes::LOGIN_PATH;
use crate::session::SessionStore;

pub const SHOP_HEADER: &str = "X-Shop-Id";
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// HTTP client for communicating with the backend API server.
///
/// Cheap to share behind an `Arc`; the underlying connection pool is reused
/// by every call.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl ApiClient {
    /// Build a client for `config.api_base_url` with the configured deadline.
    pub fn new(
        config: &ConsoleConfig,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("shopops-console/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConsoleError::Config(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            session,
            navigator,
            notifier,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Request with the session headers attached.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .client
            .request(method, self.url(path))
            .header(REQUEST_ID_HEADER, Uuid::new_v4().to_string());

        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(shop_id) = self.session.current_shop_id() {
            builder = builder.header(SHOP_HEADER, shop_id.to_string());
        }
        builder
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.request(Method::GET, path)).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::GET, path).query(query)).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.request(Method::POST, path)).await
    }

    pub async fn post_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::POST, path).query(query)).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.request(Method::PUT, path)).await
    }

    pub async fn put_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::PUT, path).query(query)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.request(Method::DELETE, path)).await
    }

    /// Multipart POST with a single file field named `file` plus text fields.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        file: FileUpload,
        fields: &[(&str, String)],
    ) -> Result<T> {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.mime)
            .map_err(|e| ConsoleError::Validation(format!("invalid content type: {}", e)))?;

        let form = fields
            .iter()
            .fold(Form::new().part("file", part), |form, (name, value)| {
                form.text(name.to_string(), value.clone())
            });

        self.send(self.request(Method::POST, path).multipart(form)).await
    }

    /// Send a request whose success body is a file rather than an envelope.
    pub async fn download(&self, builder: RequestBuilder) -> Result<Vec<u8>> {
        match self.execute_raw(builder).await {
            Ok(bytes) => Ok(bytes),
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Send a request and unwrap its envelope.
    pub async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        match self.execute(builder).await {
            Ok(data) => Ok(data),
            Err(err) => Err(self.fail(err)),
        }
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let (status, bytes) = self.dispatch(builder).await?;
        if !status.is_success() {
            return Err(error_for_status(status, &bytes));
        }
        unwrap_envelope(&bytes)
    }

    async fn execute_raw(&self, builder: RequestBuilder) -> Result<Vec<u8>> {
        let (status, bytes) = self.dispatch(builder).await?;
        if !status.is_success() {
            return Err(error_for_status(status, &bytes));
        }

        // Some endpoints answer a failed export with an envelope instead of the file.
        if let Ok(envelope) = serde_json::from_slice::<ApiEnvelope<Value>>(&bytes) {
            if !envelope.is_success() {
                return Err(ConsoleError::from_code(envelope.code, envelope.message));
            }
        }
        Ok(bytes)
    }

    async fn dispatch(&self, builder: RequestBuilder) -> Result<(StatusCode, Vec<u8>)> {
        let request = builder
            .build()
            .map_err(|e| ConsoleError::Validation(format!("invalid request: {}", e)))?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        let start = Instant::now();

        let response = self.client.execute(request).await.map_err(|e| {
            tracing::error!(%method, %path, error = %e, "Request did not complete");
            ConsoleError::from(e)
        })?;

        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("json"));
        let bytes = response.bytes().await?.to_vec();

        tracing::debug!(
            %method,
            %path,
            status = status.as_u16(),
            json = is_json,
            bytes = bytes.len(),
            duration_ms = start.elapsed().as_millis(),
            "Request completed"
        );
        Ok((status, bytes))
    }

    /// Announce `err` and apply its side effects. Returns it for propagation.
    fn fail(&self, err: ConsoleError) -> ConsoleError {
        self.notifier.notify(NoticeLevel::Error, &err.notice());

        match &err {
            ConsoleError::Unauthenticated(reason) => {
                tracing::warn!(reason = %reason, "Authentication rejected, returning to login");
                self.session.expire();
                self.navigator.redirect(LOGIN_PATH);
            }
            ConsoleError::Network(reason) => tracing::error!(reason = %reason, "Backend unreachable"),
            ConsoleError::Server(reason) => tracing::error!(reason = %reason, "Backend server error"),
            other => tracing::warn!(error = %other, "Request failed"),
        }
        err
    }
}

/// Success marker for endpoints whose `data` carries nothing the console uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ack;

impl<'de> Deserialize<'de> for Ack {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer).map(|_| Ack)
    }
}

/// File sent in a multipart upload.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    pub fn csv(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(file_name, "text/csv", bytes)
    }

    pub fn zip(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(file_name, "application/zip", bytes)
    }
}

fn error_for_status(status: StatusCode, body: &[u8]) -> ConsoleError {
    let message = serde_json::from_slice::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty());
    ConsoleError::from_code(i32::from(status.as_u16()), message)
}

fn unwrap_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_value(Value::Null)?);
    }

    let envelope: ApiEnvelope<Value> = serde_json::from_slice(body)?;
    if !envelope.is_success() {
        return Err(ConsoleError::from_code(envelope.code, envelope.message));
    }
    Ok(serde_json::from_value(envelope.data.unwrap_or(Value::Null))?)
}

#[async_trait]
impl AuthService for ApiClient {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse> {
        super::auth::login(self, credentials).await
    }
}

#[async_trait]
impl ShopDirectory for ApiClient {
    async fn accessible_shops(&self) -> Result<Vec<ShopSummary>> {
        super::user_shop::my_shops(self).await
    }
}
