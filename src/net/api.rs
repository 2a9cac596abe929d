//! JSON API wrapper with a uniform error and session-expiry policy.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side / native: [`GlooTransport`] fails every request, so tests
//! supply their own [`Transport`].
//!
//! ERROR HANDLING
//! ==============
//! Responses are classified in a fixed order:
//! 1. non-2xx and (302 or redirected): session expired. The configured
//!    [`SessionExpiryPolicy`] runs (toast + delayed login redirect) and the
//!    caller gets [`ApiError::SessionExpired`].
//! 2. other non-2xx: [`ApiError::Server`] carrying the body's `message`.
//! 3. 2xx: the body is decoded as JSON; decode failures surface as
//!    [`ApiError::Decode`].
//!
//! Nothing here retries or sets its own timeout.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::{SERVER_ERROR_MESSAGE, SessionConfig};
use crate::state::SharedState;
use crate::state::toasts::{Severity, ToastState};
use crate::util::navigate::Navigator;
use crate::util::notify::Notifier;
use crate::util::schedule::Scheduler;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Session expired")]
    SessionExpired,
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("{0}")]
    Rejected(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    /// Any other valid method token, sent verbatim.
    Other(String),
}

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}

impl FromStr for HttpMethod {
    type Err = ApiError;

    /// Standard names match case-insensitively. Other tokens pass through
    /// untouched; `CONNECT`, `TRACE` and `TRACK` are refused like `fetch` does.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(is_token_byte) {
            return Err(ApiError::Transport(format!("invalid method: {s:?}")));
        }
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "HEAD" => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            forbidden @ ("CONNECT" | "TRACE" | "TRACK") => {
                Err(ApiError::Transport(format!("forbidden method: {forbidden}")))
            }
            _ => Ok(Self::Other(s.to_owned())),
        }
    }
}

/// One outgoing call. The body, when present, is sent as JSON.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub url: String,
    pub method: HttpMethod,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(url: impl Into<String>, method: HttpMethod) -> Self {
        Self { url: url.into(), method, body: None }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(url, HttpMethod::Get)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(url, HttpMethod::Post)
    }

    /// Build a request from page-script arguments.
    ///
    /// A missing `method` means GET. `data_json` is the `JSON.stringify`
    /// output of the payload; falsy payloads (`null`, `false`, `0`, `""`)
    /// send no body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] for an invalid method or payload.
    pub fn from_script(url: impl Into<String>, method: Option<&str>, data_json: Option<&str>) -> Result<Self, ApiError> {
        let method = method.map_or(Ok(HttpMethod::Get), str::parse)?;
        let mut request = Self::new(url, method);
        if let Some(raw) = data_json {
            let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| ApiError::Transport(e.to_string()))?;
            if is_truthy(&value) {
                request.body = Some(value);
            }
        }
        Ok(request)
    }

    /// Attach `body` as the JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Transport(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// What came back over the wire, before classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub redirected: bool,
    pub body: String,
}

impl RawResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends an [`ApiRequest`] and returns the raw response.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, ApiError>;
}

/// `fetch` via `gloo-net` with `Content-Type: application/json` and
/// `credentials: include`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::{Method, RequestBuilder};

            let method = match &request.method {
                HttpMethod::Get => Method::GET,
                HttpMethod::Post => Method::POST,
                HttpMethod::Put => Method::PUT,
                HttpMethod::Patch => Method::PATCH,
                HttpMethod::Delete => Method::DELETE,
                HttpMethod::Head => Method::HEAD,
                HttpMethod::Options => Method::OPTIONS,
                HttpMethod::Other(name) => {
                    Method::from_bytes(name.as_bytes()).map_err(|e| ApiError::Transport(e.to_string()))?
                }
            };
            let builder = RequestBuilder::new(&request.url)
                .method(method)
                .header("Content-Type", "application/json")
                .credentials(web_sys::RequestCredentials::Include);
            let built = match &request.body {
                Some(body) => builder.body(body.to_string()),
                None => builder.build(),
            };
            let resp = built
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let redirected = resp.redirected();
            let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(RawResponse { status, redirected, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }
}

/// Result of classifying a [`RawResponse`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponseClass {
    Success,
    SessionExpired,
    Failure { status: u16, message: String },
}

/// Classify a response per the module-level ordering.
pub fn classify_response(resp: &RawResponse) -> ResponseClass {
    if resp.ok() {
        return ResponseClass::Success;
    }
    if resp.status == 302 || resp.redirected {
        return ResponseClass::SessionExpired;
    }
    ResponseClass::Failure { status: resp.status, message: error_message(resp.status, &resp.body) }
}

/// Message for a failed response.
///
/// Unparsable bodies get the generic server-error text. A truthy `message`
/// is rendered the way page scripts would stringify it; a missing or falsy
/// one gives `HTTP <status>`.
pub fn error_message(status: u16, body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return SERVER_ERROR_MESSAGE.to_owned();
    };
    match value.get("message") {
        Some(message) if is_truthy(message) => js_display(message),
        _ => format!("HTTP {status}"),
    }
}

/// JavaScript truthiness of a JSON value.
fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;

    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `String(value)` for a JSON value.
fn js_display(value: &serde_json::Value) -> String {
    use serde_json::Value;

    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(u)) => u.to_string(),
            (None, None) => format!("{}", n.as_f64().unwrap_or_default()),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| if item.is_null() { String::new() } else { js_display(item) })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

/// Side effects to run when the server reports an expired session.
pub trait SessionExpiryPolicy {
    fn session_expired(&self);
}

/// No side effects; the caller only sees [`ApiError::SessionExpired`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreExpiry;

impl SessionExpiryPolicy for IgnoreExpiry {
    fn session_expired(&self) {}
}

/// Show an error toast, then send the browser to the login page after the
/// configured delay.
#[derive(Clone)]
pub struct SessionRedirect<S, C, N> {
    notifier: Notifier<S, C>,
    scheduler: C,
    navigator: N,
    config: SessionConfig,
}

impl<S, C, N> SessionRedirect<S, C, N>
where
    S: SharedState<ToastState> + Clone + 'static,
    C: Scheduler + Clone,
    N: Navigator + Clone + 'static,
{
    pub fn new(toasts: S, scheduler: C, navigator: N) -> Self {
        Self::with_config(toasts, scheduler, navigator, SessionConfig::default())
    }

    pub fn with_config(toasts: S, scheduler: C, navigator: N, config: SessionConfig) -> Self {
        Self { notifier: Notifier::new(toasts, scheduler.clone()), scheduler, navigator, config }
    }
}

impl<S, C, N> SessionExpiryPolicy for SessionRedirect<S, C, N>
where
    S: SharedState<ToastState> + Clone + 'static,
    C: Scheduler + Clone,
    N: Navigator + Clone + 'static,
{
    fn session_expired(&self) {
        leptos::logging::warn!("session expired; redirecting to {}", self.config.login_path);
        self.notifier.notify(self.config.expired_message.clone(), Severity::Error);
        let navigator = self.navigator.clone();
        let path = self.config.login_path.clone();
        self.scheduler.schedule(self.config.redirect_delay, Box::new(move || navigator.navigate(&path)));
    }
}

/// Issues requests and applies the response policy.
#[derive(Clone)]
pub struct ApiClient<T, E> {
    transport: T,
    on_expired: E,
}

impl<T: Transport, E: SessionExpiryPolicy> ApiClient<T, E> {
    pub fn new(transport: T, on_expired: E) -> Self {
        Self { transport, on_expired }
    }

    /// Send `request` and decode the success body as `R`.
    ///
    /// # Errors
    ///
    /// See the module docs for the classification order.
    pub async fn call<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let resp = self.transport.send(&request).await?;
        match classify_response(&resp) {
            ResponseClass::Success => serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string())),
            ResponseClass::SessionExpired => {
                self.on_expired.session_expired();
                Err(ApiError::SessionExpired)
            }
            ResponseClass::Failure { status, message } => {
                leptos::logging::warn!("{} {} failed: {status} {message}", request.method, request.url);
                Err(ApiError::Server { status, message })
            }
        }
    }

    /// `GET url`, decoding the body as `R`.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::call`].
    pub async fn get<R: DeserializeOwned>(&self, url: &str) -> Result<R, ApiError> {
        self.call(ApiRequest::get(url)).await
    }

    /// `method url` with `body` as JSON, decoding the response as `R`.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::call`], plus [`ApiError::Transport`] if `body`
    /// cannot be serialized.
    pub async fn send_json<B, R>(&self, url: &str, method: HttpMethod, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.call(ApiRequest::new(url, method).json(body)?).await
    }
}

/// The backend's `{ success, message, redirect }` action reply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub redirect: Option<String>,
}

impl ActionResponse {
    /// Turn a `success: false` reply into [`ApiError::Rejected`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with the reply's message.
    pub fn into_result(self) -> Result<Self, ApiError> {
        if self.success {
            Ok(self)
        } else {
            Err(ApiError::Rejected(self.message.unwrap_or_else(|| SERVER_ERROR_MESSAGE.to_owned())))
        }
    }
}
