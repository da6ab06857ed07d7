//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::domain::{
    CheckReceipt, DefaultsUpdate, MessageResponse, ReceiptResponse, SendMessage, SessionDefaults,
    Status, ValidationError,
};

const DEFAULT_MESSAGES_ENDPOINT: &str = "https://api.pushover.net/1/messages.json";
const DEFAULT_RECEIPTS_ENDPOINT: &str = "https://api.pushover.net/1/receipts";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;

    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }

    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`PushoverClient`].
///
/// This error preserves:
/// - HTTP-level failures (non-2xx status or transport failures),
/// - API-level failures (2xx body with `status != 1`),
/// - validation/parse failures.
pub enum PushoverError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Pushover reported `status: 0` with one or more error descriptions.
    #[error("API error: {errors:?}")]
    Api {
        errors: Vec<String>,
        request: Option<String>,
    },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// An endpoint override could not be combined into a request URL.
    #[error("invalid endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),

    /// One of the domain constructors or the defaulting step rejected a value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`PushoverClient`].
///
/// Use this when you need to customize the endpoints, timeout, or user-agent.
pub struct PushoverClientBuilder {
    messages_endpoint: String,
    receipts_endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl PushoverClientBuilder {
    /// Create a builder with the default endpoints and no timeout/user-agent override.
    pub fn new() -> Self {
        Self {
            messages_endpoint: DEFAULT_MESSAGES_ENDPOINT.to_owned(),
            receipts_endpoint: DEFAULT_RECEIPTS_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the message-send endpoint URL.
    pub fn messages_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.messages_endpoint = endpoint.into();
        self
    }

    /// Override the receipt-status base URL (the receipt id and `.json` suffix are
    /// appended per request).
    pub fn receipts_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.receipts_endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`PushoverClient`].
    pub fn build(self) -> Result<PushoverClient, PushoverError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| PushoverError::Transport(Box::new(err)))?;

        Ok(PushoverClient {
            messages_endpoint: self.messages_endpoint,
            receipts_endpoint: self.receipts_endpoint,
            http: Arc::new(ReqwestTransport { client }),
            defaults: Arc::new(Mutex::new(SessionDefaults::default())),
        })
    }
}

impl Default for PushoverClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
/// High-level Pushover client.
///
/// This type orchestrates request defaulting, validation, form encoding, and
/// response parsing. By default it uses:
/// - `https://api.pushover.net/1/messages.json` for sending messages
/// - `https://api.pushover.net/1/receipts/{receipt}.json` for receipt status
///
/// The client carries a session-defaults record shared by all of its clones;
/// values set through [`PushoverClient::set_defaults`] fill in whatever a
/// [`SendMessage`] leaves unset.
pub struct PushoverClient {
    messages_endpoint: String,
    receipts_endpoint: String,
    http: Arc<dyn HttpTransport>,
    defaults: Arc<Mutex<SessionDefaults>>,
}

impl PushoverClient {
    /// Create a client using the default endpoints.
    ///
    /// For more customization, use [`PushoverClient::builder`].
    pub fn new() -> Self {
        Self {
            messages_endpoint: DEFAULT_MESSAGES_ENDPOINT.to_owned(),
            receipts_endpoint: DEFAULT_RECEIPTS_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
            defaults: Arc::new(Mutex::new(SessionDefaults::default())),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder() -> PushoverClientBuilder {
        PushoverClientBuilder::new()
    }

    /// Merge a partial update into the session defaults.
    ///
    /// Supplied fields overwrite the stored values; unsupplied fields are left
    /// untouched. The update is validated the same way a send would validate it.
    pub fn set_defaults(&self, update: DefaultsUpdate) -> Result<(), ValidationError> {
        let mut defaults = self.lock_defaults();
        defaults.apply(update)?;
        tracing::debug!("session defaults updated");
        Ok(())
    }

    /// A snapshot of the current session defaults.
    pub fn defaults(&self) -> SessionDefaults {
        self.lock_defaults().clone()
    }

    /// Send a message through Pushover.
    ///
    /// Unset request fields fall back to the session defaults. All validation
    /// (credential presence, priority resolution, the retry/expire pairing for
    /// priority 2) happens before any network I/O.
    ///
    /// Errors:
    /// - [`PushoverError::Validation`] for invalid or missing domain values,
    /// - [`PushoverError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`PushoverError::Api`] when Pushover returns `status: 0`.
    pub async fn send_message(
        &self,
        request: SendMessage,
    ) -> Result<MessageResponse, PushoverError> {
        let snapshot = self.defaults();
        let outbound = request.resolve(&snapshot)?;
        let params = crate::transport::encode_message_form(&outbound);

        tracing::debug!(endpoint = %self.messages_endpoint, "sending message");
        let response = self
            .http
            .post_form(&self.messages_endpoint, params)
            .await
            .map_err(PushoverError::Transport)?;

        if !(200..=299).contains(&response.status) {
            tracing::warn!(status = response.status, "message send rejected");
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(PushoverError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let parsed = crate::transport::decode_message_json_response(&response.body)
            .map_err(|err| PushoverError::Parse(Box::new(err)))?;

        if parsed.status != Status::Ok {
            return Err(PushoverError::Api {
                errors: parsed.errors,
                request: parsed.request,
            });
        }

        Ok(parsed)
    }

    /// Fetch the acknowledgement status of an emergency message's receipt.
    ///
    /// The token falls back to the session default when the request carries none.
    ///
    /// Errors:
    /// - [`PushoverError::Validation`] when no token is available,
    /// - [`PushoverError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`PushoverError::Api`] when Pushover returns `status: 0`.
    pub async fn check_receipt(
        &self,
        request: CheckReceipt,
    ) -> Result<ReceiptResponse, PushoverError> {
        let snapshot = self.defaults();
        let token = request.resolve(&snapshot)?;
        let url = crate::transport::receipt_url(&self.receipts_endpoint, request.receipt(), &token)?;

        tracing::debug!(receipt = request.receipt().as_str(), "checking receipt");
        let response = self
            .http
            .get(url.as_str())
            .await
            .map_err(PushoverError::Transport)?;

        if !(200..=299).contains(&response.status) {
            tracing::warn!(status = response.status, "receipt check rejected");
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(PushoverError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let parsed =
            crate::transport::decode_receipt_json_response(request.receipt(), &response.body)
                .map_err(|err| PushoverError::Parse(Box::new(err)))?;

        if parsed.status != Status::Ok {
            return Err(PushoverError::Api {
                errors: parsed.errors,
                request: None,
            });
        }

        Ok(parsed)
    }

    // Recovers the record from a poisoned lock; writers never leave it half-merged.
    fn lock_defaults(&self) -> std::sync::MutexGuard<'_, SessionDefaults> {
        self.defaults.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for PushoverClient {
    fn default() -> Self {
        Self::new()
    }
}
