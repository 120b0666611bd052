use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{ApiConfig, ApiEnvelope, AppError, ErrorBody, QueryParams};

/// Client for the admin REST API.
///
/// Cheap to clone; pages build one per request from the current session
/// token so a logout takes effect on the next call.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for `base_url` (including the `/api` prefix).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Create a client from configuration, applying the request timeout on
    /// native targets. Browsers keep their own fetch timeout.
    pub fn from_config(api: &ApiConfig) -> Self {
        let mut client = Self::new(api.base_url.clone());
        #[cfg(not(target_arch = "wasm32"))]
        {
            let built = Client::builder()
                .timeout(std::time::Duration::from_secs(api.timeout_secs.max(1)))
                .build();
            match built {
                Ok(http) => client.http = http,
                Err(e) => tracing::warn!(error = %e, "Falling back to default HTTP client"),
            }
        }
        client
    }

    /// Attach (or clear) the bearer token sent with every request.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Absolute URL for an API path such as `/admin/jobs`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &impl QueryParams,
    ) -> Result<T, AppError> {
        let url = format!("{}{}", self.url(path), build_query(query));
        self.send(Method::GET, self.request(Method::GET, &url), &url)
            .await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let url = self.url(path);
        let request = self.request(Method::POST, &url).json(body);
        self.send(Method::POST, request, &url).await
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let request = self.http.request(method, url);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        request: RequestBuilder,
        url: &str,
    ) -> Result<T, AppError> {
        tracing::debug!(%method, url, "API request");
        let response = request
            .send()
            .await
            .map_err(|e| AppError::network(format!("{method} {url} failed: {e}")))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::network(format!("Reading response from {url} failed: {e}")))?;
        let result = decode_response(status, &body);
        if let Err(err) = &result {
            tracing::debug!(%method, url, status, error = %err, "API request failed");
        }
        result
    }
}

/// Query string for a list request, including the leading `?`.
///
/// Empty when no parameter has a value.
pub fn build_query(params: &impl QueryParams) -> String {
    let pairs = params.pairs();
    if pairs.is_empty() {
        return String::new();
    }
    let encoded: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect();
    format!("?{}", encoded.join("&"))
}

/// Turn an HTTP status and raw body into the envelope payload.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, AppError> {
    if !(200..300).contains(&status) {
        let message = ErrorBody::message_from(body).unwrap_or_else(|| {
            reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Request failed with status {status}"))
        });
        return Err(AppError::from_status(status, message));
    }
    let envelope: ApiEnvelope<T> = serde_json::from_str(body)
        .map_err(|e| AppError::decode(format!("Unexpected response body: {e}")))?;
    envelope.into_result()
}
