//! JSON-RPC 2.0 transport and session handling.

use crate::config::ClientConfig;
use crate::error::{Result, RpcError};
use crate::params::Params;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, instrument};

/// Content type the API endpoint expects.
const JSON_RPC_CONTENT_TYPE: &str = "application/json-rpc";

/// Outgoing JSON-RPC request envelope
#[derive(Debug, Serialize)]
pub struct Request<'a, P: Serialize + ?Sized> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: &'a P,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<&'a str>,
    pub id: u64,
}

/// Error object of a failed call
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: String,
}

/// Incoming JSON-RPC response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub error: Option<ErrorObject>,
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub id: Option<u64>,
}

impl Response {
    /// Result as an array of records.
    pub fn result_array(&self, method: &str) -> Result<&Vec<Value>> {
        self.result
            .as_array()
            .ok_or_else(|| RpcError::unexpected(method, "result is not an array"))
    }

    /// Result as a single object.
    pub fn result_object(&self, method: &str) -> Result<&Map<String, Value>> {
        self.result
            .as_object()
            .ok_or_else(|| RpcError::unexpected(method, "result is not an object"))
    }

    /// Converts a server-side error object into `RpcError::Api`.
    pub fn into_result(self) -> Result<Self> {
        match self.error {
            Some(ErrorObject {
                code,
                message,
                data,
            }) => Err(RpcError::Api {
                code,
                message,
                data,
            }),
            None => Ok(self),
        }
    }
}

/// Monitoring API client
///
/// One instance holds one session. Request ids increase monotonically
/// per client.
#[derive(Debug)]
pub struct Api {
    url: String,
    http: reqwest::Client,
    auth: Option<String>,
    next_id: AtomicU64,
}

impl Api {
    /// Create a client from validated configuration. Does not log in.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.server.timeout())
            .build()?;
        Ok(Self::with_client(config.server.url.clone(), http))
    }

    /// Create a client around an existing HTTP client.
    pub fn with_client(url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            http,
            auth: None,
            next_id: AtomicU64::new(1),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Current session token, if logged in.
    pub fn auth(&self) -> Option<&str> {
        self.auth.as_deref()
    }

    /// Reuse a session token obtained elsewhere.
    pub fn set_auth(&mut self, token: impl Into<String>) {
        self.auth = Some(token.into());
    }

    /// Send one authenticated request and decode the envelope. Server-side
    /// errors are returned inside the `Response`, not as `Err`.
    ///
    /// Fails with `RpcError::NotLoggedIn` before sending anything when no
    /// session token is held.
    #[instrument(skip(self, params))]
    pub async fn call<P: Serialize + ?Sized>(&self, method: &str, params: &P) -> Result<Response> {
        let auth = self.auth.as_deref().ok_or(RpcError::NotLoggedIn)?;
        self.send(method, params, Some(auth)).await
    }

    /// As [`Api::call`], but a server-side error object becomes `RpcError::Api`.
    pub async fn call_with_error<P: Serialize + ?Sized>(
        &self,
        method: &str,
        params: &P,
    ) -> Result<Response> {
        self.call(method, params).await?.into_result()
    }

    /// Log in with `user.login` and keep the session token.
    #[instrument(skip(self, password))]
    pub async fn login(&mut self, user: &str, password: &str) -> Result<String> {
        let params = Params::new().with("user", user).with("password", password);
        // user.login must not carry a stale token
        let response = self.send("user.login", &params, None).await?.into_result()?;
        let token = response
            .result
            .as_str()
            .ok_or_else(|| RpcError::unexpected("user.login", "result is not a string"))?
            .to_string();
        info!(user, "Logged in to monitoring API");
        self.auth = Some(token.clone());
        Ok(token)
    }

    /// API version string (`apiinfo.version`); needs no session.
    pub async fn version(&self) -> Result<String> {
        let response = self
            .send("apiinfo.version", &Params::new(), None)
            .await?
            .into_result()?;
        response
            .result
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| RpcError::unexpected("apiinfo.version", "result is not a string"))
    }

    async fn send<P: Serialize + ?Sized>(
        &self,
        method: &str,
        params: &P,
        auth: Option<&str>,
    ) -> Result<Response> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = Request {
            jsonrpc: "2.0",
            method,
            params,
            auth,
            id,
        };
        let body = serde_json::to_vec(&request)?;
        debug!(method, id, "Sending API request");

        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, JSON_RPC_CONTENT_TYPE)
            .body(body)
            .send()
            .await?
            .error_for_status()?;
        let bytes = response.bytes().await?;
        let decoded: Response = serde_json::from_slice(&bytes)?;
        debug!(method, id, error = decoded.error.is_some(), "Received API response");
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let params = Params::new().with("output", "extend");
        let request = Request {
            jsonrpc: "2.0",
            method: "item.get",
            params: &params,
            auth: Some("token"),
            id: 7,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "jsonrpc": "2.0",
                "method": "item.get",
                "params": {"output": "extend"},
                "auth": "token",
                "id": 7
            })
        );
    }

    #[test]
    fn test_request_without_auth_omits_member() {
        let request = Request {
            jsonrpc: "2.0",
            method: "apiinfo.version",
            params: &Params::new(),
            auth: None,
            id: 1,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("auth").is_none());
    }

    #[test]
    fn test_error_response_into_result() {
        let response: Response = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "error": {"code": -32602, "message": "Invalid params.", "data": "No permissions."},
            "id": 1
        }))
        .unwrap();
        let err = response.into_result().unwrap_err();
        assert!(matches!(err, RpcError::Api { code: -32602, .. }));
    }

    #[test]
    fn test_result_shapes() {
        let response: Response =
            serde_json::from_value(json!({"jsonrpc": "2.0", "result": [], "id": 2})).unwrap();
        assert!(response.result_array("item.get").unwrap().is_empty());
        assert!(response.result_object("item.get").is_err());
    }

    #[tokio::test]
    async fn test_call_without_session_is_not_logged_in() {
        // nothing listens here; the call must fail before connecting
        let api = Api::with_client("http://127.0.0.1:9/api_jsonrpc.php", reqwest::Client::new());
        let err = api.call("item.get", &Params::new()).await.unwrap_err();
        assert!(matches!(err, RpcError::NotLoggedIn));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = ClientConfig::default();
        config.server.url = "not-a-url".to_string();
        assert!(Api::new(&config).is_err());
    }
}
