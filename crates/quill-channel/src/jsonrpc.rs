//! JSON-RPC 2.0 message model for the transport.
//!
//! One socket frame carries exactly one message, so no Content-Length
//! framing applies; [`decode_frame`] and [`encode_frame`] are the whole
//! codec. Messages are discriminated by field presence: a `method` with an
//! `id` is a request, a `method` without one is a notification, and an `id`
//! without a `method` is a response.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol version carried by every message.
pub const JSONRPC_VERSION: &str = "2.0";

/// Thread-safe request ID generator.
static REQUEST_ID: AtomicI64 = AtomicI64::new(1);

/// Generates a unique request ID.
///
/// IDs are monotonically increasing and thread-safe. The transport does not
/// enforce uniqueness of ids it relays; this generator is a convenience for
/// client layers issuing their own requests.
#[must_use]
pub fn next_request_id() -> i64 {
    REQUEST_ID.fetch_add(1, Ordering::SeqCst)
}

/// Resets the request ID counter (for testing only).
#[cfg(test)]
pub(crate) fn reset_request_id() {
    REQUEST_ID.store(1, Ordering::SeqCst);
}

/// A request or response identifier.
///
/// JSON-RPC permits both numbers and strings; the transport relays either
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    /// Numeric identifier.
    Number(i64),
    /// String identifier.
    Text(String),
}

impl fmt::Display for RequestId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(formatter, "{value}"),
            Self::Text(value) => formatter.write_str(value),
        }
    }
}

impl From<i64> for RequestId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<String> for RequestId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for RequestId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// A JSON-RPC 2.0 request message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version, always "2.0" for outgoing messages.
    pub jsonrpc: String,
    /// Unique request identifier.
    pub id: RequestId,
    /// The method to invoke.
    pub method: String,
    /// Optional parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Creates a new request with an auto-generated numeric ID.
    #[must_use]
    pub fn new(method: impl Into<String>, params: Option<Value>) -> Self {
        Self::with_id(RequestId::Number(next_request_id()), method, params)
    }

    /// Creates a new request with a specific ID.
    #[must_use]
    pub fn with_id(id: impl Into<RequestId>, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            id: id.into(),
            method: method.into(),
            params,
        }
    }
}

/// A JSON-RPC 2.0 notification (no response expected).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcNotification {
    /// Protocol version, always "2.0" for outgoing messages.
    pub jsonrpc: String,
    /// The method to invoke.
    pub method: String,
    /// Optional parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcNotification {
    /// Creates a new notification.
    #[must_use]
    pub fn new(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            method: method.into(),
            params,
        }
    }
}

/// A JSON-RPC 2.0 response message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Protocol version.
    pub jsonrpc: String,
    /// Request identifier this response corresponds to; null when the peer
    /// could not attribute the failure to a request.
    pub id: Option<RequestId>,
    /// The result on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// The error on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Creates a success response.
    #[must_use]
    pub fn success(id: impl Into<RequestId>, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            id: Some(id.into()),
            result: Some(result),
            error: None,
        }
    }

    /// Creates an error response.
    #[must_use]
    pub fn failure(id: Option<RequestId>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// A JSON-RPC 2.0 error object.
///
/// The transport has no opinion on RPC-level failure semantics; error
/// objects pass through to the client layer untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Error code.
    pub code: i64,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Any message that may cross the channel in either direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProtocolMessage {
    /// A request: `method` plus `id`.
    Request(JsonRpcRequest),
    /// A notification: `method` without an `id`.
    Notification(JsonRpcNotification),
    /// A response: `id` with `result` or `error`.
    Response(JsonRpcResponse),
}

impl ProtocolMessage {
    /// Returns the method name for requests and notifications.
    #[must_use]
    pub fn method(&self) -> Option<&str> {
        match self {
            Self::Request(request) => Some(request.method.as_str()),
            Self::Notification(notification) => Some(notification.method.as_str()),
            Self::Response(_) => None,
        }
    }

    /// Splits out the method and mutable params for message kinds that
    /// carry a method.
    pub(crate) fn method_and_params_mut(&mut self) -> Option<(&str, &mut Option<Value>)> {
        match self {
            Self::Request(request) => Some((request.method.as_str(), &mut request.params)),
            Self::Notification(notification) => {
                Some((notification.method.as_str(), &mut notification.params))
            }
            Self::Response(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for ProtocolMessage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let Some(fields) = value.as_object() else {
            return Err(D::Error::custom("JSON-RPC message must be an object"));
        };
        if fields.contains_key("method") {
            if fields.contains_key("id") {
                serde_json::from_value(value)
                    .map(Self::Request)
                    .map_err(D::Error::custom)
            } else {
                serde_json::from_value(value)
                    .map(Self::Notification)
                    .map_err(D::Error::custom)
            }
        } else if fields.contains_key("id") {
            serde_json::from_value(value)
                .map(Self::Response)
                .map_err(D::Error::custom)
        } else {
            Err(D::Error::custom(
                "JSON-RPC message carries neither method nor id",
            ))
        }
    }
}

/// Decodes one socket frame into a protocol message.
///
/// # Errors
///
/// Returns the underlying `serde_json` error when the frame is not valid
/// JSON or does not match any JSON-RPC message shape.
pub fn decode_frame(raw: &str) -> Result<ProtocolMessage, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Encodes a protocol message into the text payload for one socket frame.
///
/// # Errors
///
/// Returns the underlying `serde_json` error when serialisation fails.
pub fn encode_frame(message: &ProtocolMessage) -> Result<String, serde_json::Error> {
    serde_json::to_string(message)
}
