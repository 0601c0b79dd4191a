use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Declarative address of a remote language server.
///
/// The transport adapter never dials the socket itself; whoever owns the
/// socket lifecycle resolves one of these into a live connection and hands
/// the open socket to the session.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "transport", rename_all = "snake_case")]
pub enum ServerEndpoint {
    /// WebSocket endpoint, plain or TLS.
    Ws { url: Url },
    /// Raw TCP endpoint.
    Tcp { host: String, port: u16 },
}

impl ServerEndpoint {
    /// Builds a WebSocket endpoint.
    #[must_use]
    pub fn ws(url: Url) -> Self {
        Self::Ws { url }
    }

    /// Builds a TCP endpoint.
    #[must_use]
    pub fn tcp(host: impl Into<String>, port: u16) -> Self {
        Self::Tcp {
            host: host.into(),
            port,
        }
    }

    /// Returns the WebSocket URL when the endpoint uses that transport.
    #[must_use]
    pub fn ws_url(&self) -> Option<&Url> {
        match self {
            Self::Ws { url } => Some(url),
            Self::Tcp { .. } => None,
        }
    }
}

impl fmt::Display for ServerEndpoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ws { url } => write!(formatter, "{url}"),
            Self::Tcp { host, port } => write!(formatter, "tcp://{host}:{port}"),
        }
    }
}

impl FromStr for ServerEndpoint {
    type Err = EndpointParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let url = Url::parse(input)?;
        match url.scheme() {
            "ws" | "wss" => {
                if url.host_str().is_none() {
                    return Err(EndpointParseError::MissingHost(input.to_owned()));
                }
                Ok(Self::Ws { url })
            }
            "tcp" => {
                let host = url
                    .host_str()
                    .ok_or_else(|| EndpointParseError::MissingHost(input.to_owned()))?;
                let port = url
                    .port()
                    .ok_or_else(|| EndpointParseError::MissingPort(input.to_owned()))?;
                Ok(Self::tcp(host, port))
            }
            other => Err(EndpointParseError::UnsupportedScheme(other.to_owned())),
        }
    }
}

/// Errors encountered while parsing a [`ServerEndpoint`] from text.
#[derive(Debug, Error)]
pub enum EndpointParseError {
    /// Scheme was not recognised.
    #[error("unsupported endpoint scheme '{0}'")]
    UnsupportedScheme(String),
    /// Host name was missing.
    #[error("missing host in '{0}'")]
    MissingHost(String),
    /// TCP port was missing from the address.
    #[error("missing TCP port in '{0}'")]
    MissingPort(String),
    /// URL failed to parse.
    #[error(transparent)]
    Url(#[from] url::ParseError),
}
