// ⚠️ Error taxonomy for one fetch → decode → render run
// Every variant is terminal: the binary reports it and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Request could not be sent, or the response body could not be read
    #[error("error making GET request to {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid proxy URL {proxy:?}")]
    InvalidProxy {
        proxy: String,
        #[source]
        source: url::ParseError,
    },

    #[error("received non-OK HTTP status code {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// Body is not JSON, or a field has the wrong JSON type. `path` is the
    /// offending field (`.` when the body itself does not parse).
    #[error("malformed payload at {path}: {source}")]
    MalformedPayload {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Writing the rendered table to its output stream failed
    #[error("could not write account table")]
    Render(#[source] std::io::Error),

    #[error("could not write JSON results to {}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Status code carried by an `HttpStatus` failure
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only_on_http_status() {
        let err = Error::HttpStatus {
            url: "https://bridge.example/accounts".to_string(),
            status: 500,
        };
        assert_eq!(err.status(), Some(500));
        assert_eq!(
            err.to_string(),
            "received non-OK HTTP status code 500 from https://bridge.example/accounts"
        );

        let err = Error::MalformedPayload {
            path: "accounts[0].balance".to_string(),
            source: serde_json::from_str::<u8>("x").unwrap_err(),
        };
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("malformed payload at accounts[0].balance: "));
    }
}
