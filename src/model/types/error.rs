use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("The request did not reach the server: {0}")]
    Network(String),
    #[error("The server answered with status {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("Error from serde decode: {0}")]
    Decode(String),
    #[error("Not a usable url: {0}")]
    InvalidUrl(String),
    #[error("Browser api unavailable: {0}")]
    Browser(String),
    #[error("A env was not found: {0}")]
    EnvNotFound(String),
    #[error("The activities backend could not be reached: {0}")]
    Upstream(String),
}

impl From<Error> for String {
    fn from(val: Error) -> Self {
        match val {
            Error::Network(s) => s,
            Error::Status { status, detail } => {
                detail.unwrap_or_else(|| format!("server answered with status {}", status))
            }
            Error::Decode(s) => s,
            Error::InvalidUrl(s) => s,
            Error::Browser(s) => s,
            Error::EnvNotFound(s) => format!("{} is not set", s),
            Error::Upstream(s) => s,
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::InvalidUrl(e.to_string())
    }
}

impl From<gloo::net::Error> for Error {
    fn from(e: gloo::net::Error) -> Self {
        match e {
            gloo::net::Error::SerdeError(e) => Error::Decode(e.to_string()),
            e => Error::Network(e.to_string()),
        }
    }
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Upstream(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_json_is_a_decode_error() {
        let serde_error = serde_json::from_str::<u32>("{").unwrap_err();
        let error = Error::from(gloo::net::Error::SerdeError(serde_error));
        assert!(matches!(error, Error::Decode(_)));
    }

    #[test]
    fn other_fetch_failures_are_network_errors() {
        let error = Error::from(gloo::net::Error::GlooError("failed to fetch".to_string()));
        assert_eq!(error, Error::Network("failed to fetch".to_string()));
    }

    #[test]
    fn status_text_prefers_detail() {
        let with_detail = Error::Status {
            status: 400,
            detail: Some("Student already signed up".to_string()),
        };
        let without = Error::Status {
            status: 502,
            detail: None,
        };
        assert_eq!(String::from(with_detail), "Student already signed up");
        assert_eq!(String::from(without), "server answered with status 502");
    }
}
