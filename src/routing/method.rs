//! Closed HTTP method set.
//!
//! Config files carry methods as raw strings; this is the single point where
//! they are checked against the supported verbs. Unknown values produce a
//! typed error instead of falling through silently.

use std::fmt;
use std::str::FromStr;

use crate::error::RouteError;

/// The HTTP methods an endpoint may bind under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Canonical wire form, also the form expected in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = RouteError;

    // Exact match: method identity in the config surface is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            other => Err(RouteError::UnrecognizedMethod(other.to_string())),
        }
    }
}

impl From<HttpMethod> for axum::http::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => axum::http::Method::GET,
            HttpMethod::Post => axum::http::Method::POST,
            HttpMethod::Put => axum::http::Method::PUT,
            HttpMethod::Delete => axum::http::Method::DELETE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_verbs() {
        assert_eq!("GET".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("POST".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
        assert_eq!("PUT".parse::<HttpMethod>().unwrap(), HttpMethod::Put);
        assert_eq!("DELETE".parse::<HttpMethod>().unwrap(), HttpMethod::Delete);
    }

    #[test]
    fn rejects_unknown_and_lowercase() {
        assert_eq!(
            "PATCH".parse::<HttpMethod>(),
            Err(RouteError::UnrecognizedMethod("PATCH".into()))
        );
        assert!("get".parse::<HttpMethod>().is_err());
        assert!("".parse::<HttpMethod>().is_err());
    }
}
