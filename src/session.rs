//! Explicit session context for authenticated API calls.
//!
//! There is no ambient token storage: whoever builds the [`Session`]
//! owns where the credential came from. The bearer token is only ever
//! attached to requests that target the configured API base URL;
//! requests to any other host pass through unmodified.

use url::Url;

#[derive(Debug, Clone)]
pub struct Session {
    base_url: Url,
    token: Option<String>,
}

impl Session {
    pub fn new(base_url: Url, token: Option<String>) -> Self {
        Session { base_url, token }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether the bearer credential applies to `url`.
    pub fn applies_to(&self, url: &Url) -> bool {
        url.as_str().starts_with(self.base_url.as_str())
    }

    /// The token to attach for `url`, if any.
    pub fn bearer_for(&self, url: &Url) -> Option<&str> {
        match &self.token {
            Some(token) if self.applies_to(url) => Some(token.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(
            Url::parse("http://localhost:8080/api/").unwrap(),
            Some("secret".to_string()),
        )
    }

    #[test]
    fn attaches_the_token_under_the_base_url_only() {
        let session = session();
        let own = Url::parse("http://localhost:8080/api/event?page=1").unwrap();
        let other = Url::parse("https://thirdparty.example.com/event").unwrap();

        assert_eq!(session.bearer_for(&own), Some("secret"));
        assert_eq!(session.bearer_for(&other), None);
    }

    #[test]
    fn no_token_means_no_header_anywhere() {
        let session = Session::new(Url::parse("http://localhost:8080/api/").unwrap(), None);
        let own = Url::parse("http://localhost:8080/api/event").unwrap();
        assert_eq!(session.bearer_for(&own), None);
    }
}
