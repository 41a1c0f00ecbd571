use axum::http::HeaderMap;

/// Resolves which user a request acts for.
pub trait IdentityProvider: Send + Sync {
    fn current_user_id(&self, headers: &HeaderMap) -> String;
}

/// Hands out one fixed user id to every request.
///
/// Stand-in until the site has real sign-in.
pub struct PlaceholderIdentity {
    user_id: String,
}

impl PlaceholderIdentity {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

impl IdentityProvider for PlaceholderIdentity {
    fn current_user_id(&self, _headers: &HeaderMap) -> String {
        self.user_id.clone()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{header::AUTHORIZATION, HeaderValue};

    use super::*;

    #[test]
    fn ignores_request_headers() {
        let identity = PlaceholderIdentity::new("demo-user");
        let mut headers = HeaderMap::new();
        assert_eq!(identity.current_user_id(&headers), "demo-user");

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        assert_eq!(identity.current_user_id(&headers), "demo-user");
    }
}
