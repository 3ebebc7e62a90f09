use axum::http::HeaderMap;

use backend_domain::{RuntimeConfig, UserId};

use crate::error::HttpError;

/// Header carrying the caller identity resolved by the upstream gateway.
pub const USER_ID_HEADER: &str = "X-User-Id";

pub fn authorize(config: &RuntimeConfig, headers: &HeaderMap) -> bool {
    if let Some(api_token) = &config.api_token {
        return extract_bearer(headers)
            .map(|v| v == *api_token)
            .unwrap_or(false);
    }
    true
}

pub fn caller_id(headers: &HeaderMap) -> Option<UserId> {
    let value = headers.get(USER_ID_HEADER)?.to_str().ok()?.trim();
    let id: i64 = value.parse().ok()?;
    if id <= 0 {
        return None;
    }
    Some(UserId(id))
}

/// Token check followed by caller resolution; either failing is a 401.
pub fn authorize_caller(config: &RuntimeConfig, headers: &HeaderMap) -> Result<UserId, HttpError> {
    if !authorize(config, headers) {
        return Err(HttpError::Unauthorized);
    }
    caller_id(headers).ok_or(HttpError::Unauthorized)
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("Authorization")?.to_str().ok()?.trim();
    let prefix = "Bearer ";
    if !value.starts_with(prefix) {
        return None;
    }
    let token = value[prefix.len()..].trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn open_api_only_needs_caller() {
        let config = RuntimeConfig::default();
        let caller = authorize_caller(&config, &headers(&[("x-user-id", "42")])).expect("caller");
        assert_eq!(caller, UserId(42));
        assert!(authorize_caller(&config, &headers(&[])).is_err());
        assert!(authorize_caller(&config, &headers(&[("x-user-id", "abc")])).is_err());
        assert!(authorize_caller(&config, &headers(&[("x-user-id", "0")])).is_err());
    }

    #[test]
    fn token_is_enforced_when_configured() {
        let config = RuntimeConfig {
            api_token: Some("secret".to_string()),
            ..RuntimeConfig::default()
        };
        let good = headers(&[("authorization", "Bearer secret"), ("x-user-id", "1")]);
        let bad = headers(&[("authorization", "Bearer nope"), ("x-user-id", "1")]);
        assert!(authorize_caller(&config, &good).is_ok());
        assert!(authorize_caller(&config, &bad).is_err());
        assert!(authorize_caller(&config, &headers(&[("x-user-id", "1")])).is_err());
    }
}
