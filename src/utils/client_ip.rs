//! Client identity extraction for rate limiting.

use axum::http::HeaderMap;

/// Identity assigned when no forwarding header is present.
///
/// All direct connections share this bucket, so behind a misconfigured proxy
/// every client competes for a single quota. Deploy behind a proxy that sets
/// `X-Forwarded-For`.
pub const FALLBACK_IDENTITY: &str = "127.0.0.1";

/// Extracts the rate-limit identity for a request.
///
/// Uses the first (client-most) entry of `X-Forwarded-For`; falls back to
/// [`FALLBACK_IDENTITY`] when the header is missing or unreadable. The value
/// is an opaque bucket key, not a verified address.
pub fn client_identity(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(FALLBACK_IDENTITY)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_forwarded_for(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_single_address() {
        let headers = headers_with_forwarded_for("203.0.113.7");
        assert_eq!(client_identity(&headers), "203.0.113.7");
    }

    #[test]
    fn test_takes_first_of_proxy_chain() {
        let headers = headers_with_forwarded_for("203.0.113.7, 10.0.0.1, 10.0.0.2");
        assert_eq!(client_identity(&headers), "203.0.113.7");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let headers = headers_with_forwarded_for(" 203.0.113.7 , 10.0.0.1");
        assert_eq!(client_identity(&headers), "203.0.113.7");
    }

    #[test]
    fn test_missing_header_falls_back_to_loopback() {
        let headers = HeaderMap::new();
        assert_eq!(client_identity(&headers), FALLBACK_IDENTITY);
    }

    #[test]
    fn test_empty_header_falls_back_to_loopback() {
        let headers = headers_with_forwarded_for("");
        assert_eq!(client_identity(&headers), FALLBACK_IDENTITY);
    }
}
