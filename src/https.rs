use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Middleware redirecting requests that did not arrive over HTTPS.
///
/// TLS terminates at the proxy in front of the server, so the scheme is read
/// from `X-Forwarded-Proto`.
pub async fn redirect_to_https(State(https_port): State<u16>, req: Request, next: Next) -> Response {
    let secure = req
        .headers()
        .get(FORWARDED_PROTO)
        .and_then(|h| h.to_str().ok())
        .map(|proto| proto.eq_ignore_ascii_case("https"))
        .unwrap_or(false);

    if secure {
        return next.run(req).await;
    }

    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost");

    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    Redirect::temporary(&https_location(host, https_port, path_and_query)).into_response()
}

/// Build the HTTPS location for `host`, replacing any port it carries.
pub fn https_location(host: &str, https_port: u16, path_and_query: &str) -> String {
    let hostname = strip_port(host);

    if https_port == 443 {
        format!("https://{}{}", hostname, path_and_query)
    } else {
        format!("https://{}:{}{}", hostname, https_port, path_and_query)
    }
}

fn strip_port(host: &str) -> &str {
    // Bracketed IPv6 literal, e.g. [::1]:8080
    if host.starts_with('[') {
        return match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        };
    }

    match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    }
}
