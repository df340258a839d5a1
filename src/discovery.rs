//! Where browser clients find the backend.
//!
//! Storefront and dashboard builds resolve the API from the host they were
//! served on: a page opened on `localhost` or `127.0.0.1` talks to
//! `http://localhost:<port>`, anything else to `http://<host>:<port>`.

pub const BACKEND_PORT: u16 = 5001;
pub const STOREFRONT_PORT: u16 = 3000;
pub const DASHBOARD_PORT: u16 = 3001;

/// Hosts that mean "this machine", including the wildcard bind address
fn is_local(host: &str) -> bool {
    matches!(host, "" | "localhost" | "127.0.0.1" | "0.0.0.0")
}

/// Strips a `:port` suffix, leaving bracketed IPv6 hosts intact
fn bare_host(host: &str) -> &str {
    let host = host.trim();
    if host.starts_with('[') {
        return host.split_inclusive(']').next().unwrap_or(host);
    }
    match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    }
}

/// Backend origin for a client served from `host`
pub fn backend_url_for_host(host: &str, port: u16) -> String {
    let host = bare_host(host);
    if is_local(host) {
        format!("http://localhost:{}", port)
    } else {
        format!("http://{}:{}", host, port)
    }
}

/// REST base (`<backend>/api`)
pub fn api_base_url(host: &str, port: u16) -> String {
    format!("{}/api", backend_url_for_host(host, port))
}

/// Socket endpoint; same origin as the backend
pub fn socket_url(host: &str, port: u16) -> String {
    backend_url_for_host(host, port)
}

/// Storefront and dashboard origins a browser would send for `host`
pub fn default_client_origins(host: &str) -> Vec<String> {
    let host = bare_host(host);
    let host = if is_local(host) {
        "localhost"
    } else {
        host
    };

    [STOREFRONT_PORT, DASHBOARD_PORT]
        .iter()
        .map(|port| format!("http://{}:{}", host, port))
        .collect()
}
