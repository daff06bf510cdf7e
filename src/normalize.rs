//! Domain normalization: turn a raw input token (bare domain or URL) into
//! the forms the resolver and aggregator work with.
//!
//! Normalization never fails. A malformed token still yields a
//! `NormalizedTarget` carrying the raw token as both hostname fields, so
//! resolution can attempt it and fail gracefully instead of aborting the run.

use url::Url;

/// A normalized input token ready for resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTarget {
    /// The trimmed input token, exactly as it will appear in the output.
    pub raw: String,
    /// Lowercased full hostname (falls back to the raw token when parsing fails).
    pub host: String,
    /// Registrable domain (falls back to the full hostname).
    pub registrable: String,
    /// Whether the token already carried an http/https scheme.
    pub explicit_scheme: bool,
}

impl NormalizedTarget {
    /// Ordered list of base URLs to try: HTTPS first, then HTTP — unless the
    /// token already specified a scheme, in which case only that one.
    pub fn candidates(&self) -> Vec<String> {
        if self.explicit_scheme {
            vec![self.raw.clone()]
        } else {
            vec![
                format!("https://{}", self.raw),
                format!("http://{}", self.raw),
            ]
        }
    }
}

/// Normalize a raw token into a `NormalizedTarget`.
pub fn normalize(token: &str) -> NormalizedTarget {
    let raw = token.trim().to_string();
    let explicit_scheme = raw.starts_with("http://") || raw.starts_with("https://");

    let host = if explicit_scheme {
        host_of(&raw)
    } else {
        host_of(&format!("http://{}", raw))
    }
    .unwrap_or_else(|| raw.to_lowercase());

    let registrable = registrable_domain(&host);

    NormalizedTarget {
        raw,
        host,
        registrable,
        explicit_scheme,
    }
}

/// Extract the lowercased hostname from a URL string, if it has one.
pub fn host_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed.host_str().map(|h| h.to_lowercase())
}

/// Reduce a hostname to its registrable domain using the Public Suffix List.
/// IP addresses, `localhost` and anything the list cannot place fall back to
/// the hostname itself. Best-effort key, not a correctness-critical parse.
pub fn registrable_domain(host: &str) -> String {
    let host = host.to_lowercase();
    // IP addresses have no registrable domain; keep them whole.
    if host.parse::<std::net::IpAddr>().is_ok() {
        return host;
    }
    match psl::domain_str(&host) {
        Some(domain) => domain.to_string(),
        None => host,
    }
}
