//! Domain extraction from endpoint URLs.

/// Extract the aggregation domain from a URL: the text between the first
/// `//` and the following `/`, or the end of the string. A port suffix,
/// if present, stays part of the domain.
///
/// Returns `None` when the URL has no `//` delimiter or an empty host,
/// which configuration validation rejects up front.
pub fn extract_domain(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("//")?;
    let host = rest.split('/').next().unwrap_or(rest);
    if host.is_empty() { None } else { Some(host) }
}
