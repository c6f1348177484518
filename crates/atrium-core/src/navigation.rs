//! Outbound-link decoration.
//!
//! Links that leave the application get a query-string fragment spliced in
//! (tracking source, device id, whatever the host wants to attach) without
//! disturbing the query parameters the link already carries.

use thiserror::Error;
use url::Url;

/// Produces the query-string fragment spliced into an outbound URL.
///
/// The fragment is opaque `key=value` text, possibly several pairs joined
/// with `&`. [`decorate_navigation_url`] neither validates nor escapes it,
/// and only consults the source once the URL has parsed.
pub trait QueryStringSource {
    fn query_string(&self, url: &Url) -> String;
}

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("Malformed navigation URL {url:?}: {source}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Decorate an absolute `url` with the fragment produced by `source`.
///
/// An existing query string is kept: the fragment is appended after `&` when
/// the URL already carries a query and becomes the whole query otherwise.
pub fn decorate_navigation_url(
    url: &str,
    source: &dyn QueryStringSource,
) -> Result<String, NavigationError> {
    let mut parsed = Url::parse(url).map_err(|err| NavigationError::MalformedUrl {
        url: url.to_string(),
        source: err,
    })?;

    let fragment = source.query_string(&parsed);
    let merged = match parsed.query() {
        Some(existing) if !existing.is_empty() => format!("{existing}&{fragment}"),
        _ => fragment,
    };
    parsed.set_query(Some(&merged));

    Ok(parsed.into())
}
