//! URL decomposition into scheme, host, path, segments, and query params.

use std::collections::HashMap;

use super::{DeepLinkError, ParsedComponents};

/// Decomposes a raw link string.
///
/// Segments are the non-empty `/`-delimited tokens of the path, order
/// preserved. For a query key that appears more than once, the last
/// occurrence wins.
///
/// Returns [`DeepLinkError::Malformed`] when the input is not a valid URL;
/// never panics.
pub fn parse(raw: &str) -> Result<ParsedComponents, DeepLinkError> {
    let parsed = url::Url::parse(raw).map_err(|source| DeepLinkError::Malformed {
        raw: raw.to_string(),
        source,
    })?;

    let mut params = HashMap::new();
    for (key, value) in parsed.query_pairs() {
        params.insert(key.into_owned(), value.into_owned());
    }

    let path = parsed.path().to_string();
    let segments = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    Ok(ParsedComponents {
        scheme: parsed.scheme().to_string(),
        host: parsed.host_str().unwrap_or_default().to_string(),
        path,
        segments,
        params,
    })
}
