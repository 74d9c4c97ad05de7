//! Raw `key=value` segments of a query string.
//!
//! Segments are kept verbatim; only keys are decoded, and only for comparison.
//! Anything that fails to decode cleanly is still carried through untouched.

use std::borrow::Cow;
use url::form_urlencoded;

/// Non-empty `&`-separated segments of `params`, ignoring a leading `?`.
pub(super) fn segments(params: &str) -> impl Iterator<Item = &str> {
    params
        .strip_prefix('?')
        .unwrap_or(params)
        .split('&')
        .filter(|s| !s.is_empty())
}

/// Form-decoded key of a raw segment (`sub%6Aect=x` -> `subject`).
pub(super) fn decoded_key(segment: &str) -> Cow<'_, str> {
    let raw_key = segment.split_once('=').map_or(segment, |(k, _)| k);
    form_urlencoded::parse(raw_key.as_bytes())
        .next()
        .map(|(k, _)| k)
        .unwrap_or(Cow::Borrowed(""))
}

/// Form-encodes a single `key=value` pair.
pub(super) fn encode_pair(key: &str, value: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish()
}
