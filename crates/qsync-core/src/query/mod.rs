//! Query-string utilities.
//!
//! Pure string transformations used by the sync controller: overwrite (or
//! append) one key, and remove a set of keys. Pairs that are not touched are
//! preserved byte-for-byte, so a malformed snapshot passes through unchanged.

mod pairs;
mod target;

pub use target::NavigationTarget;

/// Sets `key` to `value` in `params`.
///
/// If the key is present its first occurrence is overwritten in place and any
/// later duplicates are dropped; otherwise the pair is appended. A leading `?`
/// on `params` is ignored and the result never carries one.
///
/// # Examples
///
/// - `form_url_query("page=2", "subject", "biology")` → `"page=2&subject=biology"`
/// - `form_url_query("subject=maths&page=2", "subject", "coding")` → `"subject=coding&page=2"`
pub fn form_url_query(params: &str, key: &str, value: &str) -> String {
    let encoded = pairs::encode_pair(key, value);
    let mut replaced = false;
    let mut out: Vec<&str> = Vec::new();

    for segment in pairs::segments(params) {
        if pairs::decoded_key(segment) == key {
            if !replaced {
                out.push(&encoded);
                replaced = true;
            }
            continue;
        }
        out.push(segment);
    }

    if !replaced {
        out.push(&encoded);
    }
    out.join("&")
}

/// Removes every pair whose key is in `keys`. No-op for absent keys.
///
/// Returns an empty string when nothing remains.
pub fn remove_keys_from_url_query<K: AsRef<str>>(params: &str, keys: &[K]) -> String {
    pairs::segments(params)
        .filter(|segment| {
            let key = pairs::decoded_key(segment);
            !keys.iter().any(|k| k.as_ref() == key)
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_appends_and_preserves_others() {
        assert_eq!(
            form_url_query("page=2", "subject", "biology"),
            "page=2&subject=biology"
        );
        assert_eq!(form_url_query("", "subject", "maths"), "subject=maths");
        assert_eq!(form_url_query("?", "subject", "maths"), "subject=maths");
    }

    #[test]
    fn merge_overwrites_in_place() {
        assert_eq!(
            form_url_query("subject=maths&page=2", "subject", "coding"),
            "subject=coding&page=2"
        );
    }

    #[test]
    fn merge_collapses_duplicates() {
        assert_eq!(
            form_url_query("subject=a&page=1&subject=b", "subject", "c"),
            "subject=c&page=1"
        );
    }

    #[test]
    fn merge_matches_encoded_key() {
        assert_eq!(
            form_url_query("sub%6Aect=maths", "subject", "history"),
            "subject=history"
        );
    }

    #[test]
    fn merge_passes_malformed_pairs_through() {
        assert_eq!(
            form_url_query("%zz=%&page=2", "subject", "science"),
            "%zz=%&page=2&subject=science"
        );
    }

    #[test]
    fn merge_encodes_value() {
        assert_eq!(
            form_url_query("page=2", "subject", "art & design"),
            "page=2&subject=art+%26+design"
        );
    }

    #[test]
    fn remove_only_key_leaves_empty() {
        assert_eq!(remove_keys_from_url_query("subject=biology", &["subject"]), "");
        assert_eq!(remove_keys_from_url_query("?subject=biology", &["subject"]), "");
    }

    #[test]
    fn remove_keeps_other_pairs() {
        assert_eq!(
            remove_keys_from_url_query("page=2&subject=maths&q=x", &["subject"]),
            "page=2&q=x"
        );
        assert_eq!(
            remove_keys_from_url_query("subject=a&subject=b&page=2", &["subject"]),
            "page=2"
        );
    }

    #[test]
    fn remove_absent_key_is_noop() {
        assert_eq!(remove_keys_from_url_query("page=2", &["subject"]), "page=2");
        assert_eq!(remove_keys_from_url_query("", &["subject"]), "");
    }

    #[test]
    fn remove_multiple_keys() {
        let keys = vec!["subject".to_string(), "page".to_string()];
        assert_eq!(remove_keys_from_url_query("page=2&subject=x&q=y", &keys), "q=y");
    }
}
