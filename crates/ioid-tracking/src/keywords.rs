//! Scanning a keyword string for the IOID marker.
//!
//! The analytics adapter appends its identifier to the ortb2 site keywords
//! as one token of a comma-delimited list, e.g.
//! `"sports,news,ioid=27e71313-a5ec-428c-9af8,local"`. Both `=` and `:` are
//! seen in the wild as the label/value separator.

/// Label under which the adapter stores the identifier.
const IOID_MARKER: &str = "ioid";

/// Outcome of scanning a keyword string.
///
/// `found` and `value` are distinct on purpose: a marker token with an empty
/// value (`"ioid="`) reports the adapter was present even though no
/// identifier can be recovered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeywordScan {
    pub found: bool,
    pub value: Option<String>,
}

/// Scans a comma-delimited keyword string for the IOID marker token.
///
/// Tokens are trimmed and matched case-insensitively on their label: the
/// part before `=` or `:`, or the whole token when no separator is present.
/// The first matching token wins. Malformed input of any shape degrades to
/// "not found"; this function never fails.
pub fn extract_ioid_from_keywords(keywords: &str) -> KeywordScan {
    if keywords.is_empty() {
        return KeywordScan::default();
    }

    for token in keywords.split(',') {
        let token = token.trim();
        let (label, value) = match token.split_once(['=', ':']) {
            Some((label, value)) => (label.trim_end(), Some(value)),
            None => (token, None),
        };
        if !label.eq_ignore_ascii_case(IOID_MARKER) {
            continue;
        }

        let value = value.map(str::trim).filter(|value| !value.is_empty());
        if value.is_none() {
            tracing::warn!(token, "IOID marker present without a value");
        }
        return KeywordScan {
            found: true,
            value: value.map(str::to_owned),
        };
    }

    KeywordScan::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_marker_between_other_keywords() {
        assert_eq!(
            extract_ioid_from_keywords("a,ioid=XYZ,b"),
            KeywordScan {
                found: true,
                value: Some("XYZ".to_string()),
            },
        );
    }

    #[test]
    fn supports_colon_separator_and_ignores_case() {
        assert_eq!(
            extract_ioid_from_keywords("sports, IOID:abc ,news"),
            KeywordScan {
                found: true,
                value: Some("abc".to_string()),
            },
        );
    }

    #[test]
    fn no_marker_means_not_found() {
        assert_eq!(extract_ioid_from_keywords("a,b,c"), KeywordScan::default());
        assert_eq!(extract_ioid_from_keywords(""), KeywordScan::default());
    }

    #[test]
    fn marker_without_value_is_found_but_empty() {
        assert_eq!(
            extract_ioid_from_keywords("ioid="),
            KeywordScan {
                found: true,
                value: None,
            },
        );
        // A bare label with no separator at all counts the same way.
        assert_eq!(
            extract_ioid_from_keywords("a,ioid"),
            KeywordScan {
                found: true,
                value: None,
            },
        );
    }

    #[test]
    fn label_must_match_exactly_not_as_substring() {
        // `xioid=1` carries the marker as a substring but its label is a
        // different keyword.
        assert_eq!(extract_ioid_from_keywords("xioid=1"), KeywordScan::default());
    }

    #[test]
    fn first_matching_token_wins() {
        assert_eq!(
            extract_ioid_from_keywords("ioid=first,ioid=second"),
            KeywordScan {
                found: true,
                value: Some("first".to_string()),
            },
        );
    }
}
