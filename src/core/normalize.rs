/// Literal that disables a requirement
pub const WILDCARD_TOKEN: &str = "any";

/// Prefix of a self-reference token such as "Same Cast"
const SELF_REFERENCE_PREFIX: &str = "same";

/// Parse a feet-decimal height such as `"5.6"` into a float
///
/// Surrounding whitespace and a trailing `ft` or `'` unit are tolerated.
/// Returns `None` for anything that is not a finite, non-negative number.
#[inline]
pub fn normalize_height(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let lowered = trimmed.to_ascii_lowercase();
    let numeric = lowered
        .strip_suffix("ft")
        .or_else(|| lowered.strip_suffix('\''))
        .unwrap_or(&lowered)
        .trim();

    match numeric.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        _ => None,
    }
}

/// Lower-case and trim a literal for case-insensitive comparison
#[inline]
pub fn normalize_token(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// True when the list places no constraint: empty, blank, or containing "Any"
pub fn is_wildcard(values: &[String]) -> bool {
    values.iter().all(|v| v.trim().is_empty())
        || values
            .iter()
            .any(|v| v.trim().eq_ignore_ascii_case(WILDCARD_TOKEN))
}

/// Detect a `"Same <X>"` token and return its label `X`
pub fn is_self_reference(values: &[String]) -> Option<&str> {
    values.iter().find_map(|v| self_reference_label(v))
}

fn self_reference_label(token: &str) -> Option<&str> {
    let token = token.trim();
    let (head, rest) = token.split_once(char::is_whitespace)?;
    if !head.eq_ignore_ascii_case(SELF_REFERENCE_PREFIX) {
        return None;
    }
    let label = rest.trim();
    (!label.is_empty()).then_some(label)
}

/// Case-insensitive equality. Blank values never match anything.
#[inline]
pub fn tokens_equal(a: &str, b: &str) -> bool {
    let a = a.trim();
    let b = b.trim();
    !a.is_empty() && !b.is_empty() && a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_normalize_height() {
        assert_eq!(normalize_height("5.6"), Some(5.6));
        assert_eq!(normalize_height(" 6 "), Some(6.0));
        assert_eq!(normalize_height("5.2ft"), Some(5.2));
        assert_eq!(normalize_height("5.9'"), Some(5.9));
        assert_eq!(normalize_height("tall"), None);
        assert_eq!(normalize_height(""), None);
        assert_eq!(normalize_height("NaN"), None);
        assert_eq!(normalize_height("-5"), None);
    }

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("  Syed "), "syed");
        assert_eq!(normalize_token("HANAFI"), "hanafi");
    }

    #[test]
    fn test_wildcard_detection() {
        assert!(is_wildcard(&[]));
        assert!(is_wildcard(&list(&["  "])));
        assert!(is_wildcard(&list(&["Any"])));
        assert!(is_wildcard(&list(&["Syed", "any"])));
        assert!(!is_wildcard(&list(&["Syed"])));
        assert!(!is_wildcard(&list(&["Anywhere"])));
    }

    #[test]
    fn test_self_reference_detection() {
        assert_eq!(is_self_reference(&list(&["Same Cast"])), Some("Cast"));
        assert_eq!(is_self_reference(&list(&["Syed", "same  Mother Tongue"])), Some("Mother Tongue"));
        assert_eq!(is_self_reference(&list(&["Same"])), None);
        assert_eq!(is_self_reference(&list(&["Samesh"])), None);
        assert_eq!(is_self_reference(&list(&["Syed"])), None);
    }

    #[test]
    fn test_tokens_equal() {
        assert!(tokens_equal("Hanafi", " hanafi"));
        assert!(!tokens_equal("BSc", "BSc Computer Science"));
        assert!(!tokens_equal("", ""));
    }
}
