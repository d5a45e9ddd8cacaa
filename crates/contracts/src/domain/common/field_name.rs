/// Converts a wire field name into the text shown to the user:
/// `company_order_number` becomes `company order number`.
pub fn humanize_field_name(field: &str) -> String {
    field.replace('_', " ")
}

/// Splits a comma-delimited input into trimmed, non-empty entries.
/// Order of the remaining entries is preserved.
pub fn split_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// `None` for blank input, trimmed text otherwise.
pub fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_field_name() {
        assert_eq!(humanize_field_name("company_order_number"), "company order number");
        assert_eq!(humanize_field_name("spun"), "spun");
    }

    #[test]
    fn test_split_comma_list() {
        assert_eq!(split_comma_list("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(split_comma_list(" , ,x,,"), vec!["x"]);
        assert!(split_comma_list("").is_empty());
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank(" V-7 "), Some("V-7".to_string()));
    }
}
