/// Canonical comparison key for product names and queries: trimmed, lowercased,
/// and stripped of everything except ASCII letters, digits and spaces.
pub fn normalize(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();
    // Trim after filtering: a dropped leading symbol must not leave a space behind.
    kept.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_case_and_punctuation() {
        assert_eq!(normalize("Apple, Inc."), normalize("apple inc"));
        assert_eq!(normalize("  Smart-TV 4K!  "), "smarttv 4k");
    }

    #[test]
    fn is_idempotent() {
        for raw in ["Wired Mouse", "  Café au lait ", "!!!", "", "a  b", "é x", "\tTab\n"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn drops_non_ascii_letters() {
        assert_eq!(normalize("Café"), "caf");
        assert_eq!(normalize("é x"), "x");
    }

    #[test]
    fn keeps_interior_spaces() {
        assert_eq!(normalize("a  b"), "a  b");
    }
}
