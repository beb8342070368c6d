use crate::normalizer::normalize;

pub const MAX_SUGGESTIONS: usize = 7;

/// Up to `MAX_SUGGESTIONS` names, in catalog order, starting with the normalized prefix.
pub fn suggest(prefix: &str, names: &[String]) -> Vec<String> {
    let prefix = normalize(prefix);
    names
        .iter()
        .filter(|name| name.starts_with(&prefix))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|n| normalize(n)).collect()
    }

    #[test]
    fn matches_prefix_in_catalog_order() {
        let catalog = names(&["Widget", "Wired Mouse", "Gadget"]);
        assert_eq!(suggest("wi", &catalog), ["widget", "wired mouse"]);
        assert_eq!(suggest("  WI-", &catalog), ["widget", "wired mouse"]);
    }

    #[test]
    fn empty_prefix_matches_everything_up_to_cap() {
        let catalog: Vec<String> = (0..10).map(|i| format!("item {}", i)).collect();
        let found = suggest("", &catalog);
        assert_eq!(found.len(), MAX_SUGGESTIONS);
        assert_eq!(found[0], "item 0");
        assert_eq!(found[6], "item 6");
    }

    #[test]
    fn no_match_is_empty() {
        assert!(suggest("zzz", &names(&["Widget"])).is_empty());
        assert!(suggest("wi", &[]).is_empty());
    }
}
