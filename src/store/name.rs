/// Canonical storage key for a profile name.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(normalize(" Foo "), "foo");
        assert_eq!(normalize("\tQuick Drop\n"), "quick drop");
    }

    #[test]
    fn empty_and_blank_collapse_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn is_idempotent() {
        for raw in [" Foo ", "BAR", "  mixed Case  ", "", "ÄÖÜ"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }
}
