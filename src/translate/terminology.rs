/// UN terminology enforced in strict mode, applied top to bottom.
pub const UN_TERMINOLOGY: &[(&str, &str)] = &[
    ("Palestine", "occupied Palestinian territory"),
    ("فلسطين", "occupied Palestinian territory"),
    ("Secretary-General", "Secretary-General of the United Nations"),
    ("SG", "Secretary-General of the United Nations"),
];

/// Replace every occurrence of each term, one entry at a time.
///
/// Each entry runs over the output of the previous one, so text inserted by an
/// earlier replacement can be matched again by a later entry.
pub fn apply_terminology(text: &str, table: &[(&str, &str)]) -> String {
    table
        .iter()
        .fold(text.to_string(), |acc, (term, replacement)| acc.replace(term, replacement))
}

pub fn enforce_un_terminology(text: &str) -> String {
    apply_terminology(text, UN_TERMINOLOGY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_palestine() {
        assert_eq!(enforce_un_terminology("Palestine"), "occupied Palestinian territory");
    }

    #[test]
    fn replaces_arabic_term() {
        assert_eq!(
            enforce_un_terminology("فلسطين حرة"),
            "occupied Palestinian territory حرة"
        );
    }

    #[test]
    fn replaces_every_occurrence() {
        assert_eq!(
            enforce_un_terminology("The SG met the SG."),
            "The Secretary-General of the United Nations met the Secretary-General of the United Nations."
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(enforce_un_terminology("palestine and sg"), "palestine and sg");
    }

    #[test]
    fn full_title_is_expanded_again() {
        // No guard against text that already carries the replacement.
        assert_eq!(
            enforce_un_terminology("Secretary-General of the United Nations"),
            "Secretary-General of the United Nations of the United Nations"
        );
    }

    #[test]
    fn later_entries_see_earlier_replacements() {
        let table = [("cat", "big dog"), ("dog", "wolf")];
        assert_eq!(apply_terminology("a cat", &table), "a big wolf");

        let reversed = [("dog", "wolf"), ("cat", "big dog")];
        assert_eq!(apply_terminology("a cat", &reversed), "a big dog");
    }

    #[test]
    fn text_without_terms_is_untouched() {
        assert_eq!(enforce_un_terminology("Bonjour"), "Bonjour");
        assert_eq!(enforce_un_terminology(""), "");
    }
}
