//! Tag-to-alias matching shared by the prompt style tables and the card
//! parameter tables.
//!
//! Tags are lowercased and split into words on every non-alphanumeric
//! character. A purely alphabetic alias matches when some word starts with
//! it, so stems like `famil` still cover `families`. An alias holding digits
//! or symbols (`14-25`, `45+`) must appear verbatim in the tag.

fn is_word_alias(alias: &str) -> bool {
    alias.chars().all(char::is_alphabetic)
}

/// `true` if any alias matches `tag`. A blank tag never matches.
pub(crate) fn matches_any(aliases: &[&str], tag: &str) -> bool {
    let tag = tag.trim().to_lowercase();
    if tag.is_empty() {
        return false;
    }
    aliases.iter().any(|alias| {
        if is_word_alias(alias) {
            tag.split(|c: char| !c.is_alphanumeric())
                .any(|word| word.starts_with(alias))
        } else {
            tag.contains(alias)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_prefix_matches() {
        assert!(matches_any(&["famil"], "Families with kids"));
        assert!(matches_any(&["volunteer"], "attract_volunteers"));
        assert!(matches_any(&["event"], "announce-event"));
    }

    #[test]
    fn alias_inside_a_word_does_not_match() {
        assert!(!matches_any(&["older"], "stakeholders"));
        assert!(!matches_any(&["older"], "shareholders"));
        assert!(!matches_any(&["event"], "prevent_fires"));
        assert!(!matches_any(&["compan"], "accompany"));
    }

    #[test]
    fn symbolic_aliases_match_verbatim() {
        assert!(matches_any(&["14-25"], "Youth (14-25)"));
        assert!(matches_any(&["45+"], "Seniors 45+"));
        assert!(!matches_any(&["45+"], "25-45"));
    }

    #[test]
    fn blank_tag_never_matches() {
        assert!(!matches_any(&["youth"], "   "));
    }
}
