//! Section tags the planner instructs the model to emit
//!
//! Tags are matched as literal substrings or prefixes of text parts. There is
//! no nesting and no escaping.

pub const PLANNING_TAG: &str = "/*PLANNING*/";
pub const REASONING_TAG: &str = "/*REASONING*/";
pub const ACTION_TAG: &str = "/*ACTION*/";
pub const REFLECTION_TAG: &str = "/*REFLECTION*/";
pub const REPLANNING_TAG: &str = "/*REPLANNING*/";
pub const FINAL_ANSWER_TAG: &str = "/*FINAL_ANSWER*/";

/// Tags whose presence at the start of a text part marks it as thought
pub const NARRATIVE_TAGS: [&str; 5] = [
    PLANNING_TAG,
    REASONING_TAG,
    ACTION_TAG,
    REFLECTION_TAG,
    REPLANNING_TAG,
];

/// Whether `text` begins with one of the narrative tags
pub fn starts_with_narrative_tag(text: &str) -> bool {
    NARRATIVE_TAGS.iter().any(|tag| text.starts_with(tag))
}

/// Split `text` after the last occurrence of `separator`.
///
/// The head keeps the separator. Without a match the whole text is the head.
pub fn split_by_last_pattern<'a>(text: &'a str, separator: &str) -> (&'a str, &'a str) {
    match text.rfind(separator) {
        Some(index) => text.split_at(index + separator.len()),
        None => (text, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_narrative_tag() {
        assert!(starts_with_narrative_tag("/*PLANNING*/ 1. search"));
        assert!(starts_with_narrative_tag("/*REPLANNING*/"));
        assert!(!starts_with_narrative_tag(" /*PLANNING*/ leading space"));
        assert!(!starts_with_narrative_tag("plan: /*REASONING*/"));
        assert!(!starts_with_narrative_tag("/*FINAL_ANSWER*/ done"));
        assert!(!starts_with_narrative_tag(""));
    }

    #[test]
    fn test_split_by_last_pattern() {
        assert_eq!(
            split_by_last_pattern("a /*FINAL_ANSWER*/ b /*FINAL_ANSWER*/ c", FINAL_ANSWER_TAG),
            ("a /*FINAL_ANSWER*/ b /*FINAL_ANSWER*/", " c")
        );
        assert_eq!(
            split_by_last_pattern("ends /*FINAL_ANSWER*/", FINAL_ANSWER_TAG),
            ("ends /*FINAL_ANSWER*/", "")
        );
        assert_eq!(
            split_by_last_pattern("no tag here", FINAL_ANSWER_TAG),
            ("no tag here", "")
        );
    }

    #[test]
    fn test_split_keeps_multibyte_text() {
        let (head, tail) = split_by_last_pattern("réflexion /*FINAL_ANSWER*/ réponse", FINAL_ANSWER_TAG);
        assert_eq!(head, "réflexion /*FINAL_ANSWER*/");
        assert_eq!(tail, " réponse");
    }
}
