//! Plain-text narrative markup.
//!
//! Narrative fields are stored as delimited text: `;` separates bullets and
//! `?` introduces a sub-list. `"A;B?c?d"` reads as a bullet "A" followed by a
//! sub-list of "c" and "d". The text before the first `?` of a segment is
//! not rendered, so a sub-list has no heading bullet.

use serde::Serialize;

/// Glyph prefixed to every sub-list child when rendered.
pub const CHILD_MARKER: &str = "→";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum NarrativeItem {
    Bullet(String),
    SubList(Vec<String>),
}

pub type NestedList = Vec<NarrativeItem>;

/// Parse a narrative field. Segments are neither trimmed nor filtered.
pub fn format(text: &str) -> NestedList {
    text.split(';')
        .map(|segment| {
            if segment.contains('?') {
                NarrativeItem::SubList(segment.split('?').skip(1).map(str::to_string).collect())
            } else {
                NarrativeItem::Bullet(segment.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullets_and_headingless_sublist() {
        let out = format("Did research;Built prototype?Tested with 5 users?Iterated");
        assert_eq!(
            out,
            vec![
                NarrativeItem::Bullet("Did research".into()),
                NarrativeItem::SubList(vec!["Tested with 5 users".into(), "Iterated".into()]),
            ]
        );
    }

    #[test]
    fn empty_input_is_one_empty_bullet() {
        assert_eq!(format(""), vec![NarrativeItem::Bullet(String::new())]);
    }

    #[test]
    fn whitespace_segments_are_preserved() {
        let out = format("a;  ;b");
        assert_eq!(
            out,
            vec![
                NarrativeItem::Bullet("a".into()),
                NarrativeItem::Bullet("  ".into()),
                NarrativeItem::Bullet("b".into()),
            ]
        );
    }

    #[test]
    fn trailing_delimiters_keep_empty_segments() {
        let out = format("x?;");
        assert_eq!(
            out,
            vec![
                NarrativeItem::SubList(vec![String::new()]),
                NarrativeItem::Bullet(String::new()),
            ]
        );
    }

    #[test]
    fn format_is_deterministic() {
        let text = "One; two?three ?four;five";
        assert_eq!(format(text), format(text));
    }
}
