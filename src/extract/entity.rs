//! Extraction results
//!
//!     An [Entity] is the public record for one accepted token: the byte offsets of the
//!     token body (marker excluded) and the body text itself. Entities are plain values
//!     owned by the caller; nothing here refers back into the extractor.

use super::charclass::{AT_SIGNS, HASH_SIGNS};
use super::matcher::Candidate;
use super::options::OffsetUnit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// The kinds of token the extractor knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Hashtag,
    Mention,
    Reply,
}

impl TokenKind {
    /// Marker characters that can open a token of this kind.
    pub fn markers(self) -> &'static [char] {
        match self {
            TokenKind::Hashtag => HASH_SIGNS,
            TokenKind::Mention | TokenKind::Reply => AT_SIGNS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Hashtag => "hashtag",
            TokenKind::Mention => "mention",
            TokenKind::Reply => "reply",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token body located in the source text.
///
/// `start` and `end` are UTF-8 byte offsets, so `&text[start..end] == value` for the
/// text the entity was extracted from. Use [OffsetUnit::Chars] projections when code
/// point offsets are needed instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    pub start: usize,
    pub end: usize,
    pub value: String,
}

impl Entity {
    pub fn new(start: usize, end: usize, value: impl Into<String>) -> Self {
        Self {
            start,
            end,
            value: value.into(),
        }
    }

    pub(crate) fn from_candidate(text: &str, candidate: &Candidate) -> Self {
        let Range { start, end } = candidate.body.clone();
        Self::new(start, end, &text[start..end])
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Code point offsets of this entity within `text`.
    ///
    /// `text` must be the string the entity was extracted from.
    pub fn char_range(&self, text: &str) -> Range<usize> {
        let start = text[..self.start].chars().count();
        start..start + self.value.chars().count()
    }

    fn overlaps(&self, other: &Entity) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// An entity together with the kind of token it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedEntity {
    pub kind: TokenKind,
    #[serde(flatten)]
    pub entity: Entity,
}

impl TaggedEntity {
    pub fn new(kind: TokenKind, entity: Entity) -> Self {
        Self { kind, entity }
    }
}

/// Keep only the body text of each entity, preserving order.
pub fn values(entities: Vec<Entity>) -> Vec<String> {
    entities.into_iter().map(|entity| entity.value).collect()
}

/// Order tagged entities by start offset and drop any entity that overlaps one
/// already kept.
pub(crate) fn merge_sorted(mut entities: Vec<TaggedEntity>) -> Vec<TaggedEntity> {
    entities.sort_by_key(|tagged| (tagged.entity.start, tagged.entity.end));

    let mut merged: Vec<TaggedEntity> = Vec::with_capacity(entities.len());
    for tagged in entities {
        if let Some(last) = merged.last() {
            if last.entity.overlaps(&tagged.entity) {
                continue;
            }
        }
        merged.push(tagged);
    }
    merged
}

/// Rewrite offsets of `entities` (sorted by start, non-overlapping, all taken from
/// `text`) into the requested unit.
///
/// Char projection walks the text once, carrying a byte/char cursor from entity to
/// entity.
pub(crate) fn project_offsets(text: &str, entities: &mut [TaggedEntity], unit: OffsetUnit) {
    if unit == OffsetUnit::Bytes {
        return;
    }

    let mut byte_cursor = 0;
    let mut char_cursor = 0;
    for tagged in entities.iter_mut() {
        let entity = &mut tagged.entity;
        char_cursor += text[byte_cursor..entity.start].chars().count();
        let body_chars = entity.value.chars().count();

        byte_cursor = entity.end;
        entity.start = char_cursor;
        entity.end = char_cursor + body_chars;
        char_cursor = entity.end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(kind: TokenKind, start: usize, end: usize, value: &str) -> TaggedEntity {
        TaggedEntity::new(kind, Entity::new(start, end, value))
    }

    #[test]
    fn test_entity_accessors() {
        let entity = Entity::new(1, 8, "hashtag");
        assert_eq!(entity.range(), 1..8);
        assert_eq!(entity.len(), 7);
        assert!(!entity.is_empty());
    }

    #[test]
    fn test_char_range_counts_code_points() {
        let text = "日本 #タグ";
        let entity = Entity::new(8, 14, "タグ");
        assert_eq!(&text[entity.range()], "タグ");
        assert_eq!(entity.char_range(text), 4..6);
    }

    #[test]
    fn test_markers_by_kind() {
        assert_eq!(TokenKind::Hashtag.markers(), &['#', '\u{FF03}']);
        assert_eq!(TokenKind::Mention.markers(), TokenKind::Reply.markers());
        assert_eq!(TokenKind::Reply.to_string(), "reply");
    }

    #[test]
    fn test_merge_sorted_orders_and_drops_overlaps() {
        let merged = merge_sorted(vec![
            tagged(TokenKind::Hashtag, 10, 14, "rust"),
            tagged(TokenKind::Mention, 1, 6, "alice"),
            tagged(TokenKind::Hashtag, 3, 5, "ic"),
        ]);
        let starts: Vec<usize> = merged.iter().map(|t| t.entity.start).collect();
        assert_eq!(starts, vec![1, 10]);
    }

    #[test]
    fn test_project_offsets_to_chars() {
        let text = "ü @bob #día";
        let mut entities = vec![
            tagged(TokenKind::Mention, 4, 7, "bob"),
            tagged(TokenKind::Hashtag, 9, 13, "día"),
        ];
        project_offsets(text, &mut entities, OffsetUnit::Chars);

        assert_eq!(entities[0].entity.range(), 3..6);
        assert_eq!(entities[1].entity.range(), 8..11);
        for tagged in &entities {
            let chars: String = text
                .chars()
                .skip(tagged.entity.start)
                .take(tagged.entity.len())
                .collect();
            assert_eq!(chars, tagged.entity.value);
        }
    }

    #[test]
    fn test_project_offsets_bytes_is_identity() {
        let mut entities = vec![tagged(TokenKind::Mention, 4, 7, "bob")];
        project_offsets("ü @bob", &mut entities, OffsetUnit::Bytes);
        assert_eq!(entities[0].entity.range(), 4..7);
    }

    #[test]
    fn test_tagged_entity_serializes_flat() {
        let json = serde_json::to_value(tagged(TokenKind::Hashtag, 1, 8, "hashtag")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "hashtag", "start": 1, "end": 8, "value": "hashtag"})
        );
    }
}
