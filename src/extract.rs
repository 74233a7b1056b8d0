//! Token extraction
//!
//!     Each call runs one fixed pipeline over the input text:
//!
//!         text -> matcher (candidates) -> boundary (accept/reject) -> entities
//!
//!     No state survives between calls. The compiled patterns are process-wide
//!     immutable statics, so every function here may be called concurrently.
//!
//!     Offsets in returned entities are byte offsets into the input. [Extractor] can
//!     project them to code point offsets instead (see [OffsetUnit]).

pub mod charclass;
pub mod entity;
pub mod options;

mod boundary;
mod matcher;

pub use entity::{values, Entity, TaggedEntity, TokenKind};
pub use options::{ExtractOptions, OffsetUnit};

/// Accepted entities of a single kind, in order of appearance.
fn extract_kind(kind: TokenKind, text: &str) -> Vec<Entity> {
    matcher::candidates(kind, text)
        .iter()
        .filter(|candidate| boundary::accepts(candidate, text))
        .map(|candidate| Entity::from_candidate(text, candidate))
        .collect()
}

/// Hashtags in `text`, without their `#`/`＃` markers.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    values(extract_hashtags_with_indices(text))
}

/// Hashtags in `text` with the byte offsets of each body.
pub fn extract_hashtags_with_indices(text: &str) -> Vec<Entity> {
    extract_kind(TokenKind::Hashtag, text)
}

/// Mentioned usernames in `text`, without their `@`/`＠` markers.
pub fn extract_mentions(text: &str) -> Vec<String> {
    values(extract_mentions_with_indices(text))
}

/// Mentioned usernames in `text` with the byte offsets of each body.
pub fn extract_mentions_with_indices(text: &str) -> Vec<Entity> {
    extract_kind(TokenKind::Mention, text)
}

/// The username `text` replies to, if it opens with a mention.
///
/// Only leading whitespace may come before the marker.
pub fn extract_reply(text: &str) -> Option<String> {
    extract_reply_with_indices(text).map(|entity| entity.value)
}

/// The reply target with the byte offsets of its body; `None` when the text does not
/// open with a mention.
pub fn extract_reply_with_indices(text: &str) -> Option<Entity> {
    extract_kind(TokenKind::Reply, text).into_iter().next()
}

/// Hashtags and mentions together, ordered by position.
///
/// An entity that overlaps an earlier one is dropped. Offsets are bytes.
pub fn extract_entities_with_indices(text: &str) -> Vec<TaggedEntity> {
    Extractor::default().extract_entities(text)
}

/// Merged extraction driven by [ExtractOptions].
///
/// ```text
/// let extractor = Extractor::new(ExtractOptions { offsets: OffsetUnit::Chars, ..Default::default() });
/// let entities = extractor.extract_entities("日本 #タグ @bob");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Enabled kinds, merged by position and projected to the configured offset unit.
    pub fn extract_entities(&self, text: &str) -> Vec<TaggedEntity> {
        let mut found = Vec::new();
        for kind in [TokenKind::Hashtag, TokenKind::Mention] {
            if !self.options.enabled(kind) {
                continue;
            }
            found.extend(
                extract_kind(kind, text)
                    .into_iter()
                    .map(|entity| TaggedEntity::new(kind, entity)),
            );
        }

        let mut merged = entity::merge_sorted(found);
        entity::project_offsets(text, &mut merged, self.options.offsets);
        merged
    }
}
