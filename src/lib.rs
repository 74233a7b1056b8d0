//! # hashtag
//!
//! Extraction of social-media tokens from arbitrary Unicode text: hashtags (`#tag`,
//! `＃tag`), mentions (`@user`, `＠user`) and reply targets (a mention opening the
//! text). The grammar follows the widely used twitter-text rules: multi-script letter
//! and mark classes, per-script joiners, "not inside a word" start anchors and a
//! lookahead on the text that follows each match.
//!
//! Module layout
//!
//! extract
//!   ├── charclass   Code point tables and their regex renderings
//!   ├── matcher     Compiled patterns, candidate scan
//!   ├── boundary    Post-match suffix checks
//!   ├── entity      Entity, TokenKind, offset projection
//!   └── options     ExtractOptions, OffsetUnit
//!
//! Every function is pure: it reads the input, allocates its own results and keeps
//! nothing between calls. Returned offsets are UTF-8 byte offsets unless an
//! [Extractor] is configured for code points.

pub mod extract;

pub use extract::{
    extract_entities_with_indices, extract_hashtags, extract_hashtags_with_indices,
    extract_mentions, extract_mentions_with_indices, extract_reply, extract_reply_with_indices,
    Entity, ExtractOptions, Extractor, OffsetUnit, TaggedEntity, TokenKind,
};
