//! Boundary validator
//!
//!     Rejects candidates by looking at the text right after the match. The check only
//!     reads the unconsumed suffix; it never moves back into the matched region.
//!
//!     Hashtags are rejected when followed by another hash marker or by `://`.
//!     Mentions and replies are rejected when followed by another at marker, by `://`,
//!     or by an accented Latin letter that would have continued the name.

use super::charclass::{is_latin_accent, AT_SIGNS, HASH_SIGNS};
use super::entity::TokenKind;
use super::matcher::Candidate;
use tracing::trace;

const SCHEME_SEPARATOR: &str = "://";

/// True when the text following `candidate` allows it to stand as a token.
pub(crate) fn accepts(candidate: &Candidate, text: &str) -> bool {
    let suffix = &text[candidate.match_end()..];
    let rejected = match candidate.kind {
        TokenKind::Hashtag => invalid_hashtag_end(suffix),
        TokenKind::Mention | TokenKind::Reply => invalid_mention_end(suffix),
    };

    if rejected {
        trace!(
            kind = %candidate.kind,
            start = candidate.body.start,
            end = candidate.body.end,
            "candidate rejected by the text that follows it"
        );
    }
    !rejected
}

fn invalid_hashtag_end(suffix: &str) -> bool {
    suffix.starts_with(HASH_SIGNS) || suffix.starts_with(SCHEME_SEPARATOR)
}

fn invalid_mention_end(suffix: &str) -> bool {
    match suffix.chars().next() {
        Some(c) if AT_SIGNS.contains(&c) || is_latin_accent(c) => true,
        _ => suffix.starts_with(SCHEME_SEPARATOR),
    }
}
