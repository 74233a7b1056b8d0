//! Pattern matcher
//!
//!     Finds candidate tokens with one left-to-right, non-overlapping regex scan per
//!     kind. The patterns are assembled from the character-class tables and compiled
//!     once per process into `Lazy` statics, shared read-only between threads.
//!
//!     The regex engine has no lookbehind, so each pattern consumes the character in
//!     front of the marker (or matches at a line/text start) to enforce the "not
//!     preceded by a body character" rule. The body is captured separately so entities
//!     never include that leading character or the marker.
//!
//!     Patterns (capture 1 is the marker, capture 2 the body):
//!
//!         hashtag  (?m)(?:^|[^&<body>])([#＃])(<body>*<letter><body>*)
//!         mention  (?:[^A-Za-z0-9_!#$%&*@＠]|^|[Rr][Tt]:?)([@＠]+)([A-Za-z0-9_]{1,20})
//!         reply    ^(?:<space>)*([@＠])([A-Za-z0-9_]{1,20})
//!
//!     Candidates are not yet accepted; see the [boundary](super::boundary) validator.

use super::charclass::{
    class_items, hashtag_body_items, range_items, AT_SIGNS, HASHTAG_LETTERS, HASH_SIGNS,
    UNICODE_SPACE_RANGES,
};
use super::entity::TokenKind;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::ops::Range;
use tracing::trace;

static HASHTAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let body = hashtag_body_items();
    compile(
        "hashtag",
        &format!(
            r"(?m)(?:^|[^&{body}])([{hash}])([{body}]*[{HASHTAG_LETTERS}][{body}]*)",
            hash = class_items(HASH_SIGNS),
        ),
    )
});

static MENTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let at = class_items(AT_SIGNS);
    compile(
        "mention",
        &format!(r"(?:[^A-Za-z0-9_!#$%&*{at}]|^|[Rr][Tt]:?)([{at}]+)([A-Za-z0-9_]{{1,20}})"),
    )
});

static REPLY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    compile(
        "reply",
        &format!(
            r"^(?:[{spaces}])*([{at}])([A-Za-z0-9_]{{1,20}})",
            spaces = range_items(UNICODE_SPACE_RANGES),
            at = class_items(AT_SIGNS),
        ),
    )
});

/// A pattern that fails to compile is a defect in the tables, never in the input.
fn compile(name: &str, pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid {name} pattern: {err}"))
}

fn pattern(kind: TokenKind) -> &'static Regex {
    match kind {
        TokenKind::Hashtag => &*HASHTAG_PATTERN,
        TokenKind::Mention => &*MENTION_PATTERN,
        TokenKind::Reply => &*REPLY_PATTERN,
    }
}

/// A match that has not been through boundary validation yet.
///
/// Offsets are byte offsets into the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub kind: TokenKind,
    /// The marker run (`#`, `@@`, ...).
    pub marker: Range<usize>,
    /// The token body, excluding the marker.
    pub body: Range<usize>,
}

impl Candidate {
    fn from_captures(kind: TokenKind, caps: &Captures<'_>) -> Option<Self> {
        let marker = caps.get(1)?;
        let body = caps.get(2)?;
        Some(Self {
            kind,
            marker: marker.range(),
            body: body.range(),
        })
    }

    /// Byte offset where the whole match ends; the suffix starts here.
    pub fn match_end(&self) -> usize {
        self.body.end
    }
}

/// True when `text` contains any marker for `kind`.
pub(crate) fn contains_marker(kind: TokenKind, text: &str) -> bool {
    text.contains(kind.markers())
}

/// Scan `text` for candidates of `kind`, in order of appearance.
///
/// Text without a marker returns immediately without running the regex. Reply
/// candidates can only sit at the start of the text, so at most one is returned.
pub(crate) fn candidates(kind: TokenKind, text: &str) -> Vec<Candidate> {
    if !contains_marker(kind, text) {
        trace!(%kind, "no marker in text, skipping scan");
        return Vec::new();
    }

    let found = pattern(kind)
        .captures_iter(text)
        .filter_map(|caps| Candidate::from_captures(kind, &caps));

    match kind {
        TokenKind::Reply => found.take(1).collect(),
        TokenKind::Hashtag | TokenKind::Mention => found.collect(),
    }
}
