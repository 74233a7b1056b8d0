//! Options for merged extraction.

use super::entity::TokenKind;
use serde::{Deserialize, Serialize};

/// Unit used for entity offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OffsetUnit {
    /// UTF-8 byte offsets, valid for slicing the input `&str`.
    #[default]
    Bytes,
    /// Unicode scalar value (code point) offsets.
    Chars,
}

/// Which token kinds [Extractor](super::Extractor) reports and how it positions them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    pub hashtags: bool,
    pub mentions: bool,
    pub offsets: OffsetUnit,
}

impl ExtractOptions {
    pub fn enabled(&self, kind: TokenKind) -> bool {
        match kind {
            TokenKind::Hashtag => self.hashtags,
            TokenKind::Mention => self.mentions,
            TokenKind::Reply => false,
        }
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            hashtags: true,
            mentions: true,
            offsets: OffsetUnit::Bytes,
        }
    }
}
