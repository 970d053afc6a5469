//! Delimiter configuration for math spans.
//!
//! A configuration is an ordered list of literal delimiter pairs, each
//! tagged as display or inline. Order matters: scanners try pairs in
//! declaration order and the first structural match wins, so when one
//! pair's left marker is a prefix of another's (`$$` vs `$`), the
//! longer marker must be declared first.

use smallvec::SmallVec;
use thiserror::Error;

/// Configuration construction failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A delimiter marker was the empty string.
    #[error("delimiter markers must be non-empty literal strings")]
    EmptyMarker,
}

/// One left/right literal marker pair bounding a math span.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DelimiterPair {
    /// Opening marker.
    pub left: String,
    /// Closing marker.
    pub right: String,
    /// Whether spans bounded by this pair render in display mode.
    pub display: bool,
}

impl DelimiterPair {
    /// Create a pair, validating that both markers are non-empty.
    pub fn new(
        left: impl Into<String>,
        right: impl Into<String>,
        display: bool,
    ) -> Result<Self, ConfigError> {
        let left = left.into();
        let right = right.into();
        if left.is_empty() || right.is_empty() {
            return Err(ConfigError::EmptyMarker);
        }
        Ok(Self {
            left,
            right,
            display,
        })
    }

    // Internal constructor for markers known to be non-empty.
    fn literal(left: &str, right: &str, display: bool) -> Self {
        debug_assert!(!left.is_empty() && !right.is_empty());
        Self {
            left: left.to_owned(),
            right: right.to_owned(),
            display,
        }
    }
}

/// Ordered, immutable set of delimiter pairs.
///
/// Created once at setup and shared by both scanners for the lifetime
/// of the parse.
#[derive(Clone, Debug)]
pub struct MathConfig {
    pairs: SmallVec<[DelimiterPair; 4]>,
}

impl MathConfig {
    /// Create a configuration from pairs, preserving declaration order.
    pub fn new(pairs: impl IntoIterator<Item = DelimiterPair>) -> Self {
        Self {
            pairs: pairs.into_iter().collect(),
        }
    }

    /// TeX dollar delimiters: `$$ … $$` display, `$ … $` inline.
    ///
    /// `$$` is declared before `$` so the display marker wins at a
    /// shared starting position.
    pub fn dollars() -> Self {
        Self::new([
            DelimiterPair::literal("$$", "$$", true),
            DelimiterPair::literal("$", "$", false),
        ])
    }

    /// All configured pairs, in declaration order.
    #[inline]
    pub fn pairs(&self) -> &[DelimiterPair] {
        &self.pairs
    }

    /// Pairs with the display flag set, in declaration order.
    pub fn display_pairs(&self) -> impl Iterator<Item = &DelimiterPair> {
        self.pairs.iter().filter(|p| p.display)
    }
}

impl Default for MathConfig {
    /// The bracket delimiters: `\[ … \]` display, `\( … \)` inline.
    fn default() -> Self {
        Self::new([
            DelimiterPair::literal(r"\[", r"\]", true),
            DelimiterPair::literal(r"\(", r"\)", false),
        ])
    }
}
