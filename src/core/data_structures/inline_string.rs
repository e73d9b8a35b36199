/*!
 * Inline String Optimization
 * Zero-allocation strings for process identities
 */

use serde::{Deserialize, Serialize};
use smartstring::alias::String as SmartString;
use std::fmt;

/// Inline-optimized string that stores short strings (≤23 bytes) without heap allocation
///
/// Process identities in a batch file are short tokens ("P1", "job-7"), so they
/// stay inline. Ordering is lexical on the underlying bytes, which is the
/// identity tie-break used by the dispatcher.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct InlineString {
    inner: SmartString,
}

impl InlineString {
    /// Create new empty inline string
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: SmartString::new(),
        }
    }

    /// Get string slice
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// Check if string is stored inline (no heap allocation)
    #[inline]
    pub fn is_inline(&self) -> bool {
        self.inner.is_inline()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for InlineString {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for InlineString {
    #[inline]
    fn from(s: &str) -> Self {
        Self {
            inner: SmartString::from(s),
        }
    }
}

impl From<String> for InlineString {
    #[inline]
    fn from(s: String) -> Self {
        Self {
            inner: SmartString::from(s),
        }
    }
}

impl From<InlineString> for String {
    #[inline]
    fn from(s: InlineString) -> Self {
        s.inner.into()
    }
}

impl AsRef<str> for InlineString {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::ops::Deref for InlineString {
    type Target = str;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl fmt::Display for InlineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::borrow::Borrow<str> for InlineString {
    #[inline(always)]
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_ids_inline() {
        for id in ["P1", "P10", "job-7", "worker_alpha"] {
            let inline = InlineString::from(id);
            assert!(inline.is_inline(), "id '{}' should be inline", id);
            assert_eq!(inline.as_str(), id);
        }
    }

    #[test]
    fn test_lexical_ordering() {
        // Byte order, not numeric: "P10" sorts before "P2"
        let p2 = InlineString::from("P2");
        let p10 = InlineString::from("P10");
        assert!(p10 < p2);
        assert!(InlineString::from("A") < InlineString::from("B"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = InlineString::from("P3");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"P3\"");
        let back: InlineString = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
