// Copyright (c) 2025-present, bytespan authors
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::bytespan::{resolve_range, ByteSpan};
use std::ops::{Deref, Range, RangeBounds};

/// A non-owning view over a contiguous, UTF-8–encoded character buffer
///
/// Uses [`ByteSpan`] internally, but derefs as [`&str`].
///
/// The buffer it references must outlive it, which the `'a` lifetime
/// enforces at compile time. Like [`ByteSpan`], it is `Copy` and never
/// touches the underlying storage.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrSpan<'a>(ByteSpan<'a>);

impl std::fmt::Debug for StrSpan<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl std::fmt::Display for StrSpan<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Deref for StrSpan<'_> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

// Hashes with str semantics so lookups through Borrow<str> behave
impl std::hash::Hash for StrSpan<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl<'a> StrSpan<'a> {
    /// Creates a new span over an existing string slice.
    #[must_use]
    pub const fn new(s: &'a str) -> Self {
        Self(ByteSpan::new(s.as_bytes()))
    }

    /// Creates a span over no characters.
    #[must_use]
    pub const fn empty() -> Self {
        Self(ByteSpan::empty())
    }

    /// Returns `true` if the span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the amount of bytes in the span.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the viewed string slice.
    ///
    /// The returned slice borrows the underlying buffer, not the span,
    /// so it may outlive the span itself.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        // SAFETY: Constructors only admit valid UTF-8
        unsafe { std::str::from_utf8_unchecked(self.0.as_slice()) }
    }

    /// Returns the viewed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.0.as_slice()
    }

    /// Returns a span over the given range of this span.
    ///
    /// No characters are copied; the new span references the same buffer.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds or does not lie on char
    /// boundaries.
    #[must_use]
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Self {
        let (begin, end) = resolve_range(range, self.len());

        let s = self.as_str();
        assert!(
            s.is_char_boundary(begin),
            "range start is not a char boundary: {begin:?}",
        );
        assert!(
            s.is_char_boundary(end),
            "range end is not a char boundary: {end:?}",
        );

        Self::new(&s[begin..end])
    }

    /// Returns a span over the given range, or `None` if it is out of
    /// bounds or does not lie on char boundaries.
    #[must_use]
    pub fn get(&self, range: Range<usize>) -> Option<Self> {
        self.as_str().get(range).map(Self::new)
    }

    /// Splits the span into two at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `mid` is past the end of the span or not on a char
    /// boundary.
    #[must_use]
    pub fn split_at(&self, mid: usize) -> (Self, Self) {
        let (head, tail) = self.as_str().split_at(mid);
        (Self::new(head), Self::new(tail))
    }

    /// Returns `true` if `needle` is a prefix of the span or equal to the span.
    #[must_use]
    pub fn starts_with(&self, needle: &str) -> bool {
        self.0.starts_with(needle.as_bytes())
    }

    /// Returns `true` if `needle` is a suffix of the span or equal to the span.
    #[must_use]
    pub fn ends_with(&self, needle: &str) -> bool {
        self.0.ends_with(needle.as_bytes())
    }

    /// Returns the span with `prefix` removed, or `None` if the span does
    /// not start with `prefix`.
    #[must_use]
    pub fn strip_prefix(&self, prefix: &str) -> Option<Self> {
        self.as_str().strip_prefix(prefix).map(Self::new)
    }

    /// Copies the viewed characters into a string.
    ///
    /// This is the only operation that duplicates data.
    #[must_use]
    pub fn to_owned(&self) -> String {
        self.as_str().to_owned()
    }
}

impl std::borrow::Borrow<str> for StrSpan<'_> {
    fn borrow(&self) -> &str {
        self
    }
}

impl AsRef<str> for StrSpan<'_> {
    fn as_ref(&self) -> &str {
        self
    }
}

impl PartialEq<str> for StrSpan<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for StrSpan<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<StrSpan<'_>> for str {
    fn eq(&self, other: &StrSpan<'_>) -> bool {
        self == other.as_str()
    }
}

impl<'a> From<&'a str> for StrSpan<'a> {
    fn from(value: &'a str) -> Self {
        Self::new(value)
    }
}

impl<'a> From<&'a String> for StrSpan<'a> {
    fn from(value: &'a String) -> Self {
        Self::new(value)
    }
}

impl<'a> TryFrom<ByteSpan<'a>> for StrSpan<'a> {
    type Error = std::str::Utf8Error;

    fn try_from(value: ByteSpan<'a>) -> Result<Self, Self::Error> {
        std::str::from_utf8(value.as_slice())?;
        Ok(Self(value))
    }
}

impl<'a> From<StrSpan<'a>> for ByteSpan<'a> {
    fn from(val: StrSpan<'a>) -> Self {
        val.0
    }
}

#[cfg(feature = "serde")]
mod serde {
    use super::StrSpan;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for StrSpan<'_> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de: 'a, 'a> Deserialize<'de> for StrSpan<'a> {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct StrSpanVisitor;

            impl<'de> Visitor<'de> for StrSpanVisitor {
                type Value = StrSpan<'de>;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("a borrowed string")
                }

                fn visit_borrowed_str<E>(self, v: &'de str) -> Result<StrSpan<'de>, E>
                where
                    E: de::Error,
                {
                    Ok(StrSpan::new(v))
                }
            }

            deserializer.deserialize_str(StrSpanVisitor)
        }
    }
}
