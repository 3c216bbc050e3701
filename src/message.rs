//! Bounded error message payload.
//!
//! Every message stored in an [`ErrorValue`](crate::ErrorValue) passes through
//! [`Message::bounded`], which caps it at [`MAX_MESSAGE_LEN`] bytes. Oversized
//! input is cut silently: no marker is appended and no error is raised. The
//! cut is lossy and cannot be undone.
//!
//! # Unit of measure
//!
//! The cap counts UTF-8 bytes. A `String` must stay valid UTF-8, so when byte
//! 256 lands inside a multi-byte character the cut backs off to the previous
//! character boundary. ASCII input is therefore kept at exactly its first
//! 256 bytes.
//!
//! # Memory hygiene
//!
//! The owned buffer is zeroized on drop.

use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Maximum length of a stored message, in bytes.
pub const MAX_MESSAGE_LEN: usize = 256;

/// Largest char boundary in `s` that is `<= limit`.
#[inline]
fn floor_char_boundary(s: &str, limit: usize) -> usize {
    if limit >= s.len() {
        return s.len();
    }
    let mut idx = limit;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// Message text capped at [`MAX_MESSAGE_LEN`] bytes.
///
/// Immutable once built. Dereferences to `str`.
#[derive(Clone, Default, PartialEq, Eq, Hash, Zeroize, ZeroizeOnDrop)]
pub struct Message {
    text: String,
}

impl Message {
    /// An empty message.
    #[inline]
    pub const fn empty() -> Self {
        Self { text: String::new() }
    }

    /// Build a message, truncating anything past [`MAX_MESSAGE_LEN`] bytes.
    ///
    /// Only the kept prefix is copied. An oversized owned buffer is zeroized
    /// in full and freed, so neither its tail bytes nor its capacity outlive
    /// construction. Owned input within the cap is kept as is.
    ///
    /// ```rust
    /// # use rampart_errors::{Message, MAX_MESSAGE_LEN};
    /// let long = "x".repeat(MAX_MESSAGE_LEN + 44);
    /// let msg = Message::bounded(long.as_str());
    /// assert_eq!(msg.len(), MAX_MESSAGE_LEN);
    /// ```
    pub fn bounded<'a>(text: impl Into<Cow<'a, str>>) -> Self {
        let text = match text.into() {
            Cow::Borrowed(s) => s[..floor_char_boundary(s, MAX_MESSAGE_LEN)].to_owned(),
            Cow::Owned(mut s) => {
                let keep = floor_char_boundary(&s, MAX_MESSAGE_LEN);
                if keep < s.len() {
                    let kept = s[..keep].to_owned();
                    // Zeroize covers spare capacity too, not just `len` bytes.
                    s.zeroize();
                    kept
                } else {
                    s
                }
            }
        };
        Self { text }
    }

    /// The stored text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Deref for Message {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Message {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Message {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.text.as_str(), f)
    }
}
