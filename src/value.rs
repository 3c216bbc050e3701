//! The error value itself.
//!
//! # Layout by build mode
//!
//! | field      | `diagnostic` | `production` |
//! |------------|--------------|--------------|
//! | `id`       | yes          | yes          |
//! | `message`  | yes          | yes          |
//! | `location` | yes          | absent       |
//!
//! In production the location field, its accessor, and every constructor
//! that accepts a location are not compiled at all, so calling them is a
//! compile error rather than a runtime no-op.
//!
//! # Construction
//!
//! | inputs          | constructor                        |
//! |-----------------|------------------------------------|
//! | none            | [`ErrorValue::default`] / [`ErrorValue::unset`] |
//! | code            | [`ErrorValue::with_code`]          |
//! | message         | [`ErrorValue::with_message`]       |
//! | code + message  | [`ErrorValue::new`]                |
//!
//! Messages may be passed as `&str`, `String` or `Cow<str>`. In diagnostic
//! builds every constructor is `#[track_caller]`, and each has an `_at`
//! sibling taking an explicit [`SourceLocation`](crate::SourceLocation) for
//! wrapping an error while keeping the site it was first raised at.

use crate::message::Message;
use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "diagnostic")]
use crate::location::SourceLocation;

/// Identifying error code.
pub type ErrorId = u64;

/// Sentinel meaning "no code assigned".
pub const UNASSIGNED_ID: ErrorId = ErrorId::MAX;

/// One failure occurrence: a code, a bounded message and, in diagnostic
/// builds, the call site that raised it.
///
/// Immutable after construction. There are no setters.
///
/// # Example
///
/// ```rust
/// use rampart_errors::{ErrorValue, Result};
///
/// fn reserve(free: u64, wanted: u64) -> Result<u64> {
///     if wanted > free {
///         return Err(ErrorValue::new(42, "disk full"));
///     }
///     Ok(free - wanted)
/// }
///
/// let err = reserve(1, 2).unwrap_err();
/// assert_eq!(err.id(), 42);
/// assert_eq!(err.message(), "disk full");
/// assert!(err.what().starts_with("Exception: error_code: 42, error_message: disk full"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[must_use = "errors should be returned or inspected"]
pub struct ErrorValue {
    id: ErrorId,
    message: Message,
    #[cfg(feature = "diagnostic")]
    location: SourceLocation,
}

impl ErrorValue {
    #[cfg(feature = "diagnostic")]
    #[inline]
    fn assemble_at(id: ErrorId, message: Message, location: SourceLocation) -> Self {
        Self {
            id,
            message,
            location,
        }
    }

    #[cfg(feature = "diagnostic")]
    #[track_caller]
    #[inline]
    fn assemble(id: ErrorId, message: Message) -> Self {
        Self::assemble_at(id, message, SourceLocation::caller())
    }

    #[cfg(not(feature = "diagnostic"))]
    #[inline]
    fn assemble(id: ErrorId, message: Message) -> Self {
        Self { id, message }
    }

    /// Sentinel error: [`UNASSIGNED_ID`] and an empty message.
    #[cfg_attr(feature = "diagnostic", track_caller)]
    #[inline]
    pub fn unset() -> Self {
        Self::assemble(UNASSIGNED_ID, Message::empty())
    }

    /// Error carrying only a code.
    #[cfg_attr(feature = "diagnostic", track_caller)]
    #[inline]
    pub fn with_code(id: ErrorId) -> Self {
        Self::assemble(id, Message::empty())
    }

    /// Error carrying only a message; the code stays [`UNASSIGNED_ID`].
    #[cfg_attr(feature = "diagnostic", track_caller)]
    #[inline]
    pub fn with_message<'a>(message: impl Into<Cow<'a, str>>) -> Self {
        Self::assemble(UNASSIGNED_ID, Message::bounded(message))
    }

    /// Error carrying a code and a message.
    ///
    /// Messages longer than [`MAX_MESSAGE_LEN`](crate::MAX_MESSAGE_LEN) bytes
    /// are truncated without notice.
    #[cfg_attr(feature = "diagnostic", track_caller)]
    #[inline]
    pub fn new<'a>(id: ErrorId, message: impl Into<Cow<'a, str>>) -> Self {
        Self::assemble(id, Message::bounded(message))
    }

    /// Sentinel error raised at `location`.
    #[cfg(feature = "diagnostic")]
    #[inline]
    pub fn default_at(location: SourceLocation) -> Self {
        Self::assemble_at(UNASSIGNED_ID, Message::empty(), location)
    }

    /// Code-only error raised at `location`.
    #[cfg(feature = "diagnostic")]
    #[inline]
    pub fn with_code_at(id: ErrorId, location: SourceLocation) -> Self {
        Self::assemble_at(id, Message::empty(), location)
    }

    /// Message-only error raised at `location`.
    #[cfg(feature = "diagnostic")]
    #[inline]
    pub fn with_message_at<'a>(message: impl Into<Cow<'a, str>>, location: SourceLocation) -> Self {
        Self::assemble_at(UNASSIGNED_ID, Message::bounded(message), location)
    }

    /// Code and message raised at `location`.
    ///
    /// Use this to re-wrap an error while keeping its original site:
    ///
    /// ```rust
    /// # use rampart_errors::ErrorValue;
    /// let inner = ErrorValue::new(7, "socket closed");
    /// let outer = ErrorValue::new_at(90, "sync aborted", inner.location());
    /// assert_eq!(outer.location(), inner.location());
    /// ```
    #[cfg(feature = "diagnostic")]
    #[inline]
    pub fn new_at<'a>(
        id: ErrorId,
        message: impl Into<Cow<'a, str>>,
        location: SourceLocation,
    ) -> Self {
        Self::assemble_at(id, Message::bounded(message), location)
    }

    /// Identifying code.
    #[inline]
    pub const fn id(&self) -> ErrorId {
        self.id
    }

    /// Whether a code other than [`UNASSIGNED_ID`] was given.
    #[inline]
    pub const fn has_assigned_id(&self) -> bool {
        self.id != UNASSIGNED_ID
    }

    /// Stored (possibly truncated) message, borrowed.
    #[inline]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Where this error was raised.
    #[cfg(feature = "diagnostic")]
    #[inline]
    pub const fn location(&self) -> SourceLocation {
        self.location
    }

    /// One-line human-readable rendering.
    ///
    /// - production: `Exception: error_code: {id}, error_message: {message}`
    /// - diagnostic: the same, followed by
    ///   `, file name: {file}, function name: {function}, line: {line}`
    ///
    /// A new `String` is built on every call.
    #[must_use]
    pub fn what(&self) -> String {
        self.to_string()
    }
}

impl Default for ErrorValue {
    #[cfg_attr(feature = "diagnostic", track_caller)]
    #[inline]
    fn default() -> Self {
        Self::unset()
    }
}

impl From<ErrorId> for ErrorValue {
    #[cfg_attr(feature = "diagnostic", track_caller)]
    #[inline]
    fn from(id: ErrorId) -> Self {
        Self::with_code(id)
    }
}

impl From<&str> for ErrorValue {
    #[cfg_attr(feature = "diagnostic", track_caller)]
    #[inline]
    fn from(message: &str) -> Self {
        Self::with_message(message)
    }
}

impl From<String> for ErrorValue {
    #[cfg_attr(feature = "diagnostic", track_caller)]
    #[inline]
    fn from(message: String) -> Self {
        Self::with_message(message)
    }
}

impl From<(ErrorId, &str)> for ErrorValue {
    #[cfg_attr(feature = "diagnostic", track_caller)]
    #[inline]
    fn from((id, message): (ErrorId, &str)) -> Self {
        Self::new(id, message)
    }
}

impl fmt::Display for ErrorValue {
    /// Writes the exact text returned by [`ErrorValue::what`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Exception: error_code: {}, error_message: {}",
            self.id, self.message
        )?;

        #[cfg(feature = "diagnostic")]
        write!(f, ", {}", self.location)?;

        Ok(())
    }
}

impl fmt::Debug for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ErrorValue");
        s.field("id", &self.id).field("message", &self.message);
        #[cfg(feature = "diagnostic")]
        s.field("location", &self.location);
        s.finish()
    }
}

impl std::error::Error for ErrorValue {}
