//! Structured log view of an [`ErrorValue`].
//!
//! Nothing in this crate logs on its own. Callers that do log borrow a
//! [`Report`] and either read its fields (structured/JSON loggers) or have it
//! write a single key/value line into any `fmt::Write` sink.
//!
//! The view borrows from the error and cannot outlive it:
//!
//! ```rust
//! # use rampart_errors::ErrorValue;
//! let err = ErrorValue::new(42, "disk full");
//! let mut line = String::new();
//! err.report().write_to(&mut line).unwrap();
//! assert!(line.starts_with("[id=42] message='disk full'"));
//! ```

use crate::ErrorValue;
use crate::value::ErrorId;
use std::fmt;

#[cfg(feature = "diagnostic")]
use crate::location::SourceLocation;

/// Borrowed log view of one error.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    error: &'a ErrorValue,
}

impl<'a> Report<'a> {
    /// Identifying code of the reported error.
    #[inline]
    pub const fn id(&self) -> ErrorId {
        self.error.id()
    }

    /// Whether the id differs from the unassigned sentinel.
    #[inline]
    pub const fn has_assigned_id(&self) -> bool {
        self.error.has_assigned_id()
    }

    /// Raw stored message. Not neutralized; see [`Report::write_to`].
    #[inline]
    pub fn message(&self) -> &'a str {
        self.error.message()
    }

    /// Site the error was raised at.
    #[cfg(feature = "diagnostic")]
    #[inline]
    pub const fn location(&self) -> SourceLocation {
        self.error.location()
    }

    /// Write one log line without intermediate allocation.
    ///
    /// Layout: `[id=N] message='...'`, with ` file='...' function='...' line=N`
    /// appended in diagnostic builds. An unassigned id is written as
    /// `id=unassigned`. Control characters in the message are written as `?`
    /// so a message cannot forge extra log lines.
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        if self.has_assigned_id() {
            write!(f, "[id={}]", self.id())?;
        } else {
            f.write_str("[id=unassigned]")?;
        }

        f.write_str(" message='")?;
        write_neutralized(f, self.message())?;
        f.write_char('\'')?;

        #[cfg(feature = "diagnostic")]
        {
            let loc = self.location();
            write!(
                f,
                " file='{}' function='{}' line={}",
                loc.file(),
                loc.function(),
                loc.line()
            )?;
        }

        Ok(())
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

fn write_neutralized(f: &mut impl fmt::Write, s: &str) -> fmt::Result {
    // Fast path: nothing to replace.
    if !s.chars().any(char::is_control) {
        return f.write_str(s);
    }
    for c in s.chars() {
        f.write_char(if c.is_control() { '?' } else { c })?;
    }
    Ok(())
}

impl ErrorValue {
    /// Borrow a structured log view of this error.
    #[inline]
    pub fn report(&self) -> Report<'_> {
        Report { error: self }
    }

    /// Callback form of [`ErrorValue::report`]; the view dies with the closure.
    #[inline]
    pub fn with_report<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Report<'_>) -> R,
    {
        f(&self.report())
    }

    /// Emit this error as one `tracing` event at `ERROR` level.
    ///
    /// Fields: `error.id`, `error.message` and, in diagnostic builds,
    /// `error.file`, `error.function`, `error.line`.
    #[cfg(feature = "tracing")]
    pub fn trace(&self) {
        #[cfg(feature = "diagnostic")]
        {
            let loc = self.location();
            tracing::error!(
                error.id = self.id(),
                error.message = self.message(),
                error.file = loc.file(),
                error.function = loc.function(),
                error.line = loc.line(),
                "error value raised"
            );
        }
        #[cfg(not(feature = "diagnostic"))]
        tracing::error!(
            error.id = self.id(),
            error.message = self.message(),
            "error value raised"
        );
    }
}
