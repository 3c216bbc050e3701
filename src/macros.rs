//! Call-site macros.
//!
//! [`error_value!`](crate::error_value) is the preferred way to raise an
//! error. In diagnostic builds it records the full call site, including the
//! enclosing function, which the plain `#[track_caller]` constructors cannot
//! see. In production builds it expands to the plain constructors and pulls
//! in no location code at all.
//!
//! Forms:
//!
//! ```text
//! error_value!()                          // sentinel
//! error_value!(id = ID)                   // code only
//! error_value!(id = ID, "fmt", args..)    // code + formatted message
//! error_value!("fmt", args..)             // message only
//! ```
//!
//! [`fail!`](crate::fail) takes the same forms and returns `Err(..)` from the
//! enclosing function.

/// Build an [`ErrorValue`](crate::ErrorValue) at the call site.
///
/// ```rust
/// # use rampart_errors::error_value;
/// let path_len = 512;
/// let err = error_value!(id = 36, "path of {} bytes rejected", path_len);
/// assert_eq!(err.id(), 36);
/// assert_eq!(err.message(), "path of 512 bytes rejected");
/// ```
#[cfg(feature = "diagnostic")]
#[macro_export]
macro_rules! error_value {
    () => {
        $crate::ErrorValue::default_at($crate::here!())
    };
    (id = $id:expr $(,)?) => {
        $crate::ErrorValue::with_code_at($id, $crate::here!())
    };
    (id = $id:expr, $($fmt:tt)+) => {
        $crate::ErrorValue::new_at($id, ::std::format!($($fmt)+), $crate::here!())
    };
    ($($fmt:tt)+) => {
        $crate::ErrorValue::with_message_at(::std::format!($($fmt)+), $crate::here!())
    };
}

/// Build an [`ErrorValue`](crate::ErrorValue) at the call site.
///
/// ```rust
/// # use rampart_errors::error_value;
/// let path_len = 512;
/// let err = error_value!(id = 36, "path of {} bytes rejected", path_len);
/// assert_eq!(err.id(), 36);
/// assert_eq!(err.message(), "path of 512 bytes rejected");
/// ```
#[cfg(not(feature = "diagnostic"))]
#[macro_export]
macro_rules! error_value {
    () => {
        $crate::ErrorValue::unset()
    };
    (id = $id:expr $(,)?) => {
        $crate::ErrorValue::with_code($id)
    };
    (id = $id:expr, $($fmt:tt)+) => {
        $crate::ErrorValue::new($id, ::std::format!($($fmt)+))
    };
    ($($fmt:tt)+) => {
        $crate::ErrorValue::with_message(::std::format!($($fmt)+))
    };
}

/// Return early with an error built by [`error_value!`](crate::error_value).
///
/// The error is passed through `Into`, so the enclosing function may return
/// any error type that converts from `ErrorValue`.
///
/// ```rust
/// # use rampart_errors::{fail, Result};
/// fn check_quota(used: u32, limit: u32) -> Result<()> {
///     if used > limit {
///         fail!(id = 12, "quota exceeded: {}/{}", used, limit);
///     }
///     Ok(())
/// }
/// assert_eq!(check_quota(9, 8).unwrap_err().id(), 12);
/// ```
#[macro_export]
macro_rules! fail {
    ($($args:tt)*) => {
        return ::core::result::Result::Err(::core::convert::Into::into($crate::error_value!($($args)*)))
    };
}
