//! Call-site capture for diagnostic builds.
//!
//! This module only exists with the `diagnostic` feature. Production builds
//! compile no location type, no capture macro, and no location format text.
//!
//! Two capture paths exist:
//!
//! - [`SourceLocation::caller`] relies on `#[track_caller]` and records file
//!   and line. `std::panic::Location` carries no function name, so the
//!   function is recorded as [`UNKNOWN_FUNCTION`].
//! - [`here!`](crate::here) expands at the call site and records file,
//!   enclosing function path, and line.

use std::fmt;
use std::panic::Location;

/// Function name recorded when the capture path cannot see it.
pub const UNKNOWN_FUNCTION: &str = "<unknown>";

/// Where an error value was raised.
///
/// Only `'static` data is held, so the type is `Copy` and needs no cleanup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    file: &'static str,
    function: &'static str,
    line: u32,
}

impl SourceLocation {
    /// Build a location from explicit parts.
    #[inline]
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }

    /// Location of the nearest caller not marked `#[track_caller]`.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        let loc = Location::caller();
        Self::new(loc.file(), UNKNOWN_FUNCTION, loc.line())
    }

    /// Source file path as the compiler saw it.
    #[inline]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Enclosing function path, or [`UNKNOWN_FUNCTION`].
    #[inline]
    pub const fn function(&self) -> &'static str {
        self.function
    }

    /// 1-based line number.
    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for SourceLocation {
    /// Renders `file name: {file}, function name: {function}, line: {line}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "file name: {}, function name: {}, line: {}",
            self.file, self.function, self.line
        )
    }
}

/// Strip the helper item and any closure segments from a `type_name` path.
#[doc(hidden)]
pub fn __enclosing_function(path: &'static str) -> &'static str {
    let mut name = path.strip_suffix("::__here").unwrap_or(path);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

/// Path of the enclosing function, e.g. `my_crate::config::load`.
///
/// Closure segments are stripped, so inside a closure this names the
/// function that contains it.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::location::__enclosing_function(__type_name_of(__here))
    }};
}

/// Full [`SourceLocation`] of the macro call site.
///
/// ```rust
/// # use rampart_errors::here;
/// fn open_store() -> rampart_errors::SourceLocation {
///     here!()
/// }
/// let loc = open_store();
/// assert!(loc.function().ends_with("open_store"));
/// assert_eq!(loc.file(), file!());
/// ```
#[macro_export]
macro_rules! here {
    () => {
        $crate::SourceLocation::new(::core::file!(), $crate::function_name!(), ::core::line!())
    };
}
