//! # Rampart Errors
//!
//! Small, bounded error values that are returned, never thrown, and that
//! carry call-site diagnostics only in builds meant for developers.
//!
//! ## Design Philosophy
//!
//! 1. **Errors are values** placed in an ordinary `Result`
//! 2. **Codes identify failures**, not type hierarchies; the taxonomy is flat
//! 3. **Messages are bounded** at 256 bytes, truncated silently
//! 4. **Production builds carry no source locations**, not even as dead fields
//! 5. **Owned message buffers are zeroized** when the value drops
//!
//! ## Build Modes
//!
//! Exactly one of two Cargo features must be enabled:
//!
//! - `diagnostic` (default): every [`ErrorValue`] records the
//!   [`SourceLocation`] that raised it, and [`ErrorValue::what`] renders it.
//! - `production`: the location field, accessor, constructors, capture
//!   macros and location format text are not compiled into the artifact.
//!   Build with `--no-default-features --features production`.
//!
//! Enabling both, or neither, fails the build.
//!
//! ## Quick Start
//!
//! ```rust
//! use rampart_errors::{error_value, Result};
//!
//! const DISK_FULL: u64 = 42;
//!
//! fn write_block(free: usize, len: usize) -> Result<usize> {
//!     if len > free {
//!         return Err(error_value!(id = DISK_FULL, "disk full"));
//!     }
//!     Ok(free - len)
//! }
//!
//! let err = write_block(0, 512).unwrap_err();
//! assert_eq!(err.id(), DISK_FULL);
//!
//! // production:  "Exception: error_code: 42, error_message: disk full"
//! // diagnostic:  "... disk full, file name: src/main.rs, function name: app::write_block, line: 9"
//! println!("{}", err.what());
//! ```
//!
//! ## Features
//!
//! - `diagnostic`: capture and render call-site locations (default)
//! - `production`: strip all location data
//! - `tracing`: enable [`ErrorValue::trace`] for structured event emission

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(
    feature = "production",
    doc = r#"
## Location APIs in production builds

None of these compile when `production` is enabled:

```compile_fail
let err = rampart_errors::ErrorValue::new(42, "disk full");
let _ = err.location();
```

```compile_fail
let loc = rampart_errors::SourceLocation::new("a.ext", "f", 7);
let _ = rampart_errors::ErrorValue::new_at(42, "disk full", loc);
```

```compile_fail
let _ = rampart_errors::ErrorValue::default_at(rampart_errors::here!());
```

```compile_fail
let err = rampart_errors::ErrorValue::with_code(1);
let _ = err.report().location();
```

The same calls without a location compile:

```rust
let err = rampart_errors::ErrorValue::new(42, "disk full");
assert_eq!(err.what(), "Exception: error_code: 42, error_message: disk full");
```
"#
)]

#[cfg(all(feature = "diagnostic", feature = "production"))]
compile_error!(
    "features `diagnostic` and `production` are mutually exclusive; enable exactly one"
);

#[cfg(not(any(feature = "diagnostic", feature = "production")))]
compile_error!(
    "no build mode selected; enable exactly one of the `diagnostic` or `production` features"
);

use std::result;

#[cfg(feature = "diagnostic")]
pub mod location;
pub mod macros;
pub mod message;
pub mod report;
pub mod value;

#[cfg(feature = "diagnostic")]
pub use location::*;
pub use message::*;
pub use report::*;
pub use value::*;

/// Result alias with [`ErrorValue`] as the error arm.
pub type Result<T> = result::Result<T, ErrorValue>;

/// Result for operations that produce nothing on success.
pub type VoidResult = Result<()>;
