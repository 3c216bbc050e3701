//! Property-based tests for rampart_errors
//!
//! These tests use proptest to generate random inputs and verify invariants hold.

use rampart_errors::{ErrorValue, MAX_MESSAGE_LEN, UNASSIGNED_ID, error_value};
use proptest::prelude::*;

// ============================================================================
// TRUNCATION PROPERTIES
// ============================================================================

proptest! {
    /// Stored messages never exceed the cap
    #[test]
    fn message_is_bounded(s in "\\PC{0,2000}") {
        let err = ErrorValue::with_message(s.as_str());
        prop_assert!(err.message().len() <= MAX_MESSAGE_LEN);
    }

    /// The stored message is always a prefix of the input
    #[test]
    fn message_is_prefix(s in "\\PC*") {
        let err = ErrorValue::new(1, s.clone());
        prop_assert!(s.starts_with(err.message()));
    }

    /// Short messages are kept verbatim
    #[test]
    fn short_messages_untouched(s in "\\PC{0,64}") {
        prop_assume!(s.len() <= MAX_MESSAGE_LEN);
        let err = ErrorValue::new(1, s.as_str());
        prop_assert_eq!(err.message(), s.as_str());
    }

    /// ASCII input longer than the cap keeps exactly the first 256 bytes
    #[test]
    fn ascii_cut_is_exact(s in "[ -~]{257,1024}") {
        let err = ErrorValue::with_message(s.as_str());
        prop_assert_eq!(err.message(), &s[..MAX_MESSAGE_LEN]);
    }

    /// Truncation never drops more than one partial character
    #[test]
    fn cut_loses_at_most_one_char(s in "\\PC{0,600}") {
        let err = ErrorValue::with_message(s.as_str());
        if s.len() > MAX_MESSAGE_LEN {
            prop_assert!(err.message().len() > MAX_MESSAGE_LEN - 4);
        }
    }
}

// ============================================================================
// IDENTITY AND FORMAT PROPERTIES
// ============================================================================

proptest! {
    /// The code is returned unchanged, before and after other operations
    #[test]
    fn id_is_stable(id in any::<u64>(), s in "\\PC{0,300}") {
        let err = ErrorValue::new(id, s);
        prop_assert_eq!(err.id(), id);
        let _ = err.what();
        let _ = err.report().to_string();
        let cloned = err.clone();
        prop_assert_eq!(err.id(), id);
        prop_assert_eq!(cloned.id(), id);
    }

    /// Clones are indistinguishable from the original
    #[test]
    fn clone_preserves_everything(id in any::<u64>(), s in "\\PC{0,300}") {
        let err = ErrorValue::new(id, s);
        let copy = err.clone();
        prop_assert_eq!(copy.message(), err.message());
        prop_assert_eq!(copy.what(), err.what());
        prop_assert_eq!(copy, err);
    }

    /// what() always opens with the fixed prefix
    #[test]
    fn what_prefix(id in any::<u64>(), s in "\\PC{0,300}") {
        let err = ErrorValue::new(id, s);
        let expected = format!("Exception: error_code: {}, error_message: {}", id, err.message());
        prop_assert!(err.what().starts_with(&expected));
    }

    /// Message-only construction keeps the sentinel code
    #[test]
    fn message_only_keeps_sentinel(s in "\\PC{0,100}") {
        prop_assert_eq!(ErrorValue::with_message(s).id(), UNASSIGNED_ID);
    }

    /// The log line never contains raw newlines
    #[test]
    fn report_line_is_single_line(s in "\\PC{0,100}", ctl in "[\\n\\r\\t]{1,4}") {
        let err = error_value!(id = 3, "{}{}{}", s, ctl, s);
        let line = err.report().to_string();
        prop_assert!(!line.contains('\n'));
        prop_assert!(!line.contains('\r'));
    }
}

#[cfg(feature = "production")]
proptest! {
    /// Production rendering is exactly code plus message
    #[test]
    fn production_what_is_exact(id in any::<u64>(), s in "\\PC{0,300}") {
        let err = ErrorValue::new(id, s);
        let expected = format!("Exception: error_code: {}, error_message: {}", id, err.message());
        prop_assert_eq!(err.what(), expected);
    }
}

#[cfg(feature = "diagnostic")]
proptest! {
    /// Diagnostic rendering ends with the explicit location
    #[test]
    fn diagnostic_what_ends_with_location(id in any::<u64>(), s in "[a-z ]{0,64}", line in 1u32..100_000) {
        let loc = rampart_errors::SourceLocation::new("lib/store.rs", "store::flush", line);
        let err = ErrorValue::new_at(id, s.as_str(), loc);
        let expected = format!(
            "Exception: error_code: {}, error_message: {}, file name: lib/store.rs, function name: store::flush, line: {}",
            id, s, line
        );
        prop_assert_eq!(err.what(), expected);
    }
}
