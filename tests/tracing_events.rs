//! Structured event emission through the `tracing` feature.
//!
//! Run with `cargo test --features tracing`.

#![cfg(feature = "tracing")]

use rampart_errors::ErrorValue;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// In-memory sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedOutput {
    type Writer = CapturedOutput;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `emit` under a plain-text subscriber and return what it wrote.
fn capture(emit: impl FnOnce()) -> String {
    let output = CapturedOutput::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(output.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::TRACE)
        .finish();
    tracing::subscriber::with_default(subscriber, emit);
    output.contents()
}

#[test]
fn emits_exactly_one_error_event() {
    let err = ErrorValue::new(42, "disk full");
    let out = capture(|| err.trace());

    assert_eq!(out.lines().count(), 1);
    assert!(out.contains("ERROR"));
    assert!(out.contains("error value raised"));
    assert!(out.contains("error.id=42"));
    assert!(out.contains("error.message="));
    assert!(out.contains("disk full"));
}

#[test]
fn each_call_emits_a_new_event() {
    let err = ErrorValue::new(7, "retry budget spent");
    let out = capture(|| {
        err.trace();
        err.trace();
    });
    assert_eq!(out.matches("error.id=7").count(), 2);
}

#[cfg(feature = "diagnostic")]
#[test]
fn diagnostic_event_carries_location_fields() {
    use rampart_errors::SourceLocation;

    let err = ErrorValue::new_at(42, "disk full", SourceLocation::new("a.ext", "f", 7));
    let out = capture(|| err.trace());

    assert!(out.contains("error.id=42"));
    assert!(out.contains("error.file="));
    assert!(out.contains("a.ext"));
    assert!(out.contains("error.function="));
    assert!(out.contains("error.line=7"));
}

#[cfg(feature = "production")]
#[test]
fn production_event_has_no_location_fields() {
    let err = ErrorValue::new(42, "disk full");
    let out = capture(|| err.trace());

    assert!(out.contains("error.id=42"));
    assert!(!out.contains("error.file"));
    assert!(!out.contains("error.function"));
    assert!(!out.contains("error.line"));
}
