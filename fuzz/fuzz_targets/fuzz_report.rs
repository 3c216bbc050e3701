#![no_main]

use libfuzzer_sys::fuzz_target;
use rampart_errors::ErrorValue;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let err = ErrorValue::with_message(text);

    let mut line = String::new();
    err.report().write_to(&mut line).unwrap();
    assert!(!line.contains('\n'));
    assert!(line.starts_with("[id=unassigned] message='"));
});
