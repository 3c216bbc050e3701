#![no_main]

use libfuzzer_sys::fuzz_target;
use rampart_errors::{ErrorValue, MAX_MESSAGE_LEN};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let (head, tail) = data.split_at(8);
    let mut id_bytes = [0u8; 8];
    id_bytes.copy_from_slice(head);
    let id = u64::from_le_bytes(id_bytes);
    let text = String::from_utf8_lossy(tail);

    let borrowed = ErrorValue::new(id, text.as_ref());
    let owned = ErrorValue::new(id, text.clone().into_owned());

    assert_eq!(borrowed.id(), id);
    assert!(borrowed.message().len() <= MAX_MESSAGE_LEN);
    assert!(text.starts_with(borrowed.message()));
    assert_eq!(borrowed.message(), owned.message());
    assert!(borrowed.what().starts_with("Exception: error_code: "));
});
