#![no_main]
use hl7map::{message_to_map, Naming};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(map) = message_to_map(s, Naming::Long) {
            assert!(map.contains_key("MSH"));
        }
    }
});
