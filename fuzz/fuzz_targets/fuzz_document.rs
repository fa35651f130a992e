#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz document parsing and tree construction - this should never panic
        if let Ok(raw) = serde_json::from_str::<serde_json::Value>(content) {
            let _ = docnav::build_tree(&raw);
        }
    }
});
