#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Split the input into a document and a selection path; resolution
    // should never panic on either half.
    if let Ok(content) = std::str::from_utf8(data) {
        let (doc, path) = match content.split_once('\n') {
            Some(parts) => parts,
            None => (content, ""),
        };
        if let Ok(raw) = serde_json::from_str::<serde_json::Value>(doc) {
            let tree = docnav::build_tree(&raw);
            let _ = docnav::resolve(&tree, path);
        }
    }
});
