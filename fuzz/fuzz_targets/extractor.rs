#![no_main]

use libfuzzer_sys::fuzz_target;

use page_analyzer::extractor::extract;

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let html = String::from_utf8_lossy(data);

    // The extractor should never panic regardless of input
    let record = extract(200, &html);
    assert_eq!(record.status_code, 200);
});
