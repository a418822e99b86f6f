#![no_main]
use ansi_sauce::strip_sauce;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let stripped = strip_sauce(data);
    assert!(data.starts_with(stripped));
    assert_eq!(strip_sauce(stripped), stripped);
});
