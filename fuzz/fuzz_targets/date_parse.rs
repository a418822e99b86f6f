#![no_main]
use ansi_sauce::SauceDate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Expect exactly 8 digits for a date, but fuzz anything
    if let Some(date) = SauceDate::from_bytes(data) {
        assert_eq!(date.to_sauce_string().as_bytes(), data);
    }
});
