#![no_main]
use ansi_sauce::{decode, encode, strip_sauce};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Anything carrying the marker must decode and survive a rewrite
    if let Some(sauce) = decode(data) {
        let written = encode(strip_sauce(data), &sauce);
        let reread = decode(&written).expect("rewritten trailer decodes");
        // lossy text may grow past its field width and be cut again
        assert!(sauce.title.starts_with(reread.title.as_str()));
        assert_eq!(reread.data_type, sauce.data_type);
        assert_eq!(reread.flags, sauce.flags);
    }
});
