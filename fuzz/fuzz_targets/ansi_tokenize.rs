#![no_main]
use ansi_sauce::{AnsiParser, decode_cp437};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = decode_cp437(data);
    let parser = AnsiParser::new(&text);
    parser.to_html().expect("tokenized input always renders");
    let _ = parser.to_stripped_text();
});
