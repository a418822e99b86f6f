use ansi_sauce::{SauceTrailer, SauceTrailerBuilder, decode, encode, strip_sauce};

/// EOF byte and trailer, without content.
fn create_sauce_record() -> Vec<u8> {
    let sauce = SauceTrailerBuilder::default().title("Test").unwrap().build();
    encode(b"", &sauce)
}

#[test]
fn test_strip_no_sauce() {
    let data = b"Just some regular file content";
    assert_eq!(strip_sauce(data), data);
}

#[test]
fn test_strip_short_data() {
    assert_eq!(strip_sauce(b""), b"");
    // marker present but the block is truncated
    let mut data = b"SAUCE00".to_vec();
    data.extend([b' '; 50]);
    assert_eq!(strip_sauce(&data), &data[..]);
    assert!(decode(&data).is_none());
}

#[test]
fn test_strip_single_sauce() {
    let mut data = b"Content".to_vec();
    data.extend(create_sauce_record());
    assert_eq!(strip_sauce(&data), b"Content");
}

#[test]
fn test_strip_only_one_eof() {
    let mut data = b"Content\x1A\x1A".to_vec();
    data.extend(create_sauce_record());
    assert_eq!(strip_sauce(&data), b"Content\x1A\x1A");
}

#[test]
fn test_strip_sauce_without_eof() {
    let mut data = b"Content".to_vec();
    data.extend(&create_sauce_record()[1..]);
    assert_eq!(strip_sauce(&data), b"Content");
}

#[test]
fn test_strip_stacked_sauce() {
    let mut data = b"Content".to_vec();
    data.extend(create_sauce_record());
    data.extend(create_sauce_record());
    data.extend(create_sauce_record());

    let stripped = strip_sauce(&data);
    assert_eq!(stripped, b"Content");
    assert_eq!(strip_sauce(stripped), stripped);
}

#[test]
fn test_strip_with_comments() {
    let sauce = SauceTrailerBuilder::default()
        .add_comment("Comment 1")
        .unwrap()
        .add_comment("Comment 2")
        .unwrap()
        .build();
    let data = encode(b"Content", &sauce);
    assert_eq!(data.len(), 7 + 1 + 5 + 2 * 64 + 128);
    assert_eq!(strip_sauce(&data), b"Content");
}

#[test]
fn test_strip_with_max_comments() {
    let mut builder = SauceTrailerBuilder::default();
    for i in 0..255 {
        builder = builder.add_comment(format!("Comment {i}")).unwrap();
    }
    let sauce = builder.build();
    assert_eq!(sauce.comment_count, 255);

    let data = encode(b"Content", &sauce);
    assert_eq!(strip_sauce(&data), b"Content");
    assert_eq!(decode(&data).unwrap().comments.lines().count(), 255);
}

#[test]
fn test_strip_binary_content_with_eof_bytes() {
    let content: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    let data = encode(&content, &SauceTrailer::default());
    assert_eq!(strip_sauce(&data), &content[..]);
}

#[test]
fn test_strip_empty_content() {
    let data = create_sauce_record();
    assert_eq!(data.len(), 129);
    assert_eq!(strip_sauce(&data), b"");
}

#[test]
fn test_encode_replaces_existing_sauce() {
    let mut data = b"Content".to_vec();
    data.extend(create_sauce_record());

    let sauce = SauceTrailer {
        title: "Replaced".to_string(),
        ..Default::default()
    };
    let written = encode(&data, &sauce);
    assert_eq!(written.len(), 7 + 1 + 128);
    assert_eq!(decode(&written).unwrap().title, "Replaced");
}
