use bstr::ByteSlice;

/// Length of `buf` without its trailing space and NUL padding.
///
/// Some writers pad with NUL instead of spaces, so both are trimmed.
pub(crate) fn padded_len(buf: &[u8]) -> usize {
    let mut end = buf.len();
    while end > 0 {
        let b = buf[end - 1];
        if b != b' ' && b != 0 {
            break;
        }
        end -= 1;
    }
    end
}

/// Decodes a fixed-width text field: trailing padding removed, invalid
/// UTF-8 replaced instead of rejected.
pub(crate) fn read_text(buf: &[u8]) -> String {
    buf[..padded_len(buf)].to_str_lossy().into_owned()
}

/// Longest prefix of `text` that fits into `len` bytes without splitting a
/// character.
pub(crate) fn truncate_to_boundary(text: &str, len: usize) -> &str {
    if text.len() <= len {
        return text;
    }
    let mut end = len;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Pads `text` with `fill` or cuts it to exactly `len` bytes.
pub(crate) fn pad_text(text: &str, len: usize, fill: u8) -> Vec<u8> {
    let mut data = truncate_to_boundary(text, len).as_bytes().to_vec();
    data.resize(len, fill);
    data
}

/// Splits `text` into pieces of at most `len` bytes, each ending on a
/// character boundary.
pub(crate) fn split_to_boundaries(mut text: &str, len: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    while !text.is_empty() {
        let mut chunk = truncate_to_boundary(text, len);
        if chunk.is_empty() {
            // a single character wider than `len`; cannot happen for len >= 4
            let width = text.chars().next().map_or(text.len(), char::len_utf8);
            chunk = &text[..width];
        }
        chunks.push(chunk);
        text = &text[chunk.len()..];
    }
    chunks
}
