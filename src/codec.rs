//! Locating, stripping and (re)writing SAUCE data at the end of a file.
//!
//! A file with SAUCE metadata has this structure:
//!
//! ```text
//! [File Content Data]
//! [0x1A EOF Marker] (1 byte)
//! [COMNT Comment Block] (if comments > 0)
//!   - "COMNT" ID (5 bytes)
//!   - Comment lines (64 bytes each, space-padded)
//! [SAUCE Trailer] (128 bytes)
//! ```
//!
//! Every function here is a pure transform over the buffer it is given.
//!
//! # Example
//!
//! ```
//! use ansi_sauce::{SauceTrailer, decode, encode, strip_sauce};
//!
//! let mut sauce = SauceTrailer::default();
//! sauce.title = "clouds".to_string();
//! sauce.comments = "blah\nblah".to_string();
//!
//! let file = encode(b"\x1b[1;34mhello", &sauce);
//! assert_eq!(strip_sauce(&file), b"\x1b[1;34mhello");
//!
//! let decoded = decode(&file).unwrap();
//! assert_eq!(decoded.title, "clouds");
//! assert_eq!(decoded.comment_count, 2);
//! ```

use std::io::Write;

use bstr::ByteSlice;

use crate::header::{COMMENTS_OFFSET, EOF, HDR_LEN};
use crate::util::{pad_text, split_to_boundaries};
use crate::{SauceError, SauceTrailer, limits};

pub(crate) const COMMENT_ID: [u8; 5] = *b"COMNT";

/// Bytes taken by the comment block of `lines` comment lines, tag included.
fn comment_block_len(lines: usize) -> usize {
    if lines == 0 {
        0
    } else {
        COMMENT_ID.len() + lines * limits::COMMENT_LINE_LENGTH
    }
}

/// Removes SAUCE data from the end of `data`.
///
/// Removes the trailer, its comment block and one EOF byte in front of them.
/// Files that had metadata appended more than once carry several stacked
/// trailers; all of them are removed, so stripping is idempotent. Data
/// without a trailer is returned unchanged.
///
/// ```
/// use ansi_sauce::strip_sauce;
///
/// let data = b"Just some regular file content";
/// assert_eq!(strip_sauce(data), data);
/// ```
pub fn strip_sauce(data: &[u8]) -> &[u8] {
    let mut data = data;
    while SauceTrailer::has_marker(data) {
        let comments = data[data.len() - HDR_LEN + COMMENTS_OFFSET] as usize;
        let sauce_size = HDR_LEN + comment_block_len(comments);
        data = &data[..data.len().saturating_sub(sauce_size)];
        if let Some((&EOF, rest)) = data.split_last() {
            data = rest;
        }
    }
    data
}

/// Decodes the SAUCE trailer at the end of `data`.
///
/// Returns `None` when `data` is shorter than 128 bytes or its last 128
/// bytes do not start with `SAUCE00`. Text fields decode lossily, so a
/// present trailer always decodes.
///
/// A stored file size of zero is reconstructed as the total length minus the
/// trailer and comment block. A comment block that does not fit or lacks its
/// `COMNT` tag is ignored with a warning, and `comment_count` is then zero.
pub fn decode(data: &[u8]) -> Option<SauceTrailer> {
    if !SauceTrailer::has_marker(data) {
        return None;
    }
    let sauce_offset = data.len() - HDR_LEN;
    let mut trailer = SauceTrailer::read_block(&data[sauce_offset..]);
    let stored_comments = trailer.comment_count as usize;

    if trailer.filesize == 0 {
        let size = sauce_offset.saturating_sub(comment_block_len(stored_comments));
        trailer.filesize = u32::try_from(size).unwrap_or(u32::MAX);
    }

    match decode_comments(&data[..sauce_offset], stored_comments) {
        Some(comments) => trailer.comments = comments,
        None => trailer.comment_count = 0,
    }
    Some(trailer)
}

/// Appends `trailer` to `data` after removing any SAUCE data already there.
///
/// Writes the EOF byte, the comment block (if there are comments) and the
/// 128-byte trailer. `filesize` is stored as the length of the stripped
/// content and the comment count is recomputed from what is written; every
/// other field is taken from `trailer` as is, padded or truncated to its
/// fixed width.
pub fn encode(data: &[u8], trailer: &SauceTrailer) -> Vec<u8> {
    let content = strip_sauce(data);
    let mut out = Vec::with_capacity(content.len() + 1 + trailer.record_len());
    out.extend_from_slice(content);
    trailer.append_sauce(&mut out, content.len());
    out
}

impl SauceTrailer {
    /// Decodes the trailer at the end of `data`; see [`decode`].
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        decode(data)
    }

    /// Writes the EOF byte, comment block and trailer to `writer`.
    ///
    /// `content_len` is the length of the data already written in front of
    /// it and is stored as the file size.
    ///
    /// # Errors
    ///
    /// Returns [`SauceError::IoError`] if writing fails.
    pub fn write<W: Write>(&self, writer: &mut W, content_len: usize) -> crate::Result<()> {
        let mut sauce = Vec::with_capacity(1 + self.record_len());
        self.append_sauce(&mut sauce, content_len);
        writer
            .write_all(&sauce)
            .map_err(|err| SauceError::io_error("<writer>", err))
    }

    fn append_sauce(&self, out: &mut Vec<u8>, content_len: usize) {
        out.push(EOF);

        let lines = self.comment_block();
        if !lines.is_empty() {
            out.extend(COMMENT_ID);
            for line in &lines {
                out.extend(line);
            }
        }

        let filesize = u32::try_from(content_len).unwrap_or(u32::MAX);
        // encode_comments caps the line count at 255
        self.write_block(out, filesize, lines.len() as u8);
    }

    /// The 64-byte lines of the comment block.
    ///
    /// A block of one blank line decodes to empty `comments` with a
    /// `comment_count` of 1, so that combination writes one blank line.
    pub(crate) fn comment_block(&self) -> Vec<Vec<u8>> {
        if self.comments.is_empty() && self.comment_count > 0 {
            return vec![vec![b' '; limits::COMMENT_LINE_LENGTH]];
        }
        encode_comments(&self.comments)
    }
}

/// Splits a comment string into 64-byte, space-padded lines.
///
/// Each `\n`-separated line has its trailing whitespace removed; lines longer
/// than 64 bytes continue on the next line, split on a character boundary.
/// An empty line becomes one blank line. At most 255 lines are kept.
fn encode_comments(comments: &str) -> Vec<Vec<u8>> {
    let mut lines = Vec::new();
    if comments.is_empty() {
        return lines;
    }

    for line in comments.split('\n') {
        let line = line.trim_end();
        if line.is_empty() {
            lines.push(vec![b' '; limits::COMMENT_LINE_LENGTH]);
            continue;
        }
        for chunk in split_to_boundaries(line, limits::COMMENT_LINE_LENGTH) {
            lines.push(pad_text(chunk, limits::COMMENT_LINE_LENGTH, b' '));
        }
    }

    if lines.len() > limits::MAX_COMMENTS {
        log::warn!(
            "SAUCE comments need {} lines, truncating to {}",
            lines.len(),
            limits::MAX_COMMENTS
        );
        lines.truncate(limits::MAX_COMMENTS);
    }
    lines
}

/// Reads `count` comment lines from the end of `data` (the bytes in front of
/// the trailer). `None` if the block is not there.
fn decode_comments(data: &[u8], count: usize) -> Option<String> {
    if count == 0 {
        return Some(String::new());
    }

    let block_len = comment_block_len(count);
    if data.len() < block_len {
        log::warn!("SAUCE comment block of {count} lines does not fit - ignoring comments");
        return None;
    }
    let block = &data[data.len() - block_len..];
    let (id, lines) = block.split_at(COMMENT_ID.len());
    if id != COMMENT_ID {
        // Non-fatal: ignore comments
        log::warn!("SAUCE comment block missing COMNT ID - ignoring comments");
        return None;
    }

    let lines: Vec<String> = lines
        .chunks(limits::COMMENT_LINE_LENGTH)
        .map(|line| {
            line.to_str_lossy()
                .trim_end_matches(|c: char| c.is_whitespace() || c == '\0')
                .to_string()
        })
        .collect();
    Some(lines.join("\n"))
}
