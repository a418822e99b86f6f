//! The 128-byte SAUCE trailer block.
//!
//! This module provides [`SauceTrailer`], the decoded form of the fixed-layout
//! block appended to the end of an art file, together with its byte-level
//! (de)serialization. Locating the block, the comment block in front of it and
//! the EOF byte is the job of [`codec`](crate::codec).
//!
//! # Trailer Layout
//!
//! | Offset | Length | Field      | Type     | Description                     |
//! |--------|--------|------------|----------|---------------------------------|
//! | 0      | 7      | ID         | char[7]  | "SAUCE00" marker                |
//! | 7      | 35     | Title      | char[35] | Artwork title (space-padded)    |
//! | 42     | 20     | Author     | char[20] | Creator name (space-padded)     |
//! | 62     | 20     | Group      | char[20] | Group/org (space-padded)        |
//! | 82     | 8      | Date       | char[8]  | CCYYMMDD format                 |
//! | 90     | 4      | FileSize   | u32 LE   | Size of the data before it      |
//! | 94     | 1      | DataType   | u8       | File category (0-8)             |
//! | 95     | 1      | FileType   | u8       | Format-specific type            |
//! | 96     | 2      | TInfo1     | u16 LE   | Type-dependent field 1          |
//! | 98     | 2      | TInfo2     | u16 LE   | Type-dependent field 2          |
//! | 100    | 2      | TInfo3     | u16 LE   | Type-dependent field 3          |
//! | 102    | 2      | TInfo4     | u16 LE   | Type-dependent field 4          |
//! | 104    | 1      | Comments   | u8       | Number of comment lines         |
//! | 105    | 1      | TFlags     | u8       | Packed flags, see [`SauceFlags`] |
//! | 106    | 22     | TInfoS     | char[22] | Font name (NUL-padded)          |
//!
//! **Total: 128 bytes**

use crate::util::{pad_text, read_text};
use crate::{SauceDataType, SauceError, SauceFlags, SauceTrailerBuilder, limits};

pub(crate) const HDR_LEN: usize = 128;
pub(crate) const SAUCE_ID: &[u8; 7] = b"SAUCE00";

/// DOS end-of-file byte separating the content from the SAUCE data.
pub(crate) const EOF: u8 = 0x1A;

const TITLE_OFFSET: usize = 7;
const AUTHOR_OFFSET: usize = TITLE_OFFSET + limits::MAX_TITLE_LENGTH;
const GROUP_OFFSET: usize = AUTHOR_OFFSET + limits::MAX_AUTHOR_LENGTH;
const DATE_OFFSET: usize = GROUP_OFFSET + limits::MAX_GROUP_LENGTH;
const FILE_SIZE_OFFSET: usize = DATE_OFFSET + limits::DATE_LENGTH;
const DATA_TYPE_OFFSET: usize = 94;
const FILE_TYPE_OFFSET: usize = 95;
const TINFO1_OFFSET: usize = 96;
pub(crate) const COMMENTS_OFFSET: usize = 104;
const FLAGS_OFFSET: usize = 105;
const FONT_NAME_OFFSET: usize = 106;

/// Decoded SAUCE trailer.
///
/// A flat record of every trailer field plus the decoded comment block.
/// Text fields are trimmed of their padding; `comments` holds the comment
/// lines joined with `\n`.
///
/// The meaning of `file_type` and `tinfo1`..`tinfo4` depends on
/// `data_type`; [`SauceInfo`](crate::SauceInfo) resolves it. For
/// [`SauceDataType::BinaryText`], `file_type` holds half the column count and
/// the dimensions come from [`columns`](Self::columns) and
/// [`rows`](Self::rows).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SauceTrailer {
    /// The title of the file (up to 35 bytes)
    pub title: String,
    /// The (nick)name or handle of the creator (up to 20 bytes)
    pub author: String,
    /// The group or company name (up to 20 bytes)
    pub group: String,
    /// Creation date as stored, normally `YYYYMMDD`
    pub date: String,
    /// Length of the content in front of the EOF byte
    pub filesize: u32,
    pub data_type: SauceDataType,
    /// Type-specific code; meaning depends on `data_type`
    pub file_type: u8,
    pub tinfo1: u16,
    pub tinfo2: u16,
    pub tinfo3: u16,
    pub tinfo4: u16,
    /// Number of 64-byte comment lines that `comments` was decoded from
    pub comment_count: u8,
    pub flags: SauceFlags,
    /// Font name (TInfoS), only meaningful for character data
    pub font_name: String,
    /// Comment lines joined with `\n`
    pub comments: String,
}

fn le_u16(block: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([block[offset], block[offset + 1]])
}

fn le_u32(block: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        block[offset],
        block[offset + 1],
        block[offset + 2],
        block[offset + 3],
    ])
}

impl SauceTrailer {
    /// True if the last 128 bytes of `data` start with the `SAUCE00` marker.
    pub(crate) fn has_marker(data: &[u8]) -> bool {
        data.len() >= HDR_LEN && data[data.len() - HDR_LEN..].starts_with(SAUCE_ID)
    }

    /// Reads the fixed fields of a 128-byte block.
    ///
    /// `comments` is left empty and `comment_count` holds the raw byte; the
    /// caller resolves both against the comment block.
    pub(crate) fn read_block(block: &[u8]) -> Self {
        debug_assert_eq!(block.len(), HDR_LEN);

        SauceTrailer {
            title: read_text(&block[TITLE_OFFSET..AUTHOR_OFFSET]),
            author: read_text(&block[AUTHOR_OFFSET..GROUP_OFFSET]),
            group: read_text(&block[GROUP_OFFSET..DATE_OFFSET]),
            date: read_text(&block[DATE_OFFSET..FILE_SIZE_OFFSET]),
            filesize: le_u32(block, FILE_SIZE_OFFSET),
            data_type: SauceDataType::from(block[DATA_TYPE_OFFSET]),
            file_type: block[FILE_TYPE_OFFSET],
            tinfo1: le_u16(block, TINFO1_OFFSET),
            tinfo2: le_u16(block, TINFO1_OFFSET + 2),
            tinfo3: le_u16(block, TINFO1_OFFSET + 4),
            tinfo4: le_u16(block, TINFO1_OFFSET + 6),
            comment_count: block[COMMENTS_OFFSET],
            flags: SauceFlags::from_bits(block[FLAGS_OFFSET]),
            font_name: read_text(&block[FONT_NAME_OFFSET..]),
            comments: String::new(),
        }
    }

    /// Appends the 128-byte block to `out`.
    ///
    /// `filesize` and `comment_count` are passed in because they describe the
    /// bytes actually written in front of the block, not the decoded values.
    /// For BinaryText the FileType byte already carries the width, and
    /// TInfo1/TInfo2 are left zero.
    pub(crate) fn write_block(&self, out: &mut Vec<u8>, filesize: u32, comment_count: u8) {
        let start = out.len();
        out.extend(SAUCE_ID);
        out.extend(pad_text(&self.title, limits::MAX_TITLE_LENGTH, b' '));
        out.extend(pad_text(&self.author, limits::MAX_AUTHOR_LENGTH, b' '));
        out.extend(pad_text(&self.group, limits::MAX_GROUP_LENGTH, b' '));
        out.extend(pad_text(&self.date, limits::DATE_LENGTH, b' '));
        out.extend(filesize.to_le_bytes());
        out.push(self.data_type.into());
        out.push(self.file_type);
        if self.data_type == SauceDataType::BinaryText {
            out.extend([0; 4]);
        } else {
            out.extend(self.tinfo1.to_le_bytes());
            out.extend(self.tinfo2.to_le_bytes());
        }
        out.extend(self.tinfo3.to_le_bytes());
        out.extend(self.tinfo4.to_le_bytes());
        out.push(comment_count);
        out.push(self.flags.bits());
        out.extend(pad_text(&self.font_name, limits::MAX_FONT_NAME_LENGTH, 0));

        // All field widths are constants; this only trips on a layout mistake.
        debug_assert_eq!(out.len() - start, HDR_LEN);
    }

    /// Width in characters.
    ///
    /// BinaryText stores half the width in FileType; every other type keeps it
    /// in TInfo1.
    pub fn columns(&self) -> u16 {
        if self.data_type == SauceDataType::BinaryText {
            self.file_type as u16 * 2
        } else {
            self.tinfo1
        }
    }

    /// Height in lines.
    ///
    /// BinaryText has no height field: it is derived from the file size, two
    /// bytes per cell, using truncating division. Zero if it cannot be derived.
    pub fn rows(&self) -> u16 {
        if self.data_type != SauceDataType::BinaryText {
            return self.tinfo2;
        }
        let columns = self.columns() as u32;
        if self.filesize == 0 || columns == 0 {
            return 0;
        }
        u16::try_from(self.filesize / columns / 2).unwrap_or(u16::MAX)
    }

    /// Sets the dimensions in the slots the data type keeps them in.
    ///
    /// For BinaryText only the width is stored; `rows` is ignored since the
    /// height follows from the file size.
    ///
    /// # Errors
    ///
    /// Returns [`SauceError::BinFileWidthLimitExceeded`] for a BinaryText
    /// width that is odd or wider than 510 columns.
    pub fn set_dimensions(&mut self, columns: u16, rows: u16) -> crate::Result<()> {
        if self.data_type == SauceDataType::BinaryText {
            if columns % 2 != 0 || columns > limits::MAX_BINARY_TEXT_COLUMNS {
                return Err(SauceError::BinFileWidthLimitExceeded(columns as i32));
            }
            self.file_type = (columns / 2) as u8;
        } else {
            self.tinfo1 = columns;
            self.tinfo2 = rows;
        }
        Ok(())
    }

    /// Number of comment lines `comments` encodes to.
    pub fn comment_lines(&self) -> usize {
        self.comment_block().len()
    }

    /// Bytes occupied by the trailer and its comment block.
    ///
    /// NOTE the EOF is not included!
    ///
    /// ```
    /// use ansi_sauce::SauceTrailer;
    ///
    /// let mut sauce = SauceTrailer::default();
    /// assert_eq!(sauce.record_len(), 128);
    /// sauce.comments = "one\ntwo".to_string();
    /// assert_eq!(sauce.record_len(), 128 + 5 + 2 * 64);
    /// ```
    pub fn record_len(&self) -> usize {
        match self.comment_lines() {
            0 => HDR_LEN,
            lines => HDR_LEN + crate::codec::COMMENT_ID.len() + lines * limits::COMMENT_LINE_LENGTH,
        }
    }

    /// Convert this trailer to a builder for validated modification.
    ///
    /// ```
    /// use ansi_sauce::SauceTrailerBuilder;
    ///
    /// let original = SauceTrailerBuilder::default().title("Original").unwrap().build();
    /// let modified = original.to_builder().title("Modified").unwrap().build();
    /// assert_eq!(modified.title, "Modified");
    /// ```
    pub fn to_builder(&self) -> SauceTrailerBuilder {
        SauceTrailerBuilder::from_trailer(self.clone())
    }
}
