//! SAUCE field limits.
//!
//! These constants define the fixed field widths of the 128-byte SAUCE
//! trailer and its comment block. `encode` pads or truncates to them, and
//! [`SauceTrailerBuilder`](crate::SauceTrailerBuilder) validates against them.
//!
//! Reference summary (trailer layout):
//! - Title: 35 bytes (space‑padded)
//! - Author: 20 bytes (space‑padded)
//! - Group: 20 bytes (space‑padded)
//! - Date: 8 bytes (ASCII CCYYMMDD)
//! - Font name: 22 bytes (NUL‑padded)
//! - Comments: Up to 255 lines, each exactly 64 bytes (space‑padded), preceded
//!   by a 5‑byte "COMNT" tag.

/// Maximum number of bytes for the title field (space‑padded to this length).
pub const MAX_TITLE_LENGTH: usize = 35;

/// Maximum number of bytes for the author field (space‑padded to this length).
pub const MAX_AUTHOR_LENGTH: usize = 20;

/// Maximum number of bytes for the group field (space‑padded to this length).
pub const MAX_GROUP_LENGTH: usize = 20;

/// Exact number of bytes for the date field (CCYYMMDD ASCII digits).
pub const DATE_LENGTH: usize = 8;

/// Maximum number of bytes for the font name (TInfoS).
pub const MAX_FONT_NAME_LENGTH: usize = 22;

/// Exact number of bytes of one comment line in the comment block.
pub const COMMENT_LINE_LENGTH: usize = 64;

/// Maximum number of comment lines; the count is stored in a single byte.
pub const MAX_COMMENTS: usize = 255;

/// Widest BinaryText image: FileType holds half the column count.
pub const MAX_BINARY_TEXT_COLUMNS: u16 = 510;
