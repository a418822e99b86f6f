//! SAUCE metadata codec and ANSI art interpreter.
//!
//! Two independent halves:
//!
//! - [`decode`], [`encode`] and [`strip_sauce`] read and (re)write the
//!   SAUCE trailer appended to textmode art files; [`SauceInfo`] interprets
//!   the decoded fields by data and file type.
//! - [`AnsiParser`] replays the escape codes of decoded art text into HTML,
//!   plain text, or re-indented translations.
//!
//! Everything works on in-memory buffers. Nothing here does I/O except
//! [`SauceTrailer::write`], which writes to a caller-supplied writer.

pub type Result<T> = std::result::Result<T, SauceError>;

pub mod ansi;
pub use ansi::{
    AnsiParser, Attribute, Color, ColorRole, ColumnWidth, Instruction, RenderState, decode_cp437,
    decode_text, instructions, is_drawing_character, render_html,
};
pub use encoding_rs;

pub mod builder;
pub use builder::*;

pub mod codec;
pub use codec::{decode, encode, strip_sauce};

mod date;
pub use date::*;

mod errors;
pub use errors::*;

pub mod file_type;
pub use file_type::FileType;

mod flags;
pub use flags::*;

pub mod header;
pub use header::SauceTrailer;

pub mod info;
pub use info::SauceInfo;

pub mod limits;

pub mod remote;
pub use remote::{AnsiFlags, RemoteDate, RemoteSauce};

mod util;

/// The DataType byte: the coarse category that decides how `file_type` and
/// the TInfo slots are read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SauceDataType {
    /// No type; `file_type` and TInfo are unused.
    None,
    /// Text streams: ASCII, ANSI, RIP, PCBoard, Avatar, HTML, source, TundraDraw.
    #[default]
    Character,
    Bitmap,
    Vector,
    Audio,
    /// Raw screen memory (.BIN); `file_type` holds half the width.
    BinaryText,
    XBin,
    Archive,
    Executable,
    /// A byte above 8, kept so it is written back unchanged.
    Undefined(u8),
}

impl From<u8> for SauceDataType {
    fn from(byte: u8) -> SauceDataType {
        match byte {
            0 => SauceDataType::None,
            1 => SauceDataType::Character,
            2 => SauceDataType::Bitmap,
            3 => SauceDataType::Vector,
            4 => SauceDataType::Audio,
            5 => SauceDataType::BinaryText,
            6 => SauceDataType::XBin,
            7 => SauceDataType::Archive,
            8 => SauceDataType::Executable,
            other => SauceDataType::Undefined(other),
        }
    }
}

impl From<SauceDataType> for u8 {
    fn from(data_type: SauceDataType) -> u8 {
        match data_type {
            SauceDataType::None => 0,
            SauceDataType::Character => 1,
            SauceDataType::Bitmap => 2,
            SauceDataType::Vector => 3,
            SauceDataType::Audio => 4,
            SauceDataType::BinaryText => 5,
            SauceDataType::XBin => 6,
            SauceDataType::Archive => 7,
            SauceDataType::Executable => 8,
            SauceDataType::Undefined(byte) => byte,
        }
    }
}

impl SauceDataType {
    pub fn label(self) -> &'static str {
        match self {
            SauceDataType::None => "None",
            SauceDataType::Character => "Character",
            SauceDataType::Bitmap => "Bitmap",
            SauceDataType::Vector => "Vector",
            SauceDataType::Audio => "Audio",
            SauceDataType::BinaryText => "BinaryText",
            SauceDataType::XBin => "XBin",
            SauceDataType::Archive => "Archive",
            SauceDataType::Executable => "Executable",
            SauceDataType::Undefined(_) => "Undefined",
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        SauceDataType, SauceTrailer,
        util::{pad_text, read_text, split_to_boundaries, truncate_to_boundary},
    };

    #[test]
    fn test_read_text() {
        assert_eq!(read_text(b"Hello World  "), "Hello World");
        assert_eq!(read_text(b"Hello World\0\0"), "Hello World");
        assert_eq!(read_text(b"Hello World\t\0"), "Hello World\t");
        assert_eq!(read_text(b"Hello World\n "), "Hello World\n");
        assert_eq!(read_text(b"    \0   "), "");
        // mixed padding, as written by some editors
        assert_eq!(read_text(b"IBM VGA \0 \0"), "IBM VGA");
    }

    #[test]
    fn test_read_text_lossy() {
        assert_eq!(read_text(b"ab\xFFcd  "), "ab\u{FFFD}cd");
    }

    #[test]
    fn test_pad_text() {
        assert_eq!(pad_text("Hello World", 15, b' '), b"Hello World    ");
        assert_eq!(pad_text("Hello World", 5, b' '), b"Hello");
        assert_eq!(pad_text("", 1, b' '), b" ");
        assert_eq!(pad_text("VGA", 5, 0), b"VGA\0\0");
    }

    #[test]
    fn test_truncate_on_char_boundary() {
        // "ä" is two bytes; cutting at 2 must not split it
        assert_eq!(truncate_to_boundary("aäb", 2), "a");
        assert_eq!(truncate_to_boundary("aäb", 3), "aä");
        assert_eq!(pad_text("aäb", 2, b' '), b"a ");
    }

    #[test]
    fn test_split_to_boundaries() {
        assert_eq!(split_to_boundaries("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(split_to_boundaries("aéé", 3), vec!["aé", "é"]);
        assert!(split_to_boundaries("", 4).is_empty());
    }

    #[test]
    fn test_data_type_byte_round_trip() {
        for byte in 0..=255u8 {
            assert_eq!(u8::from(SauceDataType::from(byte)), byte);
        }
        assert_eq!(SauceDataType::from(42), SauceDataType::Undefined(42));
    }

    #[test]
    fn test_binarytext_width_encoding() {
        let mut sauce = SauceTrailer {
            data_type: SauceDataType::BinaryText,
            ..Default::default()
        };
        sauce.set_dimensions(160, 0).unwrap();
        assert_eq!(sauce.file_type, 80); // width/2 stored

        let data = crate::encode(&[0u8; 1234], &sauce);
        let parsed = crate::decode(&data).unwrap();
        assert_eq!(parsed.columns(), 160);
    }

    #[test]
    fn test_binarytext_width_invalid() {
        let mut sauce = SauceTrailer {
            data_type: SauceDataType::BinaryText,
            ..Default::default()
        };
        match sauce.set_dimensions(161, 0) {
            Err(crate::SauceError::BinFileWidthLimitExceeded(w)) => assert_eq!(w, 161),
            other => panic!("Unexpected result: {other:?}"),
        }
        assert!(sauce.set_dimensions(512, 0).is_err());
        assert!(sauce.set_dimensions(510, 0).is_ok());
    }
}
