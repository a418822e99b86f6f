//! Plain text extraction and indentation transfer.
//!
//! Art text mixes prose with box drawing. Translation works on the prose
//! only, and the translated lines are then shifted right by the width of
//! the drawing that preceded the original line.

use std::borrow::Cow;

use encoding_rs::Encoding;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

static HORIZONTAL_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());

/// Code page 437 for bytes `0x80..=0xFF`.
const CP437_HIGH: &str = "ÇüéâäàåçêëèïîìÄÅÉæÆôöòûùÿÖÜ¢£¥₧ƒáíóúñÑªº¿⌐¬½¼¡«»\
░▒▓│┤╡╢╖╕╣║╗╝╜╛┐└┴┬├─┼╞╟╚╔╩╦╠═╬╧╨╤╥╙╘╒╓╫╪┘┌█▄▌▐▀\
αßΓπΣσµτΦΘΩδ∞φε∩≡±≥≤⌠⌡÷≈°∙·√ⁿ²■\u{a0}";

static CP437_TABLE: Lazy<Vec<char>> = Lazy::new(|| CP437_HIGH.chars().collect());

/// True for characters used to draw rather than to write: a few ASCII and
/// Latin-1 marks that double as lines, box drawing, blocks, shapes, arrows
/// and the decorative CJK punctuation and full width forms.
///
/// ```
/// use ansi_sauce::is_drawing_character;
///
/// assert!(is_drawing_character('▓'));
/// assert!(is_drawing_character('|'));
/// assert!(!is_drawing_character('a'));
/// assert!(!is_drawing_character('!'));
/// ```
pub fn is_drawing_character(c: char) -> bool {
    matches!(c,
        '(' | ')' | '+' | '-' | '/' | '=' | '\\' | '_' | '`' | '|' | '~'
        | '¤' | '§' | '¨' | '°' | '±' | '·' | '×' | '÷'
        // spacing modifier letters
        | '\u{02B0}'..='\u{02FF}'
        // general punctuation
        | '\u{2000}'..='\u{206F}'
        // letterlike symbols
        | '\u{2100}'..='\u{214E}'
        // arrows, mathematical operators
        | '\u{2190}'..='\u{22FF}'
        // box drawing, block elements, geometric shapes, misc symbols
        | '\u{2500}'..='\u{26FF}'
        // ideographic description, CJK symbols and punctuation
        | '\u{2FF0}'..='\u{303F}'
        // CJK compatibility forms
        | '\u{FE30}'..='\u{FE4F}'
        // halfwidth and fullwidth forms
        | '\u{FF00}'..='\u{FFEF}'
    )
}

/// How the width of an indentation is counted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColumnWidth {
    /// One column per character, as in CP437 art.
    #[default]
    SingleByte,
    /// Bytes in a legacy encoding: double byte characters of GB18030 or
    /// Big5 art take two columns. Characters the encoding cannot represent
    /// fall back to their Unicode display width.
    Encoded(&'static Encoding),
    /// Unicode display width.
    Unicode,
}

impl ColumnWidth {
    /// Columns `text` occupies on screen.
    ///
    /// ```
    /// use ansi_sauce::ColumnWidth;
    ///
    /// assert_eq!(ColumnWidth::SingleByte.measure("═══"), 3);
    /// assert_eq!(ColumnWidth::Encoded(encoding_rs::GB18030).measure("═══"), 6);
    /// assert_eq!(ColumnWidth::Unicode.measure("中文"), 4);
    /// ```
    pub fn measure(&self, text: &str) -> usize {
        match *self {
            ColumnWidth::SingleByte => text.chars().count(),
            ColumnWidth::Unicode => UnicodeWidthStr::width(text),
            ColumnWidth::Encoded(encoding) => {
                let (bytes, _, unmappable) = encoding.encode(text);
                if unmappable {
                    // unmappable characters are replaced by numeric references
                    text.chars().map(|c| encoded_char_width(encoding, c)).sum()
                } else {
                    bytes.len()
                }
            }
        }
    }
}

fn encoded_char_width(encoding: &'static Encoding, c: char) -> usize {
    let mut buf = [0; 4];
    let (bytes, _, unmappable) = encoding.encode(c.encode_utf8(&mut buf));
    if unmappable {
        UnicodeWidthChar::width(c).unwrap_or(0)
    } else {
        bytes.len()
    }
}

/// Decodes raw art bytes, replacing malformed sequences.
pub fn decode_text<'a>(bytes: &'a [u8], encoding: &'static Encoding) -> Cow<'a, str> {
    let (text, malformed) = encoding.decode_without_bom_handling(bytes);
    if malformed {
        log::debug!("Malformed {} sequences replaced", encoding.name());
    }
    text
}

/// Decodes code page 437, the character set of DOS art. Control bytes are
/// kept as they are so escape sequences survive.
///
/// ```
/// use ansi_sauce::ansi::decode_cp437;
///
/// assert_eq!(decode_cp437(b"\x1b[31m\xdb\xb2\xb1\xb0"), "\x1b[31m█▓▒░");
/// ```
pub fn decode_cp437(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x00..=0x7F => b as char,
            _ => CP437_TABLE[(b - 0x80) as usize],
        })
        .collect()
}

/// Replaces drawing characters with spaces, collapses spaces and tabs and
/// trims every line. The line count is kept.
pub(crate) fn strip_drawing(plain: &str) -> String {
    plain
        .split('\n')
        .map(|line| {
            let line: String = line
                .chars()
                .map(|c| if is_drawing_character(c) { ' ' } else { c })
                .collect();
            HORIZONTAL_SPACE.replace_all(&line, " ").trim().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Width of the whitespace and drawing characters a line starts with.
pub(crate) fn leading_width(line: &str, width: ColumnWidth) -> usize {
    let line = line.trim_end_matches('\r');
    let end = line
        .char_indices()
        .find(|&(_, c)| !(c.is_whitespace() || is_drawing_character(c)))
        .map_or(line.len(), |(index, _)| index);
    width.measure(&line[..end])
}

/// Indents each line of `translated` by the leading width of the same line
/// in `original`.
///
/// Translated lines lose their own leading whitespace first; empty ones stay
/// empty. A line count mismatch is logged, and translated lines past the end
/// of the original are left unindented.
pub(crate) fn apply_line_offsets(original: &str, translated: &str, width: ColumnWidth) -> String {
    let original: Vec<&str> = original.split('\n').collect();
    let translated: Vec<&str> = translated.split('\n').collect();
    if original.len() != translated.len() {
        log::warn!(
            "Translated text has {} lines, original has {}",
            translated.len(),
            original.len()
        );
    }

    translated
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let line = line.trim_start();
            match original.get(index) {
                Some(source) if !line.is_empty() => {
                    format!("{}{line}", " ".repeat(leading_width(source, width)))
                }
                _ => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
