//! Tokenizer for ANSI art text.
//!
//! Splits decoded text into literal runs and escape sequences. SGR sequences
//! (`ESC [ … m`) are decoded into one instruction per parameter, so
//! `ESC[0;1;34m` yields a reset, a bold and a blue foreground. Every other
//! sequence is passed through as [`Instruction::Unhandled`] with its raw
//! text.
//!
//! | Parameter          | Instruction                                |
//! |--------------------|--------------------------------------------|
//! | `30`–`37`          | foreground, palette `0`–`7`                |
//! | `40`–`47`          | background, palette `0`–`7`                |
//! | `90`–`97`          | foreground, palette `8`–`15`               |
//! | `100`–`107`        | background, palette `8`–`15`               |
//! | `38;5;n`, `48;5;n` | 256 color palette `n`                      |
//! | `38;2;r;g;b`       | 24 bit color                               |
//! | `39`, `49`         | [`Color::Default`]                         |
//! | anything else      | an [`Attribute`]                           |

const ESC: u8 = 0x1B;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorRole {
    Foreground,
    Background,
    /// Underline color (SGR 58). Never produced by [`instructions`].
    Underline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// Palette index; `0`–`7` are the standard colors, `8`–`15` their
    /// bright variants.
    Indexed(u8),
    Rgb(u8, u8, u8),
    /// The terminal's default for the role.
    Default,
}

impl Color {
    pub fn code(self) -> Option<u8> {
        match self {
            Color::Indexed(code) => Some(code),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attribute {
    /// SGR 0, resets everything
    Normal,
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    RapidBlink,
    Reverse,
    Hidden,
    Strike,
    NormalIntensity,
    NotItalic,
    NotUnderline,
    NotBlink,
    NotReverse,
    NotHidden,
    NotStrike,
    /// Any other SGR parameter
    Other(u16),
}

impl Attribute {
    fn from_code(code: u16) -> Self {
        match code {
            0 => Attribute::Normal,
            1 => Attribute::Bold,
            2 => Attribute::Dim,
            3 => Attribute::Italic,
            4 => Attribute::Underline,
            5 => Attribute::Blink,
            6 => Attribute::RapidBlink,
            7 => Attribute::Reverse,
            8 => Attribute::Hidden,
            9 => Attribute::Strike,
            22 => Attribute::NormalIntensity,
            23 => Attribute::NotItalic,
            24 => Attribute::NotUnderline,
            25 => Attribute::NotBlink,
            27 => Attribute::NotReverse,
            28 => Attribute::NotHidden,
            29 => Attribute::NotStrike,
            other => Attribute::Other(other),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction<'a> {
    /// Literal text, control characters such as `\r\n` included.
    Text(&'a str),
    SetColor { role: ColorRole, color: Color },
    SetAttribute(Attribute),
    /// An escape sequence without styling meaning, e.g. cursor movement.
    Unhandled(&'a str),
}

/// Tokenizes `text` into instructions, in order. Never fails: malformed or
/// truncated sequences come out as [`Instruction::Unhandled`].
///
/// ```
/// use ansi_sauce::{Attribute, Color, ColorRole, Instruction, instructions};
///
/// let parsed = instructions("\x1b[1;31mhi\x1b[2J");
/// assert_eq!(parsed, vec![
///     Instruction::SetAttribute(Attribute::Bold),
///     Instruction::SetColor { role: ColorRole::Foreground, color: Color::Indexed(1) },
///     Instruction::Text("hi"),
///     Instruction::Unhandled("\x1b[2J"),
/// ]);
/// ```
pub fn instructions(text: &str) -> Vec<Instruction<'_>> {
    let bytes = text.as_bytes();
    let mut result = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let Some(offset) = bytes[pos..].iter().position(|&b| b == ESC) else {
            result.push(Instruction::Text(&text[pos..]));
            break;
        };
        if offset > 0 {
            result.push(Instruction::Text(&text[pos..pos + offset]));
        }
        let start = pos + offset;
        pos = scan_escape(bytes, start);
        let sequence = &text[start..pos];

        match sgr_params(sequence) {
            Some(params) => match parse_sgr(params) {
                Some(sgr) => result.extend(sgr),
                None => result.push(Instruction::Unhandled(sequence)),
            },
            None => result.push(Instruction::Unhandled(sequence)),
        }
    }
    result
}

/// End of the escape sequence starting at `start` (which holds ESC).
///
/// Only ASCII bytes are consumed, so the result is a char boundary.
fn scan_escape(bytes: &[u8], start: usize) -> usize {
    match bytes.get(start + 1) {
        Some(b'[') => {
            let mut end = start + 2;
            // parameter and intermediate bytes
            while end < bytes.len() && (0x20..=0x3F).contains(&bytes[end]) {
                end += 1;
            }
            match bytes.get(end) {
                Some(0x40..=0x7E) => end + 1,
                _ => end,
            }
        }
        // two byte sequences such as ESC 7 (save cursor)
        Some(0x20..=0x7E) => start + 2,
        _ => start + 1,
    }
}

/// The parameter string of an SGR sequence, `None` for anything else.
fn sgr_params(sequence: &str) -> Option<&str> {
    let params = sequence.strip_prefix("\x1b[")?.strip_suffix('m')?;
    params
        .bytes()
        .all(|b| b.is_ascii_digit() || b == b';')
        .then_some(params)
}

fn parse_sgr(params: &str) -> Option<Vec<Instruction<'static>>> {
    // an empty parameter counts as 0, so ESC[m is a reset
    let codes = params
        .split(';')
        .map(|code| if code.is_empty() { Ok(0) } else { code.parse::<u16>() })
        .collect::<Result<Vec<u16>, _>>()
        .ok()?;

    let mut result = Vec::with_capacity(codes.len());
    let mut i = 0;
    while i < codes.len() {
        let code = codes[i];
        i += 1;
        let instruction = match code {
            30..=37 => set_color(ColorRole::Foreground, Color::Indexed((code - 30) as u8)),
            40..=47 => set_color(ColorRole::Background, Color::Indexed((code - 40) as u8)),
            90..=97 => set_color(ColorRole::Foreground, Color::Indexed((code - 90) as u8 + 8)),
            100..=107 => set_color(ColorRole::Background, Color::Indexed((code - 100) as u8 + 8)),
            39 => set_color(ColorRole::Foreground, Color::Default),
            49 => set_color(ColorRole::Background, Color::Default),
            38 | 48 => match extended_color(&codes, &mut i) {
                Some(color) if code == 38 => set_color(ColorRole::Foreground, color),
                Some(color) => set_color(ColorRole::Background, color),
                None => Instruction::SetAttribute(Attribute::Other(code)),
            },
            58 => {
                // underline color is consumed but not reported
                extended_color(&codes, &mut i);
                Instruction::SetAttribute(Attribute::Other(code))
            }
            _ => Instruction::SetAttribute(Attribute::from_code(code)),
        };
        result.push(instruction);
    }
    Some(result)
}

fn set_color(role: ColorRole, color: Color) -> Instruction<'static> {
    Instruction::SetColor { role, color }
}

/// Reads `5;n` or `2;r;g;b` after a 38/48/58 parameter, advancing `i` past
/// what it used.
fn extended_color(codes: &[u16], i: &mut usize) -> Option<Color> {
    let byte = |index: usize| codes.get(index).and_then(|&code| u8::try_from(code).ok());
    match codes.get(*i) {
        Some(5) => {
            let index = byte(*i + 1)?;
            *i += 2;
            Some(Color::Indexed(index))
        }
        Some(2) => {
            let color = Color::Rgb(byte(*i + 1)?, byte(*i + 2)?, byte(*i + 3)?);
            *i += 4;
            Some(color)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fg(code: u8) -> Instruction<'static> {
        set_color(ColorRole::Foreground, Color::Indexed(code))
    }

    fn bg(code: u8) -> Instruction<'static> {
        set_color(ColorRole::Background, Color::Indexed(code))
    }

    #[test]
    fn plain_text_is_one_run() {
        assert_eq!(instructions("hello\r\nworld"), vec![Instruction::Text("hello\r\nworld")]);
        assert!(instructions("").is_empty());
    }

    #[test]
    fn empty_sgr_is_reset() {
        assert_eq!(instructions("\x1b[m"), vec![Instruction::SetAttribute(Attribute::Normal)]);
        assert_eq!(
            instructions("\x1b[;1m"),
            vec![
                Instruction::SetAttribute(Attribute::Normal),
                Instruction::SetAttribute(Attribute::Bold)
            ]
        );
    }

    #[test]
    fn palette_ranges() {
        assert_eq!(
            instructions("\x1b[30;47;97;100m"),
            vec![fg(0), bg(7), fg(15), bg(8)]
        );
        assert_eq!(
            instructions("\x1b[39;49m"),
            vec![
                set_color(ColorRole::Foreground, Color::Default),
                set_color(ColorRole::Background, Color::Default)
            ]
        );
    }

    #[test]
    fn extended_colors() {
        assert_eq!(
            instructions("\x1b[38;5;196;48;2;1;2;3;1m"),
            vec![
                fg(196),
                set_color(ColorRole::Background, Color::Rgb(1, 2, 3)),
                Instruction::SetAttribute(Attribute::Bold)
            ]
        );
        // truncated
        assert_eq!(
            instructions("\x1b[38;5m"),
            vec![
                Instruction::SetAttribute(Attribute::Other(38)),
                Instruction::SetAttribute(Attribute::Blink)
            ]
        );
    }

    #[test]
    fn underline_color_is_swallowed() {
        assert_eq!(
            instructions("\x1b[58;5;3;4m"),
            vec![
                Instruction::SetAttribute(Attribute::Other(58)),
                Instruction::SetAttribute(Attribute::Underline)
            ]
        );
    }

    #[test]
    fn non_sgr_sequences_are_unhandled() {
        assert_eq!(
            instructions("a\x1b[2Jb\x1b[?25lc\x1b7d"),
            vec![
                Instruction::Text("a"),
                Instruction::Unhandled("\x1b[2J"),
                Instruction::Text("b"),
                Instruction::Unhandled("\x1b[?25l"),
                Instruction::Text("c"),
                Instruction::Unhandled("\x1b7"),
                Instruction::Text("d"),
            ]
        );
    }

    #[test]
    fn truncated_sequences_do_not_swallow_text() {
        assert_eq!(instructions("\x1b"), vec![Instruction::Unhandled("\x1b")]);
        assert_eq!(instructions("\x1b[1;3"), vec![Instruction::Unhandled("\x1b[1;3")]);
        assert_eq!(
            instructions("\x1b[1;é"),
            vec![Instruction::Unhandled("\x1b[1;"), Instruction::Text("é")]
        );
        assert_eq!(
            instructions("\x1bé"),
            vec![Instruction::Unhandled("\x1b"), Instruction::Text("é")]
        );
    }

    #[test]
    fn oversized_parameter_is_unhandled() {
        assert_eq!(
            instructions("\x1b[99999m"),
            vec![Instruction::Unhandled("\x1b[99999m")]
        );
    }
}
