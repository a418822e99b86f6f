//! ANSI art interpreter.
//!
//! [`AnsiParser`] tokenizes a decoded text buffer once and derives from the
//! instruction stream:
//!
//! - HTML with inline palette styles ([`AnsiParser::to_html`]),
//! - the literal text ([`AnsiParser::to_plaintext`]),
//! - prose with the drawing removed ([`AnsiParser::to_stripped_text`]),
//! - a translation re-indented under the art ([`AnsiParser::apply_line_offsets`]).
//!
//! Only the 8 color palette, bold, underline, blink and reset affect the
//! output. Cursor movement and the rest of the terminal instruction set are
//! logged at debug level and skipped.
//!
//! ```
//! use ansi_sauce::AnsiParser;
//!
//! let parser = AnsiParser::new("\x1b[1;33m══\x1b[0m hello\r\n");
//! assert_eq!(parser.to_plaintext(), "══ hello\r\n");
//! assert_eq!(parser.to_stripped_text(), "hello\n");
//! assert_eq!(
//!     parser.to_html().unwrap(),
//!     "<span style='color: var(--c11)'>══</span> hello\r\n"
//! );
//! ```

mod html;
mod instruction;
mod state;
mod text;

pub use html::{escape_html, render_html};
pub use instruction::{Attribute, Color, ColorRole, Instruction, instructions};
pub use state::RenderState;
pub use text::{ColumnWidth, decode_cp437, decode_text, is_drawing_character};

use crate::AnsiError;

/// One decoded art buffer and its instruction stream.
///
/// The parser borrows the text; every conversion replays the instructions
/// with a fresh [`RenderState`], so a parser can be shared between threads.
#[derive(Clone, Debug)]
pub struct AnsiParser<'a> {
    text: &'a str,
    instructions: Vec<Instruction<'a>>,
    column_width: ColumnWidth,
}

impl<'a> AnsiParser<'a> {
    pub fn new(text: &'a str) -> Self {
        AnsiParser {
            text,
            instructions: instructions(text),
            column_width: ColumnWidth::default(),
        }
    }

    /// Sets how [`apply_line_offsets`](Self::apply_line_offsets) measures
    /// indentation; the default counts one column per character.
    #[must_use]
    pub fn with_column_width(mut self, column_width: ColumnWidth) -> Self {
        self.column_width = column_width;
        self
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn instructions(&self) -> &[Instruction<'a>] {
        &self.instructions
    }

    /// Styled HTML, safe to embed: all text is escaped. See [`render_html`].
    ///
    /// # Errors
    ///
    /// [`AnsiError::InvalidColorRole`] if the instruction stream is corrupt.
    pub fn to_html(&self) -> Result<String, AnsiError> {
        render_html(&self.instructions)
    }

    /// The literal text runs, concatenated. Used as the lookup key for
    /// translations and for search.
    pub fn to_plaintext(&self) -> String {
        self.instructions
            .iter()
            .filter_map(|instruction| match instruction {
                Instruction::Text(text) => Some(*text),
                _ => None,
            })
            .collect()
    }

    /// The plain text with drawing characters replaced by spaces, runs of
    /// spaces and tabs collapsed and every line trimmed.
    pub fn to_stripped_text(&self) -> String {
        text::strip_drawing(&self.to_plaintext())
    }

    /// Indents each line of `translated` by the width of the whitespace and
    /// drawing that starts the same line of the plain text, measured with
    /// the configured [`ColumnWidth`].
    ///
    /// ```
    /// use ansi_sauce::{AnsiParser, ColumnWidth};
    ///
    /// let parser = AnsiParser::new("\x1b[32m║║\x1b[0m 你好\n  ══ 世界")
    ///     .with_column_width(ColumnWidth::Encoded(encoding_rs::GB18030));
    /// assert_eq!(parser.apply_line_offsets("hello\nworld"), "     hello\n       world");
    /// ```
    pub fn apply_line_offsets(&self, translated: &str) -> String {
        text::apply_line_offsets(&self.to_plaintext(), translated, self.column_width)
    }

    /// Sorted, distinct standard palette colors (`0`–`7`) the art sets.
    pub fn colors(&self) -> Vec<u8> {
        let mut colors: Vec<u8> = self
            .instructions
            .iter()
            .filter_map(|instruction| match instruction {
                Instruction::SetColor { color, .. } => color.code().filter(|&code| code < 8),
                _ => None,
            })
            .collect();
        colors.sort_unstable();
        colors.dedup();
        colors
    }
}
