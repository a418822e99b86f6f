use crate::AnsiError;
use crate::ansi::{Attribute, Color, ColorRole, Instruction};

const DEFAULT_FOREGROUND: u8 = 7;
const DEFAULT_BACKGROUND: u8 = 0;

/// Colors and attributes in effect while replaying one buffer.
///
/// Only the 8 standard palette colors, bold, underline and blink are
/// tracked. Everything else is logged at debug level and skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderState {
    pub foreground: u8,
    pub background: u8,
    pub bold: bool,
    pub underline: bool,
    pub blink: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            foreground: DEFAULT_FOREGROUND,
            background: DEFAULT_BACKGROUND,
            bold: false,
            underline: false,
            blink: false,
        }
    }
}

impl RenderState {
    /// The state after `instruction`.
    ///
    /// # Errors
    ///
    /// [`AnsiError::InvalidColorRole`] for a color with a role other than
    /// foreground or background; the tokenizer never produces one.
    ///
    /// ```
    /// use ansi_sauce::{Attribute, Color, ColorRole, Instruction, RenderState};
    ///
    /// let state = RenderState::default()
    ///     .apply(&Instruction::SetAttribute(Attribute::Bold)).unwrap()
    ///     .apply(&Instruction::SetColor { role: ColorRole::Foreground, color: Color::Indexed(4) }).unwrap();
    /// assert_eq!(state.foreground_code(), 12);
    /// ```
    pub fn apply(self, instruction: &Instruction<'_>) -> Result<RenderState, AnsiError> {
        let mut state = self;
        match *instruction {
            Instruction::Text(_) => {}
            Instruction::SetColor { role, color } => {
                let (slot, default) = match role {
                    ColorRole::Foreground => (&mut state.foreground, DEFAULT_FOREGROUND),
                    ColorRole::Background => (&mut state.background, DEFAULT_BACKGROUND),
                    other => return Err(AnsiError::InvalidColorRole(other)),
                };
                match color {
                    Color::Indexed(code) if code < 8 => *slot = code,
                    Color::Default => *slot = default,
                    _ => log::debug!("Unhandled ANSI color: {role:?} {color:?}"),
                }
            }
            Instruction::SetAttribute(attribute) => match attribute {
                Attribute::Normal => state = RenderState::default(),
                Attribute::Bold => state.bold = true,
                Attribute::Underline => state.underline = true,
                Attribute::NotUnderline => state.underline = false,
                Attribute::Blink => state.blink = true,
                other => log::debug!("Unhandled ANSI attribute: {other:?}"),
            },
            Instruction::Unhandled(sequence) => {
                log::debug!("Unhandled ANSI: {sequence:?}");
            }
        }
        Ok(state)
    }

    /// Palette index of the text color; bold selects the bright half.
    pub fn foreground_code(&self) -> u8 {
        if self.bold {
            self.foreground + 8
        } else {
            self.foreground
        }
    }

    /// Inline CSS for a run drawn in this state, referencing the `--c0`
    /// through `--c15` palette variables. Empty in the default state; only
    /// properties that differ from the default are included.
    pub fn style(&self) -> String {
        let mut props = Vec::new();
        let foreground = self.foreground_code();
        if foreground != DEFAULT_FOREGROUND {
            props.push(format!("color: var(--c{foreground})"));
        }
        if self.background != DEFAULT_BACKGROUND {
            props.push(format!("background-color: var(--c{})", self.background));
        }
        if self.underline {
            props.push("text-decoration: underline".to_string());
        }
        props.join("; ")
    }
}
