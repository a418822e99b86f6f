use once_cell::sync::Lazy;
use regex::Regex;

use crate::AnsiError;
use crate::ansi::{Instruction, RenderState};

/// Whitespace runs and the words between them.
static BLINK_SEGMENTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\s+|[^ ]+)").unwrap());

/// Escapes `&`, `<`, `>`, `"` and `'` for HTML text and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Replays `instructions` into HTML.
///
/// Each text run is escaped and wrapped in a `<span style='…'>` carrying
/// only the properties that differ from the default colors (see
/// [`RenderState::style`]); runs in the default state are emitted bare.
/// Under blink every non-whitespace segment gets its own
/// `<span class='blink'>` so the gaps between words stay still.
///
/// # Errors
///
/// Propagates [`AnsiError::InvalidColorRole`] from [`RenderState::apply`].
///
/// ```
/// use ansi_sauce::{instructions, render_html};
///
/// let html = render_html(&instructions("a\x1b[31m<b>")).unwrap();
/// assert_eq!(html, "a<span style='color: var(--c1)'>&lt;b&gt;</span>");
/// ```
pub fn render_html(instructions: &[Instruction<'_>]) -> Result<String, AnsiError> {
    let (_, html) = instructions.iter().try_fold(
        (RenderState::default(), String::new()),
        |(state, mut html), instruction| -> Result<_, AnsiError> {
            if let Instruction::Text(text) = instruction {
                push_run(&mut html, text, &state);
            }
            Ok((state.apply(instruction)?, html))
        },
    )?;
    Ok(html)
}

fn push_run(html: &mut String, text: &str, state: &RenderState) {
    let inner = if state.blink {
        BLINK_SEGMENTS
            .find_iter(text)
            .map(|segment| {
                let segment = segment.as_str();
                if segment.chars().all(char::is_whitespace) {
                    escape_html(segment)
                } else {
                    format!("<span class='blink'>{}</span>", escape_html(segment))
                }
            })
            .collect()
    } else {
        escape_html(text)
    };

    let style = state.style();
    if style.is_empty() {
        html.push_str(&inner);
    } else {
        html.push_str(&format!("<span style='{style}'>{inner}</span>"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi::instructions;

    #[test]
    fn escapes_every_special_character() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
    }

    #[test]
    fn blink_wraps_words_not_gaps() {
        let state = RenderState { blink: true, ..Default::default() };
        let mut html = String::new();
        push_run(&mut html, "a b", &state);
        assert_eq!(html, "<span class='blink'>a</span> <span class='blink'>b</span>");
    }

    #[test]
    fn blink_inside_styled_run() {
        let html = render_html(&instructions("\x1b[5;44m x ")).unwrap();
        assert_eq!(
            html,
            "<span style='background-color: var(--c4)'> <span class='blink'>x</span> </span>"
        );
    }

    #[test]
    fn state_applies_to_following_text_only() {
        let html = render_html(&instructions("a\x1b[1mb\x1b[0mc")).unwrap();
        assert_eq!(html, "a<span style='color: var(--c15)'>b</span>c");
    }
}
