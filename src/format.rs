//! SGR rendering, reusable formatters, and escape-sequence stripping.

use std::fmt::Display;

use crate::directive::Directive;
use crate::error::StyleError;
use crate::style::{Style, normalize};

const CSI: &str = "\x1b[";
const RESET: &str = "\x1b[0m";

/// Wraps `text` in the escape sequence for `style`.
///
/// Codes are emitted in a fixed order regardless of directive order:
/// modifiers (as accumulated), then color, then background. The identity
/// style wraps nothing, so unstyled text round-trips through [`strip`]
/// byte for byte.
pub(crate) fn render(style: &Style, text: &str) -> String {
    let mut codes: Vec<u8> = style.modifiers().iter().map(|m| m.code).collect();
    if let Some(color) = style.color() {
        codes.push(color.code);
    }
    if let Some(background) = style.background() {
        codes.push(background.code);
    }

    if codes.is_empty() {
        return text.to_string();
    }

    let sequence = codes
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(";");

    format!("{CSI}{sequence}m{text}{RESET}")
}

/// A reusable formatter bound to one fixed [`Style`].
///
/// Formatters never mutate: [`Formatter::compose`] and [`Formatter::with`]
/// return a new formatter whose style is the receiver's style merged with
/// the extra directives (later directives override, per the normalizer's
/// last-write-wins rule).
///
/// # Examples
///
/// ```
/// use prism::compose;
///
/// let warn = compose(["yellow", "bold"]).unwrap();
/// assert_eq!(warn.paint("Careful!"), "\x1b[1;33mCareful!\x1b[0m");
///
/// let loud = compose("magenta").unwrap().with("bold").unwrap();
/// assert_eq!(loud.paint("Notice"), "\x1b[1;35mNotice\x1b[0m");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Formatter {
    style: Style,
}

impl Formatter {
    pub(crate) fn new(style: Style) -> Self {
        Formatter { style }
    }

    /// The bound style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Renders `value` wrapped in this formatter's escape sequence.
    ///
    /// Any `Display` value is accepted; interpolation goes through
    /// `format!` (`warn.paint(format!("{n} items"))`).
    pub fn paint(&self, value: impl Display) -> String {
        render(&self.style, &value.to_string())
    }

    /// Builds a new formatter from this one's style plus `directives`.
    pub fn compose(&self, directives: impl Into<Directive>) -> Result<Formatter, StyleError> {
        let combined = normalize(Directive::List(vec![
            Directive::Normalized(self.style.clone()),
            directives.into(),
        ]))?;
        Ok(Formatter::new(combined))
    }

    /// Alias of [`Formatter::compose`].
    pub fn with(&self, directives: impl Into<Directive>) -> Result<Formatter, StyleError> {
        self.compose(directives)
    }
}

impl From<&Formatter> for Directive {
    fn from(formatter: &Formatter) -> Self {
        Directive::Normalized(formatter.style.clone())
    }
}

impl From<Formatter> for Directive {
    fn from(formatter: Formatter) -> Self {
        Directive::Normalized(formatter.style)
    }
}

/// Removes every SGR escape sequence (`ESC [`, zero or more digits or
/// semicolons, `m`) from the value's string form. Escape characters that
/// do not open an SGR sequence are left untouched.
///
/// # Examples
///
/// ```
/// use prism::{colorize, strip};
///
/// let styled = colorize("danger", "red").unwrap();
/// assert_eq!(strip(styled), "danger");
/// ```
pub fn strip(value: impl Display) -> String {
    let text = value.to_string();
    let mut output = String::with_capacity(text.len());
    let mut rest = text.as_str();

    while let Some(start) = rest.find('\x1b') {
        let (head, tail) = rest.split_at(start);
        output.push_str(head);

        let bytes = tail.as_bytes();
        if bytes.len() >= 2 && bytes[1] == b'[' {
            let mut end = 2;
            while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b';') {
                end += 1;
            }
            if end < bytes.len() && bytes[end] == b'm' {
                rest = &tail[end + 1..];
                continue;
            }
        }

        // Not an SGR sequence; keep the escape byte as-is.
        output.push('\x1b');
        rest = &tail[1..];
    }

    output.push_str(rest);
    output
}
