//! Composable SGR text styling for terminal output.
//!
//! This crate wraps values in ANSI SGR escape sequences based on style
//! directives: named colors, background colors, and text modifiers, given
//! as name strings, option structs, normalized styles, or nested
//! collections of any of those. It always emits the fixed 16-color-plus-
//! modifier palette; there is no terminal detection or capability
//! negotiation.
//!
//! # Overview
//!
//! - [`colorize`] styles a value in one call.
//! - [`compose`] builds a reusable [`Formatter`] that can be composed
//!   further with [`Formatter::compose`]/[`Formatter::with`].
//! - [`strip`] removes SGR sequences from a string.
//! - [`colors`], [`backgrounds`], and [`modifiers`] expose a prebuilt
//!   formatter per canonical name; [`available`] lists the names.
//!
//! Directives merge deterministically: later colors and backgrounds
//! override earlier ones, and modifiers accumulate uniquely in
//! first-appearance order.
//!
//! # Usage
//!
//! ```
//! use prism::{colorize, compose, strip, StyleOptions};
//!
//! assert_eq!(colorize("hello", "red").unwrap(), "\x1b[31mhello\x1b[0m");
//! assert_eq!(colorize("hi", ["bold", "green"]).unwrap(), "\x1b[1;32mhi\x1b[0m");
//!
//! let note = StyleOptions::new().bg("blue").modifier("italic");
//! assert_eq!(colorize("note", note).unwrap(), "\x1b[3;44mnote\x1b[0m");
//!
//! let warn = compose(["yellow", "bold"]).unwrap();
//! assert_eq!(warn.paint("Careful!"), "\x1b[1;33mCareful!\x1b[0m");
//! assert_eq!(strip(warn.paint("Careful!")), "Careful!");
//! ```

pub mod directive;
pub mod error;
pub mod format;
pub mod registry;
pub mod style;

use std::collections::HashMap;
use std::fmt::Display;

use once_cell::sync::Lazy;

// Re-export main types at crate root
pub use directive::{Directive, StyleOptions};
pub use error::StyleError;
pub use format::{Formatter, strip};
pub use registry::{Category, Entry, Lookup, resolve};
pub use style::{Style, normalize};

use crate::format::render;

/// Styles `value` with the given directives and returns the escaped
/// string. With no effective directives the value's display form is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use prism::colorize;
///
/// assert_eq!(colorize("hello", "red").unwrap(), "\x1b[31mhello\x1b[0m");
///
/// // Codes always emit modifiers-then-color-then-background.
/// assert_eq!(
///     colorize("x", ["red", "bold"]).unwrap(),
///     colorize("x", ["bold", "red"]).unwrap(),
/// );
///
/// // Falsy directives are no-ops, enabling conditional styling.
/// let quiet = false;
/// assert_eq!(colorize("plain", quiet).unwrap(), "plain");
/// ```
pub fn colorize(
    value: impl Display,
    directives: impl Into<Directive>,
) -> Result<String, StyleError> {
    let style = normalize(directives)?;
    Ok(render(&style, &value.to_string()))
}

/// Builds a reusable [`Formatter`] from the given directives, starting
/// from the identity style.
///
/// # Examples
///
/// ```
/// use prism::compose;
///
/// let warn = compose(["yellow", "bold"]).unwrap();
/// assert_eq!(warn.paint("Careful!"), "\x1b[1;33mCareful!\x1b[0m");
/// ```
pub fn compose(directives: impl Into<Directive>) -> Result<Formatter, StyleError> {
    Ok(Formatter::new(normalize(directives)?))
}

/// Synonym of [`compose`].
pub fn with(directives: impl Into<Directive>) -> Result<Formatter, StyleError> {
    compose(directives)
}

type FormatterMap = HashMap<&'static str, Formatter>;

static COLORS: Lazy<FormatterMap> = Lazy::new(|| {
    let mut map: FormatterMap = registry::foreground()
        .entries()
        .iter()
        .map(|&entry| (entry.name, Formatter::new(Style::with_color(entry))))
        .collect();
    let grey = map["gray"].clone();
    map.insert("grey", grey);
    map
});

static BACKGROUNDS: Lazy<FormatterMap> = Lazy::new(|| {
    let mut map: FormatterMap = registry::background()
        .entries()
        .iter()
        .map(|&entry| (entry.name, Formatter::new(Style::with_background(entry))))
        .collect();
    let grey = map["gray"].clone();
    map.insert("grey", grey);
    map
});

static MODIFIERS: Lazy<FormatterMap> = Lazy::new(|| {
    registry::modifier()
        .entries()
        .iter()
        .filter(|entry| entry.name != "reset")
        .map(|&entry| (entry.name, Formatter::new(Style::with_modifier(entry))))
        .collect()
});

/// Prebuilt formatters, one per canonical foreground color name, plus
/// `grey` bound to the gray entry's formatter.
///
/// # Examples
///
/// ```
/// use prism::colors;
///
/// assert_eq!(colors()["brightBlue"].paint("info"), "\x1b[94minfo\x1b[0m");
/// assert_eq!(colors()["grey"].paint("tone"), "\x1b[90mtone\x1b[0m");
/// ```
pub fn colors() -> &'static HashMap<&'static str, Formatter> {
    &COLORS
}

/// Prebuilt formatters, one per canonical background color name, plus
/// `grey` bound to the gray entry's formatter.
pub fn backgrounds() -> &'static HashMap<&'static str, Formatter> {
    &BACKGROUNDS
}

/// Prebuilt formatters, one per canonical modifier name. `reset` is a
/// valid modifier internally but is never exposed as a named formatter.
pub fn modifiers() -> &'static HashMap<&'static str, Formatter> {
    &MODIFIERS
}

/// Canonical style names per category, in registry declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct Available {
    /// Foreground color names.
    pub colors: Vec<&'static str>,
    /// Background color names.
    pub backgrounds: Vec<&'static str>,
    /// Modifier names, excluding `reset`.
    pub modifiers: Vec<&'static str>,
}

static AVAILABLE: Lazy<Available> = Lazy::new(|| Available {
    colors: registry::foreground()
        .entries()
        .iter()
        .map(|entry| entry.name)
        .collect(),
    backgrounds: registry::background()
        .entries()
        .iter()
        .map(|entry| entry.name)
        .collect(),
    modifiers: registry::modifier()
        .entries()
        .iter()
        .filter(|entry| entry.name != "reset")
        .map(|entry| entry.name)
        .collect(),
});

/// Lists the canonical style names accepted per category.
///
/// # Examples
///
/// ```
/// use prism::available;
///
/// assert!(available().colors.contains(&"brightBlue"));
/// assert!(available().modifiers.contains(&"italic"));
/// assert!(!available().modifiers.contains(&"reset"));
/// ```
pub fn available() -> &'static Available {
    &AVAILABLE
}
