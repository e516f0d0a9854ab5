//! The canonical style record and directive normalization.
//!
//! [`normalize`] turns any directive (or nested collection of directives)
//! into a single [`Style`]: nested lists flatten depth-first in document
//! order, colors and backgrounds merge last-write-wins, and modifiers
//! union uniquely by canonical name in first-appearance order.

use crate::directive::Directive;
use crate::error::StyleError;
use crate::registry::{self, Entry, normalize_key};

/// A canonical, immutable style: at most one color, at most one
/// background, and an ordered set of unique modifiers.
///
/// Only [`normalize`] and the prebuilt formatters produce values, so the
/// invariants hold by construction. Feeding a `Style` back into
/// [`normalize`] (via [`Directive::Normalized`]) is a no-op pass-through.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    color: Option<Entry>,
    background: Option<Entry>,
    modifiers: Vec<Entry>,
}

impl Style {
    /// The foreground color, if set.
    pub fn color(&self) -> Option<Entry> {
        self.color
    }

    /// The background color, if set.
    pub fn background(&self) -> Option<Entry> {
        self.background
    }

    /// The modifiers, unique by name, in first-set order.
    pub fn modifiers(&self) -> &[Entry] {
        &self.modifiers
    }

    /// Returns true for the identity style: no color, no background,
    /// no modifiers.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.background.is_none() && self.modifiers.is_empty()
    }

    pub(crate) fn with_color(entry: Entry) -> Self {
        Style {
            color: Some(entry),
            ..Style::default()
        }
    }

    pub(crate) fn with_background(entry: Entry) -> Self {
        Style {
            background: Some(entry),
            ..Style::default()
        }
    }

    pub(crate) fn with_modifier(entry: Entry) -> Self {
        Style {
            modifiers: vec![entry],
            ..Style::default()
        }
    }
}

/// One directive's partial contribution, before merging.
#[derive(Debug, Default)]
struct Fragment {
    color: Option<Entry>,
    background: Option<Entry>,
    modifiers: Vec<Entry>,
}

/// Parses one flattened directive into its fragment. `None` means the
/// directive contributes nothing.
fn parse(directive: &Directive) -> Result<Option<Fragment>, StyleError> {
    match directive {
        Directive::Skip => Ok(None),
        Directive::Normalized(style) => Ok(Some(Fragment {
            color: style.color,
            background: style.background,
            modifiers: style.modifiers.clone(),
        })),
        Directive::Name(name) => {
            if name.trim().is_empty() {
                return Ok(None);
            }

            let key = normalize_key(name);

            // Committed disambiguation order: modifier, then foreground,
            // then background. No canonical name collides across tables
            // today, but the probe order is part of the contract.
            if let Some(entry) = registry::modifier().get(&key) {
                return Ok(Some(Fragment {
                    modifiers: vec![entry],
                    ..Fragment::default()
                }));
            }
            if let Some(entry) = registry::foreground().get(&key) {
                return Ok(Some(Fragment {
                    color: Some(entry),
                    ..Fragment::default()
                }));
            }
            if let Some(entry) = registry::background().get(&key) {
                return Ok(Some(Fragment {
                    background: Some(entry),
                    ..Fragment::default()
                }));
            }

            Err(StyleError::UnknownStyle(name.clone()))
        }
        Directive::Options(options) => {
            let mut fragment = Fragment::default();

            if let Some(value) = &options.color {
                fragment.color = Some(registry::foreground().resolve(value)?);
            }
            if let Some(value) = &options.background {
                fragment.background = Some(registry::background().resolve(value)?);
            }
            for value in &options.modifiers {
                fragment.modifiers.push(registry::modifier().resolve(value)?);
            }

            Ok(Some(fragment))
        }
        // Lists are consumed by flattening before parsing.
        Directive::List(_) => Ok(None),
        Directive::Unsupported(label) => Err(StyleError::UnsupportedType(label)),
    }
}

/// Flattens `directive` depth-first and merges each parsed fragment into
/// the accumulator in encounter order.
fn merge_into(accumulator: &mut Style, directive: &Directive) -> Result<(), StyleError> {
    if let Directive::List(items) = directive {
        for item in items {
            merge_into(accumulator, item)?;
        }
        return Ok(());
    }

    let Some(fragment) = parse(directive)? else {
        return Ok(());
    };

    if fragment.color.is_some() {
        accumulator.color = fragment.color;
    }
    if fragment.background.is_some() {
        accumulator.background = fragment.background;
    }
    for modifier in fragment.modifiers {
        if !accumulator.modifiers.iter().any(|m| m.name == modifier.name) {
            accumulator.modifiers.push(modifier);
        }
    }

    Ok(())
}

/// Normalizes a directive, or any nested collection of directives, into a
/// canonical [`Style`].
///
/// Colors and backgrounds are last-write-wins, so later directives
/// override earlier ones; modifiers union uniquely by canonical name,
/// preserving the order of first appearance. No directives (or only
/// skipped ones) yield the identity style.
///
/// # Examples
///
/// ```
/// use prism::normalize;
///
/// let style = normalize(["red", "blue"]).unwrap();
/// assert_eq!(style.color().unwrap().name, "blue");
///
/// let style = normalize(vec![
///     prism::Directive::from("bold"),
///     prism::Directive::from(["bold", "underline"]),
/// ])
/// .unwrap();
/// let names: Vec<&str> = style.modifiers().iter().map(|m| m.name).collect();
/// assert_eq!(names, ["bold", "underline"]);
/// ```
pub fn normalize(directive: impl Into<Directive>) -> Result<Style, StyleError> {
    let mut accumulator = Style::default();
    merge_into(&mut accumulator, &directive.into())?;
    Ok(accumulator)
}
