//! Style directives: the inputs accepted anywhere a style is expected.
//!
//! A [`Directive`] is the sum of every accepted input shape. Conversions
//! from plain values (`&str`, `bool`, `Option`, `Vec`, arrays) make the
//! public functions accept the whole grammar through a single
//! `impl Into<Directive>` parameter.

use crate::registry::Lookup;
use crate::style::Style;

/// A single style input.
///
/// # Examples
///
/// ```
/// use prism::{Directive, StyleOptions};
///
/// // A name, in any spelling the key normalizer accepts.
/// let red = Directive::from("red");
///
/// // An options struct addressing each axis explicitly.
/// let alert = Directive::from(
///     StyleOptions::new().color("white").bg("red").modifier("bold"),
/// );
///
/// // Conditional styling: `false` and `None` contribute nothing.
/// let maybe = Directive::from(false);
/// assert_eq!(maybe, Directive::Skip);
///
/// // Nested collections flatten in document order.
/// let stack = Directive::from(vec![red, alert]);
/// assert!(matches!(stack, Directive::List(_)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Directive {
    /// A style name: probed as modifier, then foreground, then background.
    Name(String),
    /// An options struct addressing each style axis explicitly.
    Options(StyleOptions),
    /// An already-normalized style; passes through the parser untouched.
    Normalized(Style),
    /// An ordered collection of directives, flattened depth-first.
    List(Vec<Directive>),
    /// A directive that contributes nothing.
    Skip,
    /// A value the styling grammar rejects; fails when normalized.
    /// Carries a label for the offending type.
    Unsupported(&'static str),
}

impl From<&str> for Directive {
    fn from(name: &str) -> Self {
        Directive::Name(name.to_string())
    }
}

impl From<String> for Directive {
    fn from(name: String) -> Self {
        Directive::Name(name)
    }
}

impl From<StyleOptions> for Directive {
    fn from(options: StyleOptions) -> Self {
        Directive::Options(options)
    }
}

impl From<Style> for Directive {
    fn from(style: Style) -> Self {
        Directive::Normalized(style)
    }
}

impl From<&Style> for Directive {
    fn from(style: &Style) -> Self {
        Directive::Normalized(style.clone())
    }
}

/// `false` is a no-op (conditional styling); `true` is not a style and
/// fails at normalization.
impl From<bool> for Directive {
    fn from(value: bool) -> Self {
        if value {
            Directive::Unsupported("bool")
        } else {
            Directive::Skip
        }
    }
}

/// `None` is a no-op, mirroring `cond.then(|| "red")` usage.
impl<D: Into<Directive>> From<Option<D>> for Directive {
    fn from(value: Option<D>) -> Self {
        match value {
            Some(directive) => directive.into(),
            None => Directive::Skip,
        }
    }
}

impl<D: Into<Directive>> From<Vec<D>> for Directive {
    fn from(items: Vec<D>) -> Self {
        Directive::List(items.into_iter().map(Into::into).collect())
    }
}

impl<D: Into<Directive>, const N: usize> From<[D; N]> for Directive {
    fn from(items: [D; N]) -> Self {
        Directive::List(items.into_iter().map(Into::into).collect())
    }
}

/// The options-object form of a directive: one field per style axis.
///
/// Builder setters carry the alternate names accepted for each axis
/// (`color`/`foreground`/`fg`, `background`/`bg`/`background_color`/
/// `bg_color`, `modifiers`/`modifier`/`effects`/`effect`/`styles`/`style`),
/// all writing through to the same field.
///
/// # Examples
///
/// ```
/// use prism::{colorize, StyleOptions};
///
/// let note = colorize("note", StyleOptions::new().bg("blue").modifier("italic")).unwrap();
/// assert_eq!(note, "\x1b[3;44mnote\x1b[0m");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleOptions {
    pub(crate) color: Option<Lookup>,
    pub(crate) background: Option<Lookup>,
    pub(crate) modifiers: Vec<Lookup>,
}

impl StyleOptions {
    /// Creates an empty options struct.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the foreground color.
    pub fn color(mut self, value: impl Into<Lookup>) -> Self {
        self.color = Some(value.into());
        self
    }

    /// Alias of [`StyleOptions::color`].
    pub fn foreground(self, value: impl Into<Lookup>) -> Self {
        self.color(value)
    }

    /// Alias of [`StyleOptions::color`].
    pub fn fg(self, value: impl Into<Lookup>) -> Self {
        self.color(value)
    }

    /// Sets the background color.
    pub fn background(mut self, value: impl Into<Lookup>) -> Self {
        self.background = Some(value.into());
        self
    }

    /// Alias of [`StyleOptions::background`].
    pub fn bg(self, value: impl Into<Lookup>) -> Self {
        self.background(value)
    }

    /// Alias of [`StyleOptions::background`].
    pub fn background_color(self, value: impl Into<Lookup>) -> Self {
        self.background(value)
    }

    /// Alias of [`StyleOptions::background`].
    pub fn bg_color(self, value: impl Into<Lookup>) -> Self {
        self.background(value)
    }

    /// Appends a single modifier.
    pub fn modifier(mut self, value: impl Into<Lookup>) -> Self {
        self.modifiers.push(value.into());
        self
    }

    /// Appends every modifier in the collection, in order.
    pub fn modifiers<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Lookup>,
    {
        self.modifiers.extend(values.into_iter().map(Into::into));
        self
    }

    /// Alias of [`StyleOptions::modifier`].
    pub fn effect(self, value: impl Into<Lookup>) -> Self {
        self.modifier(value)
    }

    /// Alias of [`StyleOptions::modifiers`].
    pub fn effects<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Lookup>,
    {
        self.modifiers(values)
    }

    /// Alias of [`StyleOptions::modifier`].
    pub fn style(self, value: impl Into<Lookup>) -> Self {
        self.modifier(value)
    }

    /// Alias of [`StyleOptions::modifiers`].
    pub fn styles<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Lookup>,
    {
        self.modifiers(values)
    }
}
